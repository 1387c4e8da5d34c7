use std::env;
use std::sync::Arc;

use bunner_cors_decorator::{CorsDecorator, JsonPolicyStore, StoreError};

pub type SharedCors = Arc<CorsDecorator>;

/// Policy used when `CORS_POLICY_FILE` is not set.
const DEFAULT_POLICY: &str = r#"{
    "Cors": {
        "AllowOrigin": ["http://localhost:5173", "http://api.example.com"],
        "AllowCredentials": true,
        "AllowMethods": ["GET", "POST", "OPTIONS"],
        "AllowHeaders": true,
        "ExposeHeaders": ["X-Example-Trace"],
        "MaxAge": 600,
        "ContentTypeOptions": "nosniff",
        "FrameOptions": "SAMEORIGIN"
    }
}"#;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, StoreError> {
    let store = match env::var("CORS_POLICY_FILE") {
        Ok(path) => JsonPolicyStore::from_path(path)?,
        Err(_) => JsonPolicyStore::from_json_str(DEFAULT_POLICY)?,
    };

    Ok(AppState {
        cors: Arc::new(CorsDecorator::from_store(&store)),
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub mod middleware;
