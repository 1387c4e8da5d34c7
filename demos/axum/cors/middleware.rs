use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use bunner_cors_decorator::RequestContext;

use super::AppState;

/// Runs the rest of the stack, then decorates whatever it produced.
pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let context = RequestContext::from_http_request(&request);
    let response = next.run(request).await;
    state.cors.decorate_http(&context, response)
}
