use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{LIST_SEPARATOR, config};
use crate::exposed_headers::ExposedHeaders;
use crate::origin::AllowOrigin;
use crate::security_headers::{ContentTypeOptions, FrameOptions, XssProtection};
use crate::store::{PolicyStore, is_list_like, is_truthy, scalar_to_string, to_list};
use serde_json::Value;
use tracing::{debug, warn};

/// Immutable CORS policy consulted for every decorated response.
///
/// `Default` matches an empty policy store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsOptions {
    pub origin: AllowOrigin,
    pub credentials: bool,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    /// Rendered as written; `None`, `""` and `"0"` all render as `0`.
    pub max_age: Option<String>,
    pub content_type_options: ContentTypeOptions,
    pub frame_options: FrameOptions,
    pub xss_protection: XssProtection,
}

impl CorsOptions {
    /// Reads every `Cors.*` key once and resolves it into typed configuration.
    ///
    /// Values are coerced permissively; anything unusable falls back to the
    /// field's default instead of failing.
    pub fn from_store<S: PolicyStore + ?Sized>(store: &S) -> Self {
        let options = Self {
            origin: Self::read_origin(store.read(config::ALLOW_ORIGIN)),
            credentials: store
                .read(config::ALLOW_CREDENTIALS)
                .is_some_and(|value| is_truthy(&value)),
            methods: AllowedMethods::list(
                store
                    .read(config::ALLOW_METHODS)
                    .map(|value| to_list(&value))
                    .unwrap_or_default(),
            ),
            allowed_headers: Self::read_allowed_headers(store.read(config::ALLOW_HEADERS)),
            exposed_headers: ExposedHeaders::list(Self::read_list_like(
                store.read(config::EXPOSE_HEADERS),
            )),
            max_age: Self::read_max_age(store.read(config::MAX_AGE)),
            content_type_options: ContentTypeOptions::list(Self::read_list_like(
                store.read(config::CONTENT_TYPE_OPTIONS),
            )),
            frame_options: Self::read_frame_options(store.read(config::FRAME_OPTIONS)),
            xss_protection: Self::read_xss_protection(store.read(config::XSS_PROTECTION)),
        };

        debug!(
            origin = ?options.origin,
            credentials = options.credentials,
            max_age = ?options.max_age,
            "loaded CORS policy from store"
        );
        options
    }

    fn read_origin(value: Option<Value>) -> AllowOrigin {
        match value {
            Some(Value::Bool(true)) => AllowOrigin::Any,
            Some(Value::String(text)) if text == "*" => AllowOrigin::Any,
            Some(value @ (Value::Array(_) | Value::Object(_))) => AllowOrigin::List(to_list(&value)),
            Some(value) => AllowOrigin::Exact(scalar_to_string(&value)),
            None => AllowOrigin::default(),
        }
    }

    fn read_allowed_headers(value: Option<Value>) -> AllowedHeaders {
        match value {
            Some(Value::Bool(true)) => AllowedHeaders::MirrorRequest,
            Some(value) => AllowedHeaders::List(to_list(&value)),
            None => AllowedHeaders::default(),
        }
    }

    fn read_list_like(value: Option<Value>) -> Vec<String> {
        match value {
            Some(value) if is_list_like(&value) => to_list(&value),
            _ => Vec::new(),
        }
    }

    fn read_max_age(value: Option<Value>) -> Option<String> {
        match value {
            Some(value @ (Value::Array(_) | Value::Object(_))) => {
                warn!(
                    key = config::MAX_AGE,
                    value = %value,
                    "ignoring max-age that is not a scalar"
                );
                None
            }
            Some(value) if is_truthy(&value) => Some(scalar_to_string(&value)),
            _ => None,
        }
    }

    fn read_frame_options(value: Option<Value>) -> FrameOptions {
        match value {
            Some(value) if is_truthy(&value) => {
                FrameOptions::new(to_list(&value).join(LIST_SEPARATOR))
            }
            _ => FrameOptions::default(),
        }
    }

    fn read_xss_protection(value: Option<Value>) -> XssProtection {
        match value {
            Some(value) if is_truthy(&value) => XssProtection::List(to_list(&value)),
            _ => XssProtection::default(),
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
