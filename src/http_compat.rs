//! Bridges between this crate's value types and the `http` crate.

use crate::constants::header;
use crate::context::RequestContext;
use crate::cors::CorsDecorator;
use crate::headers::Headers;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Method, Request, Response};
use tracing::warn;

impl RequestContext {
    pub fn from_http_parts(method: &Method, headers: &HeaderMap) -> Self {
        Self {
            method: method.as_str().to_string(),
            origin: header_values(headers, header::ORIGIN),
            access_control_request_headers: header_values(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    pub fn from_http_request<B>(request: &Request<B>) -> Self {
        Self::from_http_parts(request.method(), request.headers())
    }
}

impl Headers {
    /// Writes every header into `map`, replacing whatever values `map` held
    /// for the same name. Names or values `http` rejects are skipped.
    pub fn apply_to(&self, map: &mut HeaderMap) {
        for (name, values) in self.iter() {
            let Ok(header_name) = HeaderName::try_from(name) else {
                warn!(header = name, "skipping CORS header with an invalid name");
                continue;
            };

            let mut encoded = Vec::with_capacity(values.len());
            for value in values {
                match HeaderValue::from_str(value) {
                    Ok(header_value) => encoded.push(header_value),
                    Err(_) => warn!(header = name, value = %value, "skipping invalid header value"),
                }
            }
            if encoded.is_empty() {
                continue;
            }

            map.remove(&header_name);
            for header_value in encoded {
                map.append(header_name.clone(), header_value);
            }
        }
    }
}

impl CorsDecorator {
    /// [`CorsDecorator::decorate`] for `http::Response` values.
    pub fn decorate_http<B>(&self, request: &RequestContext, mut response: Response<B>) -> Response<B> {
        if let Some(headers) = self.check(request).into_headers() {
            headers.apply_to(response.headers_mut());
        }
        response
    }
}

/// Non-UTF-8 values are decoded lossily so the request still counts as
/// carrying the header.
fn header_values(headers: &HeaderMap, name: &str) -> Vec<String> {
    headers
        .get_all(name)
        .iter()
        .map(|value| match value.to_str() {
            Ok(text) => text.to_string(),
            Err(_) => {
                warn!(header = name, "decoding non-UTF-8 request header lossily");
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "http_compat_test.rs"]
mod http_compat_test;
