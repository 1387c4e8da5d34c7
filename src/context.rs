use crate::constants::{LIST_SEPARATOR, method};

/// The parts of an inbound request the decorator reads.
///
/// `origin` and `access_control_request_headers` hold every value the client
/// sent for the header, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub method: String,
    pub origin: Vec<String>,
    pub access_control_request_headers: Vec<String>,
}

impl RequestContext {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    /// Appends one `Origin` value.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin.push(origin.into());
        self
    }

    /// Appends one `Access-Control-Request-Headers` line.
    pub fn with_request_headers(mut self, headers: impl Into<String>) -> Self {
        self.access_control_request_headers.push(headers.into());
        self
    }

    /// A request carries an origin when at least one non-empty value was sent.
    pub fn has_origin(&self) -> bool {
        self.origin.iter().any(|value| !value.is_empty())
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }

    /// All `Access-Control-Request-Headers` values as a single header line.
    pub fn request_headers_line(&self) -> String {
        self.access_control_request_headers.join(LIST_SEPARATOR)
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
