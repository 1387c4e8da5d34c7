use crate::constants::LIST_SEPARATOR;
use crate::context::RequestContext;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Echo the request's `Access-Control-Request-Headers` line untouched.
    MirrorRequest,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::List(Vec::new())
    }
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn mirror_request() -> Self {
        Self::MirrorRequest
    }

    pub fn header_value(&self, request: &RequestContext) -> String {
        match self {
            Self::List(values) => values.join(LIST_SEPARATOR),
            Self::MirrorRequest => request.request_headers_line(),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
