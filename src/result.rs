use crate::headers::Headers;

/// Headers the decorator would add for a given request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// `OPTIONS` request with an origin: common and preflight-only headers.
    Preflight(Headers),
    /// Any other request with an origin.
    Simple(Headers),
    /// No origin was sent; the response passes through untouched.
    NotApplicable,
}

impl CorsDecision {
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::Preflight(headers) | CorsDecision::Simple(headers) => Some(headers),
            CorsDecision::NotApplicable => None,
        }
    }

    pub fn into_headers(self) -> Option<Headers> {
        match self {
            CorsDecision::Preflight(headers) | CorsDecision::Simple(headers) => Some(headers),
            CorsDecision::NotApplicable => None,
        }
    }
}
