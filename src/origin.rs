use crate::context::RequestContext;

/// Configuration for the `Access-Control-Allow-Origin` response value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowOrigin {
    /// Any origin is allowed. The request's own origin is reflected rather than
    /// emitting `*`, so credentialed requests keep working.
    Any,
    /// Reflect the request's origin when one of its values is in the list.
    List(Vec<String>),
    /// Always emit this value, whatever the request sent.
    Exact(String),
}

impl Default for AllowOrigin {
    fn default() -> Self {
        Self::Exact(String::new())
    }
}

impl AllowOrigin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn resolve(&self, request: &RequestContext) -> OriginDecision {
        match self {
            AllowOrigin::Any => OriginDecision::Mirror,
            AllowOrigin::List(allowed) => {
                if request
                    .origin
                    .iter()
                    .any(|candidate| allowed.iter().any(|entry| entry == candidate))
                {
                    OriginDecision::Mirror
                } else {
                    OriginDecision::Disallow
                }
            }
            AllowOrigin::Exact(value) => OriginDecision::Exact(value.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Echo every origin value the request carried.
    Mirror,
    Exact(String),
    /// Emitted as an empty header value, not omitted.
    Disallow,
}

impl OriginDecision {
    pub fn header_values(self, request: &RequestContext) -> Vec<String> {
        match self {
            OriginDecision::Mirror => request.origin.clone(),
            OriginDecision::Exact(value) => vec![value],
            OriginDecision::Disallow => vec![String::new()],
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
