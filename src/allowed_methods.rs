use crate::constants::LIST_SEPARATOR;

/// Configuration for the `Access-Control-Allow-Methods` response header.
///
/// Methods are emitted in configured order and case; there is no implicit
/// default set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    /// Construct an explicit list of allowed methods.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Return the header value representation; empty when nothing is configured.
    pub fn header_value(&self) -> String {
        self.0.join(LIST_SEPARATOR)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
