use crate::constants::{LIST_SEPARATOR, defaults};

/// Configuration for the `X-Content-Type-Options` response header.
///
/// An unconfigured value still emits the header, with an empty value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentTypeOptions(Vec<String>);

impl ContentTypeOptions {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn nosniff() -> Self {
        Self::list(["nosniff"])
    }

    pub fn header_value(&self) -> String {
        self.0.join(LIST_SEPARATOR)
    }
}

/// Configuration for the `X-Frame-Options` response header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameOptions(Option<String>);

impl FrameOptions {
    pub fn new<S: Into<String>>(value: S) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self(None)
        } else {
            Self(Some(value))
        }
    }

    /// Falls back to `ALLOW` when unset.
    pub fn header_value(&self) -> String {
        self.0
            .clone()
            .unwrap_or_else(|| defaults::FRAME_OPTIONS.to_string())
    }
}

/// Configuration for the `X-XSS-Protection` response header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum XssProtection {
    /// Emit `1 ;mode=block`.
    #[default]
    Default,
    List(Vec<String>),
}

impl XssProtection {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn header_value(&self) -> String {
        match self {
            Self::Default => defaults::XSS_PROTECTION.to_string(),
            Self::List(values) => values.join(LIST_SEPARATOR),
        }
    }
}

#[cfg(test)]
#[path = "security_headers_test.rs"]
mod security_headers_test;
