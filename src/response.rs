use crate::headers::Headers;

/// Response value passed through the pipeline.
///
/// Header updates consume the response and hand back the updated value, so a
/// response another stage still holds is never changed underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<B = ()> {
    status: u16,
    headers: Headers,
    body: B,
}

impl<B: Default> Default for Response<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B> Response<B> {
    pub fn new(body: B) -> Self {
        Self {
            status: 200,
            headers: Headers::new(),
            body,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn with_header_values(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.headers.set_all(name, values);
        self
    }

    /// Sets every header in `headers`, replacing same-named entries.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn into_body(self) -> B {
        self.body
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
