use crate::constants::{defaults, header};
use crate::context::RequestContext;
use crate::headers::Headers;
use crate::options::CorsOptions;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn allow_origin(&self, request: &RequestContext) -> Vec<String> {
        self.options
            .origin
            .resolve(request)
            .header_values(request)
    }

    pub(crate) fn allow_credentials(&self) -> &'static str {
        if self.options.credentials {
            "true"
        } else {
            "false"
        }
    }

    pub(crate) fn max_age(&self) -> String {
        match self.options.max_age.as_deref() {
            Some(value) if !value.is_empty() && value != defaults::MAX_AGE => value.to_string(),
            _ => defaults::MAX_AGE.to_string(),
        }
    }

    pub(crate) fn content_type_options(&self) -> String {
        self.options.content_type_options.header_value()
    }

    pub(crate) fn frame_options(&self) -> String {
        self.options.frame_options.header_value()
    }

    pub(crate) fn xss_protection(&self) -> String {
        self.options.xss_protection.header_value()
    }

    pub(crate) fn expose_headers(&self) -> String {
        self.options.exposed_headers.header_value()
    }

    pub(crate) fn allow_headers(&self, request: &RequestContext) -> String {
        self.options.allowed_headers.header_value(request)
    }

    pub(crate) fn allow_methods(&self) -> String {
        self.options.methods.header_value()
    }

    /// Headers attached to every request that carries an origin.
    pub(crate) fn build_common_headers(&self, request: &RequestContext) -> Headers {
        let mut headers = Headers::with_capacity(6);
        headers.set_all(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.allow_origin(request),
        );
        headers.set(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            self.allow_credentials(),
        );
        headers.set(header::ACCESS_CONTROL_MAX_AGE, self.max_age());
        headers.set(header::X_CONTENT_TYPE_OPTIONS, self.content_type_options());
        headers.set(header::X_FRAME_OPTIONS, self.frame_options());
        headers.set(header::X_XSS_PROTECTION, self.xss_protection());
        headers
    }

    /// Headers added on top of the common set for `OPTIONS` requests.
    pub(crate) fn build_preflight_headers(&self, request: &RequestContext) -> Headers {
        let mut headers = Headers::with_capacity(3);
        headers.set(header::ACCESS_CONTROL_EXPOSE_HEADERS, self.expose_headers());
        headers.set(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.allow_headers(request),
        );
        headers.set(header::ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods());
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
