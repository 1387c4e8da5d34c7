use crate::context::RequestContext;
use crate::handler::Handler;
use crate::header_builder::HeaderBuilder;
use crate::options::CorsOptions;
use crate::response::Response;
use crate::result::CorsDecision;
use crate::store::PolicyStore;
use std::future::Future;
use tracing::debug;

/// Decorates pipeline responses with CORS and hardening headers computed from
/// [`CorsOptions`].
///
/// The decorator holds no mutable state and can be shared freely between
/// threads; every call is a pure function of the request and the policy.
#[derive(Debug, Clone, Default)]
pub struct CorsDecorator {
    options: CorsOptions,
}

impl CorsDecorator {
    pub fn new(options: CorsOptions) -> Self {
        Self { options }
    }

    /// Builds a decorator from a policy store, resolving every key once.
    pub fn from_store<S: PolicyStore + ?Sized>(store: &S) -> Self {
        Self::new(CorsOptions::from_store(store))
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn check(&self, request: &RequestContext) -> CorsDecision {
        if !request.has_origin() {
            debug!(method = %request.method, "no origin on request, skipping CORS headers");
            return CorsDecision::NotApplicable;
        }

        let builder = HeaderBuilder::new(&self.options);
        let mut headers = builder.build_common_headers(request);

        if request.is_preflight() {
            headers.extend(builder.build_preflight_headers(request));
            debug!(origin = ?request.origin, "decorating preflight request");
            CorsDecision::Preflight(headers)
        } else {
            debug!(
                method = %request.method,
                origin = ?request.origin,
                "decorating request"
            );
            CorsDecision::Simple(headers)
        }
    }

    /// Returns `response` with the CORS headers for `request` set on it, or
    /// unchanged when the request carries no origin.
    pub fn decorate<B>(&self, request: &RequestContext, response: Response<B>) -> Response<B> {
        match self.check(request).into_headers() {
            Some(headers) => response.with_headers(headers),
            None => response,
        }
    }

    /// Runs `handler` and decorates its response. A handler error is returned
    /// as-is and nothing is decorated.
    pub fn process<B, H>(&self, request: &RequestContext, handler: &H) -> Result<Response<B>, H::Error>
    where
        H: Handler<B> + ?Sized,
    {
        let response = handler.handle(request)?;
        Ok(self.decorate(request, response))
    }

    /// Async counterpart of [`CorsDecorator::process`]; `next` is awaited once.
    pub async fn process_async<B, E, F, Fut>(
        &self,
        request: &RequestContext,
        next: F,
    ) -> Result<Response<B>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Response<B>, E>>,
    {
        let response = next().await?;
        Ok(self.decorate(request, response))
    }

    pub fn resolve_allow_origin(&self, request: &RequestContext) -> Vec<String> {
        HeaderBuilder::new(&self.options).allow_origin(request)
    }

    pub fn resolve_allow_credentials(&self) -> &'static str {
        HeaderBuilder::new(&self.options).allow_credentials()
    }

    pub fn resolve_max_age(&self) -> String {
        HeaderBuilder::new(&self.options).max_age()
    }

    pub fn resolve_allow_headers(&self, request: &RequestContext) -> String {
        HeaderBuilder::new(&self.options).allow_headers(request)
    }

    pub fn resolve_allow_methods(&self) -> String {
        HeaderBuilder::new(&self.options).allow_methods()
    }

    pub fn resolve_expose_headers(&self) -> String {
        HeaderBuilder::new(&self.options).expose_headers()
    }

    pub fn resolve_content_type_options(&self) -> String {
        HeaderBuilder::new(&self.options).content_type_options()
    }

    pub fn resolve_frame_options(&self) -> String {
        HeaderBuilder::new(&self.options).frame_options()
    }

    pub fn resolve_xss_protection(&self) -> String {
        HeaderBuilder::new(&self.options).xss_protection()
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
