use bunner_cors_decorator::constants::method;
use bunner_cors_decorator::{
    AllowOrigin, AllowedHeaders, AllowedMethods, ContentTypeOptions, CorsDecision,
    CorsDecorator, CorsOptions, ExposedHeaders, FrameOptions, RequestContext, Response,
    XssProtection,
};

#[derive(Default)]
pub struct DecoratorBuilder {
    options: CorsOptions,
}

impl DecoratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: AllowOrigin) -> Self {
        self.options.origin = origin;
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.credentials = enabled;
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.methods = AllowedMethods::list(methods);
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.options.allowed_headers = headers;
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = ExposedHeaders::list(headers);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options.max_age = Some(seconds.to_string());
        self
    }

    pub fn content_type_options<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.content_type_options = ContentTypeOptions::list(values);
        self
    }

    pub fn frame_options(mut self, value: &str) -> Self {
        self.options.frame_options = FrameOptions::new(value);
        self
    }

    pub fn xss_protection<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.xss_protection = XssProtection::list(values);
        self
    }

    pub fn build(self) -> CorsDecorator {
        CorsDecorator::new(self.options)
    }
}

pub struct RequestBuilder {
    context: RequestContext,
}

impl RequestBuilder {
    pub fn new(method: &str) -> Self {
        Self {
            context: RequestContext::new(method),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.context.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.context = self.context.with_origin(origin);
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.context = self.context.with_request_headers(headers);
        self
    }

    pub fn context(self) -> RequestContext {
        self.context
    }

    pub fn check(self, decorator: &CorsDecorator) -> CorsDecision {
        decorator.check(&self.context)
    }

    pub fn decorate(self, decorator: &CorsDecorator) -> Response<&'static str> {
        decorator.decorate(&self.context, base_response())
    }
}

pub fn base_response() -> Response<&'static str> {
    Response::new("handler body").with_header("Content-Type", "text/plain")
}

pub fn decorator() -> DecoratorBuilder {
    DecoratorBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
