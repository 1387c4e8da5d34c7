pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
    pub const X_FRAME_OPTIONS: &str = "X-Frame-Options";
    pub const X_XSS_PROTECTION: &str = "X-XSS-Protection";
    pub const ORIGIN: &str = "Origin";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Dotted keys read from a [`crate::PolicyStore`].
pub mod config {
    pub const ALLOW_ORIGIN: &str = "Cors.AllowOrigin";
    pub const ALLOW_CREDENTIALS: &str = "Cors.AllowCredentials";
    pub const ALLOW_METHODS: &str = "Cors.AllowMethods";
    pub const ALLOW_HEADERS: &str = "Cors.AllowHeaders";
    pub const EXPOSE_HEADERS: &str = "Cors.ExposeHeaders";
    pub const MAX_AGE: &str = "Cors.MaxAge";
    pub const CONTENT_TYPE_OPTIONS: &str = "Cors.ContentTypeOptions";
    pub const FRAME_OPTIONS: &str = "Cors.FrameOptions";
    pub const XSS_PROTECTION: &str = "Cors.XssProtection";
}

pub mod defaults {
    pub const MAX_AGE: &str = "0";
    pub const FRAME_OPTIONS: &str = "ALLOW";
    pub const XSS_PROTECTION: &str = "1 ;mode=block";
}

/// Separator used whenever a configured list is rendered into a header value.
pub const LIST_SEPARATOR: &str = ", ";
