mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod handler;
mod header_builder;
mod headers;
mod http_compat;
mod options;
mod origin;
mod response;
mod result;
mod security_headers;
mod store;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::CorsDecorator;
pub use exposed_headers::ExposedHeaders;
pub use handler::Handler;
pub use headers::Headers;
pub use options::CorsOptions;
pub use origin::{AllowOrigin, OriginDecision};
pub use response::Response;
pub use result::CorsDecision;
pub use security_headers::{ContentTypeOptions, FrameOptions, XssProtection};
pub use store::{JsonPolicyStore, PolicyStore, StoreError};
