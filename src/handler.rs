use crate::context::RequestContext;
use crate::response::Response;

/// The next stage of the pipeline, producing the response to decorate.
///
/// Implemented for any `Fn(&RequestContext) -> Result<Response<B>, E>`.
pub trait Handler<B> {
    type Error;

    fn handle(&self, request: &RequestContext) -> Result<Response<B>, Self::Error>;
}

impl<B, E, F> Handler<B> for F
where
    F: Fn(&RequestContext) -> Result<Response<B>, E>,
{
    type Error = E;

    fn handle(&self, request: &RequestContext) -> Result<Response<B>, E> {
        self(request)
    }
}
