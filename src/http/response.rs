//! Response relay boundary.

use async_trait::async_trait;
use bytes::Bytes;
use http::Response;

/// Collaborator that receives the relayed upstream response.
///
/// Called exactly once per successful dispatch with the upstream status,
/// every upstream header unmodified (including `Set-Cookie`), and the
/// transformed body. Error paths never reach the writer; the dispatch
/// result carries those.
#[async_trait]
pub trait ResponseWriter: Send {
    async fn write_response(&mut self, response: Response<Bytes>);
}
