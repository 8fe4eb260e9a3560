//! HTTP/1 client for the remote explanation service.
//!
//! The upstream capability is consumed, never implemented here: we POST
//! the code as JSON and decode the `{"result": ...}` reply. The client
//! is a thin hyper connection per call; the service is request-scoped
//! and holds no pool.

use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Uri};
use hyper_util::rt::TokioIo;
use serde::Deserialize;
use tokio::net::TcpStream;

use crate::{ExplainError, Explainer};

/// Successful reply body from the upstream service.
#[derive(Debug, Deserialize)]
struct UpstreamReply {
    result: String,
}

/// Decode an upstream reply body into the explanation text.
///
/// # Errors
/// Returns [`ExplainError::MalformedReply`] if the body is not JSON of the
/// shape `{"result": <string>}`.
pub fn parse_reply(body: &[u8]) -> Result<String, ExplainError> {
    let reply: UpstreamReply = serde_json::from_slice(body)
        .map_err(|e| ExplainError::MalformedReply(e.to_string()))?;
    Ok(reply.result)
}

/// [`Explainer`] implementation backed by a remote HTTP service.
#[derive(Debug, Clone)]
pub struct UpstreamExplainer {
    host: String,
    port: u16,
    /// Path and query component sent in the request line.
    target: String,
    /// Value for the `Host` header, e.g. `127.0.0.1:8091`.
    authority: String,
}

impl UpstreamExplainer {
    /// Build a client for the capability at `endpoint`.
    ///
    /// # Errors
    /// Returns [`ExplainError::BadEndpoint`] if `endpoint` is not an
    /// `http://host[:port]/path` URL.
    pub fn new(endpoint: &str) -> Result<Self, ExplainError> {
        let bad = |reason: &str| ExplainError::BadEndpoint {
            endpoint: endpoint.to_owned(),
            reason: reason.to_owned(),
        };

        let uri: Uri = endpoint
            .parse()
            .map_err(|e: hyper::http::uri::InvalidUri| bad(&e.to_string()))?;

        match uri.scheme_str() {
            Some("http") => {}
            Some(other) => return Err(bad(&format!("unsupported scheme '{other}'"))),
            None => return Err(bad("missing scheme")),
        }

        let host = uri.host().ok_or_else(|| bad("missing host"))?.to_owned();
        let port = uri.port_u16().unwrap_or(80);
        let authority = match uri.authority() {
            Some(a) => a.as_str().to_owned(),
            None => return Err(bad("missing authority")),
        };
        let target = uri
            .path_and_query()
            .map_or_else(|| "/".to_owned(), |pq| pq.as_str().to_owned());

        Ok(Self { host, port, target, authority })
    }

    async fn send(&self, payload: String) -> Result<Vec<u8>, ExplainError> {
        let stream = TcpStream::connect((self.host.as_str(), self.port))
            .await
            .map_err(|e| ExplainError::Connect(format!("{}: {e}", self.authority)))?;

        let io = TokioIo::new(stream);

        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .map_err(|e| ExplainError::Request(format!("HTTP handshake: {e}")))?;

        // Drive the connection in the background.
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::debug!("upstream connection closed: {e}");
            }
        });

        let body = Bytes::from(payload);
        let req = Request::builder()
            .method(Method::POST)
            .uri(&self.target)
            .header("Host", &self.authority)
            .header("Content-Type", "application/json")
            .header("Content-Length", body.len().to_string())
            .body(Full::new(body))
            .map_err(|e| ExplainError::Request(format!("build request: {e}")))?;

        let resp = sender
            .send_request(req)
            .await
            .map_err(|e| ExplainError::Request(format!("send request: {e}")))?;

        let status = resp.status();
        let reply = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| ExplainError::Request(format!("read reply body: {e}")))?
            .to_bytes();

        if !status.is_success() {
            return Err(ExplainError::UpstreamStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&reply).into_owned(),
            });
        }

        Ok(reply.to_vec())
    }
}

#[async_trait]
impl Explainer for UpstreamExplainer {
    async fn explain(&self, code: &str) -> Result<String, ExplainError> {
        let payload = serde_json::json!({ "code": code }).to_string();
        let reply = self.send(payload).await?;
        parse_reply(&reply)
    }
}
