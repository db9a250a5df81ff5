//! The single request handler
//!
//! Every request, whatever its method, path or body, waits for a jittered
//! delay and then gets the fixed payload back with status 200.

use crate::payload::{self, payload_body};
use crate::Jitter;
use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http_body_util::Full;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

/// Latency-simulating responder, shared by all connections
#[derive(Debug, Clone, Default)]
pub struct Responder {
    jitter: Jitter,
}

impl Responder {
    pub fn new(jitter: Jitter) -> Self {
        Self { jitter }
    }

    pub fn jitter(&self) -> &Jitter {
        &self.jitter
    }

    /// Pick the delay for the next request
    pub fn next_delay(&self) -> Duration {
        self.jitter.sample_delay(&mut rand::thread_rng())
    }

    /// Handle one request
    pub async fn respond<B>(&self, req: Request<B>) -> Response<Full<Bytes>> {
        let delay = self.next_delay();
        tracing::debug!(
            method = %req.method(),
            path = req.uri().path(),
            delay_ms = delay.as_millis() as u64,
            "request"
        );
        // Method, path and body play no part in the response
        drop(req);

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        fixed_response()
    }
}

/// Build the 200 response carrying the payload
pub fn fixed_response() -> Response<Full<Bytes>> {
    let mut res = Response::new(Full::new(payload_body()));
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(payload::CONTENT_TYPE));
    res
}

/// Service function adapter for hyper
pub async fn handle_request<B>(
    responder: Arc<Responder>,
    req: Request<B>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(responder.respond(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PAYLOAD;
    use http::{Method, StatusCode};
    use http_body_util::BodyExt;

    async fn body_of(res: Response<Full<Bytes>>) -> Bytes {
        match res.into_body().collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(never) => match never {},
        }
    }

    #[test]
    fn test_fixed_response() {
        let res = fixed_response();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[CONTENT_TYPE], payload::CONTENT_TYPE);
        assert_eq!(res.headers().len(), 1);
    }

    #[tokio::test]
    async fn test_respond_ignores_method_and_path() {
        let responder = Responder::new(Jitter::none());

        let get = Request::builder().uri("/").body(()).unwrap();
        let post = Request::builder()
            .method(Method::POST)
            .uri("/anything/unmatched/path?x=1")
            .body("some request body")
            .unwrap();

        let a = responder.respond(get).await;
        let b = responder.respond(post).await;
        assert_eq!(a.status(), StatusCode::OK);
        assert_eq!(b.status(), StatusCode::OK);
        assert_eq!(body_of(a).await, PAYLOAD.as_bytes());
        assert_eq!(body_of(b).await, PAYLOAD.as_bytes());
    }

    #[tokio::test(start_paused = true)]
    async fn test_respond_waits_for_jitter() {
        let responder = Responder::default();
        let (min, max) = responder.jitter().bounds();

        for _ in 0..50 {
            let start = tokio::time::Instant::now();
            let req = Request::builder().uri("/").body(()).unwrap();
            let res = responder.respond(req).await;
            let elapsed = start.elapsed();

            assert_eq!(res.status(), StatusCode::OK);
            assert!(elapsed >= min, "{:?} shorter than {:?}", elapsed, min);
            assert!(elapsed <= max + Duration::from_millis(1), "{:?} longer than {:?}", elapsed, max);
        }
    }

    #[tokio::test]
    async fn test_handle_request_is_infallible() {
        let responder = Arc::new(Responder::new(Jitter::none()));
        let req = Request::builder().method(Method::DELETE).uri("/x").body(()).unwrap();
        let res = handle_request(responder, req).await;
        assert!(matches!(res, Ok(ref r) if r.status() == StatusCode::OK));
    }
}
