//! In-process mock of the YouTube Data API used by the integration tests.
//!
//! Serves scripted JSON responses over real HTTP on a random localhost port
//! and records every request it sees, so tests can assert on request counts,
//! query parameters, and authentication routing.

use http::StatusCode;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::service::service_fn;
use hyper::{Request, Response, body};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One request as the mock server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request path, e.g. `/playlists`.
    pub path: String,
    /// Decoded query parameters.
    pub query: HashMap<String, String>,
    /// The `Authorization` header, when one was sent.
    pub authorization: Option<String>,
}

impl RecordedRequest {
    /// The `pageToken` query parameter, when one was sent.
    pub fn page_token(&self) -> Option<&str> {
        self.query.get("pageToken").map(String::as_str)
    }
}

/// Handle to a running mock API server.
pub struct MockApi {
    /// Base URL to point the client under test at.
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests received for the given path.
    pub fn requests_for(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }
}

/// Starts a mock API server answering with `handler`.
///
/// The handler maps each incoming request to a status and a JSON body. The
/// server runs on a background task for the rest of the test process; tests
/// are short-lived enough that no explicit shutdown is needed.
pub async fn start<H>(handler: H) -> MockApi
where
    H: Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync + 'static,
{
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock API listener");
    let addr = listener.local_addr().expect("mock API has a local address");

    let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::default();
    let handler = Arc::new(handler);
    let recorded = Arc::clone(&requests);

    tokio::spawn(async move {
        loop {
            let Ok((conn, _)) = listener.accept().await else {
                break;
            };
            let conn = hyper_util::rt::TokioIo::new(conn);
            let handler = Arc::clone(&handler);
            let recorded = Arc::clone(&recorded);
            tokio::spawn(async move {
                let service = service_fn(move |req: Request<body::Incoming>| {
                    let handler = Arc::clone(&handler);
                    let recorded = Arc::clone(&recorded);
                    async move {
                        let query = form_urlencoded::parse(
                            req.uri().query().unwrap_or("").as_bytes(),
                        )
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect();
                        let request = RecordedRequest {
                            path: req.uri().path().to_string(),
                            query,
                            authorization: req
                                .headers()
                                .get("authorization")
                                .and_then(|value| value.to_str().ok())
                                .map(String::from),
                        };

                        let (status, json_body) = handler(&request);
                        recorded.lock().unwrap().push(request);

                        let response = Response::builder()
                            .status(status)
                            .header("content-type", "application/json")
                            .body(Full::<Bytes>::from(json_body))
                            .expect("mock response is well-formed");
                        Ok::<_, std::convert::Infallible>(response)
                    }
                });
                let _ = hyper::server::conn::http1::Builder::new()
                    .serve_connection(conn, service)
                    .await;
            });
        }
    });

    MockApi {
        base_url: format!("http://{}:{}", addr.ip(), addr.port()),
        requests,
    }
}
