//! wiremock-based review API mock server for testing.
//!
//! ```ignore
//! let mock = ReviewMockServer::start().await;
//!
//! mock.activity("a1").list_reviews(200, json!([])).await;
//! mock.activity("a1").update_review("r1", 403, json!({})).await;
//! mock.activity("a1").create_review(200, json!({"id": "r2"})).await;
//! mock.assigned(200, json!({"data": []})).await;
//!
//! let client = ReviewClient::new(CookieJar::new("token=t"));
//! client.list("a1", &mock.props()).await?;
//! let request = mock.single_request().await;
//! ```

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use super::client::RequestProps;

pub struct ReviewMockServer {
    server: MockServer,
}

impl ReviewMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Request props pointing at this server.
    pub fn props(&self) -> RequestProps {
        RequestProps::new(self.server.uri())
    }

    /// Request props pointing at a local port nothing listens on.
    pub fn unreachable_props() -> RequestProps {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        RequestProps::new(format!("http://127.0.0.1:{port}"))
    }

    pub fn activity<'a>(&'a self, activity_id: &'a str) -> ActivityMock<'a> {
        ActivityMock {
            server: &self.server,
            activity_id,
        }
    }

    /// Mock `GET /activity` (assigned reviews listing).
    pub async fn assigned(&self, status: u16, body: Value) {
        mount(&self.server, "GET", "/activity", json_response(status, body)).await;
    }

    /// Mock `GET /activity` with a non-JSON body.
    pub async fn assigned_raw(&self, status: u16, body: &str) {
        mount(&self.server, "GET", "/activity", raw_response(status, body)).await;
    }

    /// The one request the server received.
    pub async fn single_request(&self) -> Request {
        let mut requests = self.server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

/// Endpoints scoped to one activity.
pub struct ActivityMock<'a> {
    server: &'a MockServer,
    activity_id: &'a str,
}

impl ActivityMock<'_> {
    fn reviews_path(&self) -> String {
        format!("/activity/{}/review", self.activity_id)
    }

    pub async fn list_reviews(&self, status: u16, body: Value) {
        mount(self.server, "GET", &self.reviews_path(), json_response(status, body)).await;
    }

    pub async fn list_reviews_raw(&self, status: u16, body: &str) {
        mount(self.server, "GET", &self.reviews_path(), raw_response(status, body)).await;
    }

    pub async fn update_review(&self, review_id: &str, status: u16, body: Value) {
        let review_path = format!("{}/{review_id}", self.reviews_path());
        mount(self.server, "PUT", &review_path, json_response(status, body)).await;
    }

    pub async fn create_review(&self, status: u16, body: Value) {
        let new_path = format!("{}/new", self.reviews_path());
        mount(self.server, "PUT", &new_path, json_response(status, body)).await;
    }
}

fn json_response(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

fn raw_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_string(body)
}

async fn mount(
    server: &MockServer,
    http_method: &str,
    request_path: &str,
    response: ResponseTemplate,
) {
    Mock::given(method(http_method))
        .and(path(request_path))
        .respond_with(response)
        .mount(server)
        .await;
}
