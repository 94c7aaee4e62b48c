//! HTTP client for the backend JSON API.
//!
//! Every call maps its outcome onto [`ApiError`]: non-2xx statuses via
//! [`ApiError::from_status`], connection problems to `Transport`, and bodies
//! that do not match the expected shape to `Decode`.

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use isocert_common::api::{ApiError, Backend, Fetched, LoginRequest, LoginResponse};
use isocert_common::config::Config;
use isocert_common::records::{
    BlogPost, Enquiry, FranchiseApplication, NewEnquiry, NewFranchiseApplication,
    NewRegistration, Registration,
};

/// Shared, cheaply clonable client (the connection pool lives inside
/// `reqwest::Client`).
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .with_context(|| format!("Invalid API_BASE_URL: {}", config.api_base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API_BASE_URL cannot be used as a base: {base_url}");
        }
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Cannot create HTTP client")?;
        Ok(HttpBackend { client, base_url })
    }

    /// Build `<base>/<segments…>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str], token: Option<&str>) -> Fetched<T> {
        let url = self.endpoint(segments);
        let mut request = self.client.get(url.clone());
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = send(&url, request).await?;
        response.json::<T>().await.map_err(|e| {
            warn!("GET {url}: cannot decode response: {e}");
            ApiError::Decode(e.to_string())
        })
    }

    async fn post_json<B: Serialize + Sync>(&self, segments: &[&str], body: &B) -> Fetched<Response> {
        let url = self.endpoint(segments);
        send(&url, self.client.post(url.clone()).json(body)).await
    }
}

async fn send(url: &Url, request: RequestBuilder) -> Fetched<Response> {
    let response = request.send().await.map_err(|e| {
        warn!("{url}: request failed: {e}");
        ApiError::Transport(e.to_string())
    })?;

    let status = response.status();
    if status.is_success() {
        debug!("{url}: {status}");
        Ok(response)
    } else {
        warn!("{url}: backend returned {status}");
        Err(ApiError::from_status(status.as_u16()))
    }
}

impl Backend for HttpBackend {
    async fn enquiries(&self, token: &str) -> Fetched<Vec<Enquiry>> {
        self.get_json(&["enquiries"], Some(token)).await
    }

    async fn registrations(&self, token: &str) -> Fetched<Vec<Registration>> {
        self.get_json(&["registrations"], Some(token)).await
    }

    async fn franchise_applications(&self, token: &str) -> Fetched<Vec<FranchiseApplication>> {
        self.get_json(&["franchise-applications"], Some(token)).await
    }

    async fn blog_posts(&self) -> Fetched<Vec<BlogPost>> {
        self.get_json(&["blog"], None).await
    }

    async fn blog_post(&self, id: &str) -> Fetched<BlogPost> {
        self.get_json(&["blog", id], None).await
    }

    async fn login(&self, request: &LoginRequest) -> Fetched<LoginResponse> {
        let url = self.endpoint(&["auth", "login"]);
        let response = self.post_json(&["auth", "login"], request).await?;
        response.json::<LoginResponse>().await.map_err(|e| {
            warn!("POST {url}: cannot decode login response: {e}");
            ApiError::Decode(e.to_string())
        })
    }

    async fn submit_enquiry(&self, enquiry: &NewEnquiry) -> Fetched<()> {
        self.post_json(&["enquiries"], enquiry).await.map(drop)
    }

    async fn submit_registration(&self, registration: &NewRegistration) -> Fetched<()> {
        self.post_json(&["registrations"], registration).await.map(drop)
    }

    async fn submit_franchise_application(
        &self,
        application: &NewFranchiseApplication,
    ) -> Fetched<()> {
        self.post_json(&["franchise-applications"], application)
            .await
            .map(drop)
    }
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn backend(base: &str) -> HttpBackend {
        let config = Config {
            api_base_url: base.into(),
            ..Config::default()
        };
        HttpBackend::new(&config).unwrap()
    }

    async fn mock_api() -> (MockServer, HttpBackend) {
        let server = MockServer::start().await;
        let b = backend(&format!("{}/api", server.uri()));
        (server, b)
    }

    async fn respond(server: &MockServer, verb: &str, route: &str, status: u16) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(server)
            .await;
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let b = backend("http://localhost:8001/api");
        assert_eq!(
            b.endpoint(&["franchise-applications"]).as_str(),
            "http://localhost:8001/api/franchise-applications"
        );
    }

    #[test]
    fn test_endpoint_encodes_ids() {
        let b = backend("https://example.com/api");
        assert_eq!(
            b.endpoint(&["blog", "a b/c"]).as_str(),
            "https://example.com/api/blog/a%20b%2Fc"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = Config {
            api_base_url: "not a url".into(),
            ..Config::default()
        };
        assert!(HttpBackend::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let b = backend(&format!("http://127.0.0.1:{port}/api"));
        let err = b.blog_posts().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_bearer_token_is_sent() {
        let (server, b) = mock_api().await;
        Mock::given(method("GET"))
            .and(path("/api/enquiries"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "e1",
                "name": "Ravi",
                "email": "ravi@example.com",
                "message": "Need ISO 9001",
                "created_at": "2024-03-07T10:15:00Z"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let rows = b.enquiries("secret").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ravi");
    }

    #[tokio::test]
    async fn test_rejected_token_is_unauthorized() {
        let (server, b) = mock_api().await;
        respond(&server, "GET", "/api/registrations", 401).await;
        respond(&server, "GET", "/api/franchise-applications", 403).await;

        assert_eq!(b.registrations("stale").await, Err(ApiError::Unauthorized));
        assert_eq!(
            b.franchise_applications("stale").await,
            Err(ApiError::Unauthorized)
        );
    }

    #[tokio::test]
    async fn test_missing_post_is_not_found() {
        let (server, b) = mock_api().await;
        respond(&server, "GET", "/api/blog/nope", 404).await;

        assert_eq!(b.blog_post("nope").await, Err(ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_server_error_keeps_status() {
        let (server, b) = mock_api().await;
        respond(&server, "GET", "/api/blog", 500).await;

        assert_eq!(b.blog_posts().await, Err(ApiError::Status(500)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (server, b) = mock_api().await;
        Mock::given(method("GET"))
            .and(path("/api/blog"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        assert!(matches!(b.blog_posts().await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_enquiry_is_posted_as_json() {
        let (server, b) = mock_api().await;
        let enquiry = NewEnquiry {
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            phone: None,
            service_interested_in: Some("ISO 9001".into()),
            message: "Quote please".into(),
        };
        Mock::given(method("POST"))
            .and(path("/api/enquiries"))
            .and(body_json(&enquiry))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(b.submit_enquiry(&enquiry).await, Ok(()));
    }
}
