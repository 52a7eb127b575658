//! Site HTTP client.

use reqwest::{header, Client, Response, StatusCode};
use url::Url;

use crate::api::auth::{session_jar, SessionConfig};
use crate::error::{Error, Result};

/// Endpoint serving further feed pages for a continuation token.
const MORE_PATH: &str = "component/entities/post/more";

/// Authenticated client for the site's HTML endpoints.
pub struct SiteClient {
    client: Client,
    base_url: Url,
}

impl SiteClient {
    /// Build a client carrying the session cookie and user agent.
    pub fn new(session: &SessionConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&session.user_agent)
            .cookie_provider(session_jar(session))
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: session.base_url.clone(),
        })
    }

    /// Fetch the first page of a profile feed.
    pub async fn fetch_profile_page(&self, profile: &str) -> Result<String> {
        let url = self.base_url.join(profile)?;

        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }

    /// Fetch the feed page identified by a continuation token.
    pub async fn fetch_more_page(&self, token: &str) -> Result<String> {
        let url = self.base_url.join(MORE_PATH)?;

        tracing::debug!("POST {} (token {})", url, token);

        let response = self
            .client
            .post(url)
            .header(header::REFERER, self.base_url.as_str())
            .form(&[("data", token)])
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }

    /// Start downloading a media file.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download {}: HTTP {}",
                url,
                response.status()
            )));
        }

        Ok(response)
    }
}

/// Map error statuses of a page request to errors.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    tracing::debug!("Response status: {}", status);

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(Error::Authentication(format!(
            "HTTP {} (is the session cookie still valid?)",
            status
        )));
    }

    if !status.is_success() {
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Error body: {}", body);
        return Err(Error::Api(format!("HTTP {} for {}", status, url)));
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header as header_is, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session(server: &MockServer) -> SessionConfig {
        SessionConfig {
            session_token: "token123".to_string(),
            user_agent: "TestAgent/1.0".to_string(),
            base_url: Url::parse(&format!("{}/", server.uri())).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_profile_page_carries_cookie_and_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/someprofile"))
            .and(header_is("cookie", "sess=token123"))
            .and(header_is("user-agent", "TestAgent/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = SiteClient::new(&session(&server)).unwrap();
        let body = client.fetch_profile_page("someprofile").await.unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_more_page_posts_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/component/entities/post/more"))
            .and(body_string("data=abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_string("more"))
            .expect(1)
            .mount(&server)
            .await;

        let client = SiteClient::new(&session(&server)).unwrap();
        assert_eq!(client.fetch_more_page("abc123").await.unwrap(), "more");
    }

    #[tokio::test]
    async fn test_forbidden_is_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = SiteClient::new(&session(&server)).unwrap();
        let err = client.fetch_profile_page("someprofile").await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[tokio::test]
    async fn test_download_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = SiteClient::new(&session(&server)).unwrap();
        let url = format!("{}/files/a.jpg", server.uri());
        let err = client.download_file(&url).await.unwrap_err();
        assert!(matches!(err, Error::Download(_)));
    }
}
