//! HTTP API client for the platform

use paas_domain::{ApiError, ApiResult};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;
use url::Url;

use crate::config::Config;

/// Blocking client for authenticated requests against the platform endpoints
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    access_token: Option<String>,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(
            config.access_token.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// Create a new API client with custom settings
    pub fn new(access_token: Option<String>, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            access_token,
        })
    }

    /// Add authentication header if token is available
    fn add_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.access_token {
            builder.bearer_auth(token)
        } else {
            builder
        }
    }

    /// Make a GET request and decode the JSON body
    pub fn get<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        tracing::debug!(method = "GET", %url, "Sending request");
        let builder = self.add_auth(self.client.get(url));

        let response = builder
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let body = Self::handle_response(response)?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Make a DELETE request without expecting a response body
    pub fn delete_no_content(&self, url: Url) -> ApiResult<()> {
        tracing::debug!(method = "DELETE", %url, "Sending request");
        let builder = self.add_auth(self.client.delete(url));

        let response = builder
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Self::handle_response(response).map(|_| ())
    }

    /// Return the body of a successful response, or the server's error
    fn handle_response(response: Response) -> ApiResult<String> {
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if status.is_success() {
            Ok(body)
        } else {
            tracing::debug!(status = status.as_u16(), "Request failed");
            Err(parse_error(status.as_u16(), &body))
        }
    }
}

/// Error body shapes of the cloud controller and the UAA
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    description: Option<String>,
    error_code: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

pub(crate) fn parse_error(status: u16, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

    let code = parsed.error_code.or(parsed.error);
    let description = parsed
        .description
        .or(parsed.error_description)
        .unwrap_or_else(|| match body.trim() {
            "" => "Unknown error".to_string(),
            text => text.to_string(),
        });

    ApiError::http(status, code.as_deref(), description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new(None, Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_auth() {
        let client = ApiClient::from_config(&Config {
            access_token: Some("test-token".to_string()),
            ..Config::default()
        });
        assert!(client.is_ok());
    }

    #[test]
    fn test_parse_cloud_controller_error() {
        let err = parse_error(
            404,
            r#"{"code":20003,"description":"The user could not be found: abc","error_code":"CF-UserNotFound"}"#,
        );
        assert_eq!(
            err,
            ApiError::http(404, Some("CF-UserNotFound"), "The user could not be found: abc")
        );
    }

    #[test]
    fn test_parse_uaa_error() {
        let err = parse_error(
            401,
            r#"{"error":"invalid_token","error_description":"Invalid access token"}"#,
        );
        assert_eq!(
            err,
            ApiError::http(401, Some("invalid_token"), "Invalid access token")
        );
    }

    #[test]
    fn test_parse_non_json_error() {
        let err = parse_error(502, "Bad Gateway\n");
        assert_eq!(err, ApiError::http(502, None, "Bad Gateway"));

        let err = parse_error(500, "");
        assert_eq!(err, ApiError::http(500, None, "Unknown error"));
    }
}
