//! User lookup and deletion.

use paas_domain::{ApiError, ApiResult, UserFields};
use serde::Deserialize;
use url::Url;

use crate::api::ApiClient;
use crate::config::Config;

/// Remote user account operations
pub trait UserRepository: Send + Sync {
    /// Look a user up by login name.
    ///
    /// `Ok(None)` means the lookup succeeded and no such user exists.
    fn find_by_username(&self, username: &str) -> ApiResult<Option<UserFields>>;

    /// Delete the user with the given guid
    fn delete(&self, user_guid: &str) -> ApiResult<()>;
}

#[derive(Debug, Deserialize)]
struct ScimUserList {
    #[serde(default)]
    resources: Vec<ScimUser>,
}

#[derive(Debug, Deserialize)]
struct ScimUser {
    id: String,
    #[serde(rename = "userName")]
    user_name: String,
}

impl From<ScimUser> for UserFields {
    fn from(user: ScimUser) -> Self {
        UserFields::new(user.user_name, user.id)
    }
}

/// [`UserRepository`] backed by the UAA and the cloud controller
pub struct HttpUserRepository {
    client: ApiClient,
    api_endpoint: Url,
    uaa_endpoint: Url,
}

impl HttpUserRepository {
    pub fn new(client: ApiClient, api_endpoint: Url, uaa_endpoint: Url) -> Self {
        Self {
            client,
            api_endpoint,
            uaa_endpoint,
        }
    }

    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Ok(Self::new(
            ApiClient::from_config(config)?,
            parse_endpoint(&config.api_endpoint)?,
            parse_endpoint(&config.uaa_endpoint)?,
        ))
    }

    fn find_url(&self, username: &str) -> ApiResult<Url> {
        let mut url = endpoint_url(&self.uaa_endpoint, &["Users"])?;
        url.query_pairs_mut()
            .append_pair("attributes", "id,userName")
            .append_pair("filter", &username_filter(username));
        Ok(url)
    }
}

impl UserRepository for HttpUserRepository {
    fn find_by_username(&self, username: &str) -> ApiResult<Option<UserFields>> {
        let list: ScimUserList = self.client.get(self.find_url(username)?)?;
        Ok(list.resources.into_iter().next().map(UserFields::from))
    }

    fn delete(&self, user_guid: &str) -> ApiResult<()> {
        let cc_url = endpoint_url(&self.api_endpoint, &["v2", "users", user_guid])?;
        match self.client.delete_no_content(cc_url) {
            Ok(()) => {}
            // Users that never logged in to the cloud controller only exist in the UAA
            Err(err) if err.is_not_found() => {
                tracing::debug!(user_guid, "User unknown to cloud controller");
            }
            Err(err) => return Err(err),
        }

        let uaa_url = endpoint_url(&self.uaa_endpoint, &["Users", user_guid])?;
        self.client.delete_no_content(uaa_url)
    }
}

fn parse_endpoint(endpoint: &str) -> ApiResult<Url> {
    Url::parse(endpoint).map_err(|e| ApiError::InvalidEndpoint(format!("{}: {}", endpoint, e)))
}

/// Append path segments to an endpoint, percent-encoding each one
fn endpoint_url(base: &Url, segments: &[&str]) -> ApiResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidEndpoint(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// SCIM filter matching one user name exactly
fn username_filter(username: &str) -> String {
    let escaped = username.replace('\\', "\\\\").replace('"', "\\\"");
    format!("userName Eq \"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn repository(api: &str, uaa: &str) -> HttpUserRepository {
        HttpUserRepository::new(
            ApiClient::new(None, Duration::from_secs(1)).unwrap(),
            Url::parse(api).unwrap(),
            Url::parse(uaa).unwrap(),
        )
    }

    #[test]
    fn test_find_url_filters_by_username() {
        let repo = repository("https://api.example.com", "https://uaa.example.com/");
        let url = repo.find_url("my-user").unwrap();

        assert_eq!(url.path(), "/Users");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("attributes".to_string(), "id,userName".to_string()),
                ("filter".to_string(), "userName Eq \"my-user\"".to_string()),
            ]
        );
    }

    #[test]
    fn test_username_filter_escapes_quotes() {
        assert_eq!(username_filter(r#"a"b"#), r#"userName Eq "a\"b""#);
    }

    #[test]
    fn test_endpoint_url_keeps_base_path() {
        let base = Url::parse("https://api.example.com/cf").unwrap();
        let url = endpoint_url(&base, &["v2", "users", "guid/with slash"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/cf/v2/users/guid%2Fwith%20slash"
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = Config {
            api_endpoint: "not a url".to_string(),
            ..Config::default()
        };
        let result = HttpUserRepository::from_config(&config);
        assert!(matches!(result, Err(ApiError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_decode_user_list() {
        let list: ScimUserList = serde_json::from_str(
            r#"{"resources":[{"id":"my-user-guid","userName":"my-user"}],"totalResults":1}"#,
        )
        .unwrap();
        let user = list.resources.into_iter().next().map(UserFields::from).unwrap();
        assert_eq!(user.username, "my-user");
        assert_eq!(user.guid, "my-user-guid");
    }

    #[test]
    fn test_decode_empty_user_list() {
        let list: ScimUserList = serde_json::from_str(r#"{"totalResults":0}"#).unwrap();
        assert!(list.resources.is_empty());
    }
}
