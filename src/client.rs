use crate::error::Error;
use crate::StreetAddress;
use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Serialize;
use std::{env, fmt, time::Duration};
use url::Url;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("smartystreets-rust/", env!("CARGO_PKG_VERSION"));

/// Environment variable read by [`Credentials::from_env`] for the auth ID.
pub const AUTH_ID_VAR: &str = "SMARTY_AUTH_ID";
/// Environment variable read by [`Credentials::from_env`] for the auth token.
pub const AUTH_TOKEN_VAR: &str = "SMARTY_AUTH_TOKEN";

lazy_static! {
    static ref BASE_URL: Url = Url::parse("https://api.smartystreets.com/").unwrap();
}

/// Secret key pair issued by SmartyStreets.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub auth_id: String,
    pub auth_token: String,
}

impl Credentials {
    pub fn new(auth_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Credentials {
            auth_id: auth_id.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Reads the key pair from `SMARTY_AUTH_ID` and `SMARTY_AUTH_TOKEN`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the key pair through `lookup`, keyed by [`AUTH_ID_VAR`] and
    /// [`AUTH_TOKEN_VAR`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let var = |name: &'static str| lookup(name).ok_or(Error::MissingCredentials(name));
        Ok(Credentials {
            auth_id: var(AUTH_ID_VAR)?,
            auth_token: var(AUTH_TOKEN_VAR)?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_id", &self.auth_id)
            .field("auth_token", &"***")
            .finish()
    }
}

/// SmartyStreets API client.
///
/// Appends the credentials to every request and turns any status other than
/// `200 OK` into [`Error::Transport`]. Each call is exactly one round trip.
#[derive(Debug, Clone)]
pub struct Client {
    credentials: Credentials,
    base_url: Url,
    http_client: reqwest::Client,
}

impl Client {
    /// Creates a client for the public SmartyStreets endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartystreets::Client;
    ///
    /// let client = Client::new("AUTH_ID", "AUTH_TOKEN").unwrap();
    ///
    /// assert_eq!("https://api.smartystreets.com/", client.base_url().as_str());
    /// ```
    pub fn new(auth_id: impl Into<String>, auth_token: impl Into<String>) -> Result<Self, Error> {
        Self::builder(Credentials::new(auth_id, auth_token)).build()
    }

    pub fn builder(credentials: Credentials) -> ClientBuilder {
        ClientBuilder {
            credentials,
            base_url: None,
            timeout: None,
            http_client: None,
        }
    }

    /// The street address API.
    pub fn street_address(&self) -> StreetAddress<'_> {
        StreetAddress::new(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Builds the request URL: auth parameters first, then `params`.
    pub(crate) fn url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, Error> {
        let mut url = self.base_url.join(path)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("auth-id", &self.credentials.auth_id);
            query.append_pair("auth-token", &self.credentials.auth_token);
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET with `params` in the query string. Returns the raw response body.
    pub async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Vec<u8>, Error> {
        let url = self.url(path, params)?;
        debug!("GET {} with {} parameters", path, params.len());
        let response = self
            .http_client
            .get(url)
            .header(ACCEPT, mime::APPLICATION_JSON.as_ref())
            .send()
            .await?;
        Self::process_response(path, response).await
    }

    /// POST with `body` as JSON. The credentials still travel in the query string.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Vec<u8>, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path, &[])?;
        debug!("POST {}", path);
        let response = self
            .http_client
            .post(url)
            .header(ACCEPT, mime::APPLICATION_JSON.as_ref())
            .json(body)
            .send()
            .await?;
        Self::process_response(path, response).await
    }

    async fn process_response(path: &str, response: reqwest::Response) -> Result<Vec<u8>, Error> {
        let status = response.status();
        if status != StatusCode::OK {
            warn!("{} responded with status {}", path, status);
            return Err(Error::Transport { status });
        }
        let body = response.bytes().await?;
        debug!("{} responded with {} bytes", path, body.len());
        Ok(body.to_vec())
    }
}

/// Configures a [`Client`]. The defaults match [`Client::new`].
#[derive(Debug)]
pub struct ClientBuilder {
    credentials: Credentials,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Sends requests somewhere other than the public endpoint, e.g. a proxy or a
    /// test server. Paths are joined to it, so it should end with `/`.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Total time allowed for each request. Ignored with [`ClientBuilder::http_client`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses a preconfigured HTTP client instead of building one.
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let http_client = match self.http_client {
            Some(http_client) => http_client,
            None => {
                let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Client {
            credentials: self.credentials,
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.clone()),
            http_client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new("foo", "bar").unwrap()
    }

    #[test]
    fn default_base_url() {
        assert_eq!("https://api.smartystreets.com/", client().base_url().as_str());
    }

    #[test]
    fn url_starts_with_credentials() {
        assert_eq!(
            "https://api.smartystreets.com/street-address?auth-id=foo&auth-token=bar",
            client().url("street-address", &[]).unwrap().as_str()
        );
    }

    #[test]
    fn url_with_params() {
        let params = [
            ("street", "1 Santa Claus Ln".to_string()),
            ("zipcode", "99705".to_string()),
        ];
        assert_eq!(
            "https://api.smartystreets.com/street-address?auth-id=foo&auth-token=bar&street=1+Santa+Claus+Ln&zipcode=99705",
            client().url("street-address", &params).unwrap().as_str()
        );
    }

    #[test]
    fn url_with_base_url() {
        let client = Client::builder(Credentials::new("foo", "bar"))
            .base_url(Url::parse("http://localhost:8080/proxy/").unwrap())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(
            "http://localhost:8080/proxy/street-address?auth-id=foo&auth-token=bar",
            client.url("street-address", &[]).unwrap().as_str()
        );
    }

    #[test]
    fn debug_hides_token() {
        let debug = format!("{:?}", Credentials::new("foo", "secret"));
        assert!(debug.contains("foo"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn credentials_from_lookup() {
        let vars = |name: &'static str| match name {
            AUTH_ID_VAR => Some("id".to_string()),
            AUTH_TOKEN_VAR => Some("token".to_string()),
            _ => None,
        };
        assert_eq!(
            Credentials::new("id", "token"),
            Credentials::from_lookup(vars).unwrap()
        );
    }

    #[test]
    fn missing_credentials() {
        let id_only = |name: &'static str| (name == AUTH_ID_VAR).then(|| "id".to_string());
        assert!(matches!(
            Credentials::from_lookup(id_only),
            Err(Error::MissingCredentials(AUTH_TOKEN_VAR))
        ));
        assert!(matches!(
            Credentials::from_lookup(|_| None),
            Err(Error::MissingCredentials(AUTH_ID_VAR))
        ));
    }
}
