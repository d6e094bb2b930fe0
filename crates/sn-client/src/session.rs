//! Blocking HTTP session backed by reqwest.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};
use crate::request::Request;
use crate::response::Response;
use crate::transport::Transport;

/// Authenticated HTTP session for the table interface.
///
/// Wraps a `reqwest::blocking::Client` (which pools connections internally)
/// and optionally attaches basic-auth credentials to every request.
///
/// The password is redacted in Debug output.
#[derive(Clone)]
pub struct HttpSession {
    inner: reqwest::blocking::Client,
    config: ClientConfig,
    basic_auth: Option<(String, String)>,
}

impl std::fmt::Debug for HttpSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSession")
            .field("config", &self.config)
            .field(
                "username",
                &self.basic_auth.as_ref().map(|(username, _)| username),
            )
            .field("password", &self.basic_auth.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl HttpSession {
    /// Create a new session without credentials.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            config,
            basic_auth: None,
        })
    }

    /// Create a session with default configuration.
    pub fn default_session() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Create a session authenticating with the given credentials.
    pub fn from_credentials(credentials: &Credentials, config: ClientConfig) -> Result<Self> {
        Ok(Self::new(config)?.with_basic_auth(credentials.username(), credentials.password()))
    }

    /// Attach basic-auth credentials to every request.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    /// Get the session configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns true if the session attaches basic-auth credentials.
    pub fn has_credentials(&self) -> bool {
        self.basic_auth.is_some()
    }
}

impl Transport for HttpSession {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    fn execute(&self, request: Request) -> Result<Response> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &request.url);

        if let Some((ref username, ref password)) = self.basic_auth {
            req = req.basic_auth(username, Some(password));
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if !request.query_params.is_empty() {
            req = req.query(&request.query_params);
        }

        // Serialized by hand so the Content-Type chosen by the caller is kept.
        if let Some(ref body) = request.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))?;
            req = req.body(bytes);
        }

        if self.config.enable_tracing {
            debug!(
                query = request.query_params.len(),
                has_body = request.body.is_some(),
                "Sending request"
            );
        }

        let response = req.send()?;
        let status = response.status().as_u16();

        if self.config.enable_tracing {
            let content_length = response.content_length();
            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        let body = response.text()?;
        Ok(Response::new(status, body))
    }
}
