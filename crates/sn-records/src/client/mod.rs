//! ServiceNow JSONv2 table client.
//!
//! This client wraps a [`Transport`] and encodes record operations into the
//! `/{table}.do` endpoint convention: reads are GETs, writes are POSTs that
//! select their action with `sysparm_action`.

use serde::Serialize;
use serde_json::Value;
use snowjson_client::{
    ClientConfig, Credentials, Error, ErrorKind, HttpSession, Request, RequestMethod, Result,
    Transport, DEFAULT_DOMAIN,
};
use tracing::debug;

mod crud;
mod list;

#[cfg(test)]
mod test_support;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for the record tables of one instance.
///
/// Provides the five table operations:
/// - [`get_record`](Self::get_record) - fetch one record by `sys_id`
/// - [`get_records`](Self::get_records) - fetch every record matching a filter
/// - [`create_record`](Self::create_record) - insert a record
/// - [`update_record`](Self::update_record) - update a record
/// - [`delete_record`](Self::delete_record) - delete a record
///
/// The client either owns an [`HttpSession`] it built from username and
/// password, or uses a caller-supplied transport (see
/// [`with_session`](Self::with_session)). In both cases every request carries
/// `Content-Type: application/json` and `Accept: application/json`.
///
/// # Example
///
/// ```rust,no_run
/// use serde_json::json;
/// use snowjson_records::RecordClient;
///
/// # fn main() -> Result<(), snowjson_records::Error> {
/// let client = RecordClient::new("dev12345", "admin", "secret")?;
///
/// let created = client.create_record("incident", &json!({"short_description": "Printer on fire"}))?;
/// let sys_id = created["sys_id"].as_str().unwrap_or_default().to_string();
///
/// client.update_record("incident", &sys_id, &json!({"urgency": "1"}))?;
/// let open = client.get_records("incident", Some("active=true^urgency=1"))?;
/// println!("{} urgent incidents", open.len());
///
/// client.delete_record("incident", &sys_id)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecordClient<S = HttpSession> {
    session: S,
    instance: String,
    base_url: String,
}

impl RecordClient<HttpSession> {
    /// Create a client that authenticates with basic auth.
    ///
    /// The base URL is `https://{instance}.service-now.com`.
    pub fn new(
        instance: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(instance, username, password, ClientConfig::default())
    }

    /// Create a basic-auth client with custom HTTP configuration.
    pub fn with_config(
        instance: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let instance = instance.into();
        let base_url = parse_base_url(&config.instance_url(&instance))?;
        let session = HttpSession::new(config)?.with_basic_auth(username, password);

        Ok(Self {
            session,
            instance,
            base_url,
        })
    }

    /// Create a client from [`Credentials`].
    pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
        Self::from_credentials_with_config(credentials, ClientConfig::default())
    }

    /// Create a client from [`Credentials`] with custom HTTP configuration.
    pub fn from_credentials_with_config(
        credentials: &Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::with_config(
            credentials.instance(),
            credentials.username(),
            credentials.password(),
            config,
        )
    }
}

impl<S: Transport> RecordClient<S> {
    /// Create a client around an already-authenticated transport.
    ///
    /// No credentials are attached by the client; the transport is used as-is.
    /// Pass `&session` or an `Arc` to keep ownership on the caller's side.
    ///
    /// The base URL is always `https://{instance}.service-now.com` here.
    /// Instances on another domain follow up with [`with_base_url`](Self::with_base_url).
    pub fn with_session(instance: impl Into<String>, session: S) -> Result<Self> {
        let instance = instance.into();
        let base_url = parse_base_url(&format!("https://{}.{}", instance, DEFAULT_DOMAIN))?;

        Ok(Self {
            session,
            instance,
            base_url,
        })
    }

    /// Replace the computed base URL (custom domains, proxies, test servers).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Get the instance name.
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Get the base URL every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the underlying transport.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Build the full URL for a path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one request and unwrap the payload.
    ///
    /// Sends `body` as JSON when present and appends `query` after any query
    /// already in `path`. Non-2xx responses fail with [`ErrorKind::Http`].
    /// A JSON object with a top-level `result` key yields that value;
    /// anything else is returned whole. Blank bodies yield `Value::Null`.
    pub fn request(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<Value>,
        query: &[(String, String)],
    ) -> Result<Value> {
        let mut request = Request::new(method, self.url(path))
            .header("Content-Type", JSON_CONTENT_TYPE)
            .header("Accept", JSON_CONTENT_TYPE)
            .query_pairs(query.iter().cloned());

        if let Some(body) = body {
            request = request.json_value(body);
        }

        let response = self.session.execute(request)?;
        if !response.is_success() {
            debug!(status = response.status(), "Request rejected");
        }

        let payload = response.error_for_status()?.json_value()?;
        Ok(unwrap_result(payload))
    }
}

/// Return the `result` member of an object payload, or the payload itself.
pub(crate) fn unwrap_result(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) => match map.remove("result") {
            Some(result) => result,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Serialize a request body, reporting failures as serialization errors.
pub(crate) fn to_body<B: Serialize + ?Sized>(data: &B) -> Result<Value> {
    serde_json::to_value(data)
        .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))
}

fn parse_base_url(raw: &str) -> Result<String> {
    let url = url::Url::parse(raw)?;
    if url.cannot_be_a_base() || url.host_str().is_none_or(str::is_empty) {
        return Err(Error::new(ErrorKind::InvalidUrl(raw.to_string())));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
