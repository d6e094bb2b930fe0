//! # snowjson-client
//!
//! Transport infrastructure for the ServiceNow JSONv2 table interface.
//!
//! This crate provides:
//! - The [`Transport`] trait: one authenticated request in, one response out
//! - [`HttpSession`], a blocking reqwest transport with basic auth
//! - Plain-data [`Request`] / [`Response`] types that custom transports share
//! - [`ClientConfig`] for timeouts, user agent, tracing and platform domain
//! - [`Credentials`] with environment loading and redacted Debug output
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     RecordClient                            │
//! │  (snowjson-records: paths, pagination, result unwrapping)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   dyn/generic Transport                     │
//! │  - HttpSession (reqwest::blocking + basic auth)             │
//! │  - or any caller-supplied implementation                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use snowjson_client::{ClientConfig, HttpSession, Request, RequestMethod, Transport};
//!
//! fn main() -> Result<(), snowjson_client::Error> {
//!     let session = HttpSession::new(ClientConfig::default())?
//!         .with_basic_auth("admin", "secret");
//!
//!     let response = session.execute(
//!         Request::new(RequestMethod::Get, "https://dev12345.service-now.com/incident.do")
//!             .query("JSONv2", ""),
//!     )?;
//!     println!("{}", response.error_for_status()?.text());
//!     Ok(())
//! }
//! ```

mod config;
mod credentials;
mod error;
mod request;
mod response;
mod session;
mod transport;

pub use config::{ClientConfig, ClientConfigBuilder};
pub use credentials::Credentials;
pub use error::{Error, ErrorKind, Result};
pub use request::{Request, RequestMethod};
pub use response::Response;
pub use session::HttpSession;
pub use transport::Transport;

/// Default platform domain appended to the instance name.
pub const DEFAULT_DOMAIN: &str = "service-now.com";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("snowjson/", env!("CARGO_PKG_VERSION"));
