//! # snowjson
//!
//! A blocking client for the ServiceNow JSONv2 table interface.
//!
//! This library provides record CRUD and paginated listing over the legacy
//! `/{table}.do` endpoints, on top of a pluggable transport.
//!
//! ## Security
//!
//! - Passwords are redacted in Debug output
//! - Tracing spans skip request bodies and credentials
//!
//! ## Crates
//!
//! - **snowjson-client** - Transport trait, reqwest session with basic auth, config, errors
//! - **snowjson-records** - `RecordClient`: paths, CRUD, pagination
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use snowjson::{Credentials, RecordClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // SN_INSTANCE, SN_USERNAME, SN_PASSWORD
//!     let creds = Credentials::from_env()?;
//!     let client = RecordClient::from_credentials(&creds)?;
//!
//!     let incidents = client.get_records("incident", Some("active=true^priority=1"))?;
//!     for incident in incidents {
//!         println!("{}", incident["number"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
pub use snowjson_client as client;
pub use snowjson_records as records;

// Re-export commonly used types at the top level
pub use snowjson_client::{ClientConfig, Credentials, Error, ErrorKind, HttpSession, Result, Transport};
pub use snowjson_records::{build_path, Action, Record, RecordClient};
