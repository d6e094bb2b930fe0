//! # snowjson-records
//!
//! Client for the ServiceNow JSONv2 table interface (`/{table}.do?JSONv2`).
//!
//! ## Features
//!
//! - **Record CRUD** - Get, create, update and delete records by `sys_id`
//! - **Listing** - Fetch every record matching an encoded query, following
//!   `sysparm_offset` pagination
//! - **Injectable transport** - Bring any [`Transport`]; the default is a
//!   basic-auth [`HttpSession`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use snowjson_records::RecordClient;
//!
//! fn main() -> Result<(), snowjson_records::Error> {
//!     let client = RecordClient::new("dev12345", "admin", "secret")?;
//!
//!     // Listing
//!     let incidents = client.get_records("incident", Some("active=true"))?;
//!
//!     // Create
//!     let created = client.create_record(
//!         "incident",
//!         &serde_json::json!({"short_description": "Test Incident"}),
//!     )?;
//!     let sys_id = created["sys_id"].as_str().unwrap_or_default();
//!
//!     // Update
//!     client.update_record("incident", sys_id, &serde_json::json!({"state": "2"}))?;
//!
//!     // Delete
//!     client.delete_record("incident", sys_id)?;
//!
//!     println!("{} active incidents", incidents.len());
//!     Ok(())
//! }
//! ```

mod client;
mod page;
mod path;

// Main client
pub use client::RecordClient;

// Listing types
pub use page::{PageCursor, Record, RecordPage};

// Path construction
pub use path::{build_path, Action};

// Re-export snowjson-client types that users might need
pub use snowjson_client::{
    ClientConfig, ClientConfigBuilder, Credentials, Error, ErrorKind, HttpSession, Request,
    RequestMethod, Response, Result, Transport,
};
