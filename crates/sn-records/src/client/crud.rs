use serde::Serialize;
use serde_json::Value;
use snowjson_client::{RequestMethod, Result, Transport};
use tracing::instrument;

use super::to_body;
use crate::path::{build_path, Action};

impl<S: Transport> super::RecordClient<S> {
    /// Get a single record by `sys_id`.
    ///
    /// A record that does not exist surfaces as [`ErrorKind::Http`]
    /// (typically 404); see [`Error::is_not_found`].
    ///
    /// [`ErrorKind::Http`]: snowjson_client::ErrorKind::Http
    /// [`Error::is_not_found`]: snowjson_client::Error::is_not_found
    #[instrument(skip(self))]
    pub fn get_record(&self, table: &str, sys_id: &str) -> Result<Value> {
        let path = build_path(table, Some(sys_id), None);
        self.request(RequestMethod::Get, &path, None, &[])
    }

    /// Create a new record.
    ///
    /// Returns whatever the server sends back under `result`, normally the
    /// inserted record including its new `sys_id`.
    #[instrument(skip(self, data))]
    pub fn create_record<B: Serialize + ?Sized>(&self, table: &str, data: &B) -> Result<Value> {
        let path = build_path(table, None, Some(Action::Insert));
        self.request(RequestMethod::Post, &path, Some(to_body(data)?), &[])
    }

    /// Update a record.
    #[instrument(skip(self, data))]
    pub fn update_record<B: Serialize + ?Sized>(
        &self,
        table: &str,
        sys_id: &str,
        data: &B,
    ) -> Result<Value> {
        let path = build_path(table, Some(sys_id), Some(Action::Update));
        self.request(RequestMethod::Post, &path, Some(to_body(data)?), &[])
    }

    /// Delete a record.
    ///
    /// Sends a POST without a body. The unwrapped response may be `Null`.
    #[instrument(skip(self))]
    pub fn delete_record(&self, table: &str, sys_id: &str) -> Result<Value> {
        let path = build_path(table, Some(sys_id), Some(Action::DeleteRecord));
        self.request(RequestMethod::Post, &path, None, &[])
    }
}
