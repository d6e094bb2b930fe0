use serde::de::DeserializeOwned;
use snowjson_client::{RequestMethod, Result, Transport};
use tracing::{debug, instrument};

use crate::page::{PageCursor, Record, RecordPage};
use crate::path::build_path;

/// Marks the listing response format; sent with an empty value.
const JSONV2_PARAM: &str = "JSONv2";
const QUERY_PARAM: &str = "sysparm_query";
const OFFSET_PARAM: &str = "sysparm_offset";

impl<S: Transport> super::RecordClient<S> {
    /// Get every record of a table matching an encoded query.
    ///
    /// `query` is passed through verbatim as `sysparm_query`; `None` or an
    /// empty string fetches the whole table. Pages are requested one after
    /// another with an increasing `sysparm_offset` until the accumulated
    /// count reaches the reported `sysparm_record_count`.
    ///
    /// An error on any page aborts the call; records already fetched are
    /// discarded.
    #[instrument(skip(self))]
    pub fn get_records(&self, table: &str, query: Option<&str>) -> Result<Vec<Record>> {
        let path = build_path(table, None, None);

        let mut params = vec![(JSONV2_PARAM.to_string(), String::new())];
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            params.push((QUERY_PARAM.to_string(), query.to_string()));
        }

        let mut cursor = PageCursor::new();
        loop {
            let mut page_params = params.clone();
            if let Some(offset) = cursor.offset() {
                page_params.push((OFFSET_PARAM.to_string(), offset.to_string()));
            }

            let payload = self.request(RequestMethod::Get, &path, None, &page_params)?;
            let page: RecordPage = serde_json::from_value(payload)?;
            let more = cursor.absorb(page)?;

            debug!(
                page = cursor.pages(),
                accumulated = cursor.len(),
                more,
                "Fetched page"
            );

            if !more {
                break;
            }
        }

        Ok(cursor.into_records())
    }

    /// Like [`get_records`](Self::get_records), deserializing each record into `T`.
    pub fn get_records_as<T: DeserializeOwned>(
        &self,
        table: &str,
        query: Option<&str>,
    ) -> Result<Vec<T>> {
        self.get_records(table, query)?
            .into_iter()
            .map(|record| {
                serde_json::from_value(serde_json::Value::Object(record)).map_err(Into::into)
            })
            .collect()
    }
}
