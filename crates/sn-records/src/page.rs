//! Listing payloads and the pagination cursor.

use serde::{Deserialize, Serialize};
use snowjson_client::{Error, ErrorKind, Result};

/// One row of a table: field name to value. No schema is enforced.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// One page of a JSONv2 listing.
///
/// The platform reports the total as a string (`"sysparm_record_count": "42"`);
/// plain numbers are accepted too.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordPage {
    pub records: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sysparm_record_count: Option<serde_json::Value>,
}

impl RecordPage {
    /// The server-reported total, if the page carries one.
    pub fn total(&self) -> Result<Option<usize>> {
        let invalid =
            |raw: &serde_json::Value| Error::new(ErrorKind::InvalidRecordCount(raw.to_string()));

        match &self.sysparm_record_count {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(raw)) => raw
                .trim()
                .parse::<usize>()
                .map(Some)
                .map_err(|e| {
                    Error::with_source(ErrorKind::InvalidRecordCount(raw.clone()), e)
                }),
            Some(value @ serde_json::Value::Number(n)) => n
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| invalid(value)),
            Some(other) => Err(invalid(other)),
        }
    }
}

/// Accumulated state of one paginated listing.
///
/// Lives for a single `get_records` call. Feed each page to [`absorb`]
/// and keep requesting while it returns `true`, passing [`offset`] as
/// `sysparm_offset`.
///
/// [`absorb`]: PageCursor::absorb
/// [`offset`]: PageCursor::offset
#[derive(Debug, Default)]
pub struct PageCursor {
    records: Vec<Record>,
    pages: usize,
}

impl PageCursor {
    /// Create an empty cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// The `sysparm_offset` for the next request; `None` before the first page.
    pub fn offset(&self) -> Option<usize> {
        (self.pages > 0).then_some(self.records.len())
    }

    /// Append a page and report whether another page should be requested.
    ///
    /// Stops once the accumulated count reaches the reported total, when a
    /// page comes back empty, or when the page carries no total at all.
    pub fn absorb(&mut self, page: RecordPage) -> Result<bool> {
        let total = page.total()?;
        let returned = page.records.len();

        self.records.extend(page.records);
        self.pages += 1;

        Ok(match total {
            Some(total) => returned > 0 && self.records.len() < total,
            None => false,
        })
    }

    /// Number of records accumulated so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of pages absorbed.
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Consume the cursor, yielding the records in server order.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
