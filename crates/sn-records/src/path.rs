//! Path construction for the `/{table}.do` endpoint convention.
//!
//! Every operation targets the same per-table path. Reads name a record with
//! `sys_id`; writes add `sysparm_action`. Values are inserted verbatim.

use serde::{Deserialize, Serialize};

/// Write action selected with the `sysparm_action` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "insert")]
    Insert,
    #[serde(rename = "update")]
    Update,
    #[serde(rename = "deleteRecord")]
    DeleteRecord,
}

impl Action {
    /// The value sent as `sysparm_action`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Insert => "insert",
            Action::Update => "update",
            Action::DeleteRecord => "deleteRecord",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the path for a table, an optional record and an optional action.
///
/// ```rust
/// use snowjson_records::{build_path, Action};
///
/// assert_eq!(build_path("incident", None, None), "/incident.do");
/// assert_eq!(build_path("incident", Some("123"), None), "/incident.do?sys_id=123");
/// assert_eq!(
///     build_path("incident", Some("123"), Some(Action::Update)),
///     "/incident.do?sys_id=123&sysparm_action=update"
/// );
/// assert_eq!(
///     build_path("incident", None, Some(Action::Insert)),
///     "/incident.do?sysparm_action=insert"
/// );
/// ```
///
/// An empty `sys_id` is treated as absent.
pub fn build_path(table: &str, sys_id: Option<&str>, action: Option<Action>) -> String {
    let mut path = format!("/{}.do", table);
    let mut separator = '?';

    if let Some(sys_id) = sys_id.filter(|id| !id.is_empty()) {
        path.push(separator);
        path.push_str("sys_id=");
        path.push_str(sys_id);
        separator = '&';
    }

    if let Some(action) = action {
        path.push(separator);
        path.push_str("sysparm_action=");
        path.push_str(action.as_str());
    }

    path
}
