//! Offline tests through the public API with a caller-owned transport.

use std::sync::{Arc, Mutex};

use snowjson::client::{Request, RequestMethod, Response};
use snowjson::{build_path, Action, ErrorKind, RecordClient, Result, Transport};

/// In-memory table that answers listing pages of a fixed size.
struct PagedTable {
    numbers: Vec<String>,
    page_size: usize,
    seen: Mutex<Vec<Request>>,
}

impl PagedTable {
    fn new(total: usize, page_size: usize) -> Self {
        Self {
            numbers: (1..=total).map(|n| format!("INC{n:07}")).collect(),
            page_size,
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl Transport for PagedTable {
    fn execute(&self, request: Request) -> Result<Response> {
        let offset = request
            .query_params
            .iter()
            .find(|(k, _)| k == "sysparm_offset")
            .and_then(|(_, v)| v.parse::<usize>().ok())
            .unwrap_or(0);
        self.seen.lock().unwrap().push(request);

        let end = (offset + self.page_size).min(self.numbers.len());
        let records: Vec<_> = self.numbers[offset.min(end)..end]
            .iter()
            .map(|n| serde_json::json!({"number": n}))
            .collect();

        let body = serde_json::json!({
            "records": records,
            "sysparm_record_count": self.numbers.len().to_string(),
        });
        Ok(Response::new(200, body.to_string()))
    }
}

#[test]
fn test_listing_with_shared_transport() {
    let table = Arc::new(PagedTable::new(23, 5));
    let client = RecordClient::with_session("myinstance", Arc::clone(&table)).unwrap();

    let records = client.get_records("incident", Some("active=true")).unwrap();

    let numbers: Vec<_> = records
        .iter()
        .map(|r| r["number"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(numbers, table.numbers);

    let seen = table.seen.lock().unwrap();
    assert_eq!(seen.len(), 5);
    assert!(seen
        .iter()
        .all(|r| r.method == RequestMethod::Get
            && r.url == "https://myinstance.service-now.com/incident.do"));
}

#[test]
fn test_empty_table_single_request() {
    let table = PagedTable::new(0, 5);
    let client = RecordClient::with_session("myinstance", &table).unwrap();

    assert!(client.get_records("incident", None).unwrap().is_empty());
    assert_eq!(table.seen.lock().unwrap().len(), 1);
}

#[test]
fn test_boxed_transport_and_http_error() {
    struct Forbidden;

    impl Transport for Forbidden {
        fn execute(&self, _request: Request) -> Result<Response> {
            Ok(Response::new(403, "Insufficient rights"))
        }
    }

    let boxed: Box<dyn Transport> = Box::new(Forbidden);
    let client = RecordClient::with_session("myinstance", boxed).unwrap();

    let err = client.delete_record("incident", "123").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Http { status: 403, .. }));
}

#[test]
fn test_paths_from_facade() {
    assert_eq!(
        build_path("incident", Some("123"), Some(Action::DeleteRecord)),
        "/incident.do?sys_id=123&sysparm_action=deleteRecord"
    );
}
