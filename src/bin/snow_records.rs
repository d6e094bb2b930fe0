//! Dump the records of a table as JSON.
//!
//! Reads credentials from the environment and prints every record matching
//! the optional encoded query as a JSON array on stdout.
//!
//! ```sh
//! export SN_INSTANCE=dev12345 SN_USERNAME=admin SN_PASSWORD=...
//! cargo run --bin snow-records -- incident 'active=true^priority=1'
//! ```

use snowjson::{Credentials, RecordClient};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(table) = args.next() else {
        eprintln!("Usage: snow-records <table> [encoded-query]");
        std::process::exit(1);
    };
    let query = args.next();

    let creds = Credentials::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("  Set SN_INSTANCE, SN_USERNAME and SN_PASSWORD.");
        std::process::exit(1);
    });

    let client = RecordClient::from_credentials(&creds).unwrap_or_else(|e| {
        eprintln!("Error: Failed to create client: {e}");
        std::process::exit(1);
    });

    let records = client
        .get_records(&table, query.as_deref())
        .unwrap_or_else(|e| {
            eprintln!("Error: Failed to fetch {table}: {e}");
            std::process::exit(1);
        });

    tracing::info!(table = %table, count = records.len(), "Fetched records");

    match serde_json::to_string_pretty(&records) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: Failed to encode records: {e}");
            std::process::exit(1);
        }
    }
}
