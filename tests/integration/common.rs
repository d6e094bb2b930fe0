use snowjson::{Credentials, RecordClient};

/// Prefix on every record the live tests create, so leftovers are easy to find.
pub const TEST_PREFIX: &str = "SnowjsonIntTest";

/// Get credentials for the live tests.
///
/// Panics with a helpful message if the environment is not configured.
pub fn get_credentials() -> Credentials {
    Credentials::from_env().unwrap_or_else(|e| {
        panic!(
            "\n\n\
            INTEGRATION TEST CONFIGURATION ERROR: {e}\n\n\
            Live tests require a ServiceNow instance:\n\
            \x20 export SN_INSTANCE=dev12345\n\
            \x20 export SN_USERNAME=admin\n\
            \x20 export SN_PASSWORD=...\n\n"
        )
    })
}

/// Client for the configured live instance.
pub fn live_client() -> RecordClient {
    RecordClient::from_credentials(&get_credentials()).expect("Failed to create client")
}

/// A short description unique to this run.
pub fn unique_description(label: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{TEST_PREFIX} {label} {nanos}")
}
