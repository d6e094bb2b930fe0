//! Record operations against a live instance.

use super::common::{live_client, unique_description, TEST_PREFIX};
use serde::Deserialize;

#[test]
#[ignore = "requires a live instance (SN_INSTANCE, SN_USERNAME, SN_PASSWORD)"]
fn test_incident_lifecycle() {
    let client = live_client();
    let description = unique_description("lifecycle");

    let created = client
        .create_record(
            "incident",
            &serde_json::json!({"short_description": description}),
        )
        .expect("Create should succeed");
    let sys_id = created["sys_id"]
        .as_str()
        .expect("Created record should carry a sys_id")
        .to_string();

    let fetched = client
        .get_record("incident", &sys_id)
        .expect("Get should succeed");
    let fetched = fetched.as_array().and_then(|a| a.first()).unwrap_or(&fetched);
    assert_eq!(fetched["short_description"], description.as_str());

    let updated_description = format!("{description} (updated)");
    client
        .update_record(
            "incident",
            &sys_id,
            &serde_json::json!({"short_description": updated_description}),
        )
        .expect("Update should succeed");

    let matches = client
        .get_records(
            "incident",
            Some(&format!("short_description={updated_description}")),
        )
        .expect("Listing should succeed");
    assert_eq!(matches.len(), 1, "Exactly one record should match");
    assert_eq!(matches[0]["sys_id"], sys_id.as_str());

    client
        .delete_record("incident", &sys_id)
        .expect("Delete should succeed");

    let after = client
        .get_records("incident", Some(&format!("sys_id={sys_id}")))
        .expect("Listing after delete should succeed");
    assert!(after.is_empty(), "Deleted record should not be listed");
}

#[test]
#[ignore = "requires a live instance (SN_INSTANCE, SN_USERNAME, SN_PASSWORD)"]
fn test_listing_without_matches() {
    let client = live_client();

    let records = client
        .get_records(
            "incident",
            Some(&format!("short_description={TEST_PREFIX} no such record")),
        )
        .expect("Listing should succeed");

    assert!(records.is_empty());
}

#[test]
#[ignore = "requires a live instance (SN_INSTANCE, SN_USERNAME, SN_PASSWORD)"]
fn test_typed_listing() {
    #[derive(Debug, Deserialize)]
    struct User {
        sys_id: String,
        user_name: String,
    }

    let client = live_client();
    let users: Vec<User> = client
        .get_records_as("sys_user", Some("active=true^user_name=admin"))
        .expect("Typed listing should succeed");

    assert!(users.iter().all(|u| !u.sys_id.is_empty()));
    assert!(users.iter().all(|u| u.user_name == "admin"));
}
