use dioxus::prelude::*;
use scoutmap_shared::models::GroupRecord;

/// The full group directory, bundled as a static asset and fetched
/// once at startup.
const GROUPS_DATA: Asset = asset!("/assets/grupos.json");

fn data_url() -> String {
    // Relative asset path resolved against the page origin.
    let window = web_sys::window().unwrap();
    let origin = window.location().origin().unwrap();
    format!("{}{}", origin, GROUPS_DATA)
}

/// Fetch the static group directory. There is exactly one load per
/// session; a failure here is surfaced to the user and not retried.
pub async fn fetch_groups() -> Result<Vec<GroupRecord>, String> {
    let resp = reqwest::Client::new()
        .get(data_url())
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.status().is_success() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Vec<GroupRecord>>()
        .await
        .map_err(|e| e.to_string())
}
