//! BDD step definitions for the dashboard feature

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use cucumber::{given, then, when};
use tower::ServiceExt;

use device_model::{DeviceReports, DeviceStore};
use device_status::dashboard::build_router;
use device_status::source::{DeviceSource, SimulatedDeviceSource};
use device_status::state::new_store_handle;

use crate::world::DeviceStatusWorld;

/// A device API that always rejects
#[derive(Debug)]
struct FailingSource;

#[async_trait]
impl DeviceSource for FailingSource {
    async fn get_devices(&self) -> device_status::Result<DeviceReports> {
        Err(device_status::DeviceStatusError::Source(
            "device API unavailable".to_string(),
        ))
    }
}

async fn request(world: &mut DeviceStatusWorld, method: &str, uri: &str) {
    let app = build_router(world.dashboard_state());
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    world.last_status = Some(response.status());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.last_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

/// Device ids linked from a list page, in page order
fn linked_ids(html: &str) -> Vec<u32> {
    html.split(r#"href="/device/"#)
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter_map(|id| id.parse().ok())
        .collect()
}

fn parse_id_list(list: &str) -> Vec<u32> {
    list.split(',')
        .map(|s| s.trim().parse().expect("invalid id in step"))
        .collect()
}

#[given("the sample device store")]
fn sample_store(world: &mut DeviceStatusWorld) {
    let store = new_store_handle(DeviceStore::sample());
    world.source = Some(Arc::new(SimulatedDeviceSource::new(Arc::clone(&store))));
    world.store = Some(store);
}

#[given("a device API that fails")]
fn failing_api(world: &mut DeviceStatusWorld) {
    world.source = Some(Arc::new(FailingSource));
}

#[when("I open the device list")]
async fn open_list(world: &mut DeviceStatusWorld) {
    request(world, "GET", "/").await;
    let ids = linked_ids(world.last_body.as_deref().unwrap_or_default());
    world.listed_ids.push(ids);
}

#[when(expr = "I open the detail page for device {word}")]
async fn open_detail(world: &mut DeviceStatusWorld, id: String) {
    request(world, "GET", &format!("/device/{}", id)).await;
}

#[when("I follow the back link")]
async fn follow_back(world: &mut DeviceStatusWorld) {
    let body = world.last_body.as_deref().unwrap_or_default();
    assert!(
        body.contains(r#"<a href="/" class="back-button">"#),
        "page has no back link"
    );
    open_list(world).await;
}

#[when("I press refresh")]
async fn press_refresh(world: &mut DeviceStatusWorld) {
    request(world, "POST", "/refresh").await;
    assert_eq!(world.last_status.map(|s| s.as_u16()), Some(303));
    open_list(world).await;
}

#[then(regex = r"^the device list shows devices (.+)$")]
fn list_shows(world: &mut DeviceStatusWorld, ids: String) {
    let expected = parse_id_list(&ids);
    let shown = world.listed_ids.last().expect("no list page opened");
    assert_eq!(shown, &expected);
}

#[then("every list visit showed the same devices")]
fn list_visits_match(world: &mut DeviceStatusWorld) {
    assert!(world.listed_ids.len() >= 2, "need at least two list visits");
    let first = &world.listed_ids[0];
    assert!(world.listed_ids.iter().all(|ids| ids == first));
}

#[then(expr = "the response status is {int}")]
fn response_status(world: &mut DeviceStatusWorld, status: u16) {
    assert_eq!(world.last_status.map(|s| s.as_u16()), Some(status));
}

#[then(expr = "the page says {string}")]
fn page_says(world: &mut DeviceStatusWorld, text: String) {
    let body = world.last_body.as_deref().unwrap_or_default();
    assert!(body.contains(&text), "page does not contain {text:?}");
}

#[then("the status panel is empty")]
fn status_panel_empty(world: &mut DeviceStatusWorld) {
    let body = world.last_body.as_deref().unwrap_or_default();
    assert!(body.contains("No device reports."));
    assert!(!body.contains("(last seen:"));
}

#[then(expr = "the status panel lists {int} devices")]
fn status_panel_lists(world: &mut DeviceStatusWorld, count: usize) {
    let body = world.last_body.as_deref().unwrap_or_default();
    assert_eq!(body.matches("(last seen:").count(), count);
}
