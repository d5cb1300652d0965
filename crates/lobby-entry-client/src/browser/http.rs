//! Room API over `fetch`.

use gloo::net::http::Request;
use lobby_entry_core::{CreatedRoom, EntryError, RoomApi};
use tracing::debug;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Anything outside 2xx is a server-reported failure.
fn check_status(status: u16) -> Result<(), EntryError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(EntryError::Server { status })
    }
}

/// POST to the create endpoint and decode the returned lobby link.
pub async fn post_create_game(url: &str) -> Result<CreatedRoom, EntryError> {
    debug!("Create request: POST {url}");

    let response = Request::post(url)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Accept", JSON_CONTENT_TYPE)
        .send()
        .await
        .map_err(|e| EntryError::Transport(e.to_string()))?;

    let status = response.status();
    debug!("Create response status: {status}");

    check_status(status)?;

    let body = response
        .text()
        .await
        .map_err(|e| EntryError::Transport(e.to_string()))?;

    CreatedRoom::from_json(&body)
}

/// Room API of the server that served this page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRoomApi;

impl RoomApi for HttpRoomApi {
    async fn create_room(&self, endpoint: &str) -> Result<CreatedRoom, EntryError> {
        post_create_game(endpoint).await
    }
}
