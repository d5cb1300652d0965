//! Entry configuration for this page.

use lobby_entry_core::EntryConfig;
use wasm_bindgen::JsCast;

/// `<meta name="lobby-entry-config" content='{"create_endpoint": "..."}'>`
const CONFIG_META_NAME: &str = "lobby-entry-config";

fn meta_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{CONFIG_META_NAME}\"]"))
        .ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}

/// Defaults, replaced by the page's config meta tag if present, then by the
/// `LOBBY_CREATE_ENDPOINT` / `LOBBY_PATH` build-time variables.
pub fn load_entry_config() -> EntryConfig {
    let base = match meta_config() {
        Some(json) => EntryConfig::from_json(&json).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid {CONFIG_META_NAME} meta tag: {e}");
            EntryConfig::default()
        }),
        None => EntryConfig::default(),
    };

    base.with_overrides(option_env!("LOBBY_CREATE_ENDPOINT"), option_env!("LOBBY_PATH"))
}
