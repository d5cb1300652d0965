//! Full-page navigation to the lobby.

use lobby_entry_core::link::USERNAME_QUERY_KEY;
use lobby_entry_core::{NavigationTarget, Navigator};

/// Build the lobby URL with a percent-encoded `username` query.
pub fn lobby_href(target: &NavigationTarget) -> String {
    let Ok(params) = web_sys::UrlSearchParams::new() else {
        return target.to_string();
    };
    params.append(USERNAME_QUERY_KEY, target.username().as_str());
    format!("{}?{}", target.path(), String::from(params.to_string()))
}

/// Navigates through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, target: &NavigationTarget) {
        let href = lobby_href(target);
        let Some(window) = web_sys::window() else {
            tracing::error!("No window to navigate to {href}");
            return;
        };
        if let Err(e) = window.location().set_href(&href) {
            tracing::error!("Navigation to {href} failed: {e:?}");
        }
    }
}
