//! Hook owning the page's entry controller.

use std::rc::Rc;

use lobby_entry_core::LobbyEntryController;
use yew::prelude::*;

use crate::browser::BrowserContext;
use crate::config::load_entry_config;

pub type EntryController = LobbyEntryController<BrowserContext>;

/// One controller per mounted page, shared by every callback.
#[hook]
pub fn use_entry_controller() -> Rc<EntryController> {
    use_memo((), |_| {
        let config = load_entry_config();
        tracing::debug!("Entry config: {config:?}");
        LobbyEntryController::new(BrowserContext::default(), config)
    })
}
