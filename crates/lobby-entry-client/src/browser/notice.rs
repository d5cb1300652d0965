//! Blocking notices and focus handling.

use lobby_entry_core::{EntryError, Notifier};
use wasm_bindgen::JsCast;

use crate::components::NAME_INPUT_ID;

/// Shows errors with `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, error: &EntryError) {
        let Some(window) = web_sys::window() else {
            tracing::error!("No window to show notice: {error}");
            return;
        };
        if let Err(e) = window.alert_with_message(error.user_message()) {
            tracing::error!("Alert failed: {e:?}");
        }
    }

    fn focus_name_field(&self) {
        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(NAME_INPUT_ID))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

        let Some(input) = input else {
            tracing::error!("No #{NAME_INPUT_ID} element to focus");
            return;
        };
        if let Err(e) = input.focus() {
            tracing::error!("Focusing #{NAME_INPUT_ID} failed: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_focus_without_name_field_is_harmless() {
        AlertNotifier.focus_name_field();
    }

    #[wasm_bindgen_test]
    fn test_focus_moves_to_name_field() {
        let document = web_sys::window().unwrap().document().unwrap();
        let input = document.create_element("input").unwrap();
        input.set_id(NAME_INPUT_ID);
        document.body().unwrap().append_child(&input).unwrap();

        AlertNotifier.focus_name_field();

        let active = document.active_element().unwrap();
        assert_eq!(active.id(), NAME_INPUT_ID);
        input.remove();
    }
}
