//! Create / join choice buttons.

use yew::prelude::*;

use super::{CREATE_BUTTON_ID, JOIN_BUTTON_ID};

#[derive(Properties, PartialEq)]
pub struct ChoiceButtonsProps {
    /// Hidden once the join form is shown.
    pub visible: bool,
    /// A create request is in flight.
    #[prop_or(false)]
    pub busy: bool,
    /// Fired by the join button; creating goes through the form submit.
    pub on_join: Callback<()>,
}

#[function_component(ChoiceButtons)]
pub fn choice_buttons(props: &ChoiceButtonsProps) -> Html {
    let on_join_click = {
        let on_join = props.on_join.clone();
        Callback::from(move |_: MouseEvent| on_join.emit(()))
    };

    html! {
        <div class="button-group" hidden={!props.visible}>
            <button
                id={CREATE_BUTTON_ID}
                type="submit"
                class="btn-primary"
                disabled={props.busy}
            >
                { if props.busy { "Creating..." } else { "Create game" } }
            </button>
            <button
                id={JOIN_BUTTON_ID}
                type="button"
                class="btn-secondary"
                onclick={on_join_click}
                disabled={props.busy}
            >
                { "Join game" }
            </button>
        </div>
    }
}
