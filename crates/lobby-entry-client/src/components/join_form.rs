//! Join-by-code form, revealed after the user picks "Join game".

use yew::prelude::*;

use super::{JOIN_FORM_ID, ROOM_CODE_INPUT_ID};

#[derive(Properties, PartialEq)]
pub struct JoinFormProps {
    pub visible: bool,
    pub room_code: AttrValue,
    pub on_code_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(JoinForm)]
pub fn join_form(props: &JoinFormProps) -> Html {
    let on_input = {
        let on_code_change = props.on_code_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_code_change.emit(input.value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form id={JOIN_FORM_ID} class="join-form" hidden={!props.visible} onsubmit={on_submit}>
            <div class="form-group">
                <label for={ROOM_CODE_INPUT_ID}>{ "Room code" }</label>
                <input
                    id={ROOM_CODE_INPUT_ID}
                    type="text"
                    class="room-code-input"
                    placeholder="e.g. AB12CD"
                    autocomplete="off"
                    value={props.room_code.clone()}
                    oninput={on_input}
                />
            </div>
            <button type="submit" class="btn-primary">{ "Join" }</button>
        </form>
    }
}
