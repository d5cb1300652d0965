//! Display-name input.

use yew::prelude::*;

use super::NAME_INPUT_ID;

#[derive(Properties, PartialEq)]
pub struct NameFieldProps {
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(NameField)]
pub fn name_field(props: &NameFieldProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={NAME_INPUT_ID}>{ "Your name" }</label>
            <input
                id={NAME_INPUT_ID}
                type="text"
                class="name-input"
                placeholder="Enter your name"
                autocomplete="nickname"
                value={props.value.clone()}
                oninput={on_input}
            />
        </div>
    }
}
