//! Entry page: choose a name, then create a game or join one by code.

use yew::prelude::*;

use crate::components::{ChoiceButtons, JoinForm, NameField, NAME_FORM_ID};
use crate::hooks::use_entry_controller;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let controller = use_entry_controller();

    // Pre-fill with the name from an earlier create in this tab
    let name = {
        let controller = controller.clone();
        use_state(move || {
            controller
                .remembered_name()
                .map(String::from)
                .unwrap_or_default()
        })
    };
    let room_code = use_state(String::new);
    let view = use_state(|| controller.view());
    let creating = use_state(|| false);

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |value: String| name.set(value))
    };

    let on_code_change = {
        let room_code = room_code.clone();
        Callback::from(move |value: String| room_code.set(value))
    };

    // Submitting the name form creates a game, unless the join form is up
    let on_create = {
        let controller = controller.clone();
        let name = name.clone();
        let creating = creating.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if controller.view().shows_join_form() {
                return;
            }

            let controller = controller.clone();
            let name = (*name).clone();
            let creating = creating.clone();
            creating.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let _ = controller.create_game(&name).await;
                creating.set(controller.is_creating());
            });
        })
    };

    let on_reveal_join = {
        let controller = controller.clone();
        let name = name.clone();
        let view = view.clone();
        Callback::from(move |()| {
            if let Ok(next) = controller.reveal_join_input(&name) {
                view.set(next);
            }
        })
    };

    let on_join = {
        let controller = controller.clone();
        let name = name.clone();
        let room_code = room_code.clone();
        Callback::from(move |()| {
            let _ = controller.join_game(&room_code, &name);
        })
    };

    html! {
        <main class="page home-page">
            <h1>{ "Party Game" }</h1>
            <p class="home-subtitle">{ "Pick a name, then start a new game or join your friends." }</p>

            <form id={NAME_FORM_ID} class="name-form" onsubmit={on_create}>
                <NameField value={(*name).clone()} on_change={on_name_change} />
                <ChoiceButtons
                    visible={view.shows_choice()}
                    busy={*creating}
                    on_join={on_reveal_join}
                />
            </form>

            <JoinForm
                visible={view.shows_join_form()}
                room_code={(*room_code).clone()}
                on_code_change={on_code_change}
                on_submit={on_join}
            />
        </main>
    }
}
