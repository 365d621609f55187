use crate::components::pico::{Button, Card, Input};
use crate::Route;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let mut instance_id = use_signal(String::new);
    let navigator = use_navigator();

    let open_instance = move || {
        let id = instance_id.read().trim().to_string();
        if !id.is_empty() {
            navigator.push(Route::ChatList { instance_id: id });
        }
    };

    rsx! {
        Card {
            h3 { "Evolution Manager" }
            p { "Informe o id da instância para abrir suas conversas." }
            Input {
                label: "Instância",
                name: "instance_id",
                placeholder: "id da instância",
                value: "{instance_id}",
                on_input: move |evt: FormEvent| instance_id.set(evt.value()),
                on_keydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        evt.prevent_default();
                        open_instance();
                    }
                },
            }
            Button {
                disabled: instance_id.read().trim().is_empty(),
                on_click: move |_| open_instance(),
                "Abrir"
            }
        }
    }
}
