use crate::components::new_chat_dialog::NewChatDialog;
use crate::components::pico::{Button, Card};
use crate::hooks::use_instance::use_instance;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn ChatList(instance_id: String) -> Element {
    rsx! {
        ChatScreen { instance_id, remote_jid: None }
    }
}

#[component]
pub fn Chat(instance_id: String, remote_jid: String) -> Element {
    rsx! {
        ChatScreen { instance_id, remote_jid: Some(remote_jid) }
    }
}

#[component]
fn ChatScreen(instance_id: String, remote_jid: Option<String>) -> Element {
    let instance = use_instance().signal();
    let mut is_new_chat_open = use_signal(|| false);

    let instance_name = instance
        .read()
        .as_ref()
        .map(|i| i.name.clone())
        .unwrap_or_default();

    rsx! {
        NewChatDialog { is_open: is_new_chat_open }

        Card {
            header {
                style: "display: flex; justify-content: space-between; align-items: center;",
                div {
                    h3 { style: "margin-bottom: 0;", "Conversas" }
                    small { "{instance_name}" }
                }
                Button {
                    on_click: move |_| is_new_chat_open.set(true),
                    "Nova Conversa"
                }
            }

            match remote_jid {
                Some(jid) => rsx! {
                    p {
                        "Conversa com "
                        code { "{jid}" }
                    }
                    Link {
                        to: Route::ChatList { instance_id: instance_id.clone() },
                        "Voltar para a lista"
                    }
                },
                None => rsx! {
                    p { "Selecione uma conversa ou inicie uma nova." }
                },
            }
        }
    }
}
