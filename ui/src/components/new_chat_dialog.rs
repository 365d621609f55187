//=============================================================================
// File: src/components/new_chat_dialog.rs
//=============================================================================
use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::compat;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Input;
use crate::components::pico::Modal;
use crate::hooks::use_instance::use_instance;
use crate::new_chat::is_submit_key;
use crate::new_chat::submit_new_chat;
use crate::new_chat::NewChatForm;
use crate::new_chat::NewChatView;
use crate::new_chat::ServerTextSender;
use crate::Route;

/// Signals the submission writes back into.
#[derive(Clone, Copy)]
struct DialogHandle {
    form: Signal<NewChatForm>,
    is_loading: Signal<bool>,
    is_open: Signal<bool>,
    navigator: Navigator,
}

impl NewChatView for DialogHandle {
    fn set_loading(&mut self, loading: bool) {
        self.is_loading.set(loading);
    }

    fn navigate(&mut self, route: Route) {
        dioxus_logger::tracing::info!("opening new conversation: {}", route);
        self.navigator.push(route);
    }

    async fn alert(&mut self, message: &str) {
        compat::alert(message.to_string()).await;
    }

    fn finish(&mut self) {
        self.form.set(NewChatForm::default());
        self.is_open.set(false);
    }
}

#[component]
pub fn NewChatDialog(is_open: Signal<bool>) -> Element {
    let mut form = use_signal(NewChatForm::default);
    let is_loading = use_signal(|| false);
    let instance = use_instance();
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let submit = use_callback(move |_: ()| {
        if is_loading() {
            return;
        }

        let snapshot = form.read().clone();
        let current = instance.get();
        let instance_id = route
            .instance_id()
            .map(str::to_string)
            .or_else(|| current.as_ref().map(|i| i.id.clone()))
            .unwrap_or_default();

        let mut handle = DialogHandle {
            form,
            is_loading,
            is_open,
            navigator,
        };

        // not cancelled if the dialog closes mid-flight.
        spawn(async move {
            submit_new_chat(
                &snapshot,
                current.as_ref(),
                &instance_id,
                &ServerTextSender,
                &mut handle,
            )
            .await;
        });
    });

    let on_keydown = move |evt: KeyboardEvent| {
        if is_submit_key(&evt.key(), evt.modifiers()) {
            evt.prevent_default();
            submit.call(());
        }
    };

    let cancel = move |_: MouseEvent| {
        form.set(NewChatForm::default());
        is_open.set(false);
    };

    let can_submit = form.read().has_phone_number() && !is_loading();

    rsx! {
        Modal {
            is_open,
            title: "Nova Conversa",
            description: "Digite o número de telefone (com DDD) para iniciar uma nova conversa.",

            Input {
                label: "Número de Telefone",
                name: "phone",
                placeholder: "21999999999 ou +5521999999999",
                help: "Formato: DDD + número (ex: 21999999999) ou com DDI (ex: +5521999999999)",
                value: "{form.read().phone_number}",
                disabled: is_loading(),
                autofocus: true,
                on_input: move |evt: FormEvent| form.with_mut(|f| f.phone_number = evt.value()),
                on_keydown,
            }
            Input {
                label: "Mensagem Inicial (opcional)",
                name: "message",
                placeholder: "Digite uma mensagem...",
                value: "{form.read().message}",
                disabled: is_loading(),
                on_input: move |evt: FormEvent| form.with_mut(|f| f.message = evt.value()),
                on_keydown,
            }

            footer {
                div {
                    style: "display: flex; justify-content: flex-end; gap: 1rem; margin-top: 1rem;",

                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        disabled: is_loading(),
                        on_click: cancel,
                        "Cancelar"
                    }
                    Button {
                        button_type: ButtonType::Primary,
                        disabled: !can_submit,
                        busy: is_loading(),
                        on_click: move |_| submit.call(()),
                        if is_loading() { "Criando..." } else { "Criar Conversa" }
                    }
                }
            }
        }
    }
}
