// src/screens/instance.rs
use crate::components::pico::{Button, ButtonType, Card};
use crate::hooks::use_instance::InstanceContext;
use crate::Route;
use api::instance::Instance;
use dioxus::prelude::*;

/// Layout for everything under `/manager/instance/:instance_id`.
#[component]
pub fn InstanceLayout(instance_id: String) -> Element {
    // keyed so switching instances refetches instead of reusing the resource.
    rsx! {
        InstanceLoader {
            key: "{instance_id}",
            instance_id: instance_id.clone(),
        }
    }
}

#[component]
fn InstanceLoader(instance_id: String) -> Element {
    let mut instance_resource = use_resource(move || {
        let instance_id = instance_id.clone();
        async move { api::fetch_instance(instance_id).await }
    });

    rsx! {
        match &*instance_resource.read() {
            None => rsx! {
                Card {
                    p { "Carregando instância..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Erro" }
                    p { "Não foi possível carregar a instância: {e}" }
                    Button {
                        button_type: ButtonType::Secondary,
                        on_click: move |_| instance_resource.restart(),
                        "Tentar novamente"
                    }
                }
            },
            Some(Ok(None)) => rsx! {
                Card {
                    h3 { "Instância não encontrada" }
                    Link { to: Route::Home {}, "Voltar" }
                }
            },
            Some(Ok(Some(instance))) => rsx! {
                LoadedInstance { instance: instance.clone() }
            },
        }
    }
}

/// Provides the instance to the routes below and renders them.
#[component]
fn LoadedInstance(instance: Instance) -> Element {
    let instance_signal = use_signal(|| Some(instance));
    use_context_provider(|| InstanceContext::new(instance_signal));

    rsx! {
        Outlet::<Route> {}
    }
}
