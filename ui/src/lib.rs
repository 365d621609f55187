// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod hooks;
pub mod new_chat;
mod screens;

use components::pico::Container;
use screens::chat::Chat;
use screens::chat::ChatList;
use screens::home::Home;
use screens::instance::InstanceLayout;

/// The console's routes. Conversation routes live under an instance.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[nest("/manager/instance/:instance_id")]
        #[layout(InstanceLayout)]
            #[route("/chat")]
            ChatList { instance_id: String },
            #[route("/chat/:remote_jid")]
            Chat { instance_id: String, remote_jid: String },
}

impl Route {
    /// The instance id segment, for routes that have one.
    pub fn instance_id(&self) -> Option<&str> {
        match self {
            Route::Home {} => None,
            Route::ChatList { instance_id } | Route::Chat { instance_id, .. } => {
                Some(instance_id.as_str())
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        margin: 0;
        padding: 0;
    }

    .app-main-container {
        padding: 10px;
    }

    dialog article {
        width: 100%;
        max-width: 425px;
    }

    dialog article small {
        display: block;
        margin-top: -0.5rem;
        margin-bottom: 1rem;
        color: var(--pico-muted-color);
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        div {
            class: "app-main-container",
            Container {
                Router::<Route> {}
            }
        }
    }
}
