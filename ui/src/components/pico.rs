//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Renders Pico's spinner next to the label.
    #[props(default = false)]
    busy: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (props.outline, &props.button_type) {
        (true, _) => "outline secondary",
        (false, ButtonType::Primary) => "",
        (false, ButtonType::Secondary) => "secondary",
    };
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            "aria-busy": if props.busy { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    /// Helper text rendered under the field.
    #[props(optional)]
    help: Option<String>,
    #[props(default)]
    value: String,
    #[props(default = false)]
    disabled: bool,
    #[props(default = false)]
    autofocus: bool,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
    #[props(optional)]
    on_keydown: Option<EventHandler<KeyboardEvent>>,
}

/// A labeled form input field.
pub fn Input(props: InputProps) -> Element {
    let help_id = format!("{}-help", props.name);
    rsx! {
        label {
            r#for: "{props.name}",
            "{props.label}"
        }
        input {
            r#type: "{props.input_type}",
            id: "{props.name}",
            name: "{props.name}",
            placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
            value: "{props.value}",
            disabled: props.disabled,
            autofocus: props.autofocus,
            "aria-describedby": if props.help.is_some() { help_id.clone() } else { String::new() },
            oninput: move |evt| {
                if let Some(handler) = &props.on_input {
                    handler.call(evt);
                }
            },
            onkeydown: move |evt| {
                if let Some(handler) = &props.on_keydown {
                    handler.call(evt);
                }
            },
        }
        if let Some(help) = &props.help {
            small { id: "{help_id}", "{help}" }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    #[props(optional)]
    description: Option<String>,
    children: Element,
}

/// A dialog with a title bar and close link. Render a `footer` as the last
/// child for action buttons.
pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                article {
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            rel: "prev",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                props.is_open.set(false);
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                        if let Some(description) = &props.description {
                            p { style: "margin: 0.5rem 0 0 0;", "{description}" }
                        }
                    }
                    {props.children}
                }
            }
        }
    }
}
