//! Thin wrappers over Pico.css markup.

#![allow(non_snake_case)]

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout
//=============================================================================

#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container-fluid", {children} } }
}

#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct CardProps {
    #[props(optional)]
    title: Option<String>,
    /// Rendered on the right of the title row, e.g. a "View all" link.
    #[props(optional)]
    header_action: Option<Element>,
    children: Element,
}

/// An `<article>` with an optional header row.
pub fn Card(props: CardProps) -> Element {
    rsx! {
        article {
            if props.title.is_some() || props.header_action.is_some() {
                header {
                    class: "card-header",
                    if let Some(title) = &props.title {
                        strong { "{title}" }
                    }
                    if let Some(action) = props.header_action {
                        {action}
                    }
                }
            }
            {props.children}
        }
    }
}

//=============================================================================
// Interactive
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn class(&self, outline: bool) -> &'static str {
        match (self, outline) {
            (ButtonType::Primary, false) => "",
            (ButtonType::Primary, true) => "outline",
            (ButtonType::Secondary, false) => "secondary",
            (ButtonType::Secondary, true) => "secondary outline",
            (ButtonType::Contrast, false) => "contrast",
            (ButtonType::Contrast, true) => "contrast outline",
        }
    }
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
    small: bool,
    #[props(default = false)]
    disabled: bool,
}

pub fn Button(props: ButtonProps) -> Element {
    let class = props.button_type.class(props.outline);
    let style = if props.small {
        "padding: 0.2rem 0.6rem; font-size: 0.85rem; margin: 0;"
    } else {
        ""
    };
    rsx! {
        button {
            class: "{class}",
            style: "{style}",
            disabled: props.disabled,
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
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    children: Element,
}

/// A titled dialog. Closes on the close link, a backdrop click or Escape.
pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                onclick: move |_| props.is_open.set(false),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        props.is_open.set(false);
                    }
                },
                article {
                    style: "max-width: 960px; width: 100%;",
                    onclick: |evt| evt.stop_propagation(),
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |evt| {
                                evt.prevent_default();
                                props.is_open.set(false);
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}
