use dioxus::prelude::*;

use crate::Screen;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// Screen to switch to. Uses the `Signal<Screen>` context.
    #[props(optional)]
    pub to: Option<Screen>,

    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,

    children: Element,
}

/// An anchor that navigates between screens instead of following an href.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();

    rsx! {
        a {
            href: "#",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                evt.stop_propagation();
                if let Some(target) = &props.to {
                    active_screen.set(target.clone());
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
