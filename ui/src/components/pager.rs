use dioxus::prelude::*;

use super::pico::Button;
use super::pico::ButtonType;

/// Previous / next controls with a "Page x of y" label.
#[component]
pub fn Pager(
    current_page: usize,
    total_pages: usize,
    total_matches: usize,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        nav {
            class: "pager",
            small { "{total_matches} results" }
            div {
                style: "display: flex; align-items: center; gap: 0.75rem;",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    small: true,
                    disabled: current_page <= 1,
                    on_click: move |_| on_previous.call(()),
                    "‹ Prev"
                }
                small { "Page {current_page} of {total_pages}" }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    small: true,
                    disabled: current_page >= total_pages,
                    on_click: move |_| on_next.call(()),
                    "Next ›"
                }
            }
        }
    }
}
