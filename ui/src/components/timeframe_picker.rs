use dioxus::prelude::*;
use strum::IntoEnumIterator;
use trending::timeframe::Timeframe;

use super::pico::Button;
use super::pico::ButtonType;

/// A row of buttons, one per timeframe. The selected one is filled.
#[component]
pub fn TimeframePicker(selected: Signal<Timeframe>) -> Element {
    rsx! {
        div {
            role: "group",
            class: "timeframe-picker",
            for timeframe in Timeframe::iter() {
                Button {
                    key: "{timeframe}",
                    button_type: ButtonType::Secondary,
                    outline: selected() != timeframe,
                    small: true,
                    on_click: move |_| selected.set(timeframe),
                    "{timeframe.label()}"
                }
            }
        }
    }
}
