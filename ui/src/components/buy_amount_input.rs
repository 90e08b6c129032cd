use std::str::FromStr;

use dioxus::prelude::*;
use trending::trade::BuyAmount;

/// Text box for the quick-buy amount. Only amounts that parse reach `amount`;
/// anything else is flagged inline and the last good amount stays in effect.
#[component]
pub fn BuyAmountInput(amount: Signal<BuyAmount>) -> Element {
    let mut text = use_signal(|| amount.peek().sol().to_string());
    let mut error = use_signal(|| None::<String>);

    rsx! {
        label {
            class: "buy-amount",
            small { "Quick buy (SOL)" }
            input {
                r#type: "text",
                inputmode: "decimal",
                value: "{text}",
                "aria-invalid": if error.read().is_some() { "true" } else { "false" },
                oninput: move |evt| {
                    let value = evt.value();
                    match BuyAmount::from_str(&value) {
                        Ok(parsed) => {
                            amount.set(parsed);
                            error.set(None);
                        }
                        Err(e) => error.set(Some(e.to_string())),
                    }
                    text.set(value);
                },
            }
            if let Some(message) = error() {
                small { class: "error", "{message}" }
            }
        }
    }
}
