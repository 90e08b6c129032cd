//! Inputs that edit the search text and named constraints of a list view.
//!
//! Each input keeps the raw text the user typed and rebuilds its constraint
//! on every edit. Text that does not parse simply yields an inert
//! constraint. When the view's filters are cleared elsewhere, the inputs
//! clear themselves.

use std::collections::BTreeSet;

use dioxus::prelude::*;
use trending::Constraint;
use trending::ListEntity;
use trending::ListView;

use crate::hooks::use_feed::update_view;

fn set_constraint<E: ListEntity>(view: Signal<ListView<E>>, name: &'static str, constraint: Constraint<E::Field>) {
    update_view(view, |v| {
        let filters = v.filters().clone().with(name, constraint);
        v.with_filters(filters)
    });
}

/// Clears `texts` once the named filter is gone from the view.
fn use_reset_on_clear<E: ListEntity>(view: Signal<ListView<E>>, name: &'static str, texts: Vec<Signal<String>>) {
    use_effect(move || {
        if view.read().filters().get(name).is_none() {
            for mut text in texts.iter().copied() {
                if !text.peek().is_empty() {
                    text.set(String::new());
                }
            }
        }
    });
}

#[component]
pub fn SearchBox<E: ListEntity>(view: Signal<ListView<E>>, placeholder: &'static str) -> Element {
    let value = view.read().search().to_string();
    rsx! {
        input {
            r#type: "search",
            placeholder,
            value: "{value}",
            oninput: move |evt| update_view(view, |v| v.with_search(evt.value())),
        }
    }
}

/// Min / max inputs for a numeric column.
#[component]
pub fn RangeFilter<E: ListEntity>(
    view: Signal<ListView<E>>,
    name: &'static str,
    label: &'static str,
    field: E::Field,
) -> Element {
    let mut min = use_signal(String::new);
    let mut max = use_signal(String::new);
    use_reset_on_clear(view, name, vec![min, max]);

    let apply = move || {
        set_constraint(view, name, Constraint::range_from_text(field, &min.peek(), &max.peek()));
    };

    rsx! {
        fieldset {
            legend { small { "{label}" } }
            div {
                role: "group",
                input {
                    r#type: "text",
                    inputmode: "decimal",
                    placeholder: "Min",
                    value: "{min}",
                    oninput: move |evt| {
                        min.set(evt.value());
                        apply();
                    },
                }
                input {
                    r#type: "text",
                    inputmode: "decimal",
                    placeholder: "Max",
                    value: "{max}",
                    oninput: move |evt| {
                        max.set(evt.value());
                        apply();
                    },
                }
            }
        }
    }
}

/// Checkboxes for a categorical column. No box ticked means no constraint.
#[component]
pub fn OneOfFilter<E: ListEntity>(
    view: Signal<ListView<E>>,
    name: &'static str,
    label: &'static str,
    field: E::Field,
    options: Vec<&'static str>,
) -> Element {
    let mut selected = use_signal(BTreeSet::<&'static str>::new);
    use_effect(move || {
        if view.read().filters().get(name).is_none() && !selected.peek().is_empty() {
            selected.set(BTreeSet::new());
        }
    });

    rsx! {
        fieldset {
            legend { small { "{label}" } }
            for choice in options {
                label {
                    key: "{choice}",
                    input {
                        r#type: "checkbox",
                        checked: selected.read().contains(&choice),
                        onchange: move |evt| {
                            selected.with_mut(|s| {
                                if evt.checked() {
                                    s.insert(choice);
                                } else {
                                    s.remove(&choice);
                                }
                            });
                            let allowed: Vec<&str> = selected.peek().iter().copied().collect();
                            set_constraint(view, name, Constraint::one_of(field, allowed));
                        },
                    }
                    "{choice}"
                }
            }
        }
    }
}

/// Any / yes / no selector for a boolean column.
#[component]
pub fn FlagFilter<E: ListEntity>(
    view: Signal<ListView<E>>,
    name: &'static str,
    label: &'static str,
    field: E::Field,
) -> Element {
    let current = match view.read().filters().get(name) {
        Some(Constraint::Flag { required: Some(true), .. }) => "yes",
        Some(Constraint::Flag { required: Some(false), .. }) => "no",
        _ => "any",
    };

    rsx! {
        label {
            small { "{label}" }
            select {
                value: current,
                onchange: move |evt| {
                    let required = match evt.value().as_str() {
                        "yes" => Some(true),
                        "no" => Some(false),
                        _ => None,
                    };
                    set_constraint(view, name, Constraint::Flag { field, required });
                },
                option { value: "any", "Any" }
                option { value: "yes", "Yes" }
                option { value: "no", "No" }
            }
        }
    }
}

/// Comma separated keywords that a row must (or must not) mention.
#[component]
pub fn KeywordFilter<E: ListEntity>(
    view: Signal<ListView<E>>,
    name: &'static str,
    label: &'static str,
    #[props(default = false)] exclude: bool,
) -> Element {
    let mut text = use_signal(String::new);
    use_reset_on_clear(view, name, vec![text]);

    rsx! {
        label {
            small { "{label}" }
            input {
                r#type: "text",
                placeholder: "e.g. pepe, dog",
                value: "{text}",
                oninput: move |evt| {
                    let value = evt.value();
                    let constraint = if exclude {
                        Constraint::exclude_from_text(&value)
                    } else {
                        Constraint::include_from_text(&value)
                    };
                    text.set(value);
                    set_constraint(view, name, constraint);
                },
            }
        }
    }
}
