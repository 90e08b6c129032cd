use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    icon: Option<String>,
    #[props(default)]
    action: Option<Element>,
}

/// Placeholder shown in place of a list that has nothing to render.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state",
            if let Some(icon) = props.icon {
                div { class: "empty-state-icon", "{icon}" }
            }
            h5 { style: "margin-bottom: 0.5rem;", "{props.title}" }
            if let Some(desc) = props.description {
                p { style: "max-width: 400px; margin: 0 auto 1rem auto;", "{desc}" }
            }
            if let Some(action) = props.action {
                div { {action} }
            }
        }
    }
}
