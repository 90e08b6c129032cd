use dioxus::prelude::*;
use trending::SortState;

/// A `<th>` that reports clicks on its column and shows the sort arrow when
/// the column is active.
#[component]
pub fn SortableHeader<F: Copy + PartialEq + 'static>(
    title: &'static str,
    field: F,
    sort: SortState<F>,
    on_sort: EventHandler<F>,
    #[props(default = false)] numeric: bool,
) -> Element {
    let arrow = if sort.is_active(field) {
        sort.direction.arrow()
    } else {
        "\u{00A0}"
    };
    let align = if numeric { "right" } else { "left" };

    rsx! {
        th {
            style: "position: sticky; top: 0; background: var(--pico-card-background-color); cursor: pointer; white-space: nowrap; text-align: {align};",
            "aria-sort": match (sort.is_active(field), sort.direction.is_ascending()) {
                (false, _) => "none",
                (true, true) => "ascending",
                (true, false) => "descending",
            },
            onclick: move |_| on_sort.call(field),
            "{title}"
            span {
                style: "display: inline-block; width: 1.2em; text-align: right;",
                "{arrow}"
            }
        }
    }
}
