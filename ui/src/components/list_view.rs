//! The generic table behind every list on the dashboard.
//!
//! A screen owns a `Signal<ListView<E>>`, feeds it with `use_feed` and
//! describes its columns. [`TokenListView`] derives the current page from the
//! signal and writes header clicks and page changes back into it.

use dioxus::prelude::*;
use trending::FilterState;
use trending::ListEntity;
use trending::ListOutcome;
use trending::ListView;

use super::empty_state::EmptyState;
use super::pager::Pager;
use super::pico::Button;
use super::pico::ButtonType;
use super::sortable_header::SortableHeader;
use crate::hooks::use_feed::update_view;

/// One table column.
pub struct Column<E: ListEntity> {
    pub title: &'static str,
    /// Sort key. `None` for columns that cannot be sorted.
    pub sort_key: Option<E::Field>,
    pub numeric: bool,
    pub render: fn(&E) -> Element,
}

impl<E: ListEntity> Column<E> {
    pub fn sortable(title: &'static str, key: E::Field, render: fn(&E) -> Element) -> Self {
        Self {
            title,
            sort_key: Some(key),
            numeric: false,
            render,
        }
    }

    pub fn plain(title: &'static str, render: fn(&E) -> Element) -> Self {
        Self {
            title,
            sort_key: None,
            numeric: false,
            render,
        }
    }

    pub fn numeric(self) -> Self {
        Self {
            numeric: true,
            ..self
        }
    }
}

impl<E: ListEntity> Clone for Column<E> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            sort_key: self.sort_key,
            numeric: self.numeric,
            render: self.render,
        }
    }
}

// columns are static descriptions, so the title and key identify one
impl<E: ListEntity> PartialEq for Column<E> {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.sort_key == other.sort_key && self.numeric == other.numeric
    }
}

#[component]
pub fn TokenListView<E: ListEntity>(
    view: Signal<ListView<E>>,
    columns: Vec<Column<E>>,
    #[props(default)] on_row_click: Option<EventHandler<E>>,
    #[props(default = "Nothing here yet".to_string())] empty_title: String,
    #[props(default = false)] hide_pager: bool,
) -> Element {
    let state = view.read();
    let sort = state.sort();
    let page = state.derive();
    let is_loading = state.phase().is_loading() || state.phase().is_idle();

    if is_loading {
        return rsx! {
            p { "Loading..." }
            progress {}
        };
    }

    match page.outcome {
        ListOutcome::Empty => {
            return rsx! {
                EmptyState { title: empty_title, icon: "📭".to_string() }
            };
        }
        ListOutcome::NoMatches => {
            return rsx! {
                EmptyState {
                    title: "No matches",
                    description: "Nothing passes the current search and filters.".to_string(),
                    icon: "🔍".to_string(),
                    action: rsx! {
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            small: true,
                            on_click: move |_| update_view(view, |v| v.with_search("").with_filters(FilterState::new())),
                            "Clear filters"
                        }
                    },
                }
            };
        }
        ListOutcome::Rows => {}
    }

    let rows = page.items.iter().map(|entity| {
        let highlighted = state.is_highlighted(entity);
        let clicked = entity.clone();
        let cells = columns.iter().map(|column| {
            let align = if column.numeric { "right" } else { "left" };
            rsx! {
                td { style: "text-align: {align};", {(column.render)(entity)} }
            }
        });
        rsx! {
            tr {
                key: "{entity.id()}",
                class: if highlighted { "highlighted" } else { "" },
                style: if on_row_click.is_some() { "cursor: pointer;" } else { "" },
                onclick: move |_| {
                    if let Some(handler) = &on_row_click {
                        handler.call(clicked.clone());
                    }
                },
                {cells}
            }
        }
    });

    rsx! {
        div {
            class: "table-scroll",
            table {
                class: "striped",
                thead {
                    tr {
                        for column in columns.iter() {
                            if let Some(key) = column.sort_key {
                                SortableHeader {
                                    title: column.title,
                                    field: key,
                                    sort,
                                    numeric: column.numeric,
                                    on_sort: move |key| update_view(view, |v| v.sort_by(key)),
                                }
                            } else {
                                th { "{column.title}" }
                            }
                        }
                    }
                }
                tbody { {rows} }
            }
        }
        if !hide_pager {
            Pager {
                current_page: page.current_page,
                total_pages: page.total_pages,
                total_matches: page.total_matches,
                on_previous: move |_| update_view(view, |v| v.previous_page()),
                on_next: move |_| update_view(view, |v| v.next_page()),
            }
        }
    }
}
