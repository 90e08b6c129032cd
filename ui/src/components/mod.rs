//! Components shared by the screens.
pub mod action_link;
pub mod buy_amount_input;
pub mod empty_state;
pub mod filter_panel;
pub mod list_view;
pub mod pager;
pub mod pico;
pub mod sortable_header;
pub mod timeframe_picker;
