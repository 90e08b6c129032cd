//! Platform-independent core of the trending dashboard.
//!
//! Everything here is plain data and pure functions, so it is shared by the
//! web and desktop front-ends and tested without a renderer.

pub mod entity;
pub mod feed;
pub mod filter;
pub mod format;
pub mod mock;
pub mod models;
pub mod paginate;
pub mod prefs;
pub mod sort;
pub mod timeframe;
pub mod trade;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod driver;

pub use entity::FieldValue;
pub use entity::ListEntity;
pub use feed::Feed;
pub use filter::Constraint;
pub use filter::FilterState;
pub use paginate::Page;
pub use paginate::PageState;
pub use sort::SortDirection;
pub use sort::SortState;
pub use view::ListOutcome;
pub use view::ListPage;
pub use view::ListPhase;
pub use view::ListView;
