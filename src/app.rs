//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the current selection,
//! the file picker and the status notice.

mod model;

pub use model::*;
