//! State Management
//!
//! Per-page list state driven by the shared controllers.

pub mod list;

pub use list::use_list_state;
