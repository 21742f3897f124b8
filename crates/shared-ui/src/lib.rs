//! Presentational components shared by every screen of the app.
//!
//! Components carry no data access: pages pass values and handlers in.

pub mod components;

pub use components::*;
