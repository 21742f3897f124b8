pub mod error;
pub mod config;

pub mod common;
pub mod models;
pub mod requests;
pub mod role;

// Marketplace domain
pub mod application;
pub mod blog;
pub mod filters;
pub mod notification;
pub mod opportunity;

pub use error::*;
pub use config::*;

pub use common::*;
pub use models::*;
pub use requests::*;
pub use role::*;

pub use application::*;
pub use blog::*;
pub use filters::*;
pub use notification::*;
pub use opportunity::*;
