//! HTTP handlers for account CRUD, service info, and fallbacks.

pub mod account;
pub mod common;
pub use account::*;
pub use common::*;
