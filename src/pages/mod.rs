//! Page components, one per route.

pub mod auth;
pub mod history;
pub mod index;
pub mod not_found;
pub mod performance;
pub mod trading;
