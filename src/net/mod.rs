//! HTTP client layer for the championship REST API.
//!
//! DESIGN
//! ======
//! Requests are split by concern (`api` for authentication, `championship`
//! for ranking/operations data) with shared typed payloads in `types`.
//! Real calls happen only in the browser; SSR builds get inert stubs.

pub mod api;
pub mod championship;
pub mod types;
