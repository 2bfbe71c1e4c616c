//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only state shared across pages; everything else the
//! pages render is local or fetched on mount. State lives in plain structs
//! wrapped in `RwSignal` context so mutation logic stays testable off the
//! reactive graph.

pub mod session;
