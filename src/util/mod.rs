//! Browser utility modules.

pub mod storage;
