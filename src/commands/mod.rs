//! Command implementations for waypath

pub mod dispatch;
pub mod format;
pub mod query;
pub mod run;
