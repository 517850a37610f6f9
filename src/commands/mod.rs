//! Command implementations for routefind

pub mod dispatch;
pub mod io;
pub mod route;
