//! Utilities for persistence, export and logging

pub mod io;
pub mod logging;
