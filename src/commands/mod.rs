//! Command handlers.

pub mod scan;
