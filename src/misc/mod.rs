//! Miscellaneous items, at present those related to logging.

pub mod log;
