//! Generic structures, not tied to the rest of the library.

pub mod random;
