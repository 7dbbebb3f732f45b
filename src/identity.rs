//! Identity endpoint document decoding and normalized profile reshaping.

pub mod profile;
pub mod social;

pub use profile::*;
pub use social::*;
