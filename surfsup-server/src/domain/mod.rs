//! Core domain types for the climate API.
//!
//! Value types here are valid by construction; parsing is the only way in.

mod date;

pub use date::{InvalidDate, ObsDate};
