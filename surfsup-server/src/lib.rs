//! Hawaii climate API server.
//!
//! Read-only JSON endpoints over a fixed SQLite dataset of daily
//! precipitation and temperature observations.

pub mod config;
pub mod domain;
pub mod report;
pub mod store;
pub mod web;
