//! Smart Energy Scheduler library
//!
//! This module exposes the core functionality for use in tests
//! and as a library.

pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod console;
pub mod core;
pub mod energy;
pub mod i18n;
pub mod report;
pub mod session;
