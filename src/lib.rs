//! enChat Library
//!
//! Core library for the enChat desktop chat client.

pub mod app;
pub mod storage;
pub mod types;
pub mod ui;
pub mod validation;
