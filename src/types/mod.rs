//! Shared type definitions
//!
//! This module contains all shared data types used across the application.

pub mod message;
pub mod session;
pub mod view;
