//! Fitness Tracker Library
//!
//! This library exposes the tracker modules for use in tests and the binary.

pub mod config;
pub mod demo;
pub mod error;
pub mod services;
