//! Shared library surface for the viewer backend and its tests.

pub mod config;
pub mod display;
pub mod scheduler;
