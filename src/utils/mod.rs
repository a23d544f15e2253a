//! Utility functions

pub mod atomic;
