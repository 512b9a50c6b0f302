//! Patterns sub-module: singleton.

pub mod singleton;
