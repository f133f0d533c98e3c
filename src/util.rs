//! Shared utility modules used across Lexiscore components.

pub mod lines;
