//! Custom widgets and widget builders.

pub mod brainwave;
pub mod bubble;
pub mod particles;
