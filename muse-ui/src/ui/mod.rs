//! View functions, one module per screen region.

mod field;
mod grid;
mod history;
mod input;

pub use field::view_field;
pub use grid::view_grid;
pub use history::view_history;
pub use input::{view_error, view_input};
