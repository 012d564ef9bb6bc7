//! Human-readable rendering of properties and blocks.

mod block;
mod property;

pub use block::{HAS_CHILDREN_LINE, render_block};
pub use property::render_property;
