//! Built-in classification tables.

mod attributes;
mod elements;

pub use attributes::ATTRIBUTES;
pub use elements::ELEMENTS;
