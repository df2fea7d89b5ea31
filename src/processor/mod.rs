//! The functional core: value model, geometry and object conversion.
//!
//! Nothing in here performs I/O.
pub mod geometry;
pub mod objects;
pub mod value;

pub use value::Value;
