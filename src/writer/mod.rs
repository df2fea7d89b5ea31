//! Output side: everything that produces Elm text or touches the output
//! directory.
pub mod elm;
