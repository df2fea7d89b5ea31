use thiserror::Error;

use crate::model::RenderOrder;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Every failure is fatal: the conversion aborts and nothing is written.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot find serializer for value of type {found}")]
    UnsupportedVariant { found: &'static str },

    #[error("unsupported rendering order {0}")]
    UnsupportedRenderOrder(RenderOrder),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("degenerate polyline segment {index}: both endpoints at ({x}, {y})")]
    DegenerateSegment { index: usize, x: f64, y: f64 },
}
