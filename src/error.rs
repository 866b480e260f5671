use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("canvas side length must be a positive integer, got {input:?}")]
    InvalidCanvasSize { input: String },

    #[error("canvas side length {size} exceeds the maximum of {max}")]
    CanvasTooLarge { size: usize, max: usize },

    #[error("failed to save plot to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
