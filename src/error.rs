/// Everything that can stop a render before or after the pixels are computed.
///
/// Marching itself never fails: a miss is background, not an error.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}
