use thiserror::Error;

/// Shader-build failures surfaced at startup. The renderer never runs with
/// an invalid program.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),

    #[error("pipeline link failed: {0}")]
    PipelineLink(String),
}
