use thiserror::Error;

/// Rejections surfaced by the new-project flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateProjectError {
    /// The description was empty after trimming.
    #[error("Please describe your project.")]
    EmptyDescription,
    /// Every project id has already been handed out.
    #[error("No more projects can be created.")]
    IdsExhausted,
}
