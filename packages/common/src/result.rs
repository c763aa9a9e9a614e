use crate::error::TemplateError;

/// Result of fetching a page template
pub type TemplateResult<T> = Result<T, TemplateError>;
