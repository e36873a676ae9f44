//! Shared adapter helpers

use std::path::Path;

use contracts::PipelineError;

/// Fail with `MissingInput` unless `path` is an existing file
pub(crate) fn require_input(what: &str, path: &Path) -> Result<(), PipelineError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(PipelineError::missing_input(what, path))
    }
}
