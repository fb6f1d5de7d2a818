use std::path::{Path, PathBuf};

use crate::GenerationResult;

/// Fixed artifact filenames.
pub const LLMS_TXT_FILENAME: &str = "llms.txt";
pub const LLMS_FULL_TXT_FILENAME: &str = "llms-full.txt";

/// Content type the artifacts are served with.
pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes both artifacts into `out_dir` under their fixed filenames,
/// UTF-8 encoded. Returns the two written paths (short, full).
pub fn write_artifacts(
    result: &GenerationResult,
    out_dir: &Path,
) -> Result<(PathBuf, PathBuf), ExportError> {
    let short_path = out_dir.join(LLMS_TXT_FILENAME);
    let full_path = out_dir.join(LLMS_FULL_TXT_FILENAME);

    std::fs::write(&short_path, result.llms_txt.as_bytes()).map_err(|source| {
        ExportError::Write {
            path: short_path.clone(),
            source,
        }
    })?;
    std::fs::write(&full_path, result.llms_full_txt.as_bytes()).map_err(|source| {
        ExportError::Write {
            path: full_path.clone(),
            source,
        }
    })?;

    Ok((short_path, full_path))
}
