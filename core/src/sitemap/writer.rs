use crate::error::CoreResult;
use std::fs;
use std::path::Path;

/// Writes `contents` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_output(path: impl AsRef<Path>, contents: &str) -> CoreResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents.as_bytes())?;
    Ok(())
}
