//! Output path resolution.
//!
//! An explicit output path is accepted as long as it ends in `.jpg`. Without
//! one, the output is placed next to the input as
//! `<stem>_extractedFrame.jpg`, where the stem depends on [`OutputNaming`].

use std::path::{Path, PathBuf};

use crate::config::{EXTRACTED_FRAME_SUFFIX, OUTPUT_EXTENSION};
use crate::error::{CoreError, CoreResult};

/// How the stem of a default output name is cut from the input file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputNaming {
    /// Keep everything before the first `.`: `clip.v2.mov` -> `clip`.
    #[default]
    FirstDot,
    /// Drop only the final extension: `clip.v2.mov` -> `clip.v2`.
    LastDot,
}

impl OutputNaming {
    fn stem<'a>(self, file_name: &'a str) -> &'a str {
        match self {
            OutputNaming::FirstDot => file_name.split('.').next().unwrap_or(file_name),
            OutputNaming::LastDot => match file_name.rfind('.') {
                Some(0) | None => file_name,
                Some(idx) => &file_name[..idx],
            },
        }
    }
}

/// Derives the output path used when the caller did not supply one.
pub fn default_output_path(input: &Path, naming: OutputNaming) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let output_name = format!("{}{}", naming.stem(&file_name), EXTRACTED_FRAME_SUFFIX);

    match input.parent() {
        Some(parent) => parent.join(output_name),
        None => PathBuf::from(output_name),
    }
}

/// Resolves the final output path for an extraction.
///
/// Returns [`CoreError::InvalidArgument`] if `explicit` does not end in `.jpg`.
/// The check is on the raw text, so `frame.JPG` is rejected.
pub fn resolve_output_path(
    input: &Path,
    explicit: Option<&Path>,
    naming: OutputNaming,
) -> CoreResult<PathBuf> {
    match explicit {
        Some(path) if !path.as_os_str().is_empty() => {
            if !path.to_string_lossy().ends_with(OUTPUT_EXTENSION) {
                return Err(CoreError::InvalidArgument(format!(
                    "output path must end with {OUTPUT_EXTENSION}: {}",
                    path.display()
                )));
            }
            Ok(path.to_path_buf())
        }
        _ => Ok(default_output_path(input, naming)),
    }
}
