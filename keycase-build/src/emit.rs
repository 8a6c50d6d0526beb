//! Writing design files for planned parts.

use std::path::Path;

use keycase_core::{Part, WriteResult};

use crate::{BuildError, DesignWriter, HeaderDirective};

/// Write `model` to `path`, or skip when the part produced no model.
///
/// Not every target has every part (a section may have no bottom half), so
/// a missing model is not an error.
pub fn emit<M, W: DesignWriter<M> + ?Sized>(
    writer: &W,
    part: Part,
    model: Option<&M>,
    path: &Path,
    header: &HeaderDirective,
) -> Result<WriteResult, BuildError> {
    let Some(model) = model else {
        log::debug!("no {} model, skipping {}", part, path.display());
        return Ok(WriteResult::Skipped);
    };

    writer
        .write(model, path, header)
        .map_err(|e| BuildError::Write {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        })?;
    log::info!("generated design file {}", path.display());
    Ok(WriteResult::Written)
}
