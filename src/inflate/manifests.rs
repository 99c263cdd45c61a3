use crate::common::error::{
    Error::{ReadingDirectory, ReadingFile, WritingManifest},
    Result,
};
use std::{
    fs,
    io::Write,
    path::Path,
};

/// Writes the raw bytes of every file in the rendered templates directory to the
/// sink, one file at a time, in directory-listing order. No separators are
/// inserted between files.
pub(crate) fn write_manifests<W: Write>(templates_dir: &Path, sink: &mut W) -> Result<()> {
    let entries = fs::read_dir(templates_dir).map_err(|e| ReadingDirectory {
        source: e,
        path: templates_dir.to_path_buf(),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ReadingDirectory {
            source: e,
            path: templates_dir.to_path_buf(),
        })?;
        let filepath = entry.path();
        let manifest = fs::read(filepath.as_path()).map_err(|e| ReadingFile {
            source: e,
            filepath: filepath.clone(),
        })?;
        sink.write_all(manifest.as_slice())
            .map_err(|e| WritingManifest {
                source: e,
                filepath,
            })?;
    }

    Ok(())
}
