//! Template tree resolution and file output.
//! Maps a template source (file or directory) onto a destination tree and
//! writes each resolved file, either rendered or copied verbatim.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    renderer::TemplateRenderer,
    unaltered::UnalteredMatcher,
};

/// A source file and the destination it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Copy the bytes as they are instead of rendering the file.
    pub unaltered: bool,
}

/// What happened to a processed file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOperation {
    Copy { target: PathBuf },
    Write { target: PathBuf },
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Copy { target } => write!(f, "Copied: '{}'", target.display()),
            FileOperation::Write { target } => write!(f, "Rendered: '{}'", target.display()),
        }
    }
}

fn render_error<P: AsRef<Path>>(source: P, reason: impl ToString) -> Error {
    Error::RenderError {
        source_path: source.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Resolves a template source into the file pairs it produces.
///
/// A directory is walked recursively and every file below it is mapped to
/// the same relative path under `destination`. A single file maps directly
/// to `destination`. Entries are visited in lexicographic order and symlinks
/// are followed. A source that does not exist yields nothing.
///
/// The iterator is lazy; calling `resolve` again walks the tree afresh.
pub fn resolve<'a>(
    source: &'a Path,
    destination: &'a Path,
    matcher: &'a UnalteredMatcher,
) -> Box<dyn Iterator<Item = Result<FilePair>> + 'a> {
    if !source.exists() {
        debug!("Template source '{}' does not exist, skipping", source.display());
        return Box::new(std::iter::empty());
    }

    let walker = WalkDir::new(source).follow_links(true).sort_by_file_name();
    Box::new(walker.into_iter().filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(source).to_path_buf();
                return Some(Err(render_error(path, e)));
            }
        };
        if entry.file_type().is_dir() {
            return None;
        }

        let path = entry.path();
        let relative = match path.strip_prefix(source) {
            Ok(relative) => relative,
            Err(e) => return Some(Err(render_error(path, e))),
        };
        let target = if relative.as_os_str().is_empty() {
            destination.to_path_buf()
        } else {
            destination.join(relative)
        };

        Some(Ok(FilePair {
            unaltered: matcher.is_unaltered(path),
            source: path.to_path_buf(),
            destination: target,
        }))
    }))
}

fn create_parent_dirs(pair: &FilePair) -> Result<()> {
    if let Some(parent) = pair.destination.parent() {
        fs::create_dir_all(parent).map_err(|e| render_error(&pair.source, e))?;
    }
    Ok(())
}

/// Writes a single file pair to its destination.
///
/// Unaltered pairs are copied byte for byte. All other pairs are read as
/// UTF-8 text, rendered against `context` and written over any existing
/// destination file. Missing parent directories are created either way.
///
/// # Errors
/// * `Error::RenderError` naming the source file on any failure
pub fn process(
    engine: &dyn TemplateRenderer,
    pair: &FilePair,
    context: &serde_json::Value,
) -> Result<FileOperation> {
    create_parent_dirs(pair)?;

    if pair.unaltered {
        debug!("Copying '{}' to '{}'", pair.source.display(), pair.destination.display());
        fs::copy(&pair.source, &pair.destination).map_err(|e| render_error(&pair.source, e))?;
        return Ok(FileOperation::Copy { target: pair.destination.clone() });
    }

    debug!("Rendering '{}' to '{}'", pair.source.display(), pair.destination.display());
    let content =
        fs::read_to_string(&pair.source).map_err(|e| render_error(&pair.source, e))?;
    let rendered =
        engine.render(&content, context).map_err(|e| render_error(&pair.source, e))?;
    fs::write(&pair.destination, rendered).map_err(|e| render_error(&pair.source, e))?;

    Ok(FileOperation::Write { target: pair.destination.clone() })
}

/// Resolves a template source and writes every file it produces.
///
/// Stops at the first failing file.
pub fn process_tree(
    engine: &dyn TemplateRenderer,
    source: &Path,
    destination: &Path,
    matcher: &UnalteredMatcher,
    context: &serde_json::Value,
) -> Result<Vec<FileOperation>> {
    resolve(source, destination, matcher)
        .map(|pair| process(engine, &pair?, context))
        .collect()
}
