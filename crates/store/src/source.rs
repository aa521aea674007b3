use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Where the raw glossary payload comes from.
///
/// The store does not care whether the JSON sits on disk, is compiled into
/// the binary, or is fetched by the caller some other way; it only needs the
/// whole payload as one string before parsing starts.
pub trait EntrySource {
    /// Human-readable name used in logs.
    fn describe(&self) -> String;

    /// Read the complete payload.
    fn fetch(&self) -> Result<String, LoadError>;
}

/// A JSON file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntrySource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        fs::read_to_string(&self.path).map_err(|err| {
            let detail = format!("{}: {err}", self.path.display());
            // The file was read but its bytes are not UTF-8.
            if err.kind() == io::ErrorKind::InvalidData {
                LoadError::Malformed(detail)
            } else {
                LoadError::Unreachable(detail)
            }
        })
    }
}

/// A payload already held in memory, e.g. one embedded with `include_str!`.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: Cow<'static, str>,
    payload: Cow<'static, str>,
}

impl StaticSource {
    pub fn new(name: impl Into<Cow<'static, str>>, payload: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }
}

impl EntrySource for StaticSource {
    fn describe(&self) -> String {
        self.name.to_string()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.payload.to_string())
    }
}

impl<S: EntrySource + ?Sized> EntrySource for &S {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        (**self).fetch()
    }
}
