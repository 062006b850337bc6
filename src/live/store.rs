// SPDX-License-Identifier: MPL-2.0
//! Single-document session store backing the live channel.
//!
//! The document is stored in CBOR (the same format as the persisted
//! application state) at a path both the operator and the mirror process
//! resolve identically. Writes go through a temporary file and an atomic
//! rename, so the polling reader never observes a torn document.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::app::paths;
use crate::error::{Error, Result};

use super::LiveStateDocument;

/// Session document file name within the app data directory.
pub const SESSION_FILE: &str = "live_session.cbor";

/// Handle to the shared session document.
///
/// Cloning is cheap; clones address the same document.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// A store addressing an explicit document path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The store at the shared default location (data dir), honoring the
    /// same override chain as the rest of the application's paths.
    ///
    /// Returns `None` only when no data directory can be determined.
    pub fn at_default_location(data_dir_override: Option<PathBuf>) -> Option<Self> {
        paths::get_app_data_dir_with_override(data_dir_override)
            .map(|dir| Self::new(dir.join(SESSION_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the shared document.
    pub fn write(&self, document: &LiveStateDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("cbor.tmp");
        let file = fs::File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        ciborium::into_writer(document, &mut writer)
            .map_err(|e| Error::Store(format!("could not encode session document: {}", e)))?;
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Reads the shared document; `None` when no session has been published
    /// yet.
    pub fn read(&self) -> Result<Option<LiveStateDocument>> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        ciborium::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|e| Error::Store(format!("could not decode session document: {}", e)))
    }

    /// Async wrapper for the write, so navigation never blocks on disk or
    /// network latency of the shared location.
    pub async fn write_async(self, document: LiveStateDocument) -> Result<()> {
        tokio::task::spawn_blocking(move || self.write(&document))
            .await
            .map_err(|e| Error::Store(format!("publisher task failed: {}", e)))?
    }
}
