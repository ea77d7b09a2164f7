//! Video-id manifest for the output directory.
//!
//! The default already-downloaded check keys on the sanitized title, which
//! can collide (two titles sanitizing to the same string) and goes stale when
//! a video is renamed. The manifest keys the check on the video id instead.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Manifest file name inside the output directory.
pub const MANIFEST_FILE: &str = ".hente-manifest.json";

/// Mapping from video id to the transcript file written for it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Manifest {
    entries: BTreeMap<String, String>,

    #[serde(skip)]
    path: PathBuf,
}

impl Manifest {
    /// Load the manifest from an output directory, or start an empty one.
    pub fn load(output_dir: &Path) -> Result<Self> {
        let path = output_dir.join(MANIFEST_FILE);

        let mut manifest = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str::<Manifest>(&content)?
        } else {
            Manifest::default()
        };
        manifest.path = path;
        Ok(manifest)
    }

    /// Whether a transcript has already been recorded for this video.
    pub fn contains(&self, video_id: &str) -> bool {
        self.entries.contains_key(video_id)
    }

    /// Record a written transcript and persist the manifest.
    pub fn record(&mut self, video_id: &str, file_name: &str) -> Result<()> {
        self.entries
            .insert(video_id.to_string(), file_name.to_string());
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
