//! Pre-flight checks before network operations.
//!
//! Validates that required configuration is available before starting
//! operations that would otherwise fail midway.

use crate::config::Settings;
use crate::error::{HenteError, Result};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Fetching requires a YouTube Data API key.
    Fetch,
    /// Listing local transcripts has no external requirements.
    List,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Fetch => {
            check_api_key(settings)?;
        }
        Operation::List => {
            // No external requirements
        }
    }
    Ok(())
}

/// Check that a YouTube Data API key is configured.
fn check_api_key(settings: &Settings) -> Result<()> {
    match settings.youtube.resolved_api_key() {
        Some(_) => Ok(()),
        None => Err(HenteError::Config(
            "No YouTube API key found. Set youtube.api_key in the config file \
             or export YOUTUBE_API_KEY."
                .to_string(),
        )),
    }
}
