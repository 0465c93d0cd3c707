//! Daily reset detection
//!
//! The day of the last reset lives in its own marker file next to the state
//! document. On session start the marker is compared with today; a new day
//! closes out the old one via [`ProgressionState::reset_daily_habits`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, warn};

use super::StateStore;

const MARKER_FILE_NAME: &str = "last-reset-day";
const MARKER_FORMAT: &str = "%Y-%m-%d";

/// Persisted "last reset day" marker
#[derive(Debug, Clone)]
pub struct ResetMarker {
    path: PathBuf,
}

impl ResetMarker {
    pub fn for_store(store: &StateStore) -> Self {
        Self {
            path: store.dir().join(MARKER_FILE_NAME),
        }
    }

    /// Read the marker. Missing or unreadable markers count as "never reset".
    pub fn read(&self) -> Option<NaiveDate> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match NaiveDate::parse_from_str(content.trim(), MARKER_FORMAT) {
            Ok(day) => Some(day),
            Err(e) => {
                warn!(path = %self.path.display(), "Ignoring malformed reset marker: {}", e);
                None
            }
        }
    }

    pub fn write(&self, day: NaiveDate) -> Result<()> {
        std::fs::write(&self.path, day.format(MARKER_FORMAT).to_string())
            .with_context(|| format!("Failed to write reset marker: {}", self.path.display()))
    }
}

/// Reset habits if today differs from the last reset day, then refresh
/// today's history record.
///
/// Returns true if a reset happened.
///
/// Marker check, reset and marker write all happen under the store lock,
/// so of several sessions starting on the same new day only the first one
/// resets.
pub fn ensure_daily_reset(store: &StateStore, today: NaiveDate) -> Result<bool> {
    let _lock = store.lock()?;
    let marker = ResetMarker::for_store(store);
    let needs_reset = marker.read() != Some(today);

    let mut state = store.load()?;
    if needs_reset {
        state.reset_daily_habits(today);
    }
    state.recompute_history(today);
    store.write_document(&state)?;

    if needs_reset {
        marker.write(today)?;
        info!(%today, "New day, habits reset");
    }

    Ok(needs_reset)
}
