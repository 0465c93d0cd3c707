//! Export command implementation

use anyhow::Result;
use std::path::PathBuf;

use xpquest::store::{EXPORT_FILE_NAME, StateStore};

/// Copy the state document verbatim to `path` (default ./xpquest-backup.json)
pub fn export_command(store: &StateStore, path: Option<PathBuf>) -> Result<()> {
    let target = path.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    store.export_to(&target)?;
    println!("Exported to {}", target.display());
    Ok(())
}
