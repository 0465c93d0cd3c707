//! Init command implementation

use anyhow::Result;
use std::path::Path;
use tracing::info;

use xpquest::config::Config;

/// Write a default config file (global location unless `--config` is given)
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    Config::write_default(&path, force)?;
    info!("Created config at {}", path.display());
    println!("Created {}", path.display());
    Ok(())
}
