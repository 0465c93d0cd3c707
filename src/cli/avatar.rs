//! Avatar command implementation

use anyhow::{Context, Result, bail};
use std::path::Path;

use xpquest::avatar::{ACCEPTED_MIME_TYPES, AvatarOptions, normalize_avatar};
use xpquest::store::StateStore;

/// MIME type implied by a file extension, if it is one we accept
fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => return None,
    };
    ACCEPTED_MIME_TYPES.contains(&mime).then_some(mime)
}

/// Set or clear the avatar
pub fn avatar_command(
    store: &StateStore,
    file: Option<&Path>,
    clear: bool,
    options: AvatarOptions,
) -> Result<()> {
    if clear {
        store.update(|state| state.set_avatar_url(None))?;
        println!("Avatar removed.");
        return Ok(());
    }

    let Some(file) = file else {
        bail!("Give an image file or --clear");
    };

    let bytes = std::fs::read(file)
        .with_context(|| format!("Failed to read image: {}", file.display()))?;

    // Unknown extensions fall back to sniffing the content
    let data_url = normalize_avatar(&bytes, mime_from_extension(file), options)?;
    store.update(|state| state.set_avatar_url(Some(data_url)))?;

    println!("Avatar updated ({}x{}).", options.size, options.size);
    Ok(())
}
