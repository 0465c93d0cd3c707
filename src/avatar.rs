//! Avatar image normalization
//!
//! Uploaded images are validated, center-cropped to a square, scaled and
//! re-encoded as JPEG. The result is a `data:` URL that can be stored with
//! [`ProgressionState::set_avatar_url`](crate::progression::ProgressionState::set_avatar_url).

use base64::{Engine as _, engine::general_purpose};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::debug;

/// Largest accepted upload (5 MiB)
pub const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

/// Edge length of the normalized square avatar
pub const DEFAULT_AVATAR_SIZE: u32 = 400;

/// JPEG quality of the normalized avatar
pub const DEFAULT_AVATAR_QUALITY: u8 = 90;

/// MIME types accepted for upload
pub const ACCEPTED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Error type for avatar processing
#[derive(Debug, thiserror::Error)]
pub enum AvatarError {
    #[error("Invalid file type '{0}'. Expected image/jpeg, image/png, image/gif, or image/webp")]
    UnsupportedType(String),

    #[error("File too large ({size} bytes). Max size is 5MB")]
    TooLarge { size: usize },

    #[error("Failed to load image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode avatar: {0}")]
    Encode(#[source] image::ImageError),
}

/// Output options for [`normalize_avatar`]
#[derive(Debug, Clone, Copy)]
pub struct AvatarOptions {
    pub size: u32,
    pub quality: u8,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_AVATAR_SIZE,
            quality: DEFAULT_AVATAR_QUALITY,
        }
    }
}

fn format_for_mime(mime: &str) -> Option<ImageFormat> {
    match mime.trim().to_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
        "image/png" => Some(ImageFormat::Png),
        "image/gif" => Some(ImageFormat::Gif),
        "image/webp" => Some(ImageFormat::WebP),
        _ => None,
    }
}

fn mime_for_format(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}

/// Check type and size of an upload.
///
/// `declared_mime` is what the caller was told the file is; without it the
/// type is sniffed from the bytes.
pub fn validate_upload(bytes: &[u8], declared_mime: Option<&str>) -> Result<ImageFormat, AvatarError> {
    let format = match declared_mime {
        Some(mime) => {
            format_for_mime(mime).ok_or_else(|| AvatarError::UnsupportedType(mime.to_string()))?
        }
        None => {
            let guessed = image::guess_format(bytes)
                .map_err(|_| AvatarError::UnsupportedType("unknown".to_string()))?;
            mime_for_format(guessed)
                .ok_or_else(|| AvatarError::UnsupportedType(format!("{:?}", guessed)))?;
            guessed
        }
    };

    if bytes.len() > MAX_AVATAR_BYTES {
        return Err(AvatarError::TooLarge { size: bytes.len() });
    }

    Ok(format)
}

/// Largest centered square inside a `width` x `height` image, as
/// `(x, y, side)`
pub fn center_square(width: u32, height: u32) -> (u32, u32, u32) {
    if width > height {
        ((width - height) / 2, 0, height)
    } else {
        (0, (height - width) / 2, width)
    }
}

/// Crop an image to its centered square and scale it to `size`
pub fn square_image(img: &DynamicImage, size: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    let (x, y, side) = center_square(width, height);
    img.crop_imm(x, y, side, side)
        .resize_exact(size, size, FilterType::Lanczos3)
}

/// Validate, square and re-encode an uploaded image.
///
/// Returns a `data:image/jpeg;base64,...` URL.
pub fn normalize_avatar(
    bytes: &[u8],
    declared_mime: Option<&str>,
    options: AvatarOptions,
) -> Result<String, AvatarError> {
    let format = validate_upload(bytes, declared_mime)?;
    let img = image::load_from_memory_with_format(bytes, format).map_err(AvatarError::Decode)?;

    let squared = square_image(&img, options.size).to_rgb8();

    let mut encoded = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut encoded, options.quality);
        encoder
            .encode_image(&squared)
            .map_err(AvatarError::Encode)?;
    }

    debug!(
        input_bytes = bytes.len(),
        output_bytes = encoded.len(),
        size = options.size,
        "Normalized avatar"
    );

    Ok(format!(
        "data:image/jpeg;base64,{}",
        general_purpose::STANDARD.encode(encoded)
    ))
}
