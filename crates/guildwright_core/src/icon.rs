//! Icon byte to data-URI encoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use guildwright_error::{StagingError, StagingErrorKind};

/// Image formats accepted for guild icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ImageFormat {
    /// PNG
    #[strum(serialize = "image/png")]
    Png,
    /// JPEG
    #[strum(serialize = "image/jpeg")]
    Jpeg,
    /// GIF
    #[strum(serialize = "image/gif")]
    Gif,
    /// WEBP
    #[strum(serialize = "image/webp")]
    Webp,
}

impl ImageFormat {
    /// Detect the format from the leading magic bytes.
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(Self::Png)
        } else if data.starts_with(b"\xff\xd8\xff")
            || data.get(6..10).is_some_and(|s| s == b"JFIF" || s == b"Exif")
        {
            Some(Self::Jpeg)
        } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if data.starts_with(b"RIFF") && data.get(8..12) == Some(b"WEBP".as_slice()) {
            Some(Self::Webp)
        } else {
            None
        }
    }

    /// MIME type of the format.
    pub fn mime(self) -> String {
        self.to_string()
    }
}

/// Encode raw image bytes into the `data:<mime>;base64,<payload>` form the
/// platform expects for icons.
///
/// # Errors
///
/// Returns [`StagingErrorKind::UnsupportedImage`] when the bytes are not PNG,
/// JPEG, GIF or WEBP.
///
/// # Examples
///
/// ```
/// use guildwright_core::bytes_to_base64_data;
///
/// let gif = b"GIF89a\x01\x00";
/// let uri = bytes_to_base64_data(gif).unwrap();
/// assert!(uri.starts_with("data:image/gif;base64,"));
/// ```
#[track_caller]
pub fn bytes_to_base64_data(data: &[u8]) -> Result<String, StagingError> {
    let format = ImageFormat::detect(data)
        .ok_or_else(|| StagingError::new(StagingErrorKind::UnsupportedImage))?;
    Ok(format!("data:{};base64,{}", format.mime(), STANDARD.encode(data)))
}
