//! Inline image handling
//!
//! Images are stored on the record as `data:<mime>;base64,<payload>` URLs.
//! The content type is taken from the leading bytes, never from a file name.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::errors::ImageError;

/// Image formats the editor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// `image/png`
    Png,

    /// `image/jpeg`
    Jpeg,

    /// `image/gif`
    Gif,

    /// `image/webp`
    Webp,
}

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_MAGIC: &[u8] = b"\xff\xd8\xff";
const GIF87_MAGIC: &[u8] = b"GIF87a";
const GIF89_MAGIC: &[u8] = b"GIF89a";

impl ImageKind {
    /// Identify the format from its leading bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PNG_MAGIC) {
            return Some(ImageKind::Png);
        }

        if bytes.starts_with(JPEG_MAGIC) {
            return Some(ImageKind::Jpeg);
        }

        if bytes.starts_with(GIF87_MAGIC) || bytes.starts_with(GIF89_MAGIC) {
            return Some(ImageKind::Gif);
        }

        // RIFF <size:4> WEBP
        if bytes.get(..4) == Some(b"RIFF".as_slice()) && bytes.get(8..12) == Some(b"WEBP".as_slice())
        {
            return Some(ImageKind::Webp);
        }

        None
    }

    /// MIME type
    pub fn mime(self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Gif => "image/gif",
            ImageKind::Webp => "image/webp",
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpg",
            ImageKind::Gif => "gif",
            ImageKind::Webp => "webp",
        }
    }

    fn from_mime(mime: &str) -> Option<Self> {
        [
            ImageKind::Png,
            ImageKind::Jpeg,
            ImageKind::Gif,
            ImageKind::Webp,
        ]
        .into_iter()
        .find(|kind| kind.mime().eq_ignore_ascii_case(mime))
    }
}

/// Verify `bytes` and encode them as a data URL.
///
/// # Errors
///
/// - [`ImageError::Empty`]: no bytes were supplied.
/// - [`ImageError::TooLarge`]: the image is over `limit` bytes.
/// - [`ImageError::UnsupportedFormat`]: the bytes are not PNG, JPEG, GIF or WebP.
pub fn encode_data_url(bytes: &[u8], limit: usize) -> Result<String, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }

    if bytes.len() > limit {
        return Err(ImageError::TooLarge {
            size: bytes.len(),
            limit,
        });
    }

    let kind = ImageKind::sniff(bytes).ok_or(ImageError::UnsupportedFormat)?;

    Ok(format!("data:{};base64,{}", kind.mime(), STANDARD.encode(bytes)))
}

/// Decode a base64 data URL produced by [`encode_data_url`].
///
/// The declared MIME type must agree with the decoded bytes.
///
/// # Errors
///
/// - [`ImageError::MalformedDataUrl`]: not a base64 `data:` URL.
/// - [`ImageError::UnsupportedFormat`]: the payload is not an accepted format.
pub fn decode_data_url(url: &str) -> Result<(ImageKind, Vec<u8>), ImageError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or(ImageError::MalformedDataUrl)?;

    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or(ImageError::MalformedDataUrl)?;

    let declared = ImageKind::from_mime(mime).ok_or(ImageError::UnsupportedFormat)?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|_decode_error| ImageError::MalformedDataUrl)?;

    match ImageKind::sniff(&bytes) {
        Some(kind) if kind == declared => Ok((kind, bytes)),
        _ => Err(ImageError::UnsupportedFormat),
    }
}

/// Whether `image` is an inline data URL rather than a plain URL.
pub fn is_data_url(image: &str) -> bool {
    image.starts_with("data:")
}
