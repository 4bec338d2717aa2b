//! Image-format validation for uploaded post images.
//!
//! Uploads must sniff as one of the allowed raster container formats; content
//! that does not (e.g. plain text mislabeled as an image) is rejected with a
//! message naming the rejected format and the allowed set.

use image::ImageFormat;

use crate::error::DomainError;

/// Extensions of the accepted raster container formats, alphabetical.
pub const ALLOWED_FORMATS: &[&str] = &["bmp", "gif", "ico", "jpeg", "png", "tiff", "webp"];

/// Sniff the bytes of an uploaded image and return the canonical extension of
/// its format, or a validation error describing why it was rejected.
///
/// `file_name` is only used to name the offending format in the error message
/// when the bytes are not recognizable as any image at all.
pub fn validate_image(bytes: &[u8], file_name: Option<&str>) -> Result<&'static str, DomainError> {
    let detected = image::guess_format(bytes).ok().and_then(canonical_extension);

    match detected {
        Some(extension) if ALLOWED_FORMATS.contains(&extension) => Ok(extension),
        other => Err(DomainError::Validation(format!(
            "File format '{}' is not supported. Supported file formats: '{}'.",
            rejected_name(other, file_name),
            ALLOWED_FORMATS.join(", "),
        ))),
    }
}

/// Canonical extension for the formats we are willing to name.
fn canonical_extension(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Bmp => Some("bmp"),
        ImageFormat::Gif => Some("gif"),
        ImageFormat::Ico => Some("ico"),
        ImageFormat::Jpeg => Some("jpeg"),
        ImageFormat::Png => Some("png"),
        ImageFormat::Tiff => Some("tiff"),
        ImageFormat::WebP => Some("webp"),
        other => other.extensions_str().first().copied(),
    }
}

/// What to call the rejected upload: the sniffed format when there was one,
/// otherwise the extension of the submitted file name.
fn rejected_name(detected: Option<&'static str>, file_name: Option<&str>) -> String {
    if let Some(extension) = detected {
        return extension.to_string();
    }

    file_name
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext))
        .filter(|ext| !ext.is_empty())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest valid GIF89a.
    const SMALL_GIF: &[u8] = &[
        0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x21, 0xf9,
        0x04, 0x01, 0x0a, 0x00, 0x01, 0x00, 0x2c, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00,
        0x00, 0x02, 0x02, 0x4c, 0x01, 0x00, 0x3b,
    ];

    #[test]
    fn test_gif_is_accepted() {
        assert_eq!(validate_image(SMALL_GIF, Some("small.gif")).unwrap(), "gif");
    }

    #[test]
    fn test_png_magic_is_accepted() {
        let png_header = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
        assert_eq!(validate_image(png_header, None).unwrap(), "png");
    }

    #[test]
    fn test_plain_text_is_rejected_naming_format() {
        let err = validate_image(b"just some text", Some("small.txt")).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("'txt'"), "got: {message}");
        assert!(message.contains("bmp, gif, ico, jpeg, png, tiff, webp"));
    }

    #[test]
    fn test_missing_file_name_is_rejected_as_unknown() {
        let err = validate_image(b"\x00\x01\x02\x03", None).unwrap_err();
        assert!(err.to_string().contains("'unknown'"));
    }
}
