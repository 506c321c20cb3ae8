//! Image I/O

use image::*;
use std::path::Path;
use std::result::Result;

/// Writes RGBA pixel data to an 8-bit image. The format is determined from
/// the file extension.
///
/// * `path`   - Output file path.
/// * `rgba`   - RGBA pixel data in screen order.
/// * `width`  - Width of image.
/// * `height` - Height of image.
pub fn write_image(path: &str, rgba: &[u8], width: u32, height: u32) -> Result<(), String> {
    match get_extension_from_filename(path) {
        Some("png") => write_8_bit(path, rgba, width, height, ImageFormat::Png),
        Some("tga") => write_8_bit(path, rgba, width, height, ImageFormat::Tga),
        Some("bmp") => write_8_bit(path, rgba, width, height, ImageFormat::Bmp),
        Some(extension) => Err(format!("Extension .{extension} is not supported")),
        None => Err(format!("Can't determine file type from suffix of filename {path}")),
    }
}

/// Returns the output path for a frame of an image sequence by inserting the
/// zero padded frame number before the extension; e.g. `out.png` becomes
/// `out-0003.png`.
///
/// * `path`  - Output file path.
/// * `frame` - Frame number.
pub fn sequence_path(path: &str, frame: usize) -> String {
    let p = Path::new(path);
    match (p.file_stem(), p.extension()) {
        (Some(stem), Some(ext)) => {
            let file_name = format!("{}-{frame:04}.{}", stem.to_string_lossy(), ext.to_string_lossy());
            p.with_file_name(file_name).to_string_lossy().into_owned()
        }
        _ => format!("{path}-{frame:04}"),
    }
}

/// Retrieve the extension from a file path.
///
/// * `path` - The file path.
fn get_extension_from_filename(path: &str) -> Option<&str> {
    Path::new(path).extension().and_then(|ext| ext.to_str())
}

/// Writes the image in an 8-bit image format.
///
/// * `path`         - Output file path.
/// * `rgba`         - RGBA pixel data.
/// * `width`        - X resolution.
/// * `height`       - Y resolution.
/// * `image_format` - Image format.
fn write_8_bit(
    path: &str,
    rgba: &[u8],
    width: u32,
    height: u32,
    image_format: ImageFormat,
) -> Result<(), String> {
    info!("Writing image {path} with resolution {width}x{height}");

    let imgbuf: RgbaImage = ImageBuffer::from_raw(width, height, rgba.to_vec())
        .ok_or_else(|| format!("Pixel data does not match resolution {width}x{height}"))?;

    match imgbuf.save_with_format(path, image_format) {
        Ok(()) => Ok(()),
        Err(err) => Err(format!("Error saving output image {path}: {err}.")),
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_path_inserts_frame_number() {
        assert_eq!(sequence_path("out.png", 3), "out-0003.png");
        assert_eq!(sequence_path("renders/frame.tga", 12), "renders/frame-0012.tga");
        assert_eq!(sequence_path("noext", 1), "noext-0001");
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        assert!(write_image("image.exr", &[0; 4], 1, 1).is_err());
        assert!(write_image("image", &[0; 4], 1, 1).is_err());
    }

    #[test]
    fn mismatched_pixel_data_is_rejected() {
        let path = std::env::temp_dir().join("whitted-image-io-mismatch.png");
        let result = write_image(&path.to_string_lossy(), &[0; 4], 2, 2);
        assert!(result.is_err());
    }

    #[test]
    fn png_round_trip() {
        let path = std::env::temp_dir().join(format!("whitted-image-io-{}.png", std::process::id()));
        let path = path.to_string_lossy().into_owned();
        let rgba = [255, 0, 0, 255, 0, 0, 255, 255];

        write_image(&path, &rgba, 2, 1).unwrap();
        let img = image::open(&path).unwrap().to_rgba8();
        let _ = std::fs::remove_file(&path);

        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.into_raw(), rgba.to_vec());
    }
}
