use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Decoder, Encoder};

use morph_image::{Channel, ImageSize, RgbImage};

use crate::error::IoError;

/// Read a PNG image with three channels (rgb8).
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// An RGB image with three interleaved channels (rgb8).
pub fn read_image_png_rgb8(file_path: impl AsRef<Path>) -> Result<RgbImage, IoError> {
    let (buf, size) = read_png_impl(file_path, ColorType::Rgb)?;
    Ok(RgbImage::new(size, buf)?)
}

/// Read a PNG image with a single channel (mono8).
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A grayscale plane with a single channel (mono8).
pub fn read_image_png_mono8(file_path: impl AsRef<Path>) -> Result<Channel, IoError> {
    let (buf, size) = read_png_impl(file_path, ColorType::Grayscale)?;
    Ok(Channel::new(size, buf)?)
}

/// Writes the given PNG _(rgb8)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image containing the PNG image data.
pub fn write_image_png_rgb8(
    file_path: impl AsRef<Path>,
    image: &RgbImage,
) -> Result<(), IoError> {
    write_png_impl(file_path, image.as_slice(), image.size(), ColorType::Rgb)
}

/// Writes the given PNG _(grayscale 8-bit)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The plane containing the PNG image data.
pub fn write_image_png_mono8(
    file_path: impl AsRef<Path>,
    image: &Channel,
) -> Result<(), IoError> {
    write_png_impl(
        file_path,
        image.as_slice(),
        image.size(),
        ColorType::Grayscale,
    )
}

// utility function to read the png file
fn read_png_impl(
    file_path: impl AsRef<Path>,
    expected_color: ColorType,
) -> Result<(Vec<u8>, ImageSize), IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // verify the file extension
    if let Some(extension) = file_path.extension() {
        if extension != "png" {
            return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
        }
    } else {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let file = File::open(file_path)?;
    let mut reader = Decoder::new(file)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    if info.color_type != expected_color || info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedLayout(format!(
            "expected {:?}/8-bit, got {:?}/{:?}",
            expected_color, info.color_type, info.bit_depth
        )));
    }

    buf.truncate(info.buffer_size());

    Ok((
        buf,
        ImageSize {
            width: info.width as usize,
            height: info.height as usize,
        },
    ))
}

// utility function to write the png file
fn write_png_impl(
    file_path: impl AsRef<Path>,
    data: &[u8],
    size: ImageSize,
    color: ColorType,
) -> Result<(), IoError> {
    let file = File::create(file_path)?;
    let writer = BufWriter::new(file);

    let mut encoder = Encoder::new(writer, size.width as u32, size.height as u32);
    encoder.set_color(color);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodeError(e.to_string()))?;

    writer
        .write_image_data(data)
        .map_err(|e| IoError::PngEncodeError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_rgb8() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.png");

        let image = RgbImage::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        )?;

        write_image_png_rgb8(&file_path, &image)?;
        let image_back = read_image_png_rgb8(&file_path)?;

        assert_eq!(image_back, image);
        Ok(())
    }

    #[test]
    fn test_write_read_mono8() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("plane.png");

        let image = Channel::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![0, 64, 128, 192, 255, 32],
        )?;

        write_image_png_mono8(&file_path, &image)?;
        let image_back = read_image_png_mono8(&file_path)?;

        assert_eq!(image_back, image);
        Ok(())
    }

    #[test]
    fn test_read_missing_file() {
        let res = read_image_png_rgb8("missing.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn test_read_wrong_extension() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.jpg");
        std::fs::write(&file_path, b"not a png")?;

        let res = read_image_png_rgb8(&file_path);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));
        Ok(())
    }
}
