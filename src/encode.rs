use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::DynamicImage;

use crate::arg_parsers::{Dimensions, OutputFormat};
use crate::filename_utils::output_file_name;
use crate::{error::ResizeError, rz_err};

/// Encodes one scaled image into the output directory, under a name
/// derived from the input path and the target dimensions.
pub fn encode(
    image: &DynamicImage,
    input_path: &str,
    dimensions: Dimensions,
    format: OutputFormat,
    output_dir: &Path,
) -> Result<(), ResizeError> {
    let file_name = output_file_name(input_path, dimensions, format.extension());
    // `File::create` truncates, so colliding derived names silently
    // overwrite the earlier file.
    let path = output_dir.join(file_name);
    let file = File::create(&path)
        .map_err(|e| rz_err!("cannot write `{input_path}' to `{}': {e}, skipping", path.display()))?;
    let mut writer = BufWriter::new(file);

    normalize(image, format)
        .write_to(&mut writer, format.image_format())
        .map_err(|e| rz_err!("cannot encode `{input_path}' as {}: {e}, skipping", format.extension()))?;

    // The buffer would also be flushed on drop, but that reports no errors.
    writer
        .flush()
        .map_err(|e| rz_err!("cannot write `{input_path}' to `{}': {e}, skipping", path.display()))?;

    Ok(())
}

/// The jpeg and gif encoders only accept a subset of pixel formats,
/// so convert up front instead of failing the write.
fn normalize(image: &DynamicImage, format: OutputFormat) -> Cow<'_, DynamicImage> {
    match format {
        OutputFormat::Png => Cow::Borrowed(image),
        OutputFormat::Jpg => match image {
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => Cow::Borrowed(image),
            _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        },
        OutputFormat::Gif => match image {
            DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => Cow::Borrowed(image),
            _ => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        },
    }
}
