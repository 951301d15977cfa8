use image::{DynamicImage, ImageReader, ImageResult};

use crate::{error::ResizeError, rz_err};

/// Attempts to decode every input file, guessing each format from file
/// contents. Returns one entry per path in input order; a failed decode is
/// an `Err` entry, never an abort of the whole batch.
pub fn load_images(paths: &[String]) -> Vec<(String, Result<DynamicImage, ResizeError>)> {
    paths
        .iter()
        .map(|path| {
            let result = decode(path).map_err(|e| {
                rz_err!("unable to open image `{path}': {e}, skipping")
            });
            (path.clone(), result)
        })
        .collect()
}

fn decode(file: &str) -> ImageResult<DynamicImage> {
    let decoder = ImageReader::open(file)?.with_guessed_format()?;
    decoder.decode()
}
