use fast_image_resize::{ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;

use crate::arg_parsers::Dimensions;

/// Resamples the image to exactly the target dimensions, keeping the
/// source color model. The aspect ratio is intentionally not preserved;
/// callers supply aspect-correct targets if they want them.
pub fn scale(image: &mut DynamicImage, dimensions: Dimensions, algorithm: ResizeAlg) {
    let Dimensions { width, height } = dimensions;
    if image.width() == width && image.height() == height {
        return;
    }
    let mut resizer = Resizer::new();
    let mut dst_image = DynamicImage::new(width, height, image.color());
    let options = ResizeOptions::default().resize_alg(algorithm);
    resizer
        .resize(image, &mut dst_image, Some(&options))
        .unwrap();
    *image = dst_image;
}
