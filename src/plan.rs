use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use image::DynamicImage;

use crate::arg_parsers::{Dimensions, OutputFormat, ScalingHint};
use crate::error::ResizeError;
use crate::{decode, encode, rz_err, scale};

/// Validated configuration for one run, built from the command line.
#[derive(Debug, PartialEq)]
pub struct RunPlan {
    pub dimensions: Dimensions,
    pub input_files: Vec<String>,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub hint: ScalingHint,
}

impl RunPlan {
    /// Runs the whole batch: decode everything, then scale and write each
    /// decoded image. Per-file failures are reported and skipped; only an
    /// uncreatable output directory aborts the run.
    pub fn execute(&self) -> Result<(), ResizeError> {
        let mut images: HashMap<String, DynamicImage> = HashMap::new();
        for (path, result) in decode::load_images(&self.input_files) {
            match result {
                // a repeated path overwrites the earlier entry
                Ok(image) => {
                    images.insert(path, image);
                }
                Err(e) => eprintln!("{e}"),
            }
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| {
            rz_err!(
                "unable to create output directory `{}': {e}",
                self.output_dir.display()
            )
        })?;

        for (path, mut image) in images {
            scale::scale(&mut image, self.dimensions, self.hint.resize_alg());
            if let Err(e) = encode::encode(
                &image,
                &path,
                self.dimensions,
                self.format,
                &self.output_dir,
            ) {
                eprintln!("{e}");
            }
        }

        Ok(())
    }
}
