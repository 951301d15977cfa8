use image::ImageFormat;
use strum::EnumString;

/// The closed set of encodable output formats.
#[derive(EnumString, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpg,
    Gif,
}

impl OutputFormat {
    pub fn image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpg => ImageFormat::Jpeg,
            OutputFormat::Gif => ImageFormat::Gif,
        }
    }

    /// Extension appended to generated output file names.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Gif => "gif",
        }
    }
}
