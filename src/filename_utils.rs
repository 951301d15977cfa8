use std::path::Path;

use crate::arg_parsers::Dimensions;

/// Builds the output file name for one input path: the bare input file
/// name prefixed with the target dimensions and suffixed with the output
/// format extension. The input keeps its own extension inside the derived
/// name, so `pics/cat.jpg` at 100x100 becomes `100_x_100 cat.jpg.png`.
pub fn output_file_name(input_path: &str, dimensions: Dimensions, extension: &str) -> String {
    let base = Path::new(input_path)
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| input_path.into());
    format!(
        "{}_x_{} {base}.{extension}",
        dimensions.width, dimensions.height
    )
}
