//! Command-line argument parsing.
//!
//! The option schema is small and fixed, so the parser is hand-rolled:
//! the `Arg` enum is the single source of truth for long names, short
//! names and help text, and the help output iterates over it.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use strum::{EnumString, IntoStaticStr, VariantArray};

use crate::arg_parsers::{Dimensions, OutputFormat, ScalingHint};
use crate::error::ResizeError;
use crate::plan::RunPlan;
use crate::{help, rz_err};

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Arg {
    Dimensions,
    Format,
    Output,
    ScalingHint,
    Help,
}

impl Arg {
    pub fn short(&self) -> char {
        match self {
            Arg::Dimensions => 'd',
            Arg::Format => 'f',
            Arg::Output => 'o',
            Arg::ScalingHint => 's',
            Arg::Help => 'h',
        }
    }

    pub fn needs_value(&self) -> bool {
        match self {
            Arg::Dimensions => true,
            Arg::Format => true,
            Arg::Output => true,
            Arg::ScalingHint => true,
            Arg::Help => false,
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Arg::Dimensions => "target image dimensions in pixels (e.g. 1280x720), required",
            Arg::Format => "image output format: png, jpg or gif (default: png)",
            Arg::Output => "image output folder (default: output/)",
            Arg::ScalingHint => "scaling algorithm: n (nearest) or b (bicubic, default)",
            Arg::Help => "show this help message",
        }
    }
}

pub fn parse_args(args: Vec<OsString>) -> Result<RunPlan, ResizeError> {
    let mut dimensions = None;
    let mut format = None;
    let mut output_dir = None;
    let mut hint = None;
    let mut input_files: Option<Vec<String>> = None;

    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        if let Some(arg) = match_option(&raw_arg)? {
            let arg_name: &'static str = arg.into();
            let value = if arg.needs_value() {
                Some(
                    iter.next()
                        .ok_or_else(|| rz_err!("option requires a value: --{arg_name}"))?,
                )
            } else {
                None
            };
            match arg {
                Arg::Dimensions => {
                    dimensions = Some(Dimensions::try_from(value.unwrap().as_os_str())?)
                }
                Arg::Format => {
                    let text = value_string(value.unwrap())?;
                    let parsed = OutputFormat::try_from(text.as_str()).map_err(|_| {
                        rz_err!("invalid output image format `{text}', expected one of: png, jpg, gif")
                    })?;
                    format = Some(parsed);
                }
                Arg::Output => output_dir = Some(PathBuf::from(value.unwrap())),
                Arg::ScalingHint => {
                    let text = value_string(value.unwrap())?;
                    let parsed = ScalingHint::try_from(text.as_str()).map_err(|_| {
                        rz_err!("invalid scaling hint `{text}', expected one of: n, b")
                    })?;
                    hint = Some(parsed);
                }
                Arg::Help => help::print_help_and_exit(env!("CARGO_PKG_NAME")),
            }
        } else {
            let list = raw_arg
                .into_string()
                .map_err(|s| rz_err!("invalid file list `{}'", s.to_string_lossy()))?;
            if input_files.is_some() {
                // a second positional is always a typo for a comma
                return Err(rz_err!("unexpected extra argument `{list}'"));
            }
            input_files = Some(list.split(',').map(str::to_owned).collect());
        }
    }

    let dimensions =
        dimensions.ok_or_else(|| rz_err!("missing required option: --dimensions"))?;
    let input_files = input_files
        .ok_or_else(|| rz_err!("missing argument: comma-separated list of images"))?;

    Ok(RunPlan {
        dimensions,
        input_files,
        output_dir: output_dir.unwrap_or_else(|| PathBuf::from("output")),
        format: format.unwrap_or_default(),
        hint: hint.unwrap_or_default(),
    })
}

/// Classifies one raw argument: `Some(arg)` for a recognized option,
/// `None` for a positional argument.
fn match_option(raw_arg: &OsStr) -> Result<Option<Arg>, ResizeError> {
    let bytes = raw_arg.as_encoded_bytes();
    // A lone "-" is a (doomed) file name, not an option.
    if bytes.len() < 2 || bytes[0] != b'-' {
        return Ok(None);
    }
    let text = raw_arg
        .to_str()
        .ok_or_else(|| rz_err!("unrecognized option `{}'", raw_arg.to_string_lossy()))?;

    if let Some(long) = text.strip_prefix("--") {
        let arg = Arg::try_from(long).map_err(|_| rz_err!("unrecognized option `--{long}'"))?;
        return Ok(Some(arg));
    }

    let mut chars = text[1..].chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Arg::VARIANTS
            .iter()
            .copied()
            .find(|arg| arg.short() == c)
            .map(Some)
            .ok_or_else(|| rz_err!("unrecognized option `-{c}'")),
        _ => Err(rz_err!("unrecognized option `{text}'")),
    }
}

fn value_string(value: OsString) -> Result<String, ResizeError> {
    value
        .into_string()
        .map_err(|s| rz_err!("invalid option value `{}'", s.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::PathBuf;

    use super::parse_args;
    use crate::arg_parsers::{Dimensions, OutputFormat, ScalingHint};

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn parses_full_invocation() {
        let plan = parse_args(os_args(&[
            "resizer",
            "--dimensions",
            "64x48",
            "-f",
            "jpg",
            "-o",
            "thumbs",
            "-s",
            "n",
            "a.png,b.jpg",
        ]))
        .unwrap();
        assert_eq!(
            plan.dimensions,
            Dimensions {
                width: 64,
                height: 48
            }
        );
        assert_eq!(plan.input_files, vec!["a.png", "b.jpg"]);
        assert_eq!(plan.output_dir, PathBuf::from("thumbs"));
        assert_eq!(plan.format, OutputFormat::Jpg);
        assert_eq!(plan.hint, ScalingHint::Nearest);
    }

    #[test]
    fn optional_options_have_defaults() {
        let plan = parse_args(os_args(&["resizer", "-d", "100x100", "a.png"])).unwrap();
        assert_eq!(plan.output_dir, PathBuf::from("output"));
        assert_eq!(plan.format, OutputFormat::Png);
        assert_eq!(plan.hint, ScalingHint::Bicubic);
    }

    #[test]
    fn file_list_is_split_in_order() {
        let plan = parse_args(os_args(&["resizer", "-d", "5x5", "c.png,a.png,b.png"])).unwrap();
        assert_eq!(plan.input_files, vec!["c.png", "a.png", "b.png"]);
    }

    #[test]
    fn missing_dimensions_is_rejected() {
        let err = parse_args(os_args(&["resizer", "a.png"])).unwrap_err();
        assert!(err.0.contains("missing required option"), "{err}");
    }

    #[test]
    fn missing_file_list_is_rejected() {
        let err = parse_args(os_args(&["resizer", "-d", "5x5"])).unwrap_err();
        assert!(err.0.contains("missing argument"), "{err}");
    }

    #[test]
    fn missing_option_value_is_rejected() {
        let err = parse_args(os_args(&["resizer", "-d"])).unwrap_err();
        assert!(err.0.contains("requires a value"), "{err}");
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        let err = parse_args(os_args(&["resizer", "-d", "axb", "a.png"])).unwrap_err();
        assert!(err.0.contains("invalid dimensions"), "{err}");
    }

    #[test]
    fn invalid_format_is_rejected() {
        let err = parse_args(os_args(&["resizer", "-d", "5x5", "-f", "webp", "a.png"])).unwrap_err();
        assert!(err.0.contains("invalid output image format"), "{err}");
    }

    #[test]
    fn invalid_hint_is_rejected() {
        let err =
            parse_args(os_args(&["resizer", "-d", "5x5", "-s", "bilinear", "a.png"])).unwrap_err();
        assert!(err.0.contains("invalid scaling hint"), "{err}");
    }

    #[test]
    fn unrecognized_option_is_rejected() {
        let err = parse_args(os_args(&["resizer", "--frobnicate", "a.png"])).unwrap_err();
        assert!(err.0.contains("unrecognized option"), "{err}");
        let err = parse_args(os_args(&["resizer", "-z", "a.png"])).unwrap_err();
        assert!(err.0.contains("unrecognized option"), "{err}");
    }

    #[test]
    fn extra_positional_is_rejected() {
        let err = parse_args(os_args(&["resizer", "-d", "5x5", "a.png", "b.png"])).unwrap_err();
        assert!(err.0.contains("unexpected extra argument"), "{err}");
    }
}
