use std::{ffi::OsStr, str::FromStr};

use crate::{error::ResizeError, rz_err};

/// Target size in pixels, parsed from a `<width>x<height>` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Dimensions {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(OsStr::new(s))
    }
}

impl TryFrom<&OsStr> for Dimensions {
    type Error = ResizeError;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        let invalid = || {
            rz_err!(
                "invalid dimensions `{}': expected <width>x<height>, e.g. 1280x720",
                s.to_string_lossy()
            )
        };

        let text = s.to_str().ok_or_else(invalid)?;
        // The separator is a literal lowercase `x`, exactly once.
        let (width, height) = text.split_once('x').ok_or_else(invalid)?;
        if height.contains('x') {
            return Err(invalid());
        }
        let width: u32 = width.parse().map_err(|_| invalid())?;
        let height: u32 = height.parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(Dimensions { width, height })
    }
}
