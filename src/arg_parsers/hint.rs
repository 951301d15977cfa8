use fast_image_resize::{FilterType, ResizeAlg};
use strum::EnumString;

/// Interpolation algorithm selector passed on the command line.
#[derive(EnumString, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScalingHint {
    #[strum(serialize = "n")]
    Nearest,
    #[default]
    #[strum(serialize = "b")]
    Bicubic,
}

impl ScalingHint {
    pub fn resize_alg(&self) -> ResizeAlg {
        match self {
            ScalingHint::Nearest => ResizeAlg::Nearest,
            ScalingHint::Bicubic => ResizeAlg::Convolution(FilterType::CatmullRom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScalingHint;

    #[test]
    fn parses_known_hints() {
        assert_eq!("n".parse(), Ok(ScalingHint::Nearest));
        assert_eq!("b".parse(), Ok(ScalingHint::Bicubic));
    }

    #[test]
    fn rejects_unknown_hints() {
        assert!("bicubic".parse::<ScalingHint>().is_err());
        assert!("x".parse::<ScalingHint>().is_err());
        assert!("".parse::<ScalingHint>().is_err());
    }

    #[test]
    fn defaults_to_bicubic() {
        assert_eq!(ScalingHint::default(), ScalingHint::Bicubic);
    }
}
