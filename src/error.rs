use std::fmt::{Debug, Display};

pub struct ResizeError(pub String);

impl Display for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ResizeError").field(&self.0).finish()
    }
}

impl std::error::Error for ResizeError {}

#[macro_export]
macro_rules! rz_err {
    ($($arg:tt)*) => {
        ResizeError(format!(
            "resizer: {} @ {}:{}:{}",
            format!($($arg)*),
            file!(),
            line!(),
            column!()
        ))
    };
}
