//! Parsers for the values of specific command-line options.

mod dimensions;
pub use dimensions::*;
mod format;
pub use format::*;
mod hint;
pub use hint::*;
