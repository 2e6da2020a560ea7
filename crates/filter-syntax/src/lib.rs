pub mod builder;
pub mod error;

pub use builder::{DEFAULT_MAX_DEPTH, ParseOptions, parse, parse_with};
pub use error::ParseError;
