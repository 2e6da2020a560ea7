//! Translates filter trees into parameterized SQL predicates.

use filter_syntax::ParseOptions;
use model::SqlFragment;

pub mod error;
pub mod namer;
pub mod operator;
pub mod translate;
pub mod whitelist;

pub use error::{FilterError, TranslateError};
pub use namer::ParamNamer;
pub use operator::Operator;
pub use translate::Translator;
pub use whitelist::Whitelist;

/// Parses `input` and translates the resulting tree in one go.
///
/// Blank input is "no filter" and produces an empty fragment.
pub fn json_to_sql(
    input: &str,
    options: &ParseOptions,
    translator: &Translator,
) -> Result<SqlFragment, FilterError> {
    match filter_syntax::parse_with(input, options)? {
        Some(root) => Ok(translator.translate(&root)?),
        None => Ok(SqlFragment::empty()),
    }
}
