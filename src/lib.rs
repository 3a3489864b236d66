//! A small collection of stand-alone helpers: first-anchor extraction from
//! HTML fragments, case conversion, list reshaping, pretty JSON output and a
//! dotted-path registry.

pub mod config;
pub mod dict;
pub mod error;
pub mod lists;
pub mod parsers;
pub mod pretty;
pub mod registry;
pub mod results;
pub mod transforms;
pub mod utils;

// Re-export commonly used types for convenience
pub use dict::DictObject;
pub use error::{Error, Result};
pub use lists::{head_tail_middle, list_to_rows, rows_to_columns};
pub use parsers::{parse_link, parse_link_bytes};
pub use pretty::{pprint, pretty_json};
pub use registry::Registry;
pub use results::ParsedLink;
pub use utils::camelcase_to_underscore;
