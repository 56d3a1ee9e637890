pub mod fetch;
pub mod parse;
pub mod present;
pub mod reference;
pub mod search;
pub mod table;

pub use fetch::{load_or_empty, load_table, RetrievalError, Source};
pub use parse::{parse, parse_default, DEFAULT_DELIMITER};
pub use search::{filter, par_filter, Matcher};
pub use table::{ParsedTable, Record};
