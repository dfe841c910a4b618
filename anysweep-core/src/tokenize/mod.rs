//! Line tokenization.
//!
//! A traffic log export is a sequence of lines shaped like
//!
//! ```text
//! date=2024-03-01 time=10:00:01 srcintf="port1" srcip=10.0.0.1 service="HTTP" rcvdbyte=512
//! ```
//!
//! Each line becomes a [`Record`]: a plain field-name to field-value mapping.
//! Tokenization is best effort. Fragments that do not look like `key=value`
//! are skipped, a line with nothing recognizable yields an empty record, and
//! no line ever produces an error.

mod record;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use record::Record;
pub use tokenizer::{KeyValueTokenizer, LineTokenizer, tokenize_lines};
