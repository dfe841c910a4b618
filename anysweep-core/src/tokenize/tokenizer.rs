use crate::tokenize::Record;
use once_cell::sync::Lazy;
use regex::Regex;

/// A key is a run of non-space characters without `=` or `"`. A value is
/// either a complete double-quoted string or a bare token that starts with
/// neither a quote nor `=` and runs to the next whitespace (or end of line).
///
/// The regex engine runs in linear time, so long or malformed lines cannot
/// trigger backtracking blowups.
static KEY_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<key>[^\s="]+)=(?:"(?P<quoted>[^"]*)"|(?P<bare>[^\s"=]\S*))"#)
        .expect("key=value pattern is valid")
});

pub trait LineTokenizer {
    fn tokenize(&self, line: &str) -> Record;
}

/// Tokenizer for `key=value` / `key="quoted value"` log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyValueTokenizer;

impl LineTokenizer for KeyValueTokenizer {
    fn tokenize(&self, line: &str) -> Record {
        KEY_VALUE
            .captures_iter(line)
            .filter_map(|caps| {
                let key = caps.name("key")?.as_str().trim();
                let value = caps
                    .name("quoted")
                    .or_else(|| caps.name("bare"))?
                    .as_str()
                    .trim();
                Some((key, value))
            })
            .collect()
    }
}

pub fn tokenize_lines<'a, T, I>(tokenizer: &T, lines: I) -> Vec<Record>
where
    T: LineTokenizer + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| tokenizer.tokenize(line))
        .collect()
}
