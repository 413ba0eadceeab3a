//! Literal extraction.
//!
//! Scans raw component source for quote-delimited runs and keeps the ones that
//! read like human text. The source is treated as a single blob and tokenized
//! in one left-to-right pass over both quote styles; a quote character inside
//! a run of the other style is part of that run.
//!
//! The quote-run tokenizer and the position helpers are shared with the
//! rewriters so that extraction and replacement agree on what a literal is.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::config::Config;
use crate::utils::{contains_alphabetic, is_all_uppercase, is_ident_char};

/// Shortest literal (in characters) considered for extraction.
pub const MIN_LITERAL_LEN: usize = 3;

/// Substrings that mark a literal as code rather than prose.
pub const CODE_MARKERS: &[&str] = &[
    "className",
    "onClick",
    "onChange",
    "http",
    "www",
    ".jsx",
    ".js",
    "()",
    "=>",
];

/// Declaration keywords, matched as whole words.
pub const DECLARATION_KEYWORDS: &[&str] = &["const", "let", "var"];

static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^'((?:[^'\\\n]|\\.)*)'").unwrap());
static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"((?:[^"\\\n]|\\.)*)""#).unwrap());

/// Quote delimiter style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'\'' => Some(Quote::Single),
            b'"' => Some(Quote::Double),
            _ => None,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Quote::Single => &SINGLE_QUOTED,
            Quote::Double => &DOUBLE_QUOTED,
        }
    }
}

/// One quote-delimited run in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteRun<'a> {
    pub quote: Quote,
    /// Byte offset of the opening quote.
    pub start: usize,
    /// Byte offset just past the closing quote.
    pub end: usize,
    /// Run content exactly as written, escapes included.
    pub raw: &'a str,
}

impl QuoteRun<'_> {
    pub fn text(&self) -> String {
        unescape(self.raw)
    }
}

/// Tokenize quoted runs of both styles, left to right, non-overlapping.
///
/// An opening quote with no closing quote on the same line is skipped.
pub fn literal_runs(source: &str) -> Vec<QuoteRun<'_>> {
    let mut runs = Vec::new();
    let mut pos = 0;
    while let Some(offset) = source[pos..].find(['\'', '"']) {
        let start = pos + offset;
        let Some(quote) = Quote::from_byte(source.as_bytes()[start]) else {
            break;
        };
        let run = quote.pattern().captures(&source[start..]).and_then(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(QuoteRun {
                quote,
                start,
                end: start + whole.end(),
                raw: inner.as_str(),
            })
        });
        match run {
            Some(run) => {
                pos = run.end;
                runs.push(run);
            }
            None => pos = start + 1,
        }
    }
    runs
}

/// Resolve JS string escapes in a run's raw content.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(esc @ ('\'' | '"' | '\\' | '`')) => out.push(esc),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// If the text before `pos` ends with `name=` (no spaces, name preceded by
/// whitespace) inside a markup opening tag, return the attribute name.
///
/// `let label='x'` and `({ label='x' })` are plain JS and yield `None`.
pub fn attribute_name_before(source: &str, pos: usize) -> Option<&str> {
    let before = source[..pos].strip_suffix('=')?;
    let name_start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_ident_char(*c) || *c == '-')
        .last()
        .map(|(i, _)| i)?;
    let name = &before[name_start..];
    let leading_ok = before[..name_start]
        .chars()
        .next_back()
        .is_none_or(char::is_whitespace);
    let starts_like_name = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    (leading_ok && starts_like_name && inside_opening_tag(source, name_start)).then_some(name)
}

/// True when `pos` sits inside an unclosed `<Tag ...` opening tag.
///
/// Scans backwards, stepping over earlier quoted attribute values and
/// balanced `{...}` expression containers.
fn inside_opening_tag(source: &str, pos: usize) -> bool {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = pos;
    while i > 0 {
        i -= 1;
        match bytes[i] {
            b'}' => depth += 1,
            b'{' if depth > 0 => depth -= 1,
            quote @ (b'"' | b'\'') if depth == 0 => match source[..i].rfind(quote as char) {
                Some(open) => i = open,
                None => return false,
            },
            b'{' | b';' | b'(' | b'>' if depth == 0 => return false,
            b'<' if depth == 0 => {
                return bytes.get(i + 1).is_some_and(|b| b.is_ascii_alphabetic());
            }
            _ => {}
        }
    }
    false
}

/// True when the text before `pos` ends with an opening call of `callee`,
/// i.e. `callee(` with optional whitespace, where `callee` is a whole identifier.
pub fn follows_call_of(source: &str, pos: usize, callee: &str) -> bool {
    let Some(before) = source[..pos].trim_end().strip_suffix('(') else {
        return false;
    };
    let Some(head) = before.trim_end().strip_suffix(callee) else {
        return false;
    };
    !head
        .chars()
        .next_back()
        .is_some_and(|c| is_ident_char(c) || c == '.')
}

/// True when the quoted run at `pos` is a module specifier.
fn is_module_specifier(source: &str, pos: usize) -> bool {
    let before = source[..pos].trim_end();
    let ends_with_word = |word: &str| {
        before.strip_suffix(word).is_some_and(|head| {
            !head.chars().next_back().is_some_and(is_ident_char)
        })
    };
    ends_with_word("from") || ends_with_word("import") || follows_call_of(source, pos, "require")
}

/// Options controlling which quoted runs count as literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Name of the runtime accessor; its arguments are keys, never literals.
    pub accessor: String,
    /// Additional code markers on top of [`CODE_MARKERS`].
    pub extra_markers: Vec<String>,
    /// Attributes whose values are structural (`className="..."`).
    pub ignored_attributes: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ExtractOptions {
    fn from(config: &Config) -> Self {
        Self {
            accessor: config.accessor.clone(),
            extra_markers: config.extra_markers.clone(),
            ignored_attributes: config.ignored_attributes.clone(),
        }
    }
}

/// A candidate literal and where it was first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedString {
    pub text: String,
    /// Byte offset of the opening quote of the first occurrence.
    pub offset: usize,
}

pub struct LiteralExtractor {
    options: ExtractOptions,
}

impl LiteralExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract candidate literals, deduplicated by text, in first-occurrence order.
    pub fn extract(&self, source: &str) -> Vec<ExtractedString> {
        let mut candidates: Vec<ExtractedString> = literal_runs(source)
            .into_iter()
            .filter(|run| !self.is_structural_position(source, run.start))
            .map(|run| ExtractedString {
                text: run.text(),
                offset: run.start,
            })
            .filter(|candidate| self.is_prose(&candidate.text))
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        candidates.retain(|candidate| seen.insert(candidate.text.clone()));
        candidates
    }

    /// Content filter: length, code markers, all-caps constants.
    pub fn is_prose(&self, text: &str) -> bool {
        if text.chars().count() < MIN_LITERAL_LEN {
            return false;
        }
        let has_marker = CODE_MARKERS
            .iter()
            .copied()
            .chain(self.options.extra_markers.iter().map(String::as_str))
            .any(|marker| !marker.is_empty() && text.contains(marker));
        if has_marker {
            return false;
        }
        let has_keyword = text
            .split(|c: char| !is_ident_char(c))
            .any(|word| DECLARATION_KEYWORDS.contains(&word));
        if has_keyword {
            return false;
        }
        !is_all_uppercase(text) && contains_alphabetic(text)
    }

    /// Position filter: accessor arguments, module specifiers, structural attributes.
    pub fn is_structural_position(&self, source: &str, pos: usize) -> bool {
        if follows_call_of(source, pos, &self.options.accessor) || is_module_specifier(source, pos)
        {
            return true;
        }
        attribute_name_before(source, pos).is_some_and(|name| {
            self.options
                .ignored_attributes
                .iter()
                .any(|ignored| ignored == name)
        })
    }
}
