//! Sentence-level de-duplication across revelations.
//!
//! The generator's templates repeat across cards, and quote injection can
//! place the same quote twice; this pass guarantees that no normalized
//! sentence survives in more than one revelation. Normalization is a pure
//! string transformation: strip HTML tags, strip wrapping quote
//! characters, collapse whitespace, strip trailing punctuation,
//! lowercase, strip diacritics.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Quote characters stripped from sentence edges during normalization.
const QUOTE_CHARS: &[char] = &['"', '\'', '“', '”', '‘', '’', '«', '»', '„', '‟'];

/// Trailing punctuation stripped during normalization.
const TRAILING_PUNCTUATION: &[char] = &['.', '!', '?', '…', ',', ';', ':'];

/// Pre-compiled normalization patterns. Compiled once, used many times.
static PATTERNS: OnceLock<NormalizerPatterns> = OnceLock::new();

#[derive(Debug)]
struct NormalizerPatterns {
    html_tag: Regex,
    whitespace: Regex,
}

impl NormalizerPatterns {
    fn new() -> Self {
        Self {
            html_tag: Regex::new(r"<[^>]+>").expect("html tag regex must compile"),
            whitespace: Regex::new(r"\s+").expect("whitespace regex must compile"),
        }
    }
}

fn patterns() -> &'static NormalizerPatterns {
    PATTERNS.get_or_init(NormalizerPatterns::new)
}

/// Normalize one sentence for duplicate comparison.
///
/// # Example
///
/// ```
/// use life_clock_engine::insight::dedup::normalize_sentence;
///
/// let raw = "<span class=\"quote-gold\">“Mood is  weather;\u{a0}structure is climate.”</span>";
/// assert_eq!(normalize_sentence(raw), "mood is weather; structure is climate");
/// ```
pub fn normalize_sentence(sentence: &str) -> String {
    let patterns = patterns();

    // 1. Strip HTML tags.
    let stripped = patterns.html_tag.replace_all(sentence, "");
    // 2. Strip wrapping quote characters (and surrounding space).
    let unquoted = stripped.trim().trim_matches(QUOTE_CHARS).trim();
    // 3. Collapse whitespace runs (including non-breaking spaces).
    let collapsed = patterns.whitespace.replace_all(unquoted, " ");
    // 4. Strip trailing punctuation.
    let trimmed = collapsed.trim_end_matches(TRAILING_PUNCTUATION).trim_end();
    // 5. Lowercase.
    let lowered = trimmed.to_lowercase();
    // 6. Strip diacritics: NFD decomposition, drop combining marks.
    lowered.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Split a paragraph into sentence units, keeping `<span …>…</span>`
/// segments atomic so injected quotes travel as single sentences.
pub fn split_sentences(paragraph: &str) -> Vec<String> {
    let mut units = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < paragraph.len() {
        let rest = &paragraph[i..];

        if rest.starts_with("<span") {
            if let Some(close) = rest.find("</span>") {
                let block_end = i + close + "</span>".len();
                let flushed = current.trim();
                if !flushed.is_empty() {
                    units.push(flushed.to_string());
                }
                current = String::new();
                units.push(paragraph[i..block_end].trim().to_string());
                i = block_end;
                continue;
            }
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        current.push(ch);
        i += ch.len_utf8();

        if matches!(ch, '.' | '!' | '?' | '…') {
            let at_boundary = paragraph[i..]
                .chars()
                .next()
                .map_or(true, |next| next.is_whitespace());
            if at_boundary {
                let unit = current.trim();
                if !unit.is_empty() {
                    units.push(unit.to_string());
                }
                current = String::new();
            }
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        units.push(tail.to_string());
    }
    units
}

/// Stateful cross-revelation de-duplication.
///
/// One instance runs over all revelations of a report in final list
/// order; the seen-set is global across the whole run and is reused by
/// the golden-quote pass for its uniqueness check.
#[derive(Debug, Default)]
pub struct DeduplicationPass {
    seen: HashSet<String>,
}

impl DeduplicationPass {
    /// Fresh pass with an empty seen-set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a normalized sentence was already emitted.
    #[inline]
    pub fn contains(&self, normalized: &str) -> bool {
        self.seen.contains(normalized)
    }

    /// Record a normalized sentence as emitted.
    #[inline]
    pub fn insert(&mut self, normalized: String) -> bool {
        self.seen.insert(normalized)
    }

    /// De-duplicate one revelation body against everything seen so far.
    ///
    /// Paragraph structure is preserved; paragraphs emptied by the pass
    /// are dropped. A body that would lose every sentence keeps its
    /// original first sentence instead, so no revelation ever ends up
    /// empty.
    pub fn apply(&mut self, insight: &str) -> String {
        let mut kept_paragraphs: Vec<String> = Vec::new();
        let mut first_unit: Option<String> = None;

        for paragraph in insight.split("\n\n") {
            let mut kept: Vec<String> = Vec::new();
            for unit in split_sentences(paragraph) {
                if first_unit.is_none() {
                    first_unit = Some(unit.clone());
                }
                let normalized = normalize_sentence(&unit);
                if normalized.is_empty() || self.seen.contains(&normalized) {
                    continue;
                }
                self.seen.insert(normalized);
                kept.push(unit);
            }
            if !kept.is_empty() {
                kept_paragraphs.push(kept.join(" "));
            }
        }

        if kept_paragraphs.is_empty() {
            warn!("revelation emptied by de-duplication, keeping first sentence");
            return first_unit.unwrap_or_else(|| insight.trim().to_string());
        }

        kept_paragraphs.join("\n\n")
    }
}
