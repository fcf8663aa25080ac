use std::borrow::Cow;

const EM_DASH: char = '\u{2014}';
const EN_DASH: char = '\u{2013}';

pub trait WordCounter: Send + Sync {
    fn count(&self, text: &str) -> usize;
}

/// Counts whitespace-delimited words after turning dash separators into spaces.
///
/// A single `-` keeps a hyphenated compound together ("well-being" is one
/// word); em dashes, en dashes and runs of two or more hyphens split words.
#[derive(Debug, Default, Clone, Copy)]
pub struct DashAwareCounter;

impl WordCounter for DashAwareCounter {
    fn count(&self, text: &str) -> usize {
        count_words(text)
    }
}

pub fn count_words(text: &str) -> usize {
    normalize_separators(text).split_whitespace().count()
}

/// Replaces every em dash, en dash and maximal run of 2+ hyphens with one space.
///
/// Returns the input borrowed when it contains no such separator, so running
/// it over its own output never changes anything.
pub fn normalize_separators(text: &str) -> Cow<'_, str> {
    if !text.contains([EM_DASH, EN_DASH]) && !text.contains("--") {
        return Cow::Borrowed(text);
    }

    let mut normalized = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            EM_DASH | EN_DASH => normalized.push(' '),
            '-' => {
                let mut run = 1usize;
                while chars.next_if_eq(&'-').is_some() {
                    run += 1;
                }
                normalized.push(if run >= 2 { ' ' } else { '-' });
            }
            other => normalized.push(other),
        }
    }
    Cow::Owned(normalized)
}
