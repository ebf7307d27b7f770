//! An indexed, immutable character sequence.
//!
//! `TextBuffer` keeps the original text alongside one slot per character.
//! Every operation reads the slots and returns a fresh `String` (or a list
//! of them); the buffer itself never changes after construction.
//!
//! Slots hold Unicode scalar values. Grapheme clusters are not considered.

use std::fmt;

use smallvec::SmallVec;

use crate::position::Position;
use crate::search::Pattern;
use crate::value::Value;

/// Inline capacity for the character slots.
const INLINE_CHARS: usize = 32;

/// A character sequence with standard string operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct TextBuffer {
    original: String,
    chars: SmallVec<[char; INLINE_CHARS]>,
}

impl TextBuffer {
    pub fn new(text: &str) -> TextBuffer {
        return TextBuffer {
            original: text.to_string(),
            chars: text.chars().collect(),
        };
    }

    /// Number of character slots.
    pub fn len(&self) -> usize {
        return self.chars.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.chars.is_empty();
    }

    /// The character in slot `index`.
    pub fn get(&self, index: usize) -> Option<char> {
        return self.chars.get(index).copied();
    }

    pub fn as_str(&self) -> &str {
        return &self.original;
    }

    pub fn chars(&self) -> &[char] {
        return &self.chars;
    }

    /// Collect slots `[start, end)` into a string. Both bounds must be in range.
    fn collect_range(&self, start: usize, end: usize) -> String {
        return self.chars[start..end].iter().collect();
    }

    // -------------------------------------------------------------------------
    // Extraction
    // -------------------------------------------------------------------------

    /// The character at `index` as a string, or `""` when out of range.
    ///
    /// An omitted or non-numeric index reads slot 0.
    pub fn char_at(&self, index: impl Into<Position>) -> String {
        let index = index.into().value().unwrap_or(0);
        if index < 0 || index >= self.len() as i64 {
            return String::new();
        }
        return self.chars[index as usize].to_string();
    }

    /// Characters between `start` and `end`, swapping the bounds if needed.
    ///
    /// Negative or non-numeric bounds become 0; bounds past the end become
    /// the length; an omitted `end` is the length.
    pub fn substring(&self, start: impl Into<Position>, end: impl Into<Position>) -> String {
        let len = self.len();
        let clamp = |i: i64| i.clamp(0, len as i64) as usize;

        let start = start.into().value().map_or(0, clamp);
        let end = match end.into() {
            Position::Omitted => len,
            Position::NotANumber => 0,
            Position::At(i) => clamp(i),
        };

        let (start, end) = if start > end { (end, start) } else { (start, end) };
        return self.collect_range(start, end);
    }

    /// Characters between `start` and `end` with negative offsets counted
    /// from the end. Never swaps: an inverted range is empty.
    ///
    /// An omitted `start` is 0; an omitted `end` is the length; a
    /// non-numeric bound is 0.
    pub fn slice(&self, start: impl Into<Position>, end: impl Into<Position>) -> String {
        let len = self.len() as i64;

        let mut start = start.into().value().unwrap_or(0);
        let mut end = match end.into() {
            Position::Omitted => len,
            Position::NotANumber => 0,
            Position::At(i) => i,
        };
        if start < 0 {
            start += len;
        }
        if end < 0 {
            end += len;
        }
        if end > len {
            end = len;
        }
        if end < start || start > len {
            return String::new();
        }

        // Offsets that still point before slot 0 read nothing there.
        let start = start.max(0) as usize;
        let end = end.max(0) as usize;
        if end <= start {
            return String::new();
        }
        return self.collect_range(start, end);
    }

    /// The full text repeated `count` times.
    pub fn repeat(&self, count: usize) -> String {
        if count == 0 || self.is_empty() {
            return String::new();
        }
        let mut repeated = String::with_capacity(self.original.len() * count);
        for _ in 0..count {
            repeated.push_str(&self.original);
        }
        return repeated;
    }

    /// The original text followed by every string argument, in order.
    /// Arguments that are not strings are skipped.
    pub fn concat<I, V>(&self, strings: I) -> String
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut joined = self.original.clone();
        for value in strings {
            if let Value::Str(s) = value.into() {
                joined.push_str(&s);
            }
        }
        return joined;
    }

    /// The text with leading and trailing ASCII spaces removed.
    ///
    /// Only U+0020 is stripped; tabs and newlines are kept.
    pub fn trim(&self) -> String {
        let mut start = 0;
        let mut end = self.len();
        while start < end && self.chars[start] == ' ' {
            start += 1;
        }
        while end > start && self.chars[end - 1] == ' ' {
            end -= 1;
        }
        return self.collect_range(start, end);
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Whether `search` occurs at or after `position`.
    ///
    /// An empty `search` is always found. A negative or non-numeric position
    /// searches from 0; a position past the end finds nothing.
    pub fn includes(&self, search: &str, position: impl Into<Position>) -> bool {
        if search.is_empty() {
            return true;
        }
        let position = position.into().value().unwrap_or(0).max(0);
        if position > self.len() as i64 {
            return false;
        }
        return Pattern::new(search).find_in(&self.chars, position as usize).is_some();
    }

    /// Slot index of the first occurrence of `search` at or after `from`.
    ///
    /// An empty `search` is found at 0. A negative `from` searches from 0; a
    /// `from` at or past the end finds nothing.
    pub fn index_of(&self, search: &str, from: impl Into<Position>) -> Option<usize> {
        if search.is_empty() {
            return Some(0);
        }
        let from = from.into().value().unwrap_or(0).max(0);
        if from >= self.len() as i64 {
            return None;
        }
        return Pattern::new(search).find_in(&self.chars, from as usize);
    }

    /// Split around each occurrence of `delimiter`, emitting at most `limit`
    /// segments.
    ///
    /// A missing or empty delimiter yields the whole text as one segment.
    /// An empty buffer yields no segments. Occurrences are found left to
    /// right without overlap, so a delimiter with a repeated prefix such as
    /// `"aab"` still splits `"aaab"` into `["a", ""]`. A delimiter at the very
    /// end yields a trailing empty segment.
    pub fn split(&self, delimiter: Option<&str>, limit: Option<usize>) -> Vec<String> {
        let limit = limit.unwrap_or(usize::MAX);
        if self.is_empty() || limit == 0 {
            return Vec::new();
        }
        let delimiter = match delimiter {
            Some(d) if !d.is_empty() => d,
            _ => return vec![self.original.clone()],
        };
        log::trace!("split: len={} delimiter={:?} limit={}", self.len(), delimiter, limit);

        let pattern = Pattern::new(delimiter);
        let mut segments = Vec::new();
        let mut start = 0;
        while let Some(found) = pattern.find_in(&self.chars, start) {
            segments.push(self.collect_range(start, found));
            if segments.len() == limit {
                return segments;
            }
            start = found + pattern.len();
        }
        segments.push(self.collect_range(start, self.len()));

        return segments;
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.original);
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> TextBuffer {
        return TextBuffer::new(text);
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> TextBuffer {
        let chars = text.chars().collect();
        return TextBuffer { original: text, chars };
    }
}

impl From<TextBuffer> for String {
    fn from(buffer: TextBuffer) -> String {
        return buffer.original;
    }
}

impl PartialEq<str> for TextBuffer {
    fn eq(&self, other: &str) -> bool {
        return self.original == other;
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        return self.original == *other;
    }
}
