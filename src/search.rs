//! Substring search over character slots.
//!
//! Horspool's variant of Boyer-Moore: a bad-character table records, for
//! each needle character except the last, how far the window may jump when
//! that character ends a failed window.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A compiled needle.
pub struct Pattern {
    needle: SmallVec<[char; 16]>,
    shift: FxHashMap<char, usize>,
}

impl Pattern {
    pub fn new(needle: &str) -> Pattern {
        let needle: SmallVec<[char; 16]> = needle.chars().collect();
        let mut shift = FxHashMap::default();
        let last = needle.len().saturating_sub(1);
        for (i, &c) in needle.iter().enumerate().take(last) {
            shift.insert(c, last - i);
        }
        return Pattern { needle, shift };
    }

    /// Needle length in characters.
    pub fn len(&self) -> usize {
        return self.needle.len();
    }

    /// First index `>= from` where the needle occurs in `haystack`.
    ///
    /// An empty needle matches at `from` as long as `from <= haystack.len()`.
    pub fn find_in(&self, haystack: &[char], from: usize) -> Option<usize> {
        let m = self.needle.len();
        if from > haystack.len() {
            return None;
        }
        if m == 0 {
            return Some(from);
        }

        let mut start = from;
        while start + m <= haystack.len() {
            let window = &haystack[start..start + m];
            if window == self.needle.as_slice() {
                return Some(start);
            }
            let tail = window[m - 1];
            start += self.shift.get(&tail).copied().unwrap_or(m);
        }

        return None;
    }
}
