//! Natural ("human") ordering for id values
//!
//! A key splits text into alternating text and digit runs. Text runs compare
//! lowercased, digit runs compare by numeric value, so `ID2 < ID10`.

use std::cmp::Ordering;

/// One run of a natural sort key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Lowercased non-digit run (may be empty)
    Text(String),
    /// Digit run with leading zeros stripped
    Number(String),
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
            (Segment::Number(a), Segment::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            // Keys alternate text/number from the same start, so mixed pairs never meet
            (Segment::Number(_), Segment::Text(_)) => Ordering::Less,
            (Segment::Text(_), Segment::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key for numeric-aware ordering
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(Vec<Segment>);

impl NaturalKey {
    pub fn new(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut in_digits = false;

        for ch in text.chars() {
            let is_digit = ch.is_ascii_digit();
            if is_digit != in_digits {
                segments.push(make_segment(&current, in_digits));
                current.clear();
                in_digits = is_digit;
            }
            current.push(ch);
        }
        segments.push(make_segment(&current, in_digits));
        if in_digits {
            segments.push(Segment::Text(String::new()));
        }

        Self(segments)
    }

    #[allow(dead_code)]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

fn make_segment(run: &str, digits: bool) -> Segment {
    if digits {
        Segment::Number(run.trim_start_matches('0').to_string())
    } else {
        Segment::Text(run.to_lowercase())
    }
}

/// Stable natural sort of plain strings
pub fn sort_natural<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by_cached_key(|s| NaturalKey::new(s.as_ref()));
}
