//! Part ordering.
//!
//! A strategy string lists sort keys separated by `>`, most significant first.
//! A leading `-` reverses a key. Unknown or empty keys are skipped.
//!
//! ```rust
//! use u_cutlist::{PartDef, PartOrderStrategy};
//!
//! let strategy = PartOrderStrategy::parse("count>-name");
//! let mut a = PartDef::new("a");
//! a.add_count(2);
//! let mut b = PartDef::new("b");
//! b.add_count(5);
//! assert!(strategy.compare(&a, &b).is_lt());
//! ```
//!
//! Each key appends its values to one tuple per part; a reversed key appends
//! them crosswise. The final result is a single lexicographic comparison of the
//! two tuples, so mixed directions never need a sign flip.

use std::cmp::Ordering;

use crate::part_def::PartDef;
use u_cutlist_core::Length;

/// A value contributed by a sort key.
#[derive(Debug, Clone)]
pub enum SortValue {
    /// A length.
    Length(Length),
    /// A count.
    Count(usize),
    /// A text, compared bytewise.
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Length(_) => 0,
            Self::Count(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Length(a), Self::Length(b)) => a.total_cmp(b),
            (Self::Count(a), Self::Count(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

/// A named sort key and the values it extracts from a part.
#[derive(Debug)]
pub struct SortKey {
    /// Token used in strategy strings.
    pub token: &'static str,
    extract: fn(&PartDef, &mut Vec<SortValue>),
}

impl SortKey {
    /// Appends this key's values for `part`.
    pub fn values_into(&self, part: &PartDef, out: &mut Vec<SortValue>) {
        (self.extract)(part, out)
    }

    /// Looks up a key by token.
    pub fn from_token(token: &str) -> Option<&'static SortKey> {
        SORT_KEYS.iter().find(|key| key.token == token)
    }
}

fn length_values(part: &PartDef, out: &mut Vec<SortValue>) {
    out.push(SortValue::Length(part.cumulative_cutting_length()));
}

fn width_values(part: &PartDef, out: &mut Vec<SortValue>) {
    out.push(SortValue::Length(part.cumulative_cutting_width()));
}

fn thickness_values(part: &PartDef, out: &mut Vec<SortValue>) {
    out.push(SortValue::Length(part.size().thickness));
}

fn name_values(part: &PartDef, out: &mut Vec<SortValue>) {
    out.push(SortValue::Text(part.name().to_lowercase()));
}

fn count_values(part: &PartDef, out: &mut Vec<SortValue>) {
    out.push(SortValue::Count(part.count()));
}

// Count first so sparsely banded parts come before densely banded ones.
fn edge_pattern_values(part: &PartDef, out: &mut Vec<SortValue>) {
    out.push(SortValue::Count(part.edge_count()));
    out.push(SortValue::Text(part.edge_pattern().unwrap_or_default().to_string()));
}

/// Every supported sort key.
pub static SORT_KEYS: [SortKey; 6] = [
    SortKey {
        token: "length",
        extract: length_values,
    },
    SortKey {
        token: "width",
        extract: width_values,
    },
    SortKey {
        token: "thickness",
        extract: thickness_values,
    },
    SortKey {
        token: "name",
        extract: name_values,
    },
    SortKey {
        token: "count",
        extract: count_values,
    },
    SortKey {
        token: "edge_pattern",
        extract: edge_pattern_values,
    },
];

/// Sort direction of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// A parsed strategy.
#[derive(Debug, Clone, Default)]
pub struct PartOrderStrategy {
    terms: Vec<(&'static SortKey, SortDirection)>,
}

impl PartOrderStrategy {
    /// Parses a strategy string. Never fails: unusable tokens are skipped.
    pub fn parse(strategy: &str) -> Self {
        let mut terms = Vec::new();
        for token in strategy.split('>').map(str::trim) {
            if token.is_empty() {
                continue;
            }
            let (token, direction) = match token.strip_prefix('-') {
                Some(rest) => (rest, SortDirection::Descending),
                None => (token, SortDirection::Ascending),
            };
            match SortKey::from_token(token) {
                Some(key) => terms.push((key, direction)),
                None => log::debug!("Ignoring unknown part order key '{}'", token),
            }
        }
        Self { terms }
    }

    /// Parsed keys in significance order.
    pub fn terms(&self) -> impl Iterator<Item = (&'static str, SortDirection)> + '_ {
        self.terms.iter().map(|(key, direction)| (key.token, *direction))
    }

    /// Returns true if no usable key was found.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compares two parts.
    pub fn compare(&self, a: &PartDef, b: &PartDef) -> Ordering {
        let mut a_values = Vec::with_capacity(self.terms.len() + 1);
        let mut b_values = Vec::with_capacity(self.terms.len() + 1);
        for (key, direction) in &self.terms {
            match direction {
                SortDirection::Ascending => {
                    key.values_into(a, &mut a_values);
                    key.values_into(b, &mut b_values);
                }
                SortDirection::Descending => {
                    key.values_into(b, &mut a_values);
                    key.values_into(a, &mut b_values);
                }
            }
        }
        a_values.cmp(&b_values)
    }

    /// Stable-sorts parts.
    pub fn sort(&self, parts: &mut [PartDef]) {
        parts.sort_by(|a, b| self.compare(a, b));
    }
}

/// Compares two parts with a strategy string.
pub fn part_order(a: &PartDef, b: &PartDef, strategy: &str) -> Ordering {
    PartOrderStrategy::parse(strategy).compare(a, b)
}
