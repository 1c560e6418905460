//! Fallback part numbers.

use u_cutlist_core::{CutListConfig, Error, Result};

#[derive(Debug, Clone)]
enum Sequence {
    Letters(Vec<u8>),
    Digits(u64),
}

/// Infinite sequence of display numbers.
///
/// Letter mode counts like spreadsheet columns (`A`..`Z`, `AA`, `AB`, ...).
/// Digit mode counts `1, 2, 3, ...`.
#[derive(Debug, Clone)]
pub struct PartNumbering {
    sequence: Sequence,
}

impl PartNumbering {
    /// Creates a sequence starting at `start`.
    pub fn new(start: &str, letters: bool) -> Result<Self> {
        let invalid = || Error::ConfigError(format!("invalid part number start '{}'", start));
        let sequence = if letters {
            if start.is_empty() || !start.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(invalid());
            }
            Sequence::Letters(start.as_bytes().to_vec())
        } else {
            Sequence::Digits(start.parse().map_err(|_| invalid())?)
        };
        Ok(Self { sequence })
    }

    /// Creates the sequence described by a configuration.
    pub fn from_config(config: &CutListConfig) -> Result<Self> {
        Self::new(
            config.effective_part_number_start(),
            config.part_number_with_letters,
        )
    }

    /// Letter sequence starting at `A`.
    pub fn letters() -> Self {
        Self {
            sequence: Sequence::Letters(vec![b'A']),
        }
    }

    /// Digit sequence starting at `1`.
    pub fn digits() -> Self {
        Self {
            sequence: Sequence::Digits(1),
        }
    }
}

fn succ_letters(letters: &mut Vec<u8>) {
    for b in letters.iter_mut().rev() {
        if *b == b'Z' {
            *b = b'A';
        } else {
            *b += 1;
            return;
        }
    }
    letters.insert(0, b'A');
}

impl Iterator for PartNumbering {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let current = match &mut self.sequence {
            Sequence::Letters(letters) => {
                let current = String::from_utf8_lossy(letters).into_owned();
                succ_letters(letters);
                current
            }
            Sequence::Digits(n) => {
                let current = n.to_string();
                *n = n.saturating_add(1);
                current
            }
        };
        Some(current)
    }
}
