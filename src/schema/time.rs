use serde::{Deserialize, Serialize};

/// An instant within a match: the regular minute plus stoppage time.
///
/// Ordering is by `base`, then by `added`, which the derive gives us from
/// the field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Time {
    pub base: u32,
    pub added: u32,
}

impl Time {
    pub fn new(base: u32, added: u32) -> Self {
        Self { base, added }
    }

    pub fn is_stoppage(&self) -> bool {
        self.added != 0
    }

    /// Stoppage minutes at 45' belong to the first half; any other
    /// stoppage belongs to the second.
    pub fn is_first_half_stoppage(&self) -> bool {
        self.is_stoppage() && self.base == 45
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.added != 0 {
            write!(f, "{} + {}", self.base, self.added)
        } else {
            write!(f, "{}", self.base)
        }
    }
}
