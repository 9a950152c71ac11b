use serde::{Deserialize, Serialize};
use std::fmt;

// Letter grade shown next to every score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    /// Badge color class used by the front-end.
    pub fn color_class(self) -> &'static str {
        match self {
            Grade::A => "bg-green-700",
            Grade::B => "bg-yellow-500",
            Grade::C => "bg-orange-500",
            Grade::D => "bg-red-600",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Score rendered out of 100, rounded to the nearest integer.
pub fn score_percent(score: f64) -> u32 {
    if !score.is_finite() {
        return 0;
    }
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}
