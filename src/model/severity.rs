//! Severity classification and the severity color contract.

use crate::model::cell::CellStyle;
use crate::model::column::normalize;

/// Recognized severity levels, in sort order (most severe first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Informational,
}

impl Severity {
    /// Parse a cell text into a severity level. Matching is on the
    /// normalized form (lowercase, whitespace stripped).
    pub fn parse(text: &str) -> Option<Self> {
        match normalize(text).as_str() {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "informational" => Some(Self::Informational),
            _ => None,
        }
    }

    /// Rank used by the sort comparator: critical(0) .. informational(4).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
            Self::Informational => 4,
        }
    }
}

/// Sort rank for arbitrary cell text: recognized severities rank 0..=4,
/// anything else ranks below them all (5).
pub fn severity_rank(text: &str) -> u8 {
    Severity::parse(text).map_or(5, |s| s.rank())
}

/// Severity color contract: a total function over cell text.
///
/// `informational` and all unrecognized values map to the neutral default.
pub fn severity_style(text: &str) -> CellStyle {
    match Severity::parse(text) {
        Some(Severity::Critical) => CellStyle::bold("#ff353f"),
        Some(Severity::High) => CellStyle::bold("#e6653e"),
        Some(Severity::Medium) => CellStyle::color("#f2c94c"),
        Some(Severity::Low) => CellStyle::color("#27ae60"),
        _ => CellStyle::color("white"),
    }
}

// ===== Tests =====
