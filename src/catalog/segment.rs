use serde::Serialize;
use std::fmt;

use crate::models::name_initial;

/// One of the four alphabetical quick-navigation ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Segment {
    #[serde(rename = "A...C")]
    AToC,
    #[serde(rename = "D...J")]
    DToJ,
    #[serde(rename = "K...Q")]
    KToQ,
    #[serde(rename = "R...Z")]
    RToZ,
}

impl Segment {
    pub const ALL: [Segment; 4] = [Segment::AToC, Segment::DToJ, Segment::KToQ, Segment::RToZ];

    /// Parse a segment label such as `"D...J"`.
    ///
    /// Unknown or empty labels yield `None`, which callers treat as "no
    /// segment selected".
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label.trim())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Segment::AToC => "A...C",
            Segment::DToJ => "D...J",
            Segment::KToQ => "K...Q",
            Segment::RToZ => "R...Z",
        }
    }

    /// Uppercase letters covered by this segment.
    pub fn letters(&self) -> &'static [char] {
        match self {
            Segment::AToC => &['A', 'B', 'C'],
            Segment::DToJ => &['D', 'E', 'F', 'G', 'H', 'I', 'J'],
            Segment::KToQ => &['K', 'L', 'M', 'N', 'O', 'P', 'Q'],
            Segment::RToZ => &['R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'],
        }
    }

    /// Whether a name's initial falls in this segment.
    pub fn matches(&self, name: &str) -> bool {
        name_initial(name).is_some_and(|initial| self.contains_initial(&initial))
    }

    /// Whether a section title produced by
    /// [`Country::initial`](crate::models::Country::initial) belongs here.
    pub fn contains_initial(&self, initial: &str) -> bool {
        let mut chars = initial.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.letters().contains(&c),
            _ => false,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
