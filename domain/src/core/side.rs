//! The two sides of a debate.

use serde::{Deserialize, Serialize};

/// One of the two debaters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides in speaking order.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Display name used in transcripts ("Debater A").
    pub fn display_name(self) -> &'static str {
        match self {
            Side::A => "Debater A",
            Side::B => "Debater B",
        }
    }

    /// Key used in structured summarizer replies ("debater_a").
    pub fn report_key(self) -> &'static str {
        match self {
            Side::A => "debater_a",
            Side::B => "debater_b",
        }
    }

    /// Parse the short forms a judge may use ("A", "debater_b", "Debater A").
    pub fn parse_loose(s: &str) -> Option<Side> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "a" | "debater_a" | "side_a" => Some(Side::A),
            "b" | "debater_b" | "side_b" => Some(Side::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A value held for each side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub a: T,
    pub b: T,
}

impl<T> SideMap<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }

    pub fn set(&mut self, side: Side, value: T) {
        *self.get_mut(side) = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
    }

    #[test]
    fn test_parse_loose() {
        assert_eq!(Side::parse_loose("A"), Some(Side::A));
        assert_eq!(Side::parse_loose("debater_b"), Some(Side::B));
        assert_eq!(Side::parse_loose("Debater A"), Some(Side::A));
        assert_eq!(Side::parse_loose("nobody"), None);
    }

    #[test]
    fn test_side_map_access() {
        let mut map = SideMap::new(1, 2);
        assert_eq!(*map.get(Side::B), 2);
        *map.get_mut(Side::A) += 10;
        map.set(Side::B, 5);
        assert_eq!(map, SideMap::new(11, 5));
    }
}
