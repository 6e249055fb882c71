//! Version-gated rule tables.
//!
//! Compatibility workarounds for specific upstream releases are kept as
//! ordered `(range, outcome)` tables evaluated top to bottom; the first
//! range containing the version wins.

use crate::version::Version;

/// A half-open version range `[min, max)` over encoded versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    min: Option<u32>,
    max: Option<u32>,
}

impl VersionRange {
    /// Matches every version.
    pub const ANY: VersionRange = VersionRange {
        min: None,
        max: None,
    };

    /// Matches only the zero ("unknown") version.
    pub const UNKNOWN: VersionRange = VersionRange::between(Version::ZERO, Version::new(0, 0, 1));

    /// Versions strictly below `max`.
    pub const fn below(max: Version) -> Self {
        Self {
            min: None,
            max: Some(max.encode()),
        }
    }

    /// Versions at or above `min`.
    pub const fn at_least(min: Version) -> Self {
        Self {
            min: Some(min.encode()),
            max: None,
        }
    }

    /// Versions in `[min, max)`.
    pub const fn between(min: Version, max: Version) -> Self {
        Self {
            min: Some(min.encode()),
            max: Some(max.encode()),
        }
    }

    pub const fn contains(&self, version: Version) -> bool {
        let number = version.encode();
        let above_min = match self.min {
            Some(min) => number >= min,
            None => true,
        };
        let below_max = match self.max {
            Some(max) => number < max,
            None => true,
        };
        above_min && below_max
    }
}

/// One row of a rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRule<T> {
    pub range: VersionRange,
    pub outcome: T,
}

impl<T> VersionRule<T> {
    pub const fn new(range: VersionRange, outcome: T) -> Self {
        Self { range, outcome }
    }
}

/// The outcome of the first rule whose range contains `version`.
pub fn first_match<T>(rules: &[VersionRule<T>], version: Version) -> Option<&T> {
    rules
        .iter()
        .find(|rule| rule.range.contains(version))
        .map(|rule| &rule.outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: [VersionRule<&str>; 3] = [
        VersionRule::new(VersionRange::UNKNOWN, "unknown"),
        VersionRule::new(VersionRange::at_least(Version::new(1, 0, 0)), "stable"),
        VersionRule::new(VersionRange::ANY, "pre-release"),
    ];

    #[test]
    fn first_matching_rule_wins() {
        assert_eq!(first_match(&RULES, Version::ZERO), Some(&"unknown"));
        assert_eq!(first_match(&RULES, Version::new(0, 0, 1)), Some(&"pre-release"));
        assert_eq!(first_match(&RULES, Version::new(1, 0, 0)), Some(&"stable"));
    }

    #[test]
    fn between_is_half_open() {
        let range = VersionRange::between(Version::new(13, 0, 0), Version::new(13, 6, 9));
        assert!(range.contains(Version::new(13, 0, 0)));
        assert!(range.contains(Version::new(13, 6, 8)));
        assert!(!range.contains(Version::new(13, 6, 9)));
        assert!(!range.contains(Version::new(12, 99, 99)));
    }

    #[test]
    fn empty_table_matches_nothing() {
        let rules: [VersionRule<()>; 0] = [];
        assert_eq!(first_match(&rules, Version::new(1, 2, 3)), None);
    }
}
