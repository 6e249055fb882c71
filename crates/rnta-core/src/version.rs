//! Semantic versions encoded as a single comparable integer.
//!
//! A version `major.minor.patch` is encoded as
//! `major * 10000 + minor * 100 + patch`. Every version comparison in this
//! crate goes through [`Version::encode`], never component-wise.
//!
//! ```
//! use rnta_core::Version;
//!
//! assert_eq!(Version::parse("0.74.1").encode(), 7401);
//! assert_eq!(Version::parse("1.2.3-053c2b4be"), Version::new(1, 2, 3));
//! assert!(Version::parse("garbage").is_unknown());
//! ```

/// Weight of the major component.
pub const MAJOR_WEIGHT: u32 = 10_000;
/// Weight of the minor component.
pub const MINOR_WEIGHT: u32 = 100;
/// Largest value the minor and patch components can carry.
pub const COMPONENT_MAX: u32 = 99;

/// A `major.minor.patch` version with pre-release and build metadata dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// The zero version, meaning "unknown".
    pub const ZERO: Version = Version::new(0, 0, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse the leading `major.minor.patch` of a version string.
    ///
    /// Anything after `-` or `+` is ignored and missing components default
    /// to 0. A string without a leading major number yields [`Version::ZERO`].
    pub fn parse(version: &str) -> Self {
        let version = version.trim();
        if let Ok(strict) = semver::Version::parse(version) {
            return Self::new(
                saturate(strict.major),
                saturate(strict.minor),
                saturate(strict.patch),
            );
        }

        let core = version.split(['-', '+']).next().unwrap_or_default();
        let mut components = core.split('.').map(leading_number);
        let Some(Some(major)) = components.next() else {
            return Self::ZERO;
        };
        let minor = components.next().flatten().unwrap_or(0);
        let patch = components.next().flatten().unwrap_or(0);
        Self::new(major, minor, patch)
    }

    /// Encode as a single integer. Minor and patch saturate at
    /// [`COMPONENT_MAX`].
    pub const fn encode(&self) -> u32 {
        encode(self.major, self.minor, self.patch)
    }

    /// Inverse of [`encode`](Self::encode) for in-range components.
    pub const fn decode(number: u32) -> Self {
        Self::new(
            number / MAJOR_WEIGHT,
            number % MAJOR_WEIGHT / MINOR_WEIGHT,
            number % MINOR_WEIGHT,
        )
    }

    pub const fn is_unknown(&self) -> bool {
        self.encode() == 0
    }
}

/// `major * 10000 + minor * 100 + patch`.
pub const fn encode(major: u32, minor: u32, patch: u32) -> u32 {
    let minor = if minor > COMPONENT_MAX { COMPONENT_MAX } else { minor };
    let patch = if patch > COMPONENT_MAX { COMPONENT_MAX } else { patch };
    major
        .saturating_mul(MAJOR_WEIGHT)
        .saturating_add(minor * MINOR_WEIGHT + patch)
}

fn saturate(component: u64) -> u32 {
    u32::try_from(component).unwrap_or(u32::MAX)
}

fn leading_number(component: &str) -> Option<u32> {
    let end = component
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(component.len());
    component[..end].parse().ok()
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.74.0", Version::new(0, 74, 0))]
    #[case("8.6", Version::new(8, 6, 0))]
    #[case("8", Version::new(8, 0, 0))]
    #[case("8.1.1", Version::new(8, 1, 1))]
    #[case("0.75.0-rc.2", Version::new(0, 75, 0))]
    #[case("1.2.3+build.7", Version::new(1, 2, 3))]
    #[case(" 13.6.9 ", Version::new(13, 6, 9))]
    #[case("7.6.x", Version::new(7, 6, 0))]
    #[case("", Version::ZERO)]
    #[case("next", Version::ZERO)]
    #[case("^0.74.0", Version::ZERO)]
    fn parse_cases(#[case] input: &str, #[case] expected: Version) {
        assert_eq!(Version::parse(input), expected);
    }

    #[test]
    fn prerelease_suffix_encodes_like_release() {
        assert_eq!(
            Version::parse("1.2.3-053c2b4be").encode(),
            Version::parse("1.2.3").encode()
        );
    }

    #[test]
    fn encode_uses_positional_weights() {
        assert_eq!(encode(12, 3, 7), 120_307);
        assert_eq!(Version::new(0, 72, 0).encode(), 7_200);
        assert_eq!(Version::decode(130_609), Version::new(13, 6, 9));
    }

    #[test]
    fn out_of_range_components_saturate() {
        assert_eq!(encode(1, 150, 0), encode(1, 99, 0));
        assert!(encode(1, 150, 0) < encode(2, 0, 0));
    }

    #[test]
    fn zero_version_is_unknown() {
        assert!(Version::ZERO.is_unknown());
        assert!(!Version::new(0, 0, 1).is_unknown());
        assert_eq!(Version::new(0, 74, 0).to_string(), "0.74.0");
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(major in 0u32..1000, minor in 0u32..=99, patch in 0u32..=99) {
            let version = Version::new(major, minor, patch);
            prop_assert_eq!(Version::decode(version.encode()), version);
        }

        #[test]
        fn encode_is_strictly_monotonic(
            a in (0u32..1000, 0u32..=99, 0u32..=99),
            b in (0u32..1000, 0u32..=99, 0u32..=99),
        ) {
            prop_assume!(a != b);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(encode(lo.0, lo.1, lo.2) < encode(hi.0, hi.1, hi.2));
        }

        #[test]
        fn parse_renders_back(major in 0u32..1000, minor in 0u32..=99, patch in 0u32..=99) {
            let version = Version::new(major, minor, patch);
            prop_assert_eq!(Version::parse(&version.to_string()), version);
        }
    }
}
