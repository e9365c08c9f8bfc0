//! Bump kind and pure version computation.

use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::error::BumpError;

/// Which version component to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpKind {
    Patch,
    Minor,
    Major,
}

impl FromStr for BumpKind {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(BumpError::InvalidBumpKind(other.to_string())),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpKind::Major => write!(f, "major"),
            BumpKind::Minor => write!(f, "minor"),
            BumpKind::Patch => write!(f, "patch"),
        }
    }
}

/// Apply a bump to a base version.
///
/// Lower components reset: a major bump zeroes minor and patch, a minor
/// bump zeroes patch.
pub fn apply_bump(base: &Version, kind: BumpKind) -> Version {
    match kind {
        BumpKind::Major => Version::new(base.major + 1, 0, 0),
        BumpKind::Minor => Version::new(base.major, base.minor + 1, 0),
        BumpKind::Patch => Version::new(base.major, base.minor, base.patch + 1),
    }
}

/// Extract the first MAJOR.MINOR.PATCH triple from a string.
///
/// Searches rather than full-matches: the input may be a bare value
/// (`1.2.0`) or a whole keyword argument (`version='1.2.0'`).
pub fn extract_triple(text: &str) -> Option<Version> {
    let re = regex_lite::Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("Invalid regex");

    let caps = re.captures(text)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    let patch = caps.get(3)?.as_str().parse().ok()?;

    Some(Version::new(major, minor, patch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_bump_resets_lower_components() {
        let next = apply_bump(&Version::new(1, 2, 3), BumpKind::Major);
        assert_eq!(next, Version::new(2, 0, 0));
    }

    #[test]
    fn test_minor_bump_resets_patch() {
        let next = apply_bump(&Version::new(1, 2, 3), BumpKind::Minor);
        assert_eq!(next, Version::new(1, 3, 0));
    }

    #[test]
    fn test_patch_bump_increments_only_patch() {
        let next = apply_bump(&Version::new(1, 2, 3), BumpKind::Patch);
        assert_eq!(next, Version::new(1, 2, 4));
    }

    #[test]
    fn test_bump_from_zero() {
        let next = apply_bump(&Version::new(0, 0, 0), BumpKind::Minor);
        assert_eq!(next, Version::new(0, 1, 0));
    }

    #[test]
    fn test_bump_kind_from_str() {
        assert_eq!("major".parse::<BumpKind>().unwrap(), BumpKind::Major);
        assert_eq!("minor".parse::<BumpKind>().unwrap(), BumpKind::Minor);
        assert_eq!("patch".parse::<BumpKind>().unwrap(), BumpKind::Patch);
    }

    #[test]
    fn test_invalid_bump_kind() {
        let err = "banana".parse::<BumpKind>().unwrap_err();
        assert!(matches!(err, BumpError::InvalidBumpKind(ref k) if k == "banana"));
    }

    #[test]
    fn test_extract_triple_from_bare_value() {
        assert_eq!(extract_triple("1.2.0"), Some(Version::new(1, 2, 0)));
    }

    #[test]
    fn test_extract_triple_from_keyword_argument() {
        assert_eq!(
            extract_triple("version='10.4.7'"),
            Some(Version::new(10, 4, 7))
        );
    }

    #[test]
    fn test_extract_triple_takes_first_match() {
        assert_eq!(extract_triple("1.0.0 or 2.0.0"), Some(Version::new(1, 0, 0)));
    }

    #[test]
    fn test_extract_triple_rejects_two_components() {
        assert_eq!(extract_triple("1.0"), None);
        assert_eq!(extract_triple("no version here"), None);
    }

    #[test]
    fn test_written_version_reparses_to_same_triple() {
        let next = apply_bump(&Version::new(3, 9, 11), BumpKind::Patch);
        assert_eq!(extract_triple(&next.to_string()), Some(next));
    }
}
