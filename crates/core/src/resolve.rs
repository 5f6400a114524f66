//! Version normalization and the two-tier toolset match policy.
//!
//! Installed engines self-report versions inconsistently: some as plain
//! `major.minor` strings, others as fuller dotted versions with build and
//! revision segments, some as text that is not a version at all. The match
//! policy favors exact operator intent first and falls back to major/minor
//! compatibility so that shorthand like `"4"` still finds a `"4.0.x.y"`
//! install.

use crate::toolset::Toolset;
use tracing::{debug, warn};

/// A strictly parsed dotted version: `major.minor[.build[.revision]]`.
///
/// Parsing is strict on purpose: a string that is not well-formed (wrong
/// component count, non-digit characters, overflow) is a parse failure and
/// never coerces to a zero version. Registry entries with unparsable
/// versions are thereby excluded from major/minor matching instead of
/// spuriously matching `"0.0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DottedVersion {
    /// First component.
    pub major: u32,
    /// Second component.
    pub minor: u32,
    /// Optional third component.
    pub build: Option<u32>,
    /// Optional fourth component.
    pub revision: Option<u32>,
}

impl DottedVersion {
    /// Parse `major.minor[.build[.revision]]`; `None` on any malformation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        fn component(part: &str) -> Option<u32> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse().ok()
        }

        let parts: Vec<&str> = s.split('.').collect();
        if !(2..=4).contains(&parts.len()) {
            return None;
        }
        Some(Self {
            major: component(parts[0])?,
            minor: component(parts[1])?,
            build: match parts.get(2) {
                Some(part) => Some(component(part)?),
                None => None,
            },
            revision: match parts.get(3) {
                Some(part) => Some(component(part)?),
                None => None,
            },
        })
    }

    /// True when `other` agrees on the major and minor components.
    #[must_use]
    pub fn same_major_minor(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

/// Normalize a user-supplied version string for matching.
///
/// A string that reads as a plain decimal number is truncated to exactly one
/// fractional digit: `"4"` becomes `"4.0"`, `"4.56"` becomes `"4.5"`,
/// `"4.0"` stays `"4.0"`. Surrounding whitespace and a leading sign are
/// accepted. Anything else - including multi-dot strings like `"4.5.1"` -
/// is returned unchanged. Idempotent on its own output.
#[must_use]
pub fn normalize_version(raw: &str) -> String {
    let trimmed = raw.trim();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };
    let decimal = (!int_part.is_empty() || !frac_part.is_empty())
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit());
    if !decimal {
        return raw.to_string();
    }

    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        stripped => stripped,
    };
    // Truncation to one fractional digit is exactly "keep the first digit".
    let tenth = frac_part.as_bytes().first().copied().unwrap_or(b'0') as char;
    format!("{sign}{int_part}.{tenth}")
}

/// Pick the best-matching toolset for `user_version`, if any.
///
/// Matching runs in strict tier order and returns on the first hit:
///
/// 1. The first entry whose version equals the normalized string under
///    case-insensitive comparison.
/// 2. Only when tier 1 misses and the normalized string parses as a
///    [`DottedVersion`]: the first entry whose own strictly parsed version
///    agrees on major and minor. Entries that do not parse are excluded.
///
/// A miss emits a diagnostic listing the normalized string and every
/// registry entry, then yields `None`.
#[must_use]
pub fn select_toolset<'a>(user_version: &str, installed: &'a [Toolset]) -> Option<&'a Toolset> {
    let normalized = normalize_version(user_version);

    if let Some(toolset) = installed
        .iter()
        .find(|t| t.version.eq_ignore_ascii_case(&normalized))
    {
        debug!(version = %toolset.version, "matched toolset by exact version string");
        return Some(toolset);
    }

    if let Some(wanted) = DottedVersion::parse(&normalized) {
        if let Some(toolset) = installed.iter().find(|t| {
            DottedVersion::parse(&t.version).is_some_and(|v| v.same_major_minor(&wanted))
        }) {
            debug!(version = %toolset.version, "matched toolset by major/minor");
            return Some(toolset);
        }
    }

    warn!(user_version = %normalized, "no installed toolset matches");
    for toolset in installed {
        debug!(version = %toolset.version, path = %toolset.path.display(), "installed toolset");
    }
    None
}
