//! Version extraction from driver filenames
//!
//! Mackie publishes drivers as `Mackie_USB_Driver_v4_47_0.zip`, so the version
//! is encoded as `vMAJOR_MINOR_PATCH` rather than dotted semver.

use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

/// Match: v4_47_0 (ASCII digits only)
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v([0-9]+)_([0-9]+)_([0-9]+)").unwrap());

/// The version reported for filenames without an embedded version
pub fn zero_version() -> Version {
    Version::new(0, 0, 0)
}

/// Extract the version embedded in a filename.
///
/// The first `vMAJOR_MINOR_PATCH` occurrence wins and filenames without one
/// yield `0.0.0`. A group too large for `u64` becomes `u64::MAX`, so it still
/// orders above every representable version.
///
/// Examples:
/// - "Mackie_USB_Driver_v4_47_0.zip" -> Version(4, 47, 0)
/// - "readme.txt" -> Version(0, 0, 0)
pub fn extract_version(filename: &str) -> Version {
    let Some(caps) = VERSION_RE.captures(filename) else {
        return zero_version();
    };

    Version::new(component(&caps[1]), component(&caps[2]), component(&caps[3]))
}

/// Parse one ASCII digit group, saturating at `u64::MAX`
fn component(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}
