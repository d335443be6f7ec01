//! Comparison of the listing against the known driver

use semver::Version;
use tracing::{debug, info};

use crate::driver::error::CheckError;
use crate::driver::listing::ListingItem;
use crate::driver::source::ListingSource;
use crate::driver::version::extract_version;

/// Result of a completed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The listing holds a driver newer than the known one
    NewerAvailable { label: String, link: String },
    /// Nothing in the listing exceeds the known driver
    UpToDate { known_driver: String },
}

/// Find the newest item whose version strictly exceeds the known driver's.
///
/// Items are scanned in listing order and items without a label are skipped.
/// Among equal maxima the first one scanned is kept.
pub fn find_latest<'a>(
    known_driver: &str,
    items: &'a [ListingItem],
) -> Option<(&'a ListingItem, Version)> {
    let mut best = extract_version(known_driver);
    let mut latest = None;

    for item in items {
        let Some(filename) = item.filename() else {
            continue;
        };

        let version = extract_version(filename);
        debug!("{} -> {}", filename, version);

        if version > best {
            best = version.clone();
            latest = Some((item, version));
        }
    }

    latest
}

/// Fetch the listing once and compare it against the known driver
pub async fn check<S: ListingSource + ?Sized>(
    source: &S,
    known_driver: &str,
) -> Result<CheckOutcome, CheckError> {
    let listing = source.fetch_listing().await?;

    let outcome = match find_latest(known_driver, &listing.content) {
        Some((item, version)) => {
            info!("Newer driver {} in listing", version);
            CheckOutcome::NewerAvailable {
                label: item.filename().unwrap_or_default().to_string(),
                link: item.download_url().to_string(),
            }
        }
        None => CheckOutcome::UpToDate {
            known_driver: known_driver.to_string(),
        },
    };

    info!("Check finished: {:?}", outcome);

    Ok(outcome)
}
