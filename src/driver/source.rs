//! Source trait for fetching the driver listing

#[cfg(test)]
use mockall::automock;

use crate::driver::error::CheckError;
use crate::driver::listing::Listing;

/// Trait for fetching the current driver listing
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetches the listing once
    ///
    /// # Returns
    /// * `Ok(Listing)` - Items in the order the remote returned them
    /// * `Err(CheckError)` - If the request or decoding fails
    async fn fetch_listing(&self) -> Result<Listing, CheckError>;
}
