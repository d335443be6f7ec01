//! Wire types for the Mackie file explorer response

use serde::Deserialize;

/// Response from the file explorer API
///
/// Only `content` is read; a response without it is an empty listing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Listing {
    #[serde(default)]
    pub content: Vec<ListingItem>,
}

/// One file entry in the listing
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ListingItem {
    /// Display name, normally the filename
    #[serde(default)]
    pub label: Option<String>,
    /// Download URL
    #[serde(default)]
    pub link: Option<String>,
}

impl ListingItem {
    pub fn new(label: &str, link: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            link: Some(link.to_string()),
        }
    }

    /// Label, treating a missing or empty value as absent
    pub fn filename(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.is_empty())
    }

    /// Download URL, empty when the listing omits it
    pub fn download_url(&self) -> &str {
        self.link.as_deref().unwrap_or_default()
    }
}
