//! Driver version checking
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Source   │────▶│   Checker   │────▶│   Report    │
//! │ (HTTP GET)  │     │  (compare)  │     │  (console)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │   Version   │
//!                     │  (extract)  │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Scan of the listing for a driver newer than the known one
//! - [`error`]: Error type for fetching the listing
//! - [`http`]: reqwest-backed listing source
//! - [`listing`]: Wire types for the file explorer response
//! - [`source`]: Trait for fetching the listing
//! - [`version`]: `vMAJOR_MINOR_PATCH` extraction from filenames

pub mod checker;
pub mod error;
pub mod http;
pub mod listing;
pub mod source;
pub mod version;
