//! Core components of the `stockdex-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`SdClient`] and its builder.
//! - The primary [`SdError`] type.
//! - The [`Table`] model every report is returned as.
//! - The table locator/extractor and the value normalizer.

/// The main client (`SdClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`SdError`) for the crate.
pub mod error;
/// Locating tables by marker or ordinal and reading them into a [`Table`].
pub mod html;
/// Converting raw cell text into numbers and dates.
pub mod normalize;
/// The tabular result model.
pub mod table;

#[cfg(feature = "debug-dumps")]
pub(crate) mod debug;
#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::SdClient`
pub use client::{Backoff, RetryConfig, SdClient, SdClientBuilder};
pub use error::SdError;
pub use table::Table;
