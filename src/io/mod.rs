//! Output serialization.
//!
//! The [`traits::RowSink`] trait abstracts over the three output formats;
//! [`formats`] holds the per-format adapters and the [`formats::Format`]
//! selector.

pub mod formats;
pub mod traits;
