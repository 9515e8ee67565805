// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load errors.
//!
//! None of these are fatal. Whatever goes wrong, the session keeps an empty
//! index and every query reports the loading state until the next page load
//! tries again.

use thiserror::Error;

/// Why the index did not load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request never produced a response (network down, file missing).
    #[error("failed to fetch {path}: {reason}")]
    Transport { path: String, reason: String },

    /// The server answered, but not with success.
    #[error("fetching {path} returned status {status}")]
    Status { path: String, status: u16 },

    /// The body could not be read as an entry list at all.
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    /// The body parsed but held no usable entries.
    #[error("{path} contains no searchable entries")]
    Empty { path: String },
}

impl LoadError {
    /// True for failures of the transport itself, as opposed to bad content.
    pub fn is_transport(&self) -> bool {
        matches!(self, LoadError::Transport { .. } | LoadError::Status { .. })
    }
}
