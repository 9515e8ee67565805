// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the matcher and the renderers.
//!
//! Lowercasing and accent folding for comparison, and a case-insensitive
//! literal finder that reports byte ranges in the *original* text so markup
//! can be spliced around the exact characters the user sees.

pub mod normalize;
pub mod occurrences;

pub use normalize::{fold_diacritics, lowercase};
pub use occurrences::{find_ci, occurrences_ci, prefix_chars};
