// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Two scorers, one per presentation mode. Both are plain weighted substring
//! counting; the only real decision is how the weights stack up, and that
//! lives in `core`. Ranking is a stable descending sort in `ranking`.

mod core;
pub mod ranking;

pub use self::core::*;
