// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for accent-insensitive matching.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Lowercase for comparison. Query keywords and entry fields both go through this.
#[inline]
pub fn lowercase(value: &str) -> String {
    value.to_lowercase()
}

/// Strip diacritics so accented text also matches its base letters.
///
/// - "café" → "cafe"
/// - "tummalachērla" → "tummalacherla"
/// - "naïve" → "naive"
///
/// NFD-decompose, then drop the combining marks. Case is left alone; callers
/// lowercase first.
#[cfg(feature = "unicode-normalization")]
pub fn fold_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Without unicode-normalization there is nothing to decompose with, so the
/// folded form is the input itself and accented titles only match accented keywords.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_diacritics(value: &str) -> String {
    value.to_string()
}

/// Combining marks that carry accents on Latin, Greek and Cyrillic letters.
///
/// Indic vowel signs are also category Mn but change the syllable, so they are
/// left out of this set.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
