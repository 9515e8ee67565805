// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sitesearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `SITESEARCH_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and non-TTY output, where everything degrades to plain text.
//!
//! Highlighting in the terminal uses the same occurrence ranges as the HTML
//! renderer; only the wrapping differs.

use std::ops::Range;
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SITESEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn bg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const MATCH_BG: (u8, u8, u8) = (62, 68, 81);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const MATCH_BG: (u8, u8, u8) = (229, 229, 230);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(RED);

#[allow(non_snake_case)]
fn MATCH_BG() -> String {
    let (r, g, b) = match theme() {
        Theme::Dark => onedark::MATCH_BG,
        Theme::Light => onelight::MATCH_BG,
    };
    bg_rgb(r, g, b)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Emphasize `ranges` of `text`. Without colors, matches are bracketed instead.
pub fn highlight(text: &str, ranges: &[Range<usize>]) -> String {
    let colors = use_colors();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in ranges {
        out.push_str(&text[cursor..range.start]);
        if colors {
            out.push_str(&format!("{}{}{}{}{}", BOLD, MATCH_BG(), YELLOW(), &text[range.clone()], RESET));
        } else {
            out.push_str(&format!("[{}]", &text[range.clone()]));
        }
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Collapse runs of whitespace (content often carries newlines from markup).
pub fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    if use_colors() {
        println!("{}│{}{}{}{}│{}", border, RESET, content, " ".repeat(pad), border, RESET);
    } else {
        println!("│{}{}│", content, " ".repeat(pad));
    }
}

fn rule(left: char, label: Option<&str>, right: char) {
    let label_part = label
        .map(|l| format!("─ {} ", themed(CYAN, &[BOLD], l)))
        .unwrap_or_default();
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let line = format!("{}{}{}{}", left, label_part, "─".repeat(remaining), right);
    if use_colors() {
        println!("{}{}{}", GRAY(), line, RESET);
    } else {
        println!("{}", line);
    }
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    rule('┌', Some(label), '┐');
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    rule('├', Some(label), '┤');
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    rule('└', None, '┘');
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score: title-level hits green, content-only hits gray.
pub fn score_value(score: u32) -> String {
    let text = format!("{:>4}", score);
    if score >= 5 {
        themed(GREEN, &[BOLD], &text)
    } else if score >= 3 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Dimmed url line.
pub fn url(url: &str) -> String {
    themed(BLUE, &[DIM], url)
}

/// Status message (loading / not found).
pub fn notice(text: &str) -> String {
    themed(RED, &[BOLD], text)
}
