// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the fuzzline CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `FUZZLINE_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and drops all escapes when stdout is not a TTY, so piping the
//! output into another tool gives plain text.

use std::sync::OnceLock;

use fuzzline::{DocumentDiagnostic, LineMatch, ScanStatus};

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
    if let Ok(theme) = std::env::var("FUZZLINE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light terminal
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

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
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

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

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

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score, three decimals.
pub fn score_value(score: f64) -> String {
    let text = format!("{:.3}", score);
    let color: fn() -> String = if score >= 0.95 {
        BRIGHT_GREEN
    } else if score >= 0.85 {
        GREEN
    } else {
        YELLOW
    };
    themed(color, &[BOLD], &text)
}

/// `document:line` location label.
pub fn location(document: &str, line_number: usize) -> String {
    format!(
        "{}{}",
        themed(CYAN, &[], document),
        themed(GRAY, &[], &format!(":{}", line_number))
    )
}

/// Header line plus numbered context for one match. The matched line is
/// marked with `▶`.
pub fn format_line_match(m: &LineMatch) -> String {
    let mut out = format!("{}  {}\n", score_value(m.score), location(&m.document, m.line_number));

    let first = m.context_start;
    let width = (first + m.context.len()).to_string().len();
    for (i, text) in m.context.iter().enumerate() {
        let number = first + i;
        let gutter = pad_left(&number.to_string(), width);
        if number == m.line_number {
            out.push_str(&format!("  {} {} │ {}\n", themed(BLUE, &[BOLD], "▶"), gutter, text));
        } else {
            out.push_str(&format!("    {} │ {}\n", themed(GRAY, &[DIM], &gutter), themed(GRAY, &[], text)));
        }
    }

    let terms: Vec<String> = m
        .matched_terms
        .iter()
        .map(|t| format!("{}~{} ({:.2})", t.query_word, t.matched_word, t.similarity))
        .collect();
    if !terms.is_empty() {
        out.push_str(&format!("    {}\n", themed(GRAY, &[DIM], &terms.join(", "))));
    }
    out
}

pub fn no_matches() -> String {
    themed(GRAY, &[], "No matching content found.")
}

pub fn diagnostic(d: &DocumentDiagnostic) -> String {
    format!("{} {}: {}", themed(RED, &[BOLD], "skipped"), d.id, d.message)
}

/// One-line footer describing how complete the scan was.
pub fn status_line(status: ScanStatus, matches: usize) -> String {
    match status {
        ScanStatus::Rejected => themed(GRAY, &[], "query did not pass the keyword gate"),
        ScanStatus::Complete => themed(GRAY, &[], &format!("{} matching lines", matches)),
        ScanStatus::Partial { scanned, total } => themed(
            YELLOW,
            &[BOLD],
            &format!(
                "partial scan: {} of {} documents before the deadline, {} matching lines",
                scanned, total, matches
            ),
        ),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
