// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for `docsift inspect`.
//!
//! OneDark on dark terminals, One Light on light ones. `DOCSIFT_THEME` wins,
//! then the `COLORFGBG` hint some terminals set, then dark. `NO_COLOR` and
//! non-TTY stdout turn color off entirely so the summary pipes cleanly.

use std::sync::OnceLock;

use docsift::inspect::RecordStats;
use docsift::verify::VerificationReport;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

/// Width of the histogram bars in the summary.
const BAR_WIDTH: usize = 30;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; background 7 and 9..=15 are light colors.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn detect_theme() -> Theme {
    std::env::var("DOCSIFT_THEME")
        .ok()
        .and_then(|v| parse_theme(&v))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| theme_from_colorfgbg(&v))
        })
        .unwrap_or(Theme::Dark)
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            if !use_colors() {
                return String::new();
            }
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Apply a theme color (and optionally bold) when colors are on.
pub fn themed(color_fn: fn() -> String, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, color_fn(), text, RESET)
}

/// Visible length, excluding ANSI escapes.
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

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Keep the tail of a long path, prefixed with `...`.
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let count = path.chars().count();
    if count <= max_len {
        return path.to_string();
    }
    let tail: String = path.chars().skip(count - max_len + 3).collect();
    format!("...{}", tail)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    section_line('┌', '┐', label);
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    section_line('├', '┤', label);
}

fn section_line(left: char, right: char, label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, true, label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}{}{}{}{}{}",
        border,
        left,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        right,
        reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Histogram bar scaled against `max`. Any non-zero count gets at least one
/// cell.
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let cells = (count * width).div_ceil(max).clamp(1, width);
    "█".repeat(cells)
}

/// Name of the tag a `weight_tag_name` value comes from. Page records share
/// the h1 weight.
pub fn weight_label(weight: u8) -> String {
    match weight {
        0 => "p".to_string(),
        w if w % 10 == 0 && (40..=90).contains(&w) => format!("h{}", (100 - w) / 10),
        w => format!("?{}", w),
    }
}

fn percent(count: usize, total: usize) -> String {
    if total == 0 {
        return "  0.0%".to_string();
    }
    format!("{:>5.1}%", count as f64 * 100.0 / total as f64)
}

fn count_row(label: &str, count: usize, total: usize, max: usize) {
    row(&format!(
        "  {} {:>7} {}  {}",
        pad_right(label, 18),
        count,
        themed(GRAY, false, &percent(count, total)),
        themed(BLUE, false, &bar(count, max, BAR_WIDTH)),
    ));
}

/// Print the verified summary of a record file.
pub fn print_inspect(path: &str, stats: &RecordStats, report: &VerificationReport) {
    section_top("RECORDS");
    row(&format!("  File     {}", truncate_path(path, BOX_WIDTH - 12)));
    row(&format!(
        "  Status   {} {}",
        themed(GREEN, true, "✓ all invariants hold"),
        themed(GRAY, false, &format!("({} records checked)", report.records))
    ));
    row(&format!(
        "  Records  {} ({} shaped, {} page)",
        themed(YELLOW, true, &stats.total.to_string()),
        stats.shaped(),
        stats.page_records
    ));
    row(&format!("  Groups   {}", stats.groups));

    section_mid("BY CATEGORY");
    let max = stats.by_category.values().copied().max().unwrap_or(0);
    for (category, count) in &stats.by_category {
        count_row(category, *count, stats.total, max);
    }

    section_mid("BY LOCALE");
    let max = stats.by_locale.values().copied().max().unwrap_or(0);
    for (locale, count) in &stats.by_locale {
        count_row(locale.as_str(), *count, stats.total, max);
    }

    section_mid("BY TAG WEIGHT");
    let max = stats.by_tag_weight.values().copied().max().unwrap_or(0);
    for (weight, count) in stats.by_tag_weight.iter().rev() {
        let label = format!("{:>3}  {}", weight, weight_label(*weight));
        count_row(&label, *count, stats.total, max);
    }
    section_bot();
}

/// One-line failure report for a rejected file.
pub fn print_rejected(path: &str, error: &dyn std::fmt::Display) {
    println!("{} {}", themed(RED, true, "✗ rejected"), path);
    println!("  {}", error);
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
