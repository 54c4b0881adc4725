//! ANSI color helper utilities for terminal output.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::FaultyStatus;
use crate::views::ExpiryStatus;

pub fn color_for_expiry(status: ExpiryStatus) -> &'static str {
    match status {
        ExpiryStatus::Expired => RED,
        ExpiryStatus::ExpiringSoon => YELLOW,
        ExpiryStatus::Ok => GREEN,
        ExpiryStatus::Unknown => GREY,
    }
}

pub fn color_for_faulty(status: FaultyStatus) -> &'static str {
    match status {
        FaultyStatus::New => CYAN,
        FaultyStatus::InProgress => YELLOW,
        FaultyStatus::Done => GREEN,
    }
}

/// Grey out empty cells so gaps stand out in tables.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
