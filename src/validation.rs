//! Input validation for channel names, display names and message bodies

use once_cell::sync::Lazy;
use regex::Regex;

pub const CHANNEL_NAME_MIN: usize = 3;
pub const CHANNEL_NAME_MAX: usize = 80;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex pattern is valid"));

/// Normalize a channel name as it is typed: runs of whitespace become a
/// single dash and letters are lowercased.
pub fn normalize_channel_name(input: &str) -> String {
    WHITESPACE_RUN.replace_all(input, "-").to_lowercase()
}

/// Validates a channel name, returning the normalized form
pub fn validate_channel_name(name: &str) -> Result<String, String> {
    let name = normalize_channel_name(name.trim());
    if name.is_empty() {
        return Err("Channel name cannot be empty".to_string());
    }

    let len = name.chars().count();
    if len < CHANNEL_NAME_MIN {
        return Err(format!(
            "Channel name too short (min {} characters)",
            CHANNEL_NAME_MIN
        ));
    }
    if len > CHANNEL_NAME_MAX {
        return Err(format!(
            "Channel name too long (max {} characters)",
            CHANNEL_NAME_MAX
        ));
    }

    if name.contains(|c: char| c.is_control() || c == '#') {
        return Err("Channel name contains invalid characters".to_string());
    }

    Ok(name)
}

pub const WORKSPACE_NAME_MIN: usize = 3;
pub const WORKSPACE_NAME_MAX: usize = 80;

/// Validates a workspace name. Unlike channel names these keep their
/// spacing and case.
pub fn validate_workspace_name(name: &str) -> Result<String, String> {
    let name = name.trim();
    let len = name.chars().count();
    if len < WORKSPACE_NAME_MIN {
        return Err(format!(
            "Workspace name too short (min {} characters)",
            WORKSPACE_NAME_MIN
        ));
    }
    if len > WORKSPACE_NAME_MAX {
        return Err(format!(
            "Workspace name too long (max {} characters)",
            WORKSPACE_NAME_MAX
        ));
    }
    Ok(name.to_string())
}

/// Validates a display name
pub fn validate_display_name(name: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Display name cannot be empty".to_string());
    }
    if name.chars().count() > 80 {
        return Err("Display name too long (max 80 characters)".to_string());
    }
    Ok(name.to_string())
}

/// A message needs text or an image.
pub fn validate_message_body(body: &str, has_image: bool) -> Result<(), String> {
    if body.trim().is_empty() && !has_image {
        return Err("Message cannot be empty".to_string());
    }
    Ok(())
}
