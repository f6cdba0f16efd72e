use crate::errors::ConfigError;

#[cfg(test)]
#[path = "./frames.tests.rs"]
mod frames_tests;

pub const LINE: &[&str] = &["-", "\\", "|", "/"];
pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const ARROW: &[&str] = &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"];
pub const PIPE: &[&str] = &["┤", "┘", "┴", "└", "├", "┌", "┬", "┐"];

/// Returns animation frames for the named preset.
pub fn preset(name: &str) -> Result<Vec<String>, ConfigError> {
    match name {
        "line" => Ok(owned(LINE)),
        "dots" => Ok(owned(DOTS)),
        "arrow" => Ok(owned(ARROW)),
        "pipe" => Ok(owned(PIPE)),
        _ => Err(ConfigError::UnknownPreset(name.to_owned())),
    }
}

/// Builds an owned frames list from a preset table.
pub fn owned(frames: &[&str]) -> Vec<String> {
    frames.iter().map(|frame| (*frame).to_string()).collect()
}
