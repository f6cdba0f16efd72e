use twirl_config::Config;

use crate::registry::Registry;
use crate::spinner::{Spinner, SpinnerState};

#[cfg(test)]
#[path = "./render.tests.rs"]
mod render_tests;

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Renders all spinners as one block of lines, remembering in every spinner the line computed for it.
pub fn render_block(registry: &mut Registry, config: &Config) -> String {
    let frame_index = registry.frame_index();
    let lines = registry
        .iter_mut()
        .map(|spinner| {
            let line = render_line(spinner, config, frame_index);
            spinner.set_rendered(line.clone());
            line
        })
        .collect::<Vec<_>>();

    lines.join(LINE_SEPARATOR)
}

/// Renders a single spinner line as the indent followed by the colored glyph and label.\
/// Incomplete spinners show the current animation frame, completed ones show their terminal symbol.
pub fn render_line(spinner: &Spinner, config: &Config, frame_index: usize) -> String {
    let (glyph, color) = match spinner.state() {
        SpinnerState::Incomplete => (
            config.frames[frame_index % config.frames.len()].as_str(),
            config.incomplete_color,
        ),
        SpinnerState::Success => (config.success_symbol.as_str(), config.success_color),
        SpinnerState::Error => (config.error_symbol.as_str(), config.error_color),
    };

    format!("{}{}", config.indent, color.paint(format!("{} {}", glyph, spinner.label())))
}
