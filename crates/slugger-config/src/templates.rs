//! Configuration template.
//!
//! `templates/slugger.toml` is a complete TOML file listing every setting at its default.
//! The generated template keeps its section headers and comments live and comments out
//! each setting, so an untouched copy resolves to the defaults.

/// Default configuration template (valid TOML).
const TEMPLATE: &str = include_str!("../templates/slugger.toml");

/// Returns the example configuration with every setting commented out.
pub fn config_template() -> String {
    TEMPLATE
        .lines()
        .map(|line| {
            if is_setting(line) {
                format!("# {line}\n")
            } else {
                format!("{line}\n")
            }
        })
        .collect()
}

/// Returns true for `key = value` lines.
fn is_setting(line: &str) -> bool {
    let line = line.trim_start();
    !line.is_empty() && !line.starts_with('#') && !line.starts_with('[')
}
