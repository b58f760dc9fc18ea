//! Subcommand handlers for config actions.

use std::path::Path;

use super::args::ConfigAction;
use crate::config::{self, Config, Overrides, Settings, DEFAULT_CONFIG};
use crate::error::EXIT_CONFIG;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Human-readable listing of resolved settings, as printed by `config show`.
pub fn describe_settings(settings: &Settings) -> String {
    let lines = [
        "Current configuration:".to_string(),
        format!("  Tube radius (r1): {}", settings.scene.r1),
        format!("  Ring radius (r2): {}", settings.scene.r2),
        format!("  Viewer distance (k2): {}", settings.scene.k2),
        format!("  Cell ratio: {}", settings.scene.ratio),
        format!("  Wander: {}", yes_no(settings.scene.wander)),
        format!(
            "  Frame: {:.1}ms",
            settings.pacer.target.as_secs_f64() * 1000.0
        ),
        format!(
            "  Safety margin: {:.1}ms",
            settings.pacer.safety_margin.as_secs_f64() * 1000.0
        ),
        format!("  Debug overlay: {}", yes_no(settings.pacer.debug)),
    ];
    lines.join("\n") + "\n"
}

/// Handle config subcommand actions.
///
/// Returns the process exit code.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<&Path>,
    overrides: &Overrides,
) -> i32 {
    match action {
        ConfigAction::Show => {
            let settings = match Config::load(config_path).and_then(|c| c.resolve(overrides)) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return EXIT_CONFIG;
                }
            };

            println!("{}", describe_settings(&settings));

            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(config::default_path);
            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
            0
        }
        ConfigAction::Init => {
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(config::default_path);

            if path.exists() {
                eprintln!("Config file already exists: {}", path.display());
                eprintln!("Use 'donut-term config show' to view current settings.");
                return EXIT_CONFIG;
            }

            // Create parent directories if needed
            if let Some(parent) = path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    return EXIT_CONFIG;
                }
            }

            if let Err(e) = std::fs::write(&path, DEFAULT_CONFIG) {
                eprintln!("Error writing config file: {}", e);
                return EXIT_CONFIG;
            }

            println!("Created config file: {}", path.display());
            0
        }
    }
}
