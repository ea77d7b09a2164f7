//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use crate::error::HenteError;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, mut settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(&settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Set { key, value } => {
            apply_set(&mut settings, key, value)?;
            settings.save()?;
            Output::success(&format!("Set {} = {}", key, value));
            Output::kv(
                "Config file",
                &Settings::default_config_path().display().to_string(),
            );
        }

        ConfigAction::Edit => {
            let config_path = Settings::default_config_path();

            // Create default config if it doesn't exist
            if !config_path.exists() {
                settings.save()?;
                Output::info(&format!("Created default config at {:?}", config_path));
            }

            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

            Output::info(&format!("Opening config in {}...", editor));

            let status = std::process::Command::new(&editor)
                .arg(&config_path)
                .status();

            match status {
                Ok(s) if s.success() => {
                    Output::success("Config saved.");
                }
                Ok(_) => {
                    Output::warning("Editor exited with non-zero status.");
                }
                Err(e) => {
                    Output::error(&format!("Failed to open editor: {}", e));
                    Output::info(&format!("Config file is at: {:?}", config_path));
                }
            }
        }

        ConfigAction::Path => {
            let config_path = Settings::default_config_path();
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

/// Apply a "section.key" assignment to the settings.
fn apply_set(settings: &mut Settings, key: &str, value: &str) -> crate::error::Result<()> {
    match key {
        "general.output_dir" => settings.general.output_dir = value.to_string(),
        "general.log_level" => settings.general.log_level = value.to_string(),
        "youtube.api_key" => settings.youtube.api_key = Some(value.to_string()),
        "youtube.page_size" => {
            settings.youtube.page_size = value.parse().map_err(|_| {
                HenteError::InvalidInput(format!(
                    "youtube.page_size expects a number, got '{}'",
                    value
                ))
            })?;
        }
        "transcripts.language" => settings.transcripts.language = value.to_string(),
        "transcripts.use_manifest" => {
            settings.transcripts.use_manifest = value.parse().map_err(|_| {
                HenteError::InvalidInput(format!(
                    "transcripts.use_manifest expects true or false, got '{}'",
                    value
                ))
            })?;
        }
        _ => {
            return Err(HenteError::InvalidInput(format!(
                "Unknown configuration key: {}", key
            )));
        }
    }
    Ok(())
}
