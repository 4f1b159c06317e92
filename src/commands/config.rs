//! Config command entry point

use anyhow::Result;
use cast::config::{self, UserConfig};
use cast::presentation::cli::ConfigAction;
use cast::presentation::output;

pub fn cmd_config(action: ConfigAction, json: bool) -> Result<()> {
    match action {
        ConfigAction::Lang { code } => {
            let path = config::config_path()?;
            let mut user_config = if path.exists() {
                let (loaded, warnings) = config::load_with_warnings(&path)?;
                for warning in &warnings {
                    tracing::warn!(key = %warning.key, line = ?warning.line, "ignoring config value");
                }
                loaded
            } else {
                UserConfig::default()
            };

            user_config.set_lang(code);
            config::save(&path, &user_config)?;

            if json {
                println!("{}", output::config_to_json(&user_config, Some(&path)));
            } else {
                println!("lang = {}  ({})", code, path.display());
            }
        }
        ConfigAction::Show => {
            let path = config::config_path().ok();
            let user_config = config::load_or_default();

            if json {
                println!("{}", output::config_to_json(&user_config, path.as_deref()));
            } else {
                print!(
                    "{}",
                    output::render_config_text(&user_config, path.as_deref())
                );
            }
        }
    }
    Ok(())
}
