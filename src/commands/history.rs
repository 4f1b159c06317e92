//! History command entry point

use std::path::Path;

use anyhow::{Context, Result};
use cast::application::HistoryOptions;
use cast::presentation::{factory, output};

pub fn cmd_history(
    target: &Path,
    host: Option<&str>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut options = HistoryOptions::new(target);
    if let Some(limit) = limit {
        options = options.with_limit(limit);
    }

    let history = factory::create_history_use_case(host)
        .execute(&options)
        .with_context(|| format!("read deployment history of {}", target.display()))?;

    if json {
        println!("{}", output::history_to_json(&history, target));
    } else {
        print!("{}", output::render_history_text(&history, target));
    }
    Ok(())
}
