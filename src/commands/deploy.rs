//! Deploy command entry point

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use cast::application::DeployRequest;
use cast::config;
use cast::domain::ports::RemoteFs;
use cast::presentation::cli::DeployArgs;
use cast::presentation::{factory, output};

pub fn cmd_deploy(args: DeployArgs, json: bool) -> Result<()> {
    let user_config = config::load_or_default();
    let lang = args.lang.unwrap_or_else(|| user_config.lang());
    let backup_suffix = args
        .backup_suffix
        .clone()
        .unwrap_or_else(|| user_config.backup_suffix().to_string());
    let host = args.host.as_deref();

    let bundle_name = match args.name.clone() {
        Some(name) => name,
        None => default_bundle_name(&args.bundle)?,
    };
    let bundle_hash = match args.hash.clone() {
        Some(hash) => hash,
        None => factory::create_file_system(host)
            .hash(&args.bundle)
            .with_context(|| format!("hash bundle {}", args.bundle.display()))?
            .hex()
            .to_string(),
    };

    tracing::debug!(
        bundle = %args.bundle.display(),
        target = %args.target.display(),
        host = host.unwrap_or("local"),
        %lang,
        "deploy"
    );

    let localizer = factory::create_localizer();
    let events = factory::create_event_sink(json, Arc::clone(&localizer), lang);
    let prompter = factory::create_prompter(args.on_conflict, localizer, &backup_suffix);
    let use_case = factory::create_deploy_use_case(host, prompter, events, lang);

    let request = DeployRequest::new(args.bundle, args.target, bundle_name, bundle_hash);
    match use_case.execute(&request) {
        Ok(report) => {
            tracing::info!(
                deployed = report.deployed.len(),
                replaced = report.replaced.len(),
                backed_up = report.backed_up.len(),
                removed = report.removed.len(),
                entries = report.snapshot_entries,
                "deploy finished"
            );
            Ok(())
        }
        Err(err) => {
            if json {
                println!("{}", output::deploy_error_to_json(&err));
            }
            Err(err.into())
        }
    }
}

/// File name of the bundle path, recorded when `--name` is not given
fn default_bundle_name(bundle: &Path) -> Result<String> {
    bundle
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("cannot derive a bundle name from {}", bundle.display()))
}
