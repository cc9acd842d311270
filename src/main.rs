use std::path::Path;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;

use inplace::cli::{CliArgs, RunMode};
use inplace::config::WidgetConfig;
use inplace::model::TriggerBundle;
use inplace::replay::{replay, Fixture, Format, Script};

fn main() -> Result<()> {
    inplace::tracing::init();

    let args = CliArgs::parse();
    let mode = args.into_mode().map_err(anyhow::Error::msg)?;

    match mode {
        RunMode::Replay {
            page,
            script,
            format,
            config,
        } => run_replay(&page, &script, format, config.as_deref()),
        RunMode::Check { page } => run_check(&page),
        RunMode::InitConfig { path } => run_init_config(path.as_deref()),
    }
}

fn run_init_config(path: Option<&Path>) -> Result<()> {
    let config = WidgetConfig::default();
    let saved = match path {
        Some(path) => config.save_to(path),
        None => config.save(),
    };
    saved.map_err(anyhow::Error::msg)
}

fn run_replay(page: &Path, script: &Path, format: Format, config: Option<&Path>) -> Result<()> {
    let config = match config {
        Some(path) => WidgetConfig::load_from(path),
        None => WidgetConfig::load(),
    };
    let fixture = Fixture::load(page)?;
    let script = Script::load(script)?;
    info!(triggers = fixture.triggers.len(), steps = script.steps.len(), "starting replay");

    let transcript = replay(&fixture, &script, config)?;
    print!("{}", transcript.render(format)?);
    if format == Format::Html {
        println!();
    }
    Ok(())
}

fn run_check(page: &Path) -> Result<()> {
    let fixture = Fixture::load(page)?;
    let mut failures = 0;
    for (index, spec) in fixture.triggers.iter().enumerate() {
        match TriggerBundle::from_data(&spec.data) {
            Ok(bundle) => println!("ok    #{} {:?} -> {}", index, spec.text, bundle.field_names().name),
            Err(e) => {
                failures += 1;
                println!("error #{} {:?}: {}", index, spec.text, e);
            }
        }
    }
    if failures > 0 {
        bail!("{} of {} triggers are misconfigured", failures, fixture.triggers.len());
    }
    Ok(())
}
