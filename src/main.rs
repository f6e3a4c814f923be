use anyhow::Context;
use clap::Parser;
use log::info;
use time::UtcOffset;

use movstamp::{run, support::local_offset, Config, Descent, NamingScheme};

mod cli;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();

    // must be resolved before rayon spawns its threads
    let offset = match args.utc {
        true => UtcOffset::UTC,
        false => local_offset(),
    };

    let naming = NamingScheme::new(&args.prefix, &args.date_format).context("invalid naming scheme")?;

    let config = Config {
        root: args.root,
        extensions: args.extensions.iter().map(|e| e.trim_start_matches('.').to_lowercase()).collect(),
        naming,
        descent: match args.deep {
            true => Descent::Children,
            false => Descent::FirstChild,
        },
        dry_run: args.dry_run,
        offset,
    };

    let report = run(&config).with_context(|| format!("failed to process {}", config.root.display()))?;

    info!(
        "{} file(s): {} renamed, {} planned, {} unchanged, {} skipped",
        report.len(),
        report.renamed(),
        report.planned(),
        report.unchanged(),
        report.skipped()
    );

    Ok(())
}
