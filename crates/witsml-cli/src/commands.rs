use std::fmt::Write as _;

use anyhow::{bail, Context};
use colored::Colorize;
use serde_json::json;
use tracing::debug;
use witsml_catalog::{CatalogResolver, Diagnostic, Resolution, ResolverConfig};
use witsml_session::InMemoryCatalog;
use witsml_types::ObjectType;

use crate::cli::*;
use crate::config::CliConfig;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load_or_default(cli.config.as_deref())?;
    match &cli.command {
        Command::Ls(args) => cmd_ls(&cli, &config, args).await,
        Command::Get(args) => cmd_get(&cli, &config, args).await,
        Command::Types(_) => {
            print!("{}", render_types(cli.format)?);
            Ok(())
        }
    }
}

async fn cmd_ls(cli: &Cli, config: &CliConfig, args: &LsArgs) -> anyhow::Result<()> {
    let catalog = open_catalog(cli, config)?;
    let resolver = CatalogResolver::new(resolver_config(cli, config, args.sequential));
    let types = if args.types.is_empty() { &config.default_types } else { &args.types };

    let resolution = resolver
        .available_objects(&args.uri, types, &args.filter, &catalog)
        .await
        .with_context(|| format!("resolving {}", args.uri))?;

    if cli.format == OutputFormat::Text {
        for diagnostic in &resolution.diagnostics {
            eprintln!("{} {}", "warning:".yellow().bold(), describe(diagnostic));
        }
    }
    print!("{}", render_resolution(&resolution, cli.format)?);
    Ok(())
}

async fn cmd_get(cli: &Cli, config: &CliConfig, args: &GetArgs) -> anyhow::Result<()> {
    let catalog = open_catalog(cli, config)?;
    let resolver = CatalogResolver::new(resolver_config(cli, config, false));
    let scope = format!("{} under {}/{}", args.object_type, args.well_id, args.wellbore_id);

    let json = match &args.id {
        Some(id) => {
            let record = resolver
                .fetch_object(&catalog, &args.well_id, &args.wellbore_id, &args.object_type, id)
                .await
                .with_context(|| format!("fetching {id} of {scope}"))?;
            serde_json::to_string_pretty(&record)?
        }
        None => resolver
            .fetch_collection(&catalog, &args.well_id, &args.wellbore_id, &args.object_type)
            .await
            .with_context(|| format!("fetching {scope}"))?
            .to_json()?,
    };
    println!("{json}");
    Ok(())
}

fn open_catalog(cli: &Cli, config: &CliConfig) -> anyhow::Result<InMemoryCatalog> {
    let Some(path) = config.catalog_path(cli.catalog.as_deref()) else {
        bail!("no catalog snapshot: pass --catalog or set `catalog` in the config file");
    };
    debug!(path = %path.display(), "opening catalog snapshot");
    InMemoryCatalog::load(path).with_context(|| format!("loading catalog {}", path.display()))
}

/// File settings with command-line overrides applied.
fn resolver_config(cli: &Cli, config: &CliConfig, sequential: bool) -> ResolverConfig {
    let mut resolver = config.resolver.clone();
    if cli.strict {
        resolver.strict_locators = true;
    }
    if sequential {
        resolver.concurrent_fanout = false;
    }
    resolver
}

fn describe(diagnostic: &Diagnostic) -> String {
    match diagnostic {
        Diagnostic::UnknownType { token } => format!("unknown object type {token}, skipped"),
        Diagnostic::ListingFailed { object_type, error } => {
            format!("listing {object_type} failed: {error}")
        }
        Diagnostic::SkippedNulls { level, kind, count } => {
            format!("{count} empty {kind} entries skipped at {level} level")
        }
    }
}

fn render_resolution(resolution: &Resolution, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(resolution)? + "\n"),
        OutputFormat::Text => {
            let mut out = String::new();
            for id in &resolution.identifiers {
                writeln!(out, "{}  {}", id.locator(), id.kind.cyan())?;
            }
            Ok(out)
        }
    }
}

fn render_types(format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let table: Vec<_> = ObjectType::ALL
                .iter()
                .map(|ty| json!({ "token": ty.token(), "tag": ty.tag() }))
                .collect();
            Ok(serde_json::to_string_pretty(&table)? + "\n")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for ty in ObjectType::ALL {
                writeln!(out, "{:<16} {}", ty.token().bold(), ty.tag())?;
            }
            Ok(out)
        }
    }
}
