//! Command-line interface for formsmith
//! Works on saved form snapshots (the JSON the exported page embeds) and scripted builder sessions.
//!
//! Usage:
//!   formsmith export `<snapshot.json>` [-o `<file>`]    - Write the standalone HTML form
//!   formsmith preview `<snapshot.json>` [--page `<n>`]  - Print one page as the live preview shows it
//!   formsmith replay `<script.json>` [-o `<file>`]      - Run a list of builder actions, print the snapshot
//!   formsmith formats                                   - List available formats

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use formsmith_babel::formats::{HtmlFormat, JsonFormat, PreviewFormat};
use formsmith_babel::publish::{publish_with, PublishArtifact, PublishSpec};
use formsmith_babel::FormatRegistry;
use formsmith_builder::{
    Action, Builder, ClipboardSink, FileSink, Notice, RecordingTarget, Surfaces,
};
use formsmith_config::{FormsmithConfig, Loader};
use formsmith_model::FormDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("formsmith")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build, preview and export multi-page forms")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (repeat for debug output)"),
        )
        .subcommand(
            Command::new("export")
                .about("Export a snapshot as a standalone HTML form")
                .arg(snapshot_arg())
                .arg(output_arg("Output file (default: export.file_name from config, '-' for stdout)")),
        )
        .subcommand(
            Command::new("preview")
                .about("Print one page of a snapshot as the live preview renders it")
                .arg(snapshot_arg())
                .arg(
                    Arg::new("page")
                        .long("page")
                        .short('p')
                        .value_parser(value_parser!(usize))
                        .default_value("1")
                        .help("Page number, starting at 1"),
                ),
        )
        .subcommand(
            Command::new("replay")
                .about("Replay a JSON list of builder actions and print the resulting snapshot")
                .arg(
                    Arg::new("script")
                        .help("Path to the action script")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .index(1),
                )
                .arg(output_arg("Also export the resulting form to this file"))
                .arg(
                    Arg::new("downloads")
                        .long("downloads")
                        .value_parser(value_parser!(PathBuf))
                        .default_value(".")
                        .help("Directory receiving download-export artifacts"),
                ),
        )
        .subcommand(Command::new("formats").about("List available formats"))
}

fn snapshot_arg() -> Arg {
    Arg::new("snapshot")
        .help("Path to the form snapshot (JSON)")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .index(1)
}

fn output_arg(help: &'static str) -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .value_parser(value_parser!(PathBuf))
        .help(help)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches.get_one::<PathBuf>("config"))?;
    let registry = registry_for(&config);

    match matches.subcommand() {
        Some(("export", sub)) => handle_export_command(&config, &registry, sub),
        Some(("preview", sub)) => handle_preview_command(&registry, sub),
        Some(("replay", sub)) => handle_replay_command(&config, &registry, sub),
        Some(("formats", _)) => {
            handle_formats_command(&registry);
            Ok(())
        }
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<FormsmithConfig> {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().context("failed to load configuration")
}

/// The built-in formats, with the HTML export honoring the configuration
fn registry_for(config: &FormsmithConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(HtmlFormat::new(config.export_options()));
    registry.register(JsonFormat::default());
    registry.register(PreviewFormat);
    registry
}

fn read_snapshot(registry: &FormatRegistry, path: &Path) -> Result<FormDocument> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let doc = registry
        .parse(&source, "json")
        .with_context(|| format!("{} is not a form snapshot", path.display()))?;
    debug!(pages = doc.page_count(), path = %path.display(), "snapshot loaded");
    Ok(doc)
}

/// Handle the export command
fn handle_export_command(
    config: &FormsmithConfig,
    registry: &FormatRegistry,
    matches: &ArgMatches,
) -> Result<()> {
    let snapshot = required_path(matches, "snapshot");
    let doc = read_snapshot(registry, snapshot)?;

    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(&config.export.file_name));

    let mut spec = PublishSpec::new(&doc, "html");
    if output.as_os_str() != "-" {
        spec = spec.with_output_path(&output);
    }
    let result = publish_with(registry, spec).context("export failed")?;

    match result.artifact {
        PublishArtifact::InMemory(text) => print!("{}", text),
        PublishArtifact::File(path) => println!("{}", path.display()),
    }
    Ok(())
}

/// Handle the preview command
fn handle_preview_command(registry: &FormatRegistry, matches: &ArgMatches) -> Result<()> {
    let snapshot = required_path(matches, "snapshot");
    let doc = read_snapshot(registry, snapshot)?;
    let page = matches.get_one::<usize>("page").copied().unwrap_or(1);

    let text = PreviewFormat
        .serialize_page(&doc, page.saturating_sub(1))
        .context("preview failed")?;
    print!("{}", text);
    Ok(())
}

/// Handle the replay command
fn handle_replay_command(
    config: &FormsmithConfig,
    registry: &FormatRegistry,
    matches: &ArgMatches,
) -> Result<()> {
    let script = required_path(matches, "script");
    let source = fs::read_to_string(script)
        .with_context(|| format!("failed to read {}", script.display()))?;
    let actions: Vec<Action> = serde_json::from_str(&source)
        .with_context(|| format!("{} is not an action script", script.display()))?;

    let downloads = required_path(matches, "downloads");
    let mut builder = Builder::new(config.builder_settings());
    let mut target = RecordingTarget::new();
    let mut clipboard = ClipboardSink::new();
    let mut files = FileSink::new(downloads);
    builder
        .render_all(&mut target)
        .context("initial render failed")?;

    let count = actions.len();
    for action in actions {
        let mut surfaces = Surfaces {
            target: &mut target,
            clipboard: &mut clipboard,
            downloads: &mut files,
        };
        let notices = builder
            .dispatch(action, &mut surfaces)
            .context("action failed")?;
        for notice in notices {
            report(&notice);
        }
    }
    info!(actions = count, pages = builder.document().page_count(), "replay finished");

    if let Some(output) = matches.get_one::<PathBuf>("output") {
        let artifact = builder.export().context("export failed")?;
        fs::write(output, artifact.contents)
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!(path = %output.display(), "replayed form exported");
    }

    println!(
        "{}",
        registry
            .serialize(builder.document(), "json")
            .context("snapshot serialization failed")?
    );
    Ok(())
}

/// Handle the formats command
fn handle_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for (name, description) in registry.describe() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}

fn report(notice: &Notice) {
    match notice {
        Notice::Info(message) => eprintln!("notice: {}", message),
        Notice::Failure(message) => eprintln!("error: {}", message),
    }
}

fn required_path<'a>(matches: &'a ArgMatches, id: &str) -> &'a Path {
    matches
        .get_one::<PathBuf>(id)
        .map(PathBuf::as_path)
        .unwrap_or_else(|| unreachable!("clap enforces `{}`", id))
}
