//! Command-line interface for pocket-seed
//! This binary turns the course and quiz text files into a SQL seed script or a JSON document.
//!
//! Usage:
//!   pocket-seed sql [--courses `<dir>`] [--quizzes `<dir>`] [--output `<file>`]  - Write the seed script
//!   pocket-seed json [--courses `<dir>`] [--quizzes `<dir>`] [--pretty]         - Print the JSON export
//!   pocket-seed inspect `<path>` [--format `<transform>`]                       - Debug one source file
//!
//! Settings come from the embedded defaults, then `pocket.toml` in the working directory (or
//! the file given with --config), then the flags above. Logs go to stderr.

mod transforms;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use pocket_config::{Loader, PocketConfig, UserFile};
use pocket_emit::{EmitterRegistry, JsonEmitter, SqlEmitter};
use pocket_parser::pocket::{Catalog, CatalogLoader, SourceDirs};
use std::fs;
use std::path::Path;
use tracing::info;

const USER_CONFIG: &str = "pocket.toml";

fn main() {
    let matches = build_cli().get_matches();

    let (name, sub) = matches
        .subcommand()
        .expect("subcommand is required");
    init_tracing(sub.get_flag("verbose"));

    let result = match name {
        "sql" => handle_sql_command(sub),
        "json" => handle_json_command(sub),
        "inspect" => handle_inspect_command(sub),
        "list-emitters" => {
            handle_list_emitters_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("pocket-seed")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn course and quiz text files into seed data")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults (default: ./pocket.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            source_args(Command::new("sql").about("Write the SQL seed script")).arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .help("Path of the generated script"),
            ),
        )
        .subcommand(
            source_args(Command::new("json").about("Print lessons and quizzes as JSON")).arg(
                Arg::new("pretty")
                    .long("pretty")
                    .help("Indent the JSON output")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Run one parser stage on a single file")
                .arg(
                    Arg::new("path")
                        .help("Path to a course or quiz file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Transform to run (lines, quiz-json, course-json)")
                        .default_value("lines"),
                ),
        )
        .subcommand(Command::new("list-emitters").about("List available output formats"))
}

fn source_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("courses")
                .long("courses")
                .help("Directory of course files"),
        )
        .arg(
            Arg::new("quizzes")
                .long("quizzes")
                .help("Directory of quiz files"),
        )
}

fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer the user file and the subcommand's flags over the defaults.
fn load_config(sub: &ArgMatches) -> Result<PocketConfig> {
    let user_file = match sub.get_one::<String>("config") {
        Some(path) => UserFile::Explicit(Path::new(path)),
        None => UserFile::Discovered(Path::new(USER_CONFIG)),
    };
    let mut loader = Loader::new(Some(user_file));

    for (arg, key) in [
        ("courses", "sources.courses_dir"),
        ("quizzes", "sources.quizzes_dir"),
        ("output", "sql.output"),
    ] {
        if let Ok(Some(value)) = sub.try_get_one::<String>(arg) {
            loader = loader.set_override(key, value.as_str())?;
        }
    }
    if let Ok(Some(true)) = sub.try_get_one::<bool>("pretty") {
        loader = loader.set_override("json.pretty", true)?;
    }

    loader.build().context("failed to load configuration")
}

fn load_catalog(config: &PocketConfig) -> Result<Catalog> {
    let dirs = SourceDirs::new(&config.sources.courses_dir, &config.sources.quizzes_dir);
    CatalogLoader::new(dirs)
        .load()
        .context("failed to read course and quiz files")
}

fn registry(config: &PocketConfig) -> EmitterRegistry {
    let mut registry = EmitterRegistry::new();
    registry.register(SqlEmitter::new(config.sql.script.clone()));
    registry.register(JsonEmitter::new(config.json.pretty));
    registry
}

/// Handle the sql command
fn handle_sql_command(sub: &ArgMatches) -> Result<()> {
    let config = load_config(sub)?;
    let catalog = load_catalog(&config)?;
    let sql = registry(&config).emit(&catalog, "sql")?;

    let output = &config.sql.output;
    write_output(output, &sql)?;
    info!(
        lessons = catalog.lessons.len(),
        questions = catalog.question_count(),
        "SQL generated successfully in {}",
        output.display()
    );
    Ok(())
}

/// Handle the json command
fn handle_json_command(sub: &ArgMatches) -> Result<()> {
    let config = load_config(sub)?;
    let catalog = load_catalog(&config)?;
    let json = registry(&config).emit(&catalog, "json")?;

    println!("{}", json);
    Ok(())
}

/// Handle the inspect command
fn handle_inspect_command(sub: &ArgMatches) -> Result<()> {
    let path = Path::new(
        sub.get_one::<String>("path")
            .expect("path is a required argument"),
    );
    let format = sub
        .get_one::<String>("format")
        .expect("format has a default value");

    let source = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    let output = transforms::execute_transform(&source, filename, format)
        .map_err(anyhow::Error::msg)?;
    println!("{}", output);
    Ok(())
}

/// Handle the list-emitters command
fn handle_list_emitters_command() {
    let registry = EmitterRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_emitters() {
        if let Ok(emitter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", emitter.description());
            println!();
        }
    }
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("cannot write {}", path.display()))
}
