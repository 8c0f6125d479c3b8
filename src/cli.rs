//! CLI module - Command-line interface definitions and handlers

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use browscap_cache::core::model::OutputItem;
use browscap_cache::core::paths::normalize_path;
use browscap_cache::core::render::{OutputFormat, RenderConfig, Renderer};
use browscap_cache::core::util::parse_json_or_string;
use browscap_cache::BrowscapCache;

/// browscap-cache - inspect and populate a browscap JSON cache directory.
#[derive(Parser, Debug)]
#[command(name = "browscap-cache")]
#[command(
    author,
    version,
    about,
    long_about = r#"browscap-cache reads and writes the JSON item files of a browscap cache.

Items live at <ROOT>/<KEY>.json, or <ROOT>/<KEY>.<VERSION>.json when they are
qualified with the version stored in <ROOT>/browscap.version.json.

Output formats:
- jsonl: one JSON object per line (default)
- json: a single JSON array
- md: human-friendly Markdown
- raw: the bare value only

Examples:
    browscap-cache --root ./cache version
    browscap-cache get browscap.version --no-version
    browscap-cache set patterns '["a","b"]'
    browscap-cache has patterns
"#
)]
pub struct Cli {
    /// Cache directory holding the JSON item files.
    #[arg(
        long,
        global = true,
        default_value = ".",
        env = "BROWSCAP_CACHE_DIR",
        value_name = "ROOT"
    )]
    pub root: PathBuf,

    /// Output format (jsonl/json/md/raw).
    #[arg(long, global = true, default_value = "jsonl", value_name = "FORMAT")]
    pub format: String,

    /// Quiet mode (no diagnostics on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the detected cache version (null when none is cached).
    Version,

    /// Read a cached item.
    #[command(long_about = "Read a cached item and print its content together with a success flag.\n\n\
A missing item is not an error: it prints null content with success=false.\n\
A present but malformed item file is an error.")]
    Get {
        /// Cache key.
        #[arg(value_name = "KEY")]
        key: String,

        /// Do not qualify the key with the cache version.
        #[arg(long)]
        no_version: bool,
    },

    /// Store a value under a key.
    #[command(long_about = "Store VALUE under KEY, overwriting any existing item.\n\n\
VALUE is parsed as JSON; when it is not valid JSON it is stored as a string.\n\
Exits with a non-zero status when the item file cannot be written.")]
    Set {
        /// Cache key.
        #[arg(value_name = "KEY")]
        key: String,

        /// Value to store (JSON, or a plain string).
        #[arg(value_name = "VALUE")]
        value: String,

        /// Do not qualify the key with the cache version.
        #[arg(long)]
        no_version: bool,
    },

    /// Check whether an item is cached with non-null content.
    Has {
        /// Cache key.
        #[arg(value_name = "KEY")]
        key: String,

        /// Do not qualify the key with the cache version.
        #[arg(long)]
        no_version: bool,
    },

    /// Print the item file path for a key.
    Path {
        /// Cache key.
        #[arg(value_name = "KEY")]
        key: String,

        /// Do not qualify the key with the cache version.
        #[arg(long)]
        no_version: bool,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let renderer = Renderer::with_config(RenderConfig::with_pretty(format, cli.pretty));

    let cache = BrowscapCache::new(&cli.root);

    let item = match cli.command {
        Commands::Version => {
            let version = cache
                .version()
                .context("Failed to detect cache version")?;
            OutputItem::version(version)
        }

        Commands::Get { key, no_version } => {
            let path = cache.resolve_path(&key, !no_version)?;
            let result = cache
                .get_item_with(&key, !no_version)
                .with_context(|| format!("Failed to read cache item '{}'", key))?;
            OutputItem::item(key, normalize_path(&path), result)
        }

        Commands::Set {
            key,
            value,
            no_version,
        } => {
            let path = cache.resolve_path(&key, !no_version)?;
            let content = parse_json_or_string(&value);
            let stored = cache.set_item_with(&key, &content, !no_version);
            let path = normalize_path(&path);
            renderer.render_to(&[OutputItem::store(&key, &path, stored)], io::stdout())?;
            if !stored {
                bail!("Failed to write cache item '{}' to {}", key, path);
            }
            return Ok(());
        }

        Commands::Has { key, no_version } => {
            let present = cache
                .has_item_with(&key, !no_version)
                .with_context(|| format!("Failed to read cache item '{}'", key))?;
            OutputItem::presence(key, present)
        }

        Commands::Path { key, no_version } => {
            let path = cache.resolve_path(&key, !no_version)?;
            OutputItem::path(key, normalize_path(&path))
        }
    };

    renderer.render_to(&[item], io::stdout())?;
    Ok(())
}
