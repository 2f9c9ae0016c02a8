//! Interpolate Text CLI
//!
//! Usage:
//!   interpolate-text [OPTIONS] [FILE]
//!
//! Options:
//!   -m, --map <FILE>       Text map with placeholder values (TOML format)
//!   -c, --config <FILE>    Render configuration (TOML format)
//!   -D, --define <K=V>     Set a placeholder value (repeatable)
//!   -p, --preserve         Keep unresolved placeholders instead of failing
//!       --once             Render in a single pass without compiling
//!   -l, --lines            Treat each input line as its own template
//!   -v, --verbose          Log debug output to stderr
//!   -h, --help             Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use interpolate_text::{
    render_batch_with_config, render_with_config, BatchError, ErrorPolicy, RenderConfig,
    RenderError, RenderMode, TextMap,
};

#[derive(Parser)]
#[command(name = "interpolate-text")]
#[command(about = "Fill ${...} placeholders in text from a key/value map")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Text map with placeholder values (TOML format)
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Render configuration (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set a placeholder value, overriding the map
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", value_parser = parse_define)]
    defines: Vec<(String, String)>,

    /// Keep unresolved placeholders as ${KEY} instead of failing
    #[arg(short, long)]
    preserve: bool,

    /// Render in a single pass without compiling
    #[arg(long)]
    once: bool,

    /// Treat each input line as its own template
    #[arg(short, long)]
    lines: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_define(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    // Load configuration; flags override the file
    let mut config = match &cli.config {
        Some(path) => {
            let loaded = fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|content| RenderConfig::from_str(&content).map_err(|e| e.to_string()));
            match loaded {
                Ok(c) => c,
                Err(e) => fail(&format!("Error loading config '{}': {}", path.display(), e)),
            }
        }
        None => RenderConfig::default(),
    };
    if cli.preserve {
        config = config.with_policy(ErrorPolicy::Preserve);
    }
    if cli.once {
        config = config.with_mode(RenderMode::OnePass);
    }

    // Load text map
    let mut map = match &cli.map {
        Some(path) => match TextMap::from_file(path) {
            Ok(m) => m,
            Err(e) => fail(&format!("Error loading text map '{}': {}", path.display(), e)),
        },
        None => TextMap::default(),
    };
    map.extend_from(cli.defines.iter().cloned().collect());
    let mut keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
    keys.sort_unstable();
    debug!(?keys, ?config, "loaded text map");

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, display_name(path)),
            Err(e) => fail(&format!("Error reading file '{}': {}", path.display(), e)),
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                fail(&format!("Error reading from stdin: {}", e));
            }
            (buffer, "<stdin>".to_string())
        }
    };

    if cli.lines {
        render_lines(&source, &filename, &map, &config);
    } else {
        match render_with_config(&source, &map, &config) {
            Ok(text) => print!("{}", text),
            Err(RenderError::Parse(e)) => {
                eprint!("{}", e.format(&source, &filename));
                process::exit(1);
            }
            Err(RenderError::Apply(e)) => fail(&format!("Error: {}", e)),
        }
    }
}

fn render_lines(source: &str, filename: &str, map: &TextMap, config: &RenderConfig) {
    let lines: Vec<&str> = source.lines().collect();
    match render_batch_with_config(&lines, map, config) {
        Ok(rendered) => {
            for line in rendered {
                println!("{}", line);
            }
        }
        Err(BatchError::Parse { index, source: e }) => {
            let name = format!("{}:{}", filename, index + 1);
            eprint!("{}", e.format(lines[index], &name));
            process::exit(1);
        }
        Err(e) => fail(&format!("Error: {}", e)),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}
