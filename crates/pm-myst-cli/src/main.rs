//! pm-myst: CLI tool to convert editor documents to MyST AST JSON and back

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use config::{CONFIG_FILE_NAME, Config, Direction};
use pm_myst_core::{EditorNode, MdRoot, doc_to_mdast, mdast_to_doc};

#[derive(Parser, Debug)]
#[command(name = "pm-myst")]
#[command(about = "Convert editor documents to MyST AST JSON and back")]
#[command(version)]
#[command(after_help = "Examples:
  pm-myst note.json                 # Export to note.myst.json
  pm-myst note.myst.json            # Import to note.pm.json
  pm-myst note.json -o out.json     # Convert to specific output file
  pm-myst docs/ -o build/ -r        # Convert a directory tree
  pm-myst docs/ -d import -j4       # Force import, 4 parallel jobs")]
struct Cli {
    /// Input JSON file or directory
    #[arg(required_unless_present_any = ["init", "print_schema"])]
    input: Option<PathBuf>,

    /// Output file or directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Conversion direction (overrides the config file)
    #[arg(short, long, value_enum)]
    direction: Option<Direction>,

    /// Number of parallel jobs (defaults to number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Process directories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Write compact JSON instead of pretty-printed JSON
    #[arg(long)]
    compact: bool,

    /// Configuration file (defaults to _pm-myst.toml next to the input)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a sample _pm-myst.toml to the current directory and exit
    #[arg(long)]
    init: bool,

    /// Print the configuration file JSON schema and exit
    #[arg(long)]
    print_schema: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only show errors
    #[arg(short, long)]
    quiet: bool,
}

/// Settings resolved from CLI flags and the config file
#[derive(Debug, Clone)]
struct Settings {
    direction: Direction,
    pretty: bool,
    export_suffix: String,
    import_suffix: String,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            direction: cli
                .direction
                .or(config.convert.direction)
                .unwrap_or_default(),
            pretty: !cli.compact && config.pretty(),
            export_suffix: config.export_suffix().to_string(),
            import_suffix: config.import_suffix().to_string(),
        }
    }

    fn suffix(&self, direction: Direction) -> &str {
        match direction {
            Direction::Import => &self.import_suffix,
            Direction::Export | Direction::Auto => &self.export_suffix,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_schema {
        println!("{}", Config::json_schema_string()?);
        return Ok(());
    }

    if cli.init {
        return write_sample_config(Path::new(CONFIG_FILE_NAME), cli.quiet);
    }

    let Some(input) = cli.input.as_deref() else {
        anyhow::bail!("No input given");
    };

    let config = load_config(&cli, input)?;
    let settings = Settings::resolve(&cli, &config);
    if cli.verbose {
        eprintln!("Settings: {:?}", settings);
    }

    if input.is_file() {
        convert_file(input, cli.output.as_deref(), &settings, cli.verbose, cli.quiet)?;
    } else if input.is_dir() {
        convert_directory(
            input,
            cli.output.as_deref(),
            cli.recursive,
            &settings,
            cli.verbose,
            cli.quiet,
            cli.jobs,
        )?;
    } else {
        anyhow::bail!("Input path does not exist: {}", input.display());
    }

    Ok(())
}

/// Load the config named on the command line, or the one next to the input
fn load_config(cli: &Cli, input: &Path) -> Result<Config> {
    if let Some(path) = &cli.config {
        return Config::load(path);
    }

    let dir = if input.is_dir() {
        Some(input)
    } else {
        input.parent().filter(|p| !p.as_os_str().is_empty())
    };
    let config = match dir {
        Some(dir) => Config::load_from_dir(dir)?,
        None => Config::load_from_dir(Path::new("."))?,
    };

    if cli.verbose && config.is_some() {
        eprintln!("Using {}", CONFIG_FILE_NAME);
    }
    Ok(config.unwrap_or_default())
}

fn write_sample_config(path: &Path, quiet: bool) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    let content = Config::sample().to_toml_with_schema()?;
    fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))?;
    if !quiet {
        println!("{}", path.display());
    }
    Ok(())
}

/// Convert a single JSON file
fn convert_file(
    input: &Path,
    output: Option<&Path>,
    settings: &Settings,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read: {}", input.display()))?;

    let (direction, json) = convert_json(&content, settings)
        .with_context(|| format!("Failed to convert: {}", input.display()))?;

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => output_file_name(input, settings, direction),
    };

    if verbose {
        eprintln!(
            "Converting ({:?}): {} -> {}",
            direction,
            input.display(),
            output_path.display()
        );
    }

    write_output(&output_path, &json)?;

    if !quiet {
        println!("{}", output_path.display());
    }

    Ok(())
}

/// Convert a directory of JSON files
fn convert_directory(
    input: &Path,
    output: Option<&Path>,
    recursive: bool,
    settings: &Settings,
    verbose: bool,
    quiet: bool,
    jobs: Option<usize>,
) -> Result<()> {
    let output_dir = output.unwrap_or(input);

    let files = collect_json_files(input, recursive)?;

    if files.is_empty() {
        if !quiet {
            eprintln!("No .json files found in {}", input.display());
        }
        return Ok(());
    }

    if verbose {
        eprintln!("Found {} .json files", files.len());
    }

    // Configure thread pool if jobs specified
    if let Some(n) = jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    // Convert everything before writing, so no input is read after another
    // file's output replaced it
    let converted: Vec<(PathBuf, Result<Converted>)> = files
        .into_par_iter()
        .map(|file| {
            let relative = file.strip_prefix(input).unwrap_or(&file);
            let result = convert_file_inner(&file, output_dir, relative, settings);
            (file, result)
        })
        .collect();

    let mut claims: HashMap<PathBuf, Vec<PathBuf>> = HashMap::new();
    for (file, result) in &converted {
        if let Ok(c) = result {
            claims.entry(c.output.clone()).or_default().push(file.clone());
        }
    }

    let success = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    let errors: Vec<_> = converted
        .into_par_iter()
        .filter_map(|(file, result)| {
            let written = result.and_then(|c| {
                check_output_claim(&file, &c.output, &claims)?;
                write_output(&c.output, &c.json)?;
                Ok(c.output)
            });
            match written {
                Ok(output_file) => {
                    success.fetch_add(1, Ordering::Relaxed);
                    if !quiet {
                        println!("{}", output_file.display());
                    }
                    None
                }
                Err(e) => {
                    failed.fetch_add(1, Ordering::Relaxed);
                    Some((file, e))
                }
            }
        })
        .collect();

    for (file, e) in &errors {
        eprintln!("Error converting {}: {:#}", file.display(), e);
    }

    let success_count = success.load(Ordering::Relaxed);
    let failed_count = failed.load(Ordering::Relaxed);

    if !quiet {
        eprintln!("Converted {} files, {} failed", success_count, failed_count);
    }

    if failed_count > 0 {
        anyhow::bail!("{} files failed to convert", failed_count);
    }

    Ok(())
}

/// A converted document waiting to be written
struct Converted {
    output: PathBuf,
    json: String,
}

/// Inner conversion function that doesn't print or write (for parallel use)
fn convert_file_inner(
    input: &Path,
    output_dir: &Path,
    relative: &Path,
    settings: &Settings,
) -> Result<Converted> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read: {}", input.display()))?;

    let (direction, json) = convert_json(&content, settings)?;
    let output = output_file_name(&output_dir.join(relative), settings, direction);

    Ok(Converted { output, json })
}

/// Fail when other inputs convert to the same output path
fn check_output_claim(
    input: &Path,
    output: &Path,
    claims: &HashMap<PathBuf, Vec<PathBuf>>,
) -> Result<()> {
    let others: Vec<String> = claims
        .get(output)
        .into_iter()
        .flatten()
        .filter(|other| other.as_path() != input)
        .map(|other| other.display().to_string())
        .collect();

    if !others.is_empty() {
        anyhow::bail!(
            "Output {} would also be written from {}",
            output.display(),
            others.join(", ")
        );
    }
    Ok(())
}

fn write_output(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, json).with_context(|| format!("Failed to write: {}", path.display()))
}

/// Collect all .json files in a directory, skipping the config file
fn collect_json_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(ext) = path.extension() {
                if ext.eq_ignore_ascii_case("json") {
                    files.push(path);
                }
            }
        } else if path.is_dir() && recursive {
            files.extend(collect_json_files(&path, recursive)?);
        }
    }

    files.sort();
    Ok(files)
}

/// Output path for `input` converted in `direction`: any known suffix is
/// replaced with the direction's suffix
fn output_file_name(input: &Path, settings: &Settings, direction: Direction) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = [
        settings.export_suffix.as_str(),
        settings.import_suffix.as_str(),
        ".json",
    ]
    .into_iter()
    .find_map(|suffix| file_name.strip_suffix(suffix))
    .unwrap_or(&file_name);

    input.with_file_name(format!("{}{}", stem, settings.suffix(direction)))
}

/// Core conversion function. Returns the direction actually used.
fn convert_json(content: &str, settings: &Settings) -> Result<(Direction, String)> {
    let value: serde_json::Value = serde_json::from_str(content).context("Invalid JSON")?;

    let direction = match settings.direction {
        Direction::Auto => detect_direction(&value)?,
        direction => direction,
    };

    let json = match direction {
        Direction::Export | Direction::Auto => {
            let doc: EditorNode =
                serde_json::from_value(value).context("Invalid editor document")?;
            let root = doc_to_mdast(&doc)?;
            to_json(&root, settings.pretty)?
        }
        Direction::Import => {
            let root: MdRoot = serde_json::from_value(value).context("Invalid MyST document")?;
            let doc = mdast_to_doc(&root)?;
            to_json(&doc, settings.pretty)?
        }
    };

    Ok((direction, json))
}

/// Pick the direction from the top-level `type`
fn detect_direction(value: &serde_json::Value) -> Result<Direction> {
    match value.get("type").and_then(|t| t.as_str()) {
        Some("doc") => Ok(Direction::Export),
        Some("root") => Ok(Direction::Import),
        Some(other) => anyhow::bail!(
            "Cannot detect direction from top-level type `{}` (expected `doc` or `root`)",
            other
        ),
        None => anyhow::bail!("Cannot detect direction: document has no top-level `type`"),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');
    Ok(json)
}
