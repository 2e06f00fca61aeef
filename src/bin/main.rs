//! semplan CLI - Compile semantics requests to SQL
//!
//! Usage:
//!   semplan compile <request.json> [--metadata <dir>] [--strict] [--check] [--output <format>]
//!   semplan tables [--metadata <dir>]
//!   semplan validate [--metadata <dir>]
//!
//! Examples:
//!   semplan compile headcount.json --metadata ./metadata
//!   semplan compile headcount.yaml --strict --output verbose
//!   semplan tables --metadata ./metadata

use clap::{Parser, Subcommand, ValueEnum};
use semplan::compile::{compile, CompileOptions};
use semplan::config::Settings;
use semplan::metadata::{MetadataProvider, YamlMetadataProvider};
use semplan::model::Catalog;
use semplan::semantics::SemanticsRequest;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "semplan")]
#[command(about = "semplan - compile semantics requests against a metadata catalog to SQL")]
#[command(version)]
struct Cli {
    /// Config file (defaults to $SEMPLAN_CONFIG, ./semplan.toml, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Metadata directory containing tables.yaml and joins.yaml
    #[arg(short, long, global = true)]
    metadata: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a semantics request to SQL
    Compile {
        /// Path to the request (.json, .yaml or .yml)
        request: PathBuf,

        /// Fail on dimensions without a join edge or string column
        #[arg(long)]
        strict: bool,

        /// Parse the generated SQL before printing it
        #[arg(long)]
        check: bool,

        /// Output format
        #[arg(short, long, default_value = "sql")]
        output: OutputFormat,
    },

    /// List catalog tables and join edges
    Tables,

    /// Load the catalog and report dangling join edges
    Validate,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Output SQL only
    Sql,
    /// Output SQL with comments
    Verbose,
    /// Output the query plan as JSON
    Plan,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let provider = match settings.metadata.provider(cli.metadata.as_deref()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Configuration error: {} (pass --metadata <dir>)", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Compile {
            request,
            strict,
            check,
            output,
        } => {
            let options = settings.compile_options();
            let options = CompileOptions {
                strict: options.strict || strict,
                validate_sql: options.validate_sql || check,
            };
            cmd_compile(&provider, &request, &options, output)
        }
        Commands::Tables => cmd_tables(&provider),
        Commands::Validate => cmd_validate(&provider),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("semplan=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn load_catalog(provider: &YamlMetadataProvider) -> Option<Catalog> {
    match provider.load_catalog() {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            eprintln!("Error loading catalog: {}", e);
            None
        }
    }
}

fn read_request(path: &Path) -> Result<SemanticsRequest, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Error reading file '{}': {}", path.display(), e))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        SemanticsRequest::from_yaml(&source).map_err(|e| format!("Invalid request: {}", e))
    } else {
        SemanticsRequest::from_json(&source).map_err(|e| format!("Invalid request: {}", e))
    }
}

fn cmd_compile(
    provider: &YamlMetadataProvider,
    request_path: &Path,
    options: &CompileOptions,
    output: OutputFormat,
) -> ExitCode {
    let request = match read_request(request_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(catalog) = load_catalog(provider) else {
        return ExitCode::FAILURE;
    };

    let compiled = match compile(&catalog, &request, options) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Compilation error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match output {
        OutputFormat::Sql => println!("{}", compiled.sql),
        OutputFormat::Verbose => {
            println!("-- semplan compiled SQL");
            println!("-- Request: {}", request_path.display());
            println!("-- Base entity: {}", request.base_entity);
            if !request.dimensions.is_empty() {
                println!("-- Dimensions: {}", request.dimensions.join(", "));
            }
            println!("-- Strict: {}", options.strict);
            println!();
            println!("{}", compiled.sql);
        }
        OutputFormat::Plan => match serde_json::to_string_pretty(&compiled.plan) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing plan: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

fn cmd_tables(provider: &YamlMetadataProvider) -> ExitCode {
    let Some(catalog) = load_catalog(provider) else {
        return ExitCode::FAILURE;
    };

    println!("Tables:");
    for name in catalog.table_names() {
        if let Some(table) = catalog.table(name) {
            println!(
                "  - {} (alias: {}, role: {}, columns: {})",
                name,
                table.alias,
                table.role,
                table.columns().len()
            );
        }
    }
    println!();

    if catalog.joins().is_empty() {
        println!("No joins defined.");
    } else {
        println!("Joins:");
        for edge in catalog.joins() {
            let keys: Vec<_> = edge
                .keys
                .iter()
                .map(|k| format!("{} = {}", k.left_column, k.right_column))
                .collect();
            println!(
                "  - {} -> {} ({}; {})",
                edge.from,
                edge.to,
                edge.join_type.to_uppercase(),
                keys.join(", ")
            );
        }
    }

    ExitCode::SUCCESS
}

fn cmd_validate(provider: &YamlMetadataProvider) -> ExitCode {
    let Some(catalog) = load_catalog(provider) else {
        return ExitCode::FAILURE;
    };

    let dangling = catalog.dangling_edges();
    for edge in &dangling {
        tracing::warn!(from = %edge.from, to = %edge.to, "join edge references an unknown table");
    }

    println!(
        "OK: {} tables, {} joins ({} dangling)",
        catalog.tables().len(),
        catalog.joins().len(),
        dangling.len()
    );
    ExitCode::SUCCESS
}
