//! Command-line interface for almanac
//! This binary builds a documentation site from marker-tagged text found in a
//! directory tree.
//!
//! Usage:
//!   almanac `<path>` [--source `<name>`]... [--output `<dir>`] [--format `<format>`]
//!   almanac --list-sources

use almanac_config::{AlmanacConfig, Loader};
use almanac_parser::almanac::ast::Documentation;
use almanac_parser::almanac::documenting::{Documenter, Sink};
use almanac_publish::{HtmlRenderer, SourceRegistry};
use clap::{Arg, ArgAction, Command};
use std::path::Path;

fn main() {
    let matches = Command::new("almanac")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds navigable documentation from marker-tagged text")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Directory tree to scan for documentation input")
                .required_unless_present("list-sources")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file (default: almanac.toml in the scan root, if present)"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .short('s')
                .help("Source to run (repeatable; overrides the configured list)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output directory for rendered pages"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: html or json")
                .default_value("html"),
        )
        .arg(
            Arg::new("list-sources")
                .long("list-sources")
                .help("List available sources")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-sources") {
        handle_list_sources_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing sources");
    let format = matches.get_one::<String>("format").unwrap();

    let config = load_config(
        path,
        matches.get_one::<String>("config"),
        matches
            .get_many::<String>("source")
            .map(|values| values.cloned().collect()),
        matches.get_one::<String>("output"),
    );

    let documentation = build_documentation(&config);
    handle_output_command(&config, &documentation, format);
}

/// Layer the embedded defaults, any config file, and CLI overrides.
fn load_config(
    path: &str,
    config_file: Option<&String>,
    sources: Option<Vec<String>>,
    output: Option<&String>,
) -> AlmanacConfig {
    let mut loader = Loader::new();

    loader = match config_file {
        Some(file) => loader.with_file(file),
        None => loader.with_optional_file(Path::new(path).join("almanac.toml")),
    };

    let mut overrides = vec![("scan.root", path.to_string())];

    if let Some(output) = output {
        overrides.push(("output.directory", output.clone()));
    }

    for (key, value) in overrides {
        loader = loader.set_override(key, value).unwrap_or_else(|e| {
            eprintln!("Invalid setting for {}: {}", key, e);
            std::process::exit(1);
        });
    }

    if let Some(sources) = sources {
        loader = loader
            .set_override("scan.sources", sources)
            .unwrap_or_else(|e| {
                eprintln!("Invalid source list: {}", e);
                std::process::exit(1);
            });
    }

    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Run the configured sources and assemble their records.
fn build_documentation(config: &AlmanacConfig) -> Documentation {
    let registry = SourceRegistry::with_defaults();
    let root = Path::new(&config.scan.root);

    let mut documenter = Documenter::new();

    for name in &config.scan.sources {
        let source = registry.create(name, root).unwrap_or_else(|e| {
            eprintln!("{}", e);
            eprintln!("\nAvailable sources:");
            for info in registry.list_sources() {
                eprintln!("  {} - {}", info.name, info.description);
            }
            std::process::exit(1);
        });

        documenter = documenter.with_boxed_source(source);
    }

    documenter.document().unwrap_or_else(|e| {
        eprintln!("Documentation error: {}", e);
        std::process::exit(1);
    })
}

/// Render or dump the assembled documentation.
fn handle_output_command(config: &AlmanacConfig, documentation: &Documentation, format: &str) {
    match format {
        "html" => {
            let renderer = HtmlRenderer::new(&config.output.directory)
                .with_site_title(config.render.site_title.clone());

            if let Err(e) = renderer.render(documentation) {
                eprintln!("Render error: {}", e);
                std::process::exit(1);
            }

            println!("Documentation written to {}", config.output.directory);
        }
        "json" => {
            let json = serde_json::to_string_pretty(documentation).unwrap_or_else(|e| {
                eprintln!("Error formatting documentation: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: html, json");
            std::process::exit(1);
        }
    }
}

/// Handle the list-sources command
fn handle_list_sources_command() {
    let registry = SourceRegistry::with_defaults();
    println!("Available sources:\n");

    for info in registry.list_sources() {
        println!("  {}", info.name);
        println!("    {}", info.description);
        println!();
    }
}
