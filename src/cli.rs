//! Minimal CLI: convert | detect | list
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::registry::{self, SettingValue};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// convert text between structured formats, or guess what format a blob is in
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// run one converter over the input and print the result
    Convert(ConvertArgs),
    /// guess the input's format and list matching converters
    Detect(DetectArgs),
    /// list all registered converters
    List,
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// input file path, or '-' for stdin
    #[arg(long, short, default_value = "-")]
    input: String,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// converter slug (see `list`)
    #[arg(long, short)]
    slug: String,

    #[command(flatten)]
    input_settings: InputSettings,

    /// converter setting overrides as key=value (e.g. --set minify=true)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DetectArgs {
    #[command(flatten)]
    input_settings: InputSettings,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Convert(args) => {
                let input = args.input_settings.read()?;
                let mut settings = registry::default_settings(&args.slug);
                for entry in &args.set {
                    let (key, value) = parse_setting(entry)?;
                    settings.insert(key, value);
                }
                let result = crate::engine::transform(&args.slug, &input, &settings)?;
                match args.out.as_ref() {
                    Some(out) => {
                        if let Some(parent) = out.parent() {
                            std::fs::create_dir_all(parent)
                                .with_context(|| format!("creating {}", parent.display()))?;
                        }
                        std::fs::write(out, &result.output)
                            .with_context(|| format!("writing {}", out.display()))?;
                    }
                    None => println!("{}", result.output),
                }
                Ok(())
            }
            Command::Detect(args) => {
                let input = args.input_settings.read()?;
                match crate::detect::detect_format(&input) {
                    None => println!("no suggestion"),
                    Some(detected) => {
                        println!("{} ({:?})", detected.label, detected.confidence);
                        for descriptor in registry::suggested_converters(detected.label, "") {
                            println!("  {:<28} {}", descriptor.slug, descriptor.title);
                        }
                    }
                }
                Ok(())
            }
            Command::List => {
                for descriptor in registry::registry() {
                    println!(
                        "{:<28} {} -> {}",
                        descriptor.slug, descriptor.source_label, descriptor.target_label
                    );
                }
                Ok(())
            }
        }
    }
}

impl InputSettings {
    fn read(&self) -> anyhow::Result<String> {
        if self.input == "-" {
            std::io::read_to_string(std::io::stdin()).context("reading stdin")
        } else {
            std::fs::read_to_string(&self.input)
                .with_context(|| format!("reading input file {}", self.input))
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn parse_setting(entry: &str) -> anyhow::Result<(String, SettingValue)> {
    let (key, raw) = entry
        .split_once('=')
        .with_context(|| format!("expected KEY=VALUE, got {entry:?}"))?;
    let value = match raw {
        "true" => SettingValue::Bool(true),
        "false" => SettingValue::Bool(false),
        other => SettingValue::Text(other.to_string()),
    };
    Ok((key.to_string(), value))
}
