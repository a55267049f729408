//! breakpoints - Resolve named breakpoints to CSS media queries

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use breakpoints::{BreakpointTable, Config, CssWrapper, Media, Query, Rule, ToCss, resolve};

#[derive(Parser)]
#[command(name = "breakpoints")]
#[command(version, about = "Resolve named breakpoints to CSS media queries", long_about = None)]
#[command(after_help = "EXAMPLES:
    breakpoints resolve md -r only                    (min-width: 768px) and (max-width: 1023px)
    breakpoints -b sm=0 -b md=768 resolve sm -r down  (max-width: 767px)
    breakpoints wrap lg 'padding: 2rem;'              Wrap a style block
    breakpoints -c theme.json list                    List breakpoint names")]
struct Cli {
    /// Config file with a [breakpoints] table (TOML or JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Inline breakpoint, overrides the config file (repeatable)
    #[arg(short, long = "breakpoint", value_name = "NAME=WIDTH", value_parser = parse_breakpoint)]
    breakpoints: Vec<(String, u32)>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the media condition for a breakpoint
    Resolve {
        /// Breakpoint name
        key: String,

        /// Rule to apply (up, down, only)
        #[arg(short, long, default_value = "up")]
        rule: Rule,

        /// Upper breakpoint of a range (ignores --rule)
        #[arg(long, value_name = "KEY")]
        bound: Option<String>,

        /// Prefix the condition with `@media only screen and`
        #[arg(short, long)]
        media: bool,
    },
    /// Wrap a style block in the media rule for a breakpoint
    Wrap {
        /// Breakpoint name
        key: String,

        /// CSS declarations to wrap
        style: String,

        /// Rule to apply (up, down, only)
        #[arg(short, long, default_value = "up")]
        rule: Rule,

        /// Upper breakpoint of a range (ignores --rule)
        #[arg(long, value_name = "KEY")]
        bound: Option<String>,
    },
    /// List breakpoints in declaration order
    List {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_breakpoint(s: &str) -> Result<(String, u32), String> {
    let (name, width) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=WIDTH, got `{s}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing breakpoint name in `{s}`"));
    }
    let width = width
        .trim()
        .trim_end_matches("px")
        .parse::<u32>()
        .map_err(|e| format!("invalid width in `{s}`: {e}"))?;
    Ok((name.to_string(), width))
}

fn load_table(cli: &Cli) -> breakpoints::Result<BreakpointTable> {
    if !cli.breakpoints.is_empty() {
        return BreakpointTable::new(cli.breakpoints.iter().cloned());
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load(Config::default_path())?,
    };
    Ok(config.breakpoints)
}

fn run(cli: Cli) -> breakpoints::Result<()> {
    let table = load_table(&cli)?;

    match cli.command {
        Command::Resolve {
            key,
            rule,
            bound,
            media,
        } => {
            let condition = resolve(&table, Query::new(&key, rule, bound.as_deref()))?;
            if media {
                println!("{}", condition.to_media());
            } else {
                println!("{}", condition.to_css_string());
            }
        }
        Command::Wrap {
            key,
            style,
            rule,
            bound,
        } => {
            let media = Media::new(table, CssWrapper);
            let css = media.mixin(&key, rule, bound.as_deref())?.apply(style.as_str())?;
            println!("{css}");
        }
        Command::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                for bp in &table {
                    println!("{}\t{}px", bp.name, bp.width);
                }
            }
        }
    }

    Ok(())
}
