// License: MIT

use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};

use varcfg::input::{read_all, read_until_sentinel};
use varcfg::{ConfigError, ParsedConfig, XmlOptions, convert_with, to_json};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Xml,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a var/@[...] configuration file to XML", long_about = None)]
struct Cli {
    /// Configuration file; reads stdin when omitted or `-`
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Read line by line until a line containing only END
    #[arg(short, long)]
    interactive: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Xml)]
    format: Format,

    /// Spaces per indentation level in XML output
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// Omit the <?xml ...?> declaration
    #[arg(long)]
    no_declaration: bool,

    /// Write the document here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Nothing reaches the output until the whole document is rendered.
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

/// One `Error: <message>` line on stderr. Parse errors print their bare
/// message; position and hint go to the log.
fn report(e: &anyhow::Error) {
    match e.downcast_ref::<ConfigError>() {
        Some(config_error) => {
            info!("{}", config_error);
            eprintln!("Error: {}", config_error.message());
        }
        None => eprintln!("Error: {:#}", e),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let text = read_input(cli)?;
    if !cli.interactive && text.trim().is_empty() {
        bail!("No input provided");
    }
    let config: ParsedConfig = text.parse()?;
    info!(
        "parsed {} variable(s) and {} constant(s)",
        config.variables().len(),
        config.constants().len()
    );

    let document = match cli.format {
        Format::Xml => convert_with(
            &config,
            &XmlOptions {
                indent: cli.indent,
                declaration: !cli.no_declaration,
            },
        ),
        Format::Json => {
            let mut json = to_json(&config)?;
            json.push('\n');
            json
        }
    };

    match &cli.output {
        Some(path) => std::fs::write(path, &document)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            let reader = BufReader::new(file);
            if cli.interactive {
                Ok(read_until_sentinel(reader)?)
            } else {
                Ok(read_all(reader)?)
            }
        }
        _ => {
            let stdin = io::stdin();
            if cli.interactive {
                if stdin.is_terminal() {
                    eprintln!("Enter configuration data line by line. Type 'END' on a new line to finish:");
                }
                Ok(read_until_sentinel(stdin.lock())?)
            } else {
                Ok(read_all(stdin.lock()).context("Failed to read stdin")?)
            }
        }
    }
}
