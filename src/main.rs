//! chalk - Render a computed formula result from the command line

mod config;
mod error;

use std::env;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use chalk_display::{PresentationNode, paint_html, paint_text, render};
use chalk_result::{ResultValue, WireError};

use config::{Config, OutputFormat};
use error::CliError;

fn print_usage() {
    eprintln!("Usage: chalk [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                 Execution result JSON (stdin when omitted or \"-\")");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -f, --format <FMT>     Output format: text, html or tree");
    eprintln!("  -o, --output <FILE>    Write output to a file instead of stdout");
    eprintln!("  --config <FILE>        Load configuration from FILE");
    eprintln!("  --no-config            Ignore the user config file");
    eprintln!("  --bare                 Input is a bare result object, not an envelope");
    eprintln!("  -h, --help             Print help");
}

/// Where the result JSON is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Default)]
struct Options {
    input: Option<Input>,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    config: Option<PathBuf>,
    no_config: bool,
    bare: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Options, CliError> {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                options.help = true;
                return Ok(options);
            }
            "-f" | "--format" => {
                i += 1;
                let value = args.get(i).ok_or(CliError::MissingValue("--format"))?;
                options.format = Some(value.parse()?);
            }
            "-o" | "--output" => {
                i += 1;
                let value = args.get(i).ok_or(CliError::MissingValue("--output"))?;
                options.output = Some(PathBuf::from(value));
            }
            "--config" => {
                i += 1;
                let value = args.get(i).ok_or(CliError::MissingValue("--config"))?;
                options.config = Some(PathBuf::from(value));
            }
            "--no-config" => options.no_config = true,
            "--bare" => options.bare = true,
            arg if arg.starts_with('-') && arg != "-" => {
                return Err(CliError::UnknownOption(arg.to_string()));
            }
            arg => {
                if options.input.is_some() {
                    return Err(CliError::UnexpectedArgument(arg.to_string()));
                }
                options.input = Some(if arg == "-" {
                    Input::Stdin
                } else {
                    Input::File(PathBuf::from(arg))
                });
            }
        }
        i += 1;
    }

    Ok(options)
}

fn read_result(options: &Options) -> anyhow::Result<ResultValue> {
    let reader: Box<dyn Read> = match &options.input {
        Some(Input::File(path)) => Box::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        ),
        Some(Input::Stdin) | None => Box::new(io::stdin().lock()),
    };

    let value = if options.bare {
        chalk_result::decode_object_reader(reader)?
    } else {
        chalk_result::decode_execution_result_reader(reader)?
    };
    Ok(value)
}

fn paint(node: &PresentationNode, format: OutputFormat, config: &Config) -> anyhow::Result<String> {
    let out = match format {
        OutputFormat::Text => paint_text(node, &config.text_style()),
        OutputFormat::Html => paint_html(node, &config.html_style()),
        OutputFormat::Tree => serde_json::to_string_pretty(node)?,
    };
    Ok(out)
}

fn run(options: &Options) -> anyhow::Result<()> {
    let config = if options.no_config {
        Config::default()
    } else {
        Config::load(options.config.as_deref())?
    };
    let format = options.format.unwrap_or(config.format);

    let value = read_result(options)?;
    log::debug!("rendering {} result as {:?}", value.kind(), format);
    let node = render(&value);
    let out = paint(&node, format, &config)?;

    match &options.output {
        Some(path) => {
            fs::write(path, format!("{}\n", out))
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", out)?;
        }
    }
    Ok(())
}

/// Exit status for a failed run: 2 when the input could not be decoded.
fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<WireError>().is_some() {
        2
    } else {
        1
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    if options.help {
        print_usage();
        return;
    }

    if let Err(e) = run(&options) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}
