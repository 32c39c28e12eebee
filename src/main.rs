use std::io::{self, Write};
use std::path::Path;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, error, info, LevelFilter};

use sheepform::error::FormError;
use sheepform::{convert_forms, parse_files};

/// Command-line arguments for the sheepform converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Paths to the input .sheepform files
    #[arg(help = "Paths to the input .sheepform files")]
    files: Vec<String>,

    /// Directory the generated code is written to
    #[arg(short, long, default_value = ".")]
    out_dir: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let mut args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'info' instead.",
            args.log_level
        );
        LevelFilter::Info
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!("parsed arguments: {args:?}");

    // With no file arguments, fall back to prompting for the inputs.
    if args.files.is_empty() {
        match prompt_for_inputs() {
            Ok((files, out_dir)) => {
                args.files = files;
                args.out_dir = out_dir;
            }
            Err(err) => {
                error!("error reading response: {err}");
                process::exit(1);
            }
        }
    }

    if let Err(err) = run(&args) {
        let reporter = miette::GraphicalReportHandler::new();
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &err)
            .expect("writing to a String buffer is infallible");

        error!("{writer}");
        process::exit(1);
    }

    info!("completed successfully");
}

fn run(args: &Args) -> Result<(), FormError> {
    let forms = parse_files(&args.files)?;
    info!("parsed {} form(s)", forms.len());

    convert_forms(&forms, Path::new(&args.out_dir))
}

fn prompt_for_inputs() -> io::Result<(Vec<String>, String)> {
    print!("Where are your input .sheepforms: ");
    io::stdout().flush()?;
    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    let files = response.split_whitespace().map(str::to_string).collect();

    print!("Where is your output directory: ");
    io::stdout().flush()?;
    let mut out_dir = String::new();
    io::stdin().read_line(&mut out_dir)?;

    Ok((files, out_dir.trim().to_string()))
}
