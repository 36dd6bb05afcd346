use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use log::{error, info};
use theme_lift::logging;
use theme_lift::theme::extract::extract_theme;
use theme_lift::theme::snapshot::FallbackVariables;

struct CliOptions {
    sources: Vec<String>,
    fallback_path: Option<PathBuf>,
    json_output: bool,
    verbose: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS] <css-file>...", program);
    eprintln!("  <css-file>: One or more stylesheet files; use '-' to read stdin");
    eprintln!("Options:");
    eprintln!("  --fallback <file.json>  Computed-style variables to use when text extraction finds nothing");
    eprintln!("  --json                  Emit the full outcome (css, stats, logs) as JSON");
    eprintln!("  --verbose               Enable debug logging");
    eprintln!("Example: {} globals.css theme.css > tokens.css", program);
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        sources: Vec::new(),
        fallback_path: None,
        json_output: false,
        verbose: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--fallback" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| "--fallback requires a file path".to_string())?;
                options.fallback_path = Some(PathBuf::from(path));
            }
            "--json" => options.json_output = true,
            "--verbose" => options.verbose = true,
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option: {}", flag));
            }
            source => options.sources.push(source.to_string()),
        }
        i += 1;
    }

    if options.sources.is_empty() {
        return Err("No stylesheet sources given".to_string());
    }

    Ok(options)
}

/// Read and concatenate the stylesheet sources, tracing each failure the way
/// the extraction trace reports everything else: as a line, not an abort.
fn load_css_sources(sources: &[String], logs: &mut Vec<String>) -> String {
    logs.push(format!("Found {} stylesheet source(s)", sources.len()));

    let mut all_css = String::new();
    for source in sources {
        let loaded = if source == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map(|_| text)
                .map_err(|e| e.to_string())
        } else {
            fs::read_to_string(source).map_err(|e| e.to_string())
        };

        match loaded {
            Ok(text) => all_css.push_str(&text),
            Err(reason) => {
                logs.push(format!("Failed to read: {}", source));
                error!("Failed to read {}: {}", source, reason);
            }
        }
    }

    all_css
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init_logger(options.verbose) {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(1);
    }

    let fallback = match &options.fallback_path {
        Some(path) => match FallbackVariables::load(path) {
            Ok(fallback) => Some(fallback),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        },
        None => None,
    };

    let mut logs = Vec::new();
    let css_text = load_css_sources(&options.sources, &mut logs);

    let mut outcome = extract_theme(&css_text, fallback.as_ref());
    logs.append(&mut outcome.logs);
    outcome.logs = logs;

    for line in &outcome.logs {
        info!("{}", line);
    }

    if options.json_output {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize outcome: {}", e);
                process::exit(1);
            }
        }
    } else if outcome.css.is_empty() {
        info!("No CSS variables found");
    } else {
        print!("{}", outcome.css);
    }
}
