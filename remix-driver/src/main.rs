//! C to Go Remixer
//!
//! `remix translate` converts one file; `remix worker` processes job
//! deliveries against a directory-backed artifact store.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use remix_backend::Remixer;
use remix_driver::logging::init_logging;
use remix_driver::{load_config, DirectoryStore, JsonLinesReporter, Worker, WorkerConfig};
use remix_frontend::Frontend;
use std::fs;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "remix")]
#[command(about = "C to Go source remixer")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a single C source file
    Translate {
        /// Input C source file
        input: PathBuf,

        /// Output Go file (stdout when absent)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the AST as JSON before translating
        #[arg(long)]
        print_ast: bool,

        /// Print the token stream before translating
        #[arg(long)]
        print_tokens: bool,
    },

    /// Process job deliveries, one JSON message per line
    Worker {
        /// Worker configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// File of deliveries (stdin when absent)
        #[arg(long)]
        jobs: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Translate { input, output, print_ast, print_tokens } => {
            init_logging(cli.log_level.as_deref(), None);
            translate_file(&input, output.as_deref(), print_ast, print_tokens).map(|()| true)
        }
        Commands::Worker { config, jobs } => run_worker(cli.log_level.as_deref(), config.as_deref(), jobs.as_deref()),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn translate_file(input: &Path, output: Option<&Path>, print_ast: bool, print_tokens: bool) -> Result<()> {
    let source = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let name = input.display().to_string();

    if print_tokens {
        for token in Frontend::tokenize_source(&source)? {
            println!("{}", token);
        }
    }

    if print_ast {
        let program = Frontend::parse_named(&source, &name)?;
        println!("{}", serde_json::to_string_pretty(&program)?);
    }

    let remixed = Remixer::new().remix_named(&source, &name)?;

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", remixed)).with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", remixed),
    }

    Ok(())
}

/// Returns `false` when any delivery was rejected
fn run_worker(log_level: Option<&str>, config_path: Option<&Path>, jobs: Option<&Path>) -> Result<bool> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => WorkerConfig::default(),
    };
    init_logging(log_level, config.log_level.as_deref());

    info!(
        "Worker reading {} and writing {}",
        config.input_root.display(),
        config.output_root.display()
    );

    let store = DirectoryStore::new(&config.input_root, &config.output_root);
    let reporter = JsonLinesReporter::new(io::stdout());
    let mut worker = Worker::new(config, store, reporter);

    let summary = match jobs {
        Some(path) => {
            let file = fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
            worker.run(BufReader::new(file))?
        }
        None => worker.run(io::stdin().lock())?,
    };

    Ok(summary.nacked == 0)
}
