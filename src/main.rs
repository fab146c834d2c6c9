use clap::Parser;
use tracing_subscriber::EnvFilter;

use envdiff::EnvDiffError;
use envdiff::cli::{self, Args};

fn main() {
    // clap exits on its own for --help, --version and malformed flags
    let args = Args::parse();
    init_tracing(args.verbose);

    let code = match cli::run(&args) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, EnvDiffError::Usage(_)) {
                eprintln!("\n{}", cli::usage());
            }
            err.exit_code()
        }
    };
    std::process::exit(code);
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
