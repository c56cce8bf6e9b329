use clap::{CommandFactory, FromArgMatches, Parser};
use freqgram::config::Config;
use freqgram::runner;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// JSON file with default settings; flags given here still win.
    #[arg(long)]
    config_file: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    // Raw matches tell user input apart from clap defaults when merging.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let config = match &cli.config_file {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path.display());
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(&cli.config, &matches);
            file_config
        }
        None => cli.config.clone(),
    };
    debug!("Resolved config: {:?}", config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match runner::run(&config, &mut out) {
        Ok(elapsed) => debug!("Finished in {:?}", elapsed),
        Err(e) => {
            error!("❌ FATAL: {}", e);
            process::exit(1);
        }
    }
}
