use anyhow::Context;
use anysweep_core::cli::{Session, SessionError, SessionOptions};
use anysweep_core::config::SweepConfig;
use anysweep_core::logging::{LogFormat, default_log_format, init_logging};
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "anysweep",
    version,
    about = "Anysweep: group firewall traffic logs into an any-any rule review report"
)]
struct Cli {
    /// Traffic log export to process. Prompted for when absent.
    input: Option<PathBuf>,

    /// Path to an anysweep TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the intermediate CSV and the report
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Leave the intermediate CSV on disk
    #[arg(long)]
    keep_intermediate: bool,

    /// Omit the leading index column from the report
    #[arg(long)]
    no_index: bool,

    /// Run once and exit instead of offering a restart
    #[arg(long)]
    once: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    summary_json: bool,

    /// Force JSON log output on stderr
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<SweepConfig> {
        let mut cfg = match &self.config {
            Some(path) => SweepConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => SweepConfig::default(),
        };

        if let Some(dir) = &self.output_dir {
            cfg.output.dir = Some(dir.clone());
        }
        if self.keep_intermediate {
            cfg.output.keep_intermediate = true;
        }
        if self.no_index {
            cfg.report.index_column = false;
        }

        Ok(cfg)
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(if cli.log_json {
        LogFormat::Json
    } else {
        default_log_format()
    });

    let cfg = match cli.load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config error: {e:#}");
            std::process::exit(1);
        }
    };

    let options = SessionOptions {
        input: cli.input,
        once: cli.once,
        summary_json: cli.summary_json,
    };

    let stdin = io::stdin();
    let result = Session::new(&cfg, options, stdin.lock(), io::stdout()).run();

    match result {
        Ok(()) => {}
        Err(SessionError::Pipeline(e)) => {
            tracing::error!(error = %e, "input could not be opened");
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("anysweep error: {e}");
            std::process::exit(1);
        }
    }
}
