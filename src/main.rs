use std::{io, process::ExitCode};

use clap::Parser;
use point_samples::{
  api::{run_sample, Sample},
  log::{error, info, set_global_logging_threshold, DEFAULT_LOGGING_THRESHOLD}
};

#[derive(Parser)]
#[command(name = "point-samples")]
#[command(about = "Add a stack point to a heap point and print the sum, the way a slide-deck sample would")]
#[command(version)]
struct Cli {
  /// Which sample to run: c, cpp, go, or rust
  #[arg(short, long, default_value = "c")]
  sample: Sample,

  /// Logging threshold; higher is more verbose
  #[arg(short, long, default_value_t = DEFAULT_LOGGING_THRESHOLD)]
  verbosity: u8,

  /// Log every sample's memory-handling findings before running
  #[arg(long)]
  audit: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  set_global_logging_threshold(cli.verbosity);

  if cli.audit {
    for sample in Sample::ALL {
      let findings = sample.audit();
      if findings.is_empty() {
        info!(0, "{:<4}: {:?} release, no findings", sample.name(), sample.release_discipline());
      }
      for finding in findings {
        info!(0, "{:<4}: {}", sample.name(), finding);
      }
    }
  }

  let stdout = io::stdout();
  match run_sample(cli.sample, &mut stdout.lock(), None) {
    Ok(_) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{}", e);
      ExitCode::FAILURE
    }
  }
}
