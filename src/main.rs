use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{error, Level};

use offer_seeder::commands::{generate, import};
use offer_seeder::error::{Error, Result};

/// Prepares seed data for the rental offers REST API: imports offers from a
/// TSV file or generates random ones from an external mock-data endpoint.
#[derive(Parser, Debug)]
#[command(name = "offer-seeder", version)]
struct Cli {
    /// Import offers from a TSV file
    #[arg(long, value_name = "FILEPATH", conflicts_with = "generate")]
    import: Option<PathBuf>,

    /// Generate <N> random offers into <FILEPATH> from mock data at <URL>
    #[arg(long, num_args = 3, value_names = ["N", "FILEPATH", "URL"])]
    generate: Option<Vec<String>>,
}

async fn run_generate(args: &[String]) -> Result<()> {
    let [count_raw, filepath, url] = args else {
        return Err(Error::InvalidArgument(
            "--generate expects <n> <filepath> <url>".to_string(),
        ));
    };

    let count = generate::parse_count(count_raw)?;
    generate::run(count, Path::new(filepath), url).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version surface as parse "errors", but exit cleanly;
            // everything else (unknown command, missing values) exits 1.
            let succeeded = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            return if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    let outcome = match (cli.import, cli.generate) {
        (Some(path), _) => import::run(&path).await.map(|_| ()),
        (_, Some(args)) => run_generate(&args).await,
        // Bare invocation behaves like --help.
        _ => {
            let _ = Cli::command().print_help();
            return ExitCode::SUCCESS;
        }
    };

    // Exit status is decided exactly once, here.
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
