use anyhow::{bail, Result};
use sports_data_verify::{
    cli::{Cli, Commands},
    check_dataset, load_dataset,
    schema::ALL_MECHANICS,
    verify, ConsoleUi, FsSource, SilentUi, ValidationError,
};
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sports_data_verify=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse_args();

    match cli.command {
        Commands::Verify {
            data_dir,
            config,
            quiet,
            verbose,
        } => {
            let start = Instant::now();
            let config = config.load(&data_dir)?;
            let source = FsSource::new(&data_dir);

            let result = if quiet {
                verify(&source, &config, &mut SilentUi::new())
            } else {
                verify(&source, &config, &mut ConsoleUi::new(verbose))
            };
            let report = result.unwrap_or_else(|err| fail(&err));

            if !quiet {
                println!("\n{}", report);
                println!(
                    "All done in {:.1}s, everything looks good!",
                    start.elapsed().as_secs_f64()
                );
            }
        }

        Commands::Resolve {
            competition,
            data_dir,
            config,
        } => {
            let config = config.load(&data_dir)?;
            let source = FsSource::new(&data_dir);

            let mut ui = SilentUi::new();
            let dataset = load_dataset(&source, &config, &mut ui).unwrap_or_else(|err| fail(&err));
            check_dataset(&dataset, &config, &mut ui).unwrap_or_else(|err| fail(&err));
            if !dataset.competitions.is_known(&competition) {
                bail!("Unknown competition: {}", competition);
            }

            let roster = dataset
                .competitions
                .resolver()
                .resolve(&competition)
                .unwrap_or_else(|err| fail(&err));
            for team in &roster {
                println!("  {}", team);
            }
            println!("{} teams in {}", roster.len(), competition);
        }

        Commands::ListMechanics => {
            println!("Available mechanics:\n");
            for profile in ALL_MECHANICS {
                println!(
                    "  {:<12} {:>3} teams {:>3} dates",
                    profile.name, profile.required_team_count, profile.required_date_count
                );
            }
        }
    }

    Ok(())
}

/// Print the first validation error and exit non-zero
fn fail(err: &ValidationError) -> ! {
    eprintln!("{}", err.error_line());
    std::process::exit(1);
}
