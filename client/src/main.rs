use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use display::TerminalDisplay;
use liblife::{Evolution, Seed, Universe};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod display;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:?}", "error:".bright_red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.run_config()?;

    let seed = read_seed(cli.input.as_deref())?;
    let universe = seed
        .universe(config.topology())
        .context("The initial state contains invalid entries")?;

    info!(
        rows = universe.rows(),
        cols = universe.cols(),
        live = universe.live_count(),
        generations = config.generations,
        "loaded initial state"
    );

    let mut evolution = Evolution::new(universe, config.generations);

    if config.silent {
        evolution.run(&mut ());
    } else {
        let mut display =
            TerminalDisplay::new(config.delay()).context("Couldn't set up the terminal")?;
        evolution.run(&mut display);
    }

    write_universe(cli.output.as_deref(), evolution.current())
}

fn read_seed(input_path: Option<&Path>) -> anyhow::Result<Seed> {
    let seed_serialized = match input_path {
        Some(input_path) => fs::read_to_string(input_path)
            .with_context(|| format!("Couldn't read {}", input_path.display()))?,
        None => io::read_to_string(io::stdin()).context("Couldn't read stdin")?,
    };

    seed_serialized
        .parse::<Seed>()
        .context("The initial state is malformed")
}

fn write_universe(output_path: Option<&Path>, universe: &Universe) -> anyhow::Result<()> {
    match output_path {
        Some(output_path) => {
            let file = File::create(output_path)
                .with_context(|| format!("Couldn't open {} for writing", output_path.display()))?;

            let mut writer = BufWriter::new(file);
            universe
                .render(&mut writer)
                .and_then(|()| writer.flush())
                .context("Couldn't write the final state")?;

            info!(path = %output_path.display(), "wrote final state");
        }
        None => {
            universe
                .render(io::stdout().lock())
                .context("Couldn't write the final state")?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn tmp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("{}_{name}", std::process::id()))
    }

    #[test]
    fn silent_run_writes_final_state() -> anyhow::Result<()> {
        let input_path = tmp_path("life_glider_input.txt");
        let output_path = tmp_path("life_glider_output.txt");
        fs::write(&input_path, "5 5\n0 1\n1 2\n2 0\n2 1\n2 2\n")?;

        let cli = Cli::parse_from([
            OsString::from("life"),
            "-s".into(),
            "-n".into(),
            "4".into(),
            "-i".into(),
            input_path.clone().into_os_string(),
            "-o".into(),
            output_path.clone().into_os_string(),
        ]);
        run(&cli)?;

        let output = fs::read_to_string(&output_path)?;
        fs::remove_file(&input_path)?;
        fs::remove_file(&output_path)?;

        assert_eq!(output, ".....\n..o..\n...o.\n.ooo.\n.....\n");
        Ok(())
    }

    #[test]
    fn out_of_bounds_seed_fails_the_run() -> anyhow::Result<()> {
        let input_path = tmp_path("life_bad_input.txt");
        let output_path = tmp_path("life_bad_output.txt");
        fs::write(&input_path, "3 3\n0 0\n3 1\n")?;

        let cli = Cli::parse_from([
            OsString::from("life"),
            "-s".into(),
            "-i".into(),
            input_path.clone().into_os_string(),
            "-o".into(),
            output_path.clone().into_os_string(),
        ]);
        let err = run(&cli).unwrap_err();
        fs::remove_file(&input_path)?;

        assert_eq!(err.to_string(), "The initial state contains invalid entries");
        assert!(!output_path.exists());
        Ok(())
    }
}
