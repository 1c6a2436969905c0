use clap::{CommandFactory, Parser};
use clap_complete::generate;
use ecm_cli::cli::{Cli, Commands};
use std::io;
use tracing::error;
use tracing_subscriber::FmtSubscriber;

mod commands;

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let result = match cli.command {
        Commands::Simulate {
            cells,
            add,
            remove,
            seed,
            csv,
            json,
        } => commands::simulate::handle(
            cells,
            add.map(|n| n as usize),
            &remove,
            seed,
            csv.as_deref(),
            json.as_deref(),
        ),
        Commands::Pack {
            cells,
            remove,
            csv,
            json,
        } => commands::pack::handle(&cells, &remove, csv.as_deref(), json.as_deref()),
        Commands::Inspect { input, json } => commands::inspect::handle(&input, json),
        Commands::Convert { input, output } => commands::convert::handle(&input, &output),
        Commands::Completions { shell, out } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            match out {
                Some(path) => std::fs::File::create(&path)
                    .map(|mut file| generate(shell, &mut cmd, name, &mut file))
                    .map_err(anyhow::Error::from),
                None => {
                    generate(shell, &mut cmd, name, &mut io::stdout());
                    Ok(())
                }
            }
        }
    };

    if let Err(err) = result {
        error!("{err:#}");
        std::process::exit(1);
    }
}
