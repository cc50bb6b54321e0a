use admitscore::config::ReviewParams;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON review profile; explicit command-line flags still win
    #[arg(global = true, short, long)]
    profile: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Review(cmd::review::ReviewArgs),
    Batch(cmd::batch::BatchArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let (cli_params, sub_name) = match &cli.command {
        Commands::Review(args) => (&args.params, "review"),
        Commands::Batch(args) => (&args.params, "batch"),
    };

    let params = match &cli.profile {
        Some(path) => {
            info!("⚙️  Loading review profile: {}", path);
            let mut params = ReviewParams::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
                params.merge_from_cli(cli_params, sub_matches);
            }
            params
        }
        None => cli_params.clone(),
    };

    let outcome = match &cli.command {
        Commands::Review(args) => cmd::review::run(args, &params),
        Commands::Batch(args) => cmd::batch::run(args, &params),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
