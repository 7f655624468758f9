mod commands;
mod terminal;

use commands::{CommandLine, Commands, browse, check, history, routes};
use pkgview_common::models::route::RouteParams;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = commands.config();

    match commands.command {
        Commands::Browse { path } => {
            print::header("package catalog", cfg.quiet);
            browse::browse(&path, &cfg).await
        }
        Commands::Show { id, version } => {
            print::header("package catalog", cfg.quiet);
            let path = RouteParams::new(Some(id.as_str()), version.as_deref()).to_path();
            browse::browse(&path, &cfg).await
        }
        Commands::Routes => {
            print::header("route table", cfg.quiet);
            routes::routes(&cfg);
            Ok(())
        }
        Commands::History { id } => {
            print::header("version history", cfg.quiet);
            history::history(&id, &cfg).await
        }
        Commands::Check { id, versions } => {
            print::header("archive check", cfg.quiet);
            check::check(&id, &versions, &cfg).await
        }
    }
}
