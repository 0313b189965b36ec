use clap::{CommandFactory, Parser};
use reviewkit::cli::{Cli, Commands};
use reviewkit::commands::review::ApiContext;
use reviewkit::shared::{config, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Cli { command } = Cli::parse();

    match command {
        Commands::Review { server, command } => {
            let config = config::load_config()?;
            let _guard = logging::init(&config.log);
            let ctx = ApiContext::load(server.as_deref(), &config)?;
            command.run(&ctx).await?;
        }
        Commands::Config(config_cmd) => config_cmd.run()?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "rk", &mut std::io::stdout());
        }
    }

    Ok(())
}
