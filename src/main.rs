//! FlexiRota CLI binary entry point.

use flexirota::cli::{AuthCommands, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let client = match flexirota::cli::build_client(cli.base_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Auth(auth_args) => match auth_args.command {
            AuthCommands::Login(args) => {
                flexirota::cli::auth::handle_login(&client, &args.username, args.password).await
            }
            AuthCommands::Status => flexirota::cli::auth::handle_status(&client).await,
            AuthCommands::Logout => flexirota::cli::auth::handle_logout(&client).await,
        },
        Commands::Me => flexirota::cli::rota::handle_me(&client).await,
        Commands::Pay => flexirota::cli::rota::handle_pay(&client).await,
        Commands::Availability(args) => {
            flexirota::cli::rota::handle_availability(&client, args.command).await
        }
        Commands::Swaps(args) => flexirota::cli::rota::handle_swaps(&client, args.command).await,
        Commands::Fairness => flexirota::cli::rota::handle_fairness(&client).await,
        Commands::Notifications => flexirota::cli::rota::handle_notifications(&client).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
