mod formatter;
mod github;
use crate::github::prelude::*;
use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(version, about = "GitHub user activity viewer")]
struct Cli {
    #[arg(value_name = "USERNAME", help = "GitHub username to look up")]
    username: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Cli { username } = Cli::parse();

    println!("Fetching activity for GitHub user: {username}\n");

    let client = Client::new();
    let events = client.fetch_user_events(&username).await?;
    let output = crate::formatter::format_report(&username, &events);

    print!("{output}");

    Ok(())
}
