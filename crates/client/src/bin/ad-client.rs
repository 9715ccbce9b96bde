//! Demo client: issues one request to the ad service and prints the result.

use ad_client::{AdClient, AdRequest, ClientResponse, DEFAULT_BASE_URL};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ad-client", about = "Issue a single request to the ad service")]
struct Cli {
    /// Service base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an ad
    Create {
        /// Explicit id (assigned by the datastore when omitted)
        #[arg(long)]
        id: Option<i64>,
        #[command(flatten)]
        fields: Fields,
    },
    /// Fetch an ad
    Get { id: i64 },
    /// Replace an ad's title, content and owner
    Patch {
        id: i64,
        #[command(flatten)]
        fields: Fields,
    },
    /// Delete an ad
    Delete { id: i64 },
    /// List all ads
    List,
}

#[derive(Args)]
struct Fields {
    #[arg(long)]
    title: String,
    #[arg(long)]
    content: String,
    #[arg(long)]
    owner: String,
}

impl Fields {
    fn into_request(self, id: Option<i64>) -> AdRequest {
        AdRequest {
            id,
            title: self.title,
            content: self.content,
            owner: self.owner,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = AdClient::new(cli.base_url).context("Failed to create client")?;

    let response = match cli.command {
        Command::Create { id, fields } => client.create(&fields.into_request(id)).await,
        Command::Get { id } => client.get(id).await,
        Command::Patch { id, fields } => client.update(id, &fields.into_request(None)).await,
        Command::Delete { id } => client.delete(id).await,
        Command::List => client.list().await,
    }
    .context("Request failed")?;

    print_response(&response)
}

fn print_response(response: &ClientResponse) -> Result<()> {
    println!("{}", response.status.as_u16());
    println!("{}", serde_json::to_string_pretty(&response.body)?);
    Ok(())
}
