//! Phonebook seeding and inspection CLI
//!
//! Single-shot storage client that bypasses the HTTP service: with only a
//! password it lists every record, with a name and number it inserts one.
//! Output goes to stdout; this binary deliberately runs no tracing
//! subscriber.

use anyhow::{Context, Result};
use clap::Parser;

use phonebook_common::{MongoStore, PersonStore, StoreConfig};

/// Command-line arguments for phonebook-seed
#[derive(Parser, Debug)]
#[command(name = "phonebook-seed")]
#[command(about = "List all phonebook entries or insert one, straight to storage")]
#[command(version)]
struct Args {
    /// Database password
    password: String,

    /// Name for a new entry; requires NUMBER as well
    #[arg(requires = "number")]
    name: Option<String>,

    /// Number for a new entry; requires NAME as well
    #[arg(requires = "name")]
    number: Option<String>,

    /// Database user
    #[arg(long, env = "PHONEBOOK_DB_USER", default_value = "phonebook")]
    user: String,

    /// Database host (host:port)
    #[arg(long, env = "PHONEBOOK_DB_HOST", default_value = "localhost:27017")]
    host: String,

    /// Database name
    #[arg(long, env = "PHONEBOOK_DB_NAME", default_value = "phonebook")]
    database: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config =
        StoreConfig::from_credentials(&args.user, &args.password, &args.host, &args.database);
    let store = MongoStore::connect(&config)
        .await
        .context("Failed to connect to MongoDB")?;

    match (args.name, args.number) {
        (Some(name), Some(number)) => {
            let person = store
                .insert(&name, &number)
                .await
                .context("Failed to insert entry")?;
            println!("added {} number {} to phonebook", person.name, person.number);
        }
        _ => {
            let people = store.list().await.context("Failed to list entries")?;
            println!("phonebook:");
            for person in people {
                println!("{} {}", person.name, person.number);
            }
        }
    }

    Ok(())
}
