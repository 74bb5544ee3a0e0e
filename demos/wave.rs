// SPDX-License-Identifier: MPL-2.0

//! Voice command walkthrough.
//!
//! Lists every phrase the Z-Way server's switches understand, then turns the
//! sample device on and, three seconds later, off again.
//!
//! # Usage
//!
//! ```bash
//! # Credentials from ~/zaut_credentials.json
//! cargo run --example wave
//!
//! # Credentials from another file, custom phrase
//! cargo run --example wave -- /etc/zway/credentials.json "'wave on desk lamp in office'"
//! ```
//!
//! Set `RUST_LOG=zwaveme_assist=debug` to see every request.

use std::env;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use zwaveme_assist::{Assistant, Credentials, DEFAULT_CREDENTIALS_PATH, normalize};

const SAMPLE_PHRASE: &str = "'Wave on The Plug Switch in The Living Room'";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("zwaveme_assist=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    let credentials_path = args.get(1).map_or(DEFAULT_CREDENTIALS_PATH, String::as_str);
    let spoken = args.get(2).map_or(SAMPLE_PHRASE, String::as_str).to_lowercase();

    let assistant = Assistant::http(Credentials::load(credentials_path)?)?;

    println!("{}", normalize(&spoken));

    println!("\nKnown commands:");
    for phrase in assistant.list_commands().await? {
        println!("  {phrase}");
    }

    if !assistant.execute(&spoken).await? {
        eprintln!("Command not recognized: {spoken}");
        std::process::exit(1);
    }

    tokio::time::sleep(Duration::from_secs(3)).await;

    let off = spoken.replace(" on ", " off ");
    if !assistant.execute(&off).await? {
        eprintln!("Command not recognized: {off}");
        std::process::exit(1);
    }

    Ok(())
}
