//! Example: Show account info and list a folder
//!
//! Usage:
//!   DROPBOX_TOKEN=... cargo run --example account -- [--root dropbox|sandbox] [--path /path]

use dropboxlib::{DropboxClient, HttpTransport, MetadataOptions, Root};
use std::env;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    let mut root = Root::Sandbox;
    let mut path = "/".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--root" | "-r" => {
                root = args
                    .get(i + 1)
                    .and_then(|r| r.parse().ok())
                    .expect("--root must be 'dropbox' or 'sandbox'");
                i += 2;
            }
            "--path" => {
                path = args.get(i + 1).cloned().unwrap_or(path);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let token = env::var("DROPBOX_TOKEN").expect("DROPBOX_TOKEN is required");
    let client = DropboxClient::new(HttpTransport::new().with_access_token(token), root);

    match client.account_info().await {
        Ok(info) => println!("Account: {}", info["display_name"]),
        Err(e) => {
            eprintln!("Failed to get account info: {}", e);
            return;
        }
    }

    println!("\nListing {}:{}\n", root, path);
    match client.metadata(&path, &MetadataOptions::default(), None).await {
        Ok(meta) => {
            let entries = meta["contents"].as_array().cloned().unwrap_or_default();
            if entries.is_empty() {
                println!("  (empty)");
            }
            for entry in entries {
                let kind = if entry["is_dir"].as_bool().unwrap_or(false) {
                    "dir "
                } else {
                    "file"
                };
                println!(
                    "  {} {} {}",
                    kind,
                    entry["path"].as_str().unwrap_or("?"),
                    entry["size"].as_str().unwrap_or("")
                );
            }
        }
        Err(e) => eprintln!("Failed to list: {}", e),
    }
}
