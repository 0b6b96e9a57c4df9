//! # chatnorm CLI
//!
//! Command-line interface for the chatnorm library.

use std::fs;
use std::io;
use std::process;
use std::time::Instant;

use clap::Parser;

use chatnorm::cli::Args;
use chatnorm::{Result, convert_chat_export, participants};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let raw = if args.input == "-" {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(&args.input)?
    };

    let start = Instant::now();
    let result = convert_chat_export(&raw, args.platform)?;
    let elapsed = start.elapsed();

    if args.summary {
        println!("📦 chatnorm v{}", env!("CARGO_PKG_VERSION"));
        println!("Platform:  {}", result.platform);
        println!("Title:     {}", result.title);
        println!("Messages:  {}", result.messages.len());
        println!("Senders:   {}", participants(&result.messages).len());
        println!("Converted in {:.2?}", elapsed);
        return Ok(());
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!(
                "✅ Wrote {} messages to {} ({})",
                result.messages.len(),
                path,
                result.platform
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
