// CLASSIFICATION: COMMUNITY
// Filename: trlte_init.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-02-03

//! CLI probe for the trlte identity resolver.
//!
//! Seeds an in-memory property space, runs the resolver once, and prints
//! the resulting properties. Useful for checking what a given bootloader
//! id resolves to without flashing a device.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use trlte_init::props::{InMemoryPropertyStore, PropertyStore};
use trlte_init::resolver::resolve_and_apply;

/// Resolve trlte device identity properties from a bootloader id.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Seed the property space from a build.prop-style file.
    #[arg(long)]
    props: Option<PathBuf>,

    /// Bootloader id to resolve; written to ro.bootloader before the run,
    /// overriding any value from --props.
    #[arg(long)]
    bootloader: Option<String>,

    /// Dump the final property space as JSON instead of key=value lines.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut store = match &cli.props {
        Some(path) => InMemoryPropertyStore::load(path)?,
        None => InMemoryPropertyStore::new(),
    };
    if let Some(id) = &cli.bootloader {
        store.set("ro.bootloader", id);
    }

    resolve_and_apply(&mut store);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(store.snapshot())?);
    } else {
        print!("{}", store.dump());
    }
    Ok(())
}
