//! # Salon Shell Entry Point
//!
//! The actual setup is in lib.rs so the boot sequence can be tested.

use clap::Parser;
use salon_shell::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    salon_shell::run(Cli::parse()).await
}
