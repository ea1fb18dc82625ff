//! Command-line definitions.

use clap::{Parser, Subcommand};

/// Port the dev server listens on by default; matches the client's default
/// base URL.
pub const DEFAULT_PORT: u16 = 3000;

/// Salon client host shell
///
/// Without arguments the shell hosts the IPC bridge in-process and boots
/// the stores over it.
#[derive(Debug, Parser)]
#[command(name = "salon-shell", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Boot without a bridge, against this REST base URL
    #[arg(long, value_name = "BASE_URL")]
    pub web: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Run the REST dev server over seeded sample data
    Serve {
        /// TCP port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

/// What the shell was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Host the bridge in-process and boot over IPC.
    Desktop,
    /// Boot without a bridge against this base URL.
    Web { base_url: String },
    /// Run the REST dev server.
    Serve { port: u16 },
}

impl Cli {
    pub fn mode(self) -> Mode {
        match (self.command, self.web) {
            (Some(Commands::Serve { port }), _) => Mode::Serve { port },
            (None, Some(base_url)) => Mode::Web { base_url },
            (None, None) => Mode::Desktop,
        }
    }
}
