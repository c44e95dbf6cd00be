use clap::{Parser, Subcommand};

/// nullscope - inspect nullable-reference metadata annotations on described types
///
/// Without a subcommand, dumps the public properties of every registered type in
/// registration order.
#[derive(Debug, Parser)]
#[command(name = "nullscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dump the public properties of one registered type.
    Dump {
        /// Name of the registered type (e.g., Probe, ArrayList).
        #[arg(value_name = "TYPE")]
        r#type: String,
    },

    /// List registered types with property and annotation counts.
    Types,
}
