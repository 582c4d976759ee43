use std::path::PathBuf;

use clap::Subcommand;

mod cli_exec;
mod cli_runtime;

#[derive(Subcommand)]
enum Commands {
    /// Upload a spreadsheet and generate a QR code from it
    Upload {
        /// .xlsx, .xls or .csv file
        file: PathBuf,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List generated QR codes, newest first
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the encoded data of one QR code
    Show {
        id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace the encoded data of a QR code (the server assigns a new id)
    Update {
        id: String,
        /// New data, inline
        #[arg(long, conflicts_with = "data_file", required_unless_present = "data_file")]
        data: Option<String>,
        /// New data, read from a file
        #[arg(long, value_name = "PATH")]
        data_file: Option<PathBuf>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a QR code
    Delete {
        id: String,
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Print the server's example data
    Data,

    /// Open the image of a QR code in the system viewer
    View { id: String },

    /// Show or change the client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Persist a new service base URL
    Set {
        #[arg(long)]
        url: String,
    },
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
