// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};
use mongodist::commands::aliases::AliasesCommand;
use mongodist::commands::detect::DetectCommand;
use mongodist::commands::resolve::ResolveCommand;
use mongodist::commands::versions::VersionsCommand;
use mongodist::config::{MongoDistConfig, config_home};
use mongodist::error::{Result, format_error_chain, get_exit_code};
use mongodist::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mongodist")]
#[command(author, version, about = "MongoDB version and platform resolver", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a version and platform into a download key
    #[command(visible_alias = "r")]
    Resolve {
        /// Release or alias (e.g., "4.2.10", "3.6", "production"); defaults to the configured version
        version: Option<String>,

        /// Operating system (linux, windows, macos, solaris, freebsd); defaults to the host
        #[arg(long)]
        os: Option<String>,

        /// Word size (32 or 64); defaults to the host
        #[arg(long)]
        bits: Option<String>,

        /// Linux distribution tag (e.g., "debian-10"); detected when omitted
        #[arg(long)]
        distro: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known releases
    #[command(visible_alias = "ls")]
    Versions {
        /// Only releases at or above this version
        #[arg(long, value_name = "VERSION")]
        at_least: Option<String>,

        /// Skip deprecated releases
        #[arg(long)]
        testable: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List rolling aliases and the releases they resolve to
    Aliases {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect the Linux distribution from an os-release file
    Detect {
        /// os-release file to read instead of the configured one
        #[arg(long)]
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_config() -> Result<MongoDistConfig> {
    let home = config_home()?;
    MongoDistConfig::load(&home)
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    // Load configuration once at startup
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            std::process::exit(get_exit_code(&e));
        }
    };

    let result: Result<()> = (|| match cli.command {
        Commands::Resolve {
            version,
            os,
            bits,
            distro,
            json,
        } => {
            let command = ResolveCommand::new(&config)?;
            command.execute(
                version.as_deref(),
                os.as_deref(),
                bits.as_deref(),
                distro.as_deref(),
                json,
            )
        }
        Commands::Versions {
            at_least,
            testable,
            json,
        } => {
            let command = VersionsCommand::new()?;
            command.execute(at_least.as_deref(), testable, json)
        }
        Commands::Aliases { json } => {
            let command = AliasesCommand::new()?;
            command.execute(json)
        }
        Commands::Detect { path, json } => {
            let command = DetectCommand::new(&config)?;
            command.execute(path.as_deref(), json)
        }
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}
