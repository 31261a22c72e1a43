// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Command-line definition for the `saltpack` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use saltpack::ContentType;
use saltpack::config::{BASE_URL_VAR, DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
#[command(name = "saltpack", version, about = "Package and submit SALT proposals")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = BASE_URL_VAR,
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the proposals API"
    )]
    pub base_url: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Zip proposal XML together with the files it references.
    Pack {
        xml: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, help = "Directory for relative attachment paths (default: the XML's directory)")]
        attachments_dir: Option<PathBuf>,
    },
    /// Submit a proposal zip, or proposal XML which is packaged first.
    Submit {
        file: PathBuf,
        #[arg(long, help = "Replace this existing proposal instead of creating a new one")]
        proposal_code: Option<String>,
    },
    /// Download a proposal or block as a zip.
    Download {
        proposal_code: String,
        #[arg(long, value_enum, ignore_case = true, default_value_t = Kind::Proposal)]
        content_type: Kind,
        #[arg(long, help = "Block name, required for blocks")]
        name: Option<String>,
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Proposal,
    Block,
}

impl From<Kind> for ContentType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Proposal => ContentType::Proposal,
            Kind::Block => ContentType::Block,
        }
    }
}
