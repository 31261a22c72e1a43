// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use saltpack::{
    Config, ContentType, DownloadTarget, HttpSession, ProposalClient, ProposalInput,
    package_proposal,
};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            xml,
            output,
            attachments_dir,
        } => {
            package_proposal(&output, ProposalInput::path(&xml), attachments_dir.as_deref())
                .with_context(|| format!("Failed to package {}", xml.display()))?;
            println!("{}", output.display());
        }
        Commands::Submit {
            file,
            proposal_code,
        } => {
            let client = client(&cli.base_url)?;
            client
                .submit(ProposalInput::path(&file), proposal_code.as_deref())
                .with_context(|| format!("Failed to submit {}", file.display()))?;
            info!("Submitted {}", file.display());
        }
        Commands::Download {
            proposal_code,
            content_type,
            name,
            output,
        } => {
            let client = client(&cli.base_url)?;
            let content_type = ContentType::from(content_type).to_string();
            client
                .download(
                    DownloadTarget::path(&output),
                    &proposal_code,
                    &content_type,
                    name.as_deref(),
                )
                .with_context(|| format!("Failed to download {proposal_code}"))?;
            println!("{}", output.display());
        }
    }
    Ok(())
}

fn client(base_url: &str) -> Result<ProposalClient<HttpSession>> {
    let mut config = Config::from_env().context("Invalid environment configuration")?;
    config.base_url = Config::new(base_url)
        .context("Invalid --base-url")?
        .base_url;
    let session = HttpSession::from_config(&config);
    Ok(ProposalClient::new(config, session))
}
