use crate::api;
use crate::libs::config::{normalize_operator_name, prompt_operator_name, Config};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on, overrides the configured one
    #[arg(short, long)]
    port: Option<u16>,

    /// Operator name used in export file names; prompted for when absent
    #[arg(short, long)]
    name: Option<String>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let mut config = Config::read()?;
    if let Some(port) = args.port {
        config.port = port;
    }

    // Captured once; every export made by this server uses it.
    let operator_name = match args.name.or_else(|| config.operator_name.clone()) {
        Some(name) => normalize_operator_name(&name),
        None => prompt_operator_name()?,
    };

    api::serve(&config, &operator_name).await
}
