//! glslang command - install the prebuilt shader compiler toolkit.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use sdk_fetch::sdk::{glslang, SetupContext};

#[derive(Args, Debug)]
pub struct GlslangArgs {
    /// Directory to install into (skipped when it already exists)
    pub location: PathBuf,
}

pub async fn execute(args: GlslangArgs, ctx: &SetupContext) -> Result<()> {
    let path = glslang::install(ctx, &args.location)
        .await
        .with_context(|| format!("Failed to install glslang into {}", args.location.display()))?;

    println!("{}", path.display());
    Ok(())
}
