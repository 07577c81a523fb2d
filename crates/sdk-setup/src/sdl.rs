//! SDL command - install the SDL2 development libraries.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use sdk_fetch::sdk::{sdl, SetupContext};

#[derive(Args, Debug)]
pub struct SdlArgs {
    /// Directory that receives the versioned SDL2 directory
    pub location: PathBuf,

    /// SDL2 release to install (e.g. 2.28.5)
    pub version: String,
}

pub async fn execute(args: SdlArgs, ctx: &SetupContext) -> Result<()> {
    let path = sdl::install(ctx, &args.location, &args.version)
        .await
        .with_context(|| format!("Failed to install SDL2 {}", args.version))?;

    println!("{}", path.display());
    Ok(())
}
