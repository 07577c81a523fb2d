//! Vulkan command - run the LunarG installer when the SDK is missing or outdated.

use anyhow::{Context, Result};
use clap::Args;

use sdk_fetch::sdk::vulkan::{self, VulkanOptions};
use sdk_fetch::sdk::SetupContext;

#[derive(Args, Debug)]
pub struct VulkanArgs {}

pub async fn execute(_args: VulkanArgs, ctx: &SetupContext) -> Result<()> {
    let options = VulkanOptions::default();
    let path = vulkan::install(ctx, &options)
        .await
        .context("Failed to provision the Vulkan SDK")?;

    println!("{}", path.display());
    Ok(())
}
