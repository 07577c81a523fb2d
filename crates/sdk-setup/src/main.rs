mod glslang;
mod sdl;
mod vulkan;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use std::process::ExitCode;

use sdk_fetch::{FileDownloader, HttpClientConfig, Platform, ProgressManager, SetupContext};

#[derive(Parser, Debug)]
#[command(name = "sdk-setup")]
#[command(about = "Download prebuilt SDKs and print their installation path")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Install the glslang shader compiler toolkit into a directory
    Glslang(glslang::GlslangArgs),

    /// Install the SDL2 development libraries below a directory
    Sdl(sdl::SdlArgs),

    /// Install the Vulkan SDK system-wide if it is missing or outdated
    Vulkan(vulkan::VulkanArgs),
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

/// Resolve the host platform and HTTP stack once for the whole run
fn build_context() -> Result<SetupContext> {
    let platform = Platform::detect()?;
    let downloader =
        FileDownloader::with_config(HttpClientConfig::default(), ProgressManager::for_terminal())
            .context("Failed to create HTTP client")?;

    log::debug!("Running on {}", platform);
    Ok(SetupContext::new(platform, downloader))
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let ctx = build_context()?;

    // Every step runs in sequence on the calling thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        match cli.command {
            Commands::Glslang(args) => glslang::execute(args, &ctx).await,
            Commands::Sdl(args) => sdl::execute(args, &ctx).await,
            Commands::Vulkan(args) => vulkan::execute(args, &ctx).await,
        }
    })
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
