use clap::Parser;

use crate::error::Result;
use crate::runtime::DEFAULT_RUNTIME;

use super::{context::CliContext, remove};

/// Environment variable that selects the runtime binary.
pub const RUNTIME_ENV: &str = "RMIMG_RUNTIME";

fn parse_runtime(program: &str) -> std::result::Result<String, String> {
    let program = program.trim();
    if program.is_empty() {
        Err("runtime program must not be empty".to_string())
    } else {
        Ok(program.to_string())
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactively pick local container images and remove them",
    after_help = "Space toggles an image, Enter removes the marked ones, Esc or q quits."
)]
pub struct Args {
    /// Container runtime CLI to drive (docker, podman, nerdctl, ...)
    #[arg(
        long,
        value_name = "PROGRAM",
        env = RUNTIME_ENV,
        default_value = DEFAULT_RUNTIME,
        value_parser = parse_runtime
    )]
    pub runtime: String,

    /// Disable coloured image names
    #[arg(long)]
    pub no_color: bool,
}

pub async fn run(args: Args) -> Result<()> {
    let ctx = CliContext::from_args(args);
    remove::execute(ctx.runtime(), ctx.prompt(), ctx.color()).await
}
