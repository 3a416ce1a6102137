use crate::command::CommandBuilder;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::flag::Flag;
use std::future::Future;
use std::process::Stdio;
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::{debug, warn};

const BREW_UNAVAILABLE: &str = "Error when trying to use homebrew-Cask (brew). \
     Check if homebrew is installed and working correctly.";

pub fn register(parent: &mut crate::Command) -> Result<()> {
    let cmd = CommandBuilder::new("brewups")
        .short("Runs brew update, brew upgrade, and brew cask upgrade")
        .flag(
            Flag::new("dry-run")
                .short('n')
                .usage("Show what would be upgraded, but do not actually upgrade anything"),
        )
        .run(|ctx| {
            let config = AppConfig::load().map_err(Error::Custom)?;
            let steps = plan(ctx.bool("dry-run"));

            block_on(run_steps(&config.brew_path, &steps))?
        })
        .build();

    parent.add_command(cmd)
}

/// Drives `future` from the synchronous handler: on the caller's runtime
/// when it is multi-threaded, on a private one when there is no runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output> {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            Ok(tokio::task::block_in_place(|| handle.block_on(future)))
        }
        Ok(_) => Err(Error::custom(
            "brewups cannot run inside a current-thread tokio runtime",
        )),
        Err(_) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| Error::Custom(Box::new(e)))?;
            Ok(runtime.block_on(future))
        }
    }
}

/// Argument lists passed to brew, in order.
fn plan(dry_run: bool) -> Vec<Vec<&'static str>> {
    let mut steps = vec![vec!["update"], vec!["upgrade"], vec!["cask", "upgrade"]];
    if dry_run {
        for step in steps.iter_mut().skip(1) {
            step.push("--dry-run");
        }
    }
    steps
}

async fn run_steps(brew: &str, steps: &[Vec<&str>]) -> Result<()> {
    for step in steps {
        debug!("Running: {} {}", brew, step.join(" "));
        let status = tokio::process::Command::new(brew)
            .args(step)
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                debug!("Failed to spawn {}: {}", brew, e);
                Error::custom(BREW_UNAVAILABLE)
            })?;

        if !status.success() {
            warn!("{} {} exited with {}", brew, step.join(" "), status);
        }
    }
    Ok(())
}
