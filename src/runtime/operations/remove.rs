use std::process::Stdio;

use snafu::{ResultExt, ensure};
use tokio::process::Command;

use crate::error::{RemoveFailedSnafu, Result, SpawnSnafu};

/// Trait for force-removing images.
pub trait Remover {
    /// Remove all `ids` in a single runtime invocation.
    ///
    /// # Arguments
    /// * `ids` - Image ids, passed to the runtime as separate arguments
    ///
    /// # Returns
    /// * `Result<()>` - Fails when the runtime cannot be spawned or exits non-zero
    async fn remove_images(&self, ids: &[String]) -> Result<()>;
}

/// Full argument list for `rmi -f <ids...>`.
pub fn removal_args(ids: &[String]) -> Vec<String> {
    ["rmi", "-f"]
        .into_iter()
        .map(str::to_string)
        .chain(ids.iter().cloned())
        .collect()
}

/// Removes images by running `<program> rmi -f`, sharing this terminal.
pub struct CliRemover {
    program: String,
}

impl CliRemover {
    pub fn new(program: String) -> Self {
        Self { program }
    }
}

impl Remover for CliRemover {
    async fn remove_images(&self, ids: &[String]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let status = Command::new(&self.program)
            .args(removal_args(ids))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .context(SpawnSnafu {
                program: &self.program,
            })?;

        ensure!(
            status.success(),
            RemoveFailedSnafu {
                program: &self.program,
                code: status.code(),
            }
        );
        Ok(())
    }
}
