//! Access to the container runtime's command line.

use crate::error::Result;
use crate::image::ImageRecord;

pub mod operations;

pub use self::operations::list::LIST_ARGS;
pub use self::operations::{Lister, Remover};

use self::operations::list::CliLister;
use self::operations::remove::CliRemover;

/// Runtime binary used when none is configured.
pub const DEFAULT_RUNTIME: &str = "docker";

/// Everything the picker needs from a container runtime.
pub trait ImageRuntime: Lister + Remover {}

impl<T: Lister + Remover> ImageRuntime for T {}

/// Runtime driven through a Docker-compatible CLI (`docker`, `podman`, ...).
#[derive(Debug, Clone)]
pub struct RuntimeClient {
    program: String,
}

impl RuntimeClient {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Lister for RuntimeClient {
    async fn list_images(&self) -> Result<Vec<ImageRecord>> {
        log::debug!("list_images runtime={} args={:?}", self.program, LIST_ARGS);
        let images = CliLister::new(self.program.clone()).list_images().await?;
        log::debug!("list_images runtime={} count={}", self.program, images.len());
        Ok(images)
    }
}

impl Remover for RuntimeClient {
    async fn remove_images(&self, ids: &[String]) -> Result<()> {
        log::debug!("remove_images runtime={} ids={:?}", self.program, ids);
        CliRemover::new(self.program.clone()).remove_images(ids).await
    }
}
