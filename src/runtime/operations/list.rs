use std::process::Stdio;

use snafu::{ResultExt, ensure};
use tokio::process::Command;

use crate::error::{ListFailedSnafu, ListingEncodingSnafu, Result, SpawnSnafu};
use crate::image::{ImageRecord, parse_image_lines};

/// Arguments for one JSON object per image with untruncated values.
pub const LIST_ARGS: [&str; 4] = ["images", "--format", "{{json .}}", "--no-trunc"];

/// Trait for listing locally stored images.
pub trait Lister {
    /// List every image the runtime knows about.
    ///
    /// # Returns
    /// * `Result<Vec<ImageRecord>>` - Images in the runtime's order, or the
    ///   first spawn/exit/parse failure
    async fn list_images(&self) -> Result<Vec<ImageRecord>>;
}

/// Lists images by running `<program> images`.
pub struct CliLister {
    program: String,
}

impl CliLister {
    pub fn new(program: String) -> Self {
        Self { program }
    }
}

impl Lister for CliLister {
    async fn list_images(&self) -> Result<Vec<ImageRecord>> {
        let output = Command::new(&self.program)
            .args(LIST_ARGS)
            .stdin(Stdio::null())
            .output()
            .await
            .context(SpawnSnafu {
                program: &self.program,
            })?;

        ensure!(
            output.status.success(),
            ListFailedSnafu {
                program: &self.program,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim(),
            }
        );

        decode_listing(&self.program, output.stdout)
    }
}

fn decode_listing(program: &str, stdout: Vec<u8>) -> Result<Vec<ImageRecord>> {
    let stdout = String::from_utf8(stdout).context(ListingEncodingSnafu { program })?;
    parse_image_lines(&stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn utf8_listing_is_parsed() {
        let images = decode_listing("docker", br#"{"ID":"sha1","Tag":"v1"}"#.to_vec()).unwrap();
        assert_eq!(images[0].id, "sha1");
        assert_eq!(images[0].tag, "v1");
    }

    #[test]
    fn invalid_utf8_listing_is_fatal() {
        let mut stdout = br#"{"ID":"sha1","Tag":""#.to_vec();
        stdout.extend_from_slice(&[0xff, 0xfe]);
        stdout.extend_from_slice(b"\"}\n");

        let err = decode_listing("docker", stdout).unwrap_err();
        assert!(matches!(err, Error::ListingEncoding { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn missing_runtime_is_a_spawn_error() {
        let err = CliLister::new("/nonexistent/runtime".to_string())
            .list_images()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }
}
