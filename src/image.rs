//! Image records as reported by a container runtime's `images` command.

use serde::Deserialize;
use snafu::ResultExt;

use crate::error::{ImageParseSnafu, Result};

pub mod format;
pub mod select;

pub use self::format::format_rows;
pub use self::select::{PromptOutcome, Selector, select_images};

/// Repository placeholder the runtime uses for untagged images.
pub const NONE_REPOSITORY: &str = "<none>";

/// One line of `images --format "{{json .}}"` output.
///
/// Only the fields the picker needs are kept; every one of them defaults to
/// an empty string when the runtime leaves it out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageRecord {
    #[serde(rename = "ID", alias = "Id")]
    pub id: String,
    #[serde(rename = "Repository")]
    pub repository: String,
    #[serde(rename = "Tag")]
    pub tag: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "CreatedSince")]
    pub created_since: String,
}

impl ImageRecord {
    /// Name shown for the image: the id when the repository is unset.
    pub fn display_repository(&self) -> &str {
        if self.repository == NONE_REPOSITORY {
            &self.id
        } else {
            &self.repository
        }
    }
}

/// Parse JSON-lines output into records. Blank lines are skipped; any
/// malformed line fails the whole listing.
pub fn parse_image_lines(output: &str) -> Result<Vec<ImageRecord>> {
    output
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<ImageRecord>(line).context(ImageParseSnafu { line: idx + 1 })
        })
        .collect()
}
