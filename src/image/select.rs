use std::io;

use super::format::DisplayRow;

pub const PROMPT_MESSAGE: &str = "Choose images to `rmi`:";

/// How an interactive multi-select prompt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Indices of the marked choices, in the order the prompt reports them.
    Confirmed(Vec<usize>),
    /// The user backed out without confirming.
    Cancelled,
}

/// A multi-select prompt over a list of labels.
pub trait Selector {
    async fn choose(&self, message: &str, labels: Vec<String>) -> io::Result<PromptOutcome>;
}

/// Image ids picked for removal, unique and in prompt order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionResult {
    ids: Vec<String>,
}

impl SelectionResult {
    fn from_indices(rows: &[DisplayRow<'_>], indices: &[usize]) -> Self {
        let mut ids: Vec<String> = Vec::with_capacity(indices.len());
        for row in indices.iter().filter_map(|idx| rows.get(*idx)) {
            // The same image id shows up once per tag.
            if !ids.iter().any(|id| *id == row.image.id) {
                ids.push(row.image.id.clone());
            }
        }
        Self { ids }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Ask the user which rows to remove.
///
/// This never fails: cancelling, interrupting, or any prompt fault all come
/// back as an empty selection. Faults other than a user interrupt are logged.
pub async fn select_images<S: Selector>(
    selector: &S,
    rows: &[DisplayRow<'_>],
) -> SelectionResult {
    let labels = rows.iter().map(|row| row.label.clone()).collect();

    match selector.choose(PROMPT_MESSAGE, labels).await {
        Ok(PromptOutcome::Confirmed(indices)) => SelectionResult::from_indices(rows, &indices),
        Ok(PromptOutcome::Cancelled) => {
            log::debug!("image prompt cancelled");
            SelectionResult::default()
        }
        Err(err) if err.kind() == io::ErrorKind::Interrupted => {
            log::debug!("image prompt interrupted");
            SelectionResult::default()
        }
        Err(err) => {
            log::warn!("image prompt failed, nothing selected: {err}");
            SelectionResult::default()
        }
    }
}
