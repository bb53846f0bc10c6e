use std::fmt;
use std::io;

use console::Term;
use dialoguer::MultiSelect;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use tokio::task;

use crate::image::{PromptOutcome, Selector};

/// Console-based multi-select prompt using dialoguer
#[derive(Debug, Clone, Copy)]
pub struct Prompt {
    color: bool,
}

impl Prompt {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Selector for Prompt {
    async fn choose(&self, message: &str, labels: Vec<String>) -> io::Result<PromptOutcome> {
        let _guard = InterruptGuard::install()
            .inspect_err(|err| log::warn!("cannot listen for Ctrl-C during prompt: {err}"))
            .ok();

        let prompt = message.to_string();
        let color = self.color;
        let result = task::spawn_blocking(move || {
            if color {
                interact(&CountingTheme::new(ColorfulTheme::default()), prompt, &labels)
            } else {
                interact(&CountingTheme::new(SimpleTheme), prompt, &labels)
            }
        })
        .await
        .map_err(join_error)?;

        prompt_outcome(result)
    }
}

fn prompt_outcome(result: io::Result<Option<Vec<usize>>>) -> io::Result<PromptOutcome> {
    match result {
        Ok(Some(indices)) => Ok(PromptOutcome::Confirmed(indices)),
        Ok(None) => Ok(PromptOutcome::Cancelled),
        Err(err) if err.kind() == io::ErrorKind::Interrupted => {
            // An interrupted key read leaves the cursor hidden.
            let _ = Term::stderr().show_cursor();
            Ok(PromptOutcome::Cancelled)
        }
        Err(err) => Err(err),
    }
}

/// SIGINT listener held while a prompt is open.
///
/// Ctrl-C in the prompt's raw-mode key read raises SIGINT. With a listener
/// registered the process survives it and the read fails with `Interrupted`.
struct InterruptGuard {
    #[cfg(unix)]
    _sigint: tokio::signal::unix::Signal,
}

impl InterruptGuard {
    #[cfg(unix)]
    fn install() -> io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        Ok(Self {
            _sigint: signal(SignalKind::interrupt())?,
        })
    }

    #[cfg(not(unix))]
    fn install() -> io::Result<Self> {
        Ok(Self {})
    }
}

fn interact<T: Theme>(
    theme: &T,
    prompt: String,
    labels: &[String],
) -> io::Result<Option<Vec<usize>>> {
    MultiSelect::with_theme(theme)
        .with_prompt(prompt)
        .items(labels)
        .report(true)
        .interact_opt()
        .map_err(io::Error::from)
}

fn join_error(err: task::JoinError) -> io::Error {
    io::Error::other(err.to_string())
}

/// Theme that reports a finished multi-select as a count rather than
/// echoing every selected label.
pub struct CountingTheme<T> {
    inner: T,
}

impl<T: Theme> CountingTheme<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Theme> Theme for CountingTheme<T> {
    fn format_multi_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_multi_select_prompt(f, prompt)
    }

    fn format_multi_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selections: &[&str],
    ) -> fmt::Result {
        let summary = selection_summary(selections.len());
        self.inner.format_multi_select_prompt_selection(f, prompt, &[summary.as_str()])
    }

    fn format_multi_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        checked: bool,
        active: bool,
    ) -> fmt::Result {
        self.inner.format_multi_select_prompt_item(f, text, checked, active)
    }
}

fn selection_summary(count: usize) -> String {
    match count {
        1 => "1 image".to_string(),
        n => format!("{n} images"),
    }
}
