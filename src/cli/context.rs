use crate::runtime::RuntimeClient;

use super::entry::Args;
use super::prompts::Prompt;

pub struct CliContext {
    runtime: RuntimeClient,
    prompt: Prompt,
    color: bool,
}

impl CliContext {
    pub fn from_args(args: Args) -> Self {
        let color = !args.no_color;
        if !color {
            colored::control::set_override(false);
        }
        let runtime = RuntimeClient::new(args.runtime);
        log::debug!("runtime={} color={}", runtime.program(), color);

        Self {
            runtime,
            prompt: Prompt::new(color),
            color,
        }
    }

    pub fn runtime(&self) -> &RuntimeClient {
        &self.runtime
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn color(&self) -> bool {
        self.color
    }
}
