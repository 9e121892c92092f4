//! Interactive prompting for omitted options and destructive confirmations.
//!
//! Handlers receive the capability through [`AppContext`](crate::client::AppContext)
//! so tests can script answers instead of driving a terminal.

use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, Write};
use std::str::FromStr;

use anyhow::anyhow;

use crate::client::{CliError, CliResult};

/// Source of operator answers.
pub(crate) trait Prompter {
    /// Ask for a visible line of input.
    fn input(&self, label: &str) -> CliResult<String>;
    /// Ask for a hidden line of input.
    fn secret(&self, label: &str) -> CliResult<String>;
    /// Ask a yes/no question; anything but an explicit yes declines.
    fn confirm(&self, question: &str) -> CliResult<bool>;
}

/// Prompts on stderr and reads answers from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TerminalPrompter;

impl TerminalPrompter {
    fn require_terminal(label: &str) -> CliResult<()> {
        if io::stdin().is_terminal() {
            Ok(())
        } else {
            Err(CliError::validation(format!(
                "{label} is required; supply it as a flag when running non-interactively"
            )))
        }
    }

    fn read_line(prompt: &str) -> CliResult<String> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{prompt}")
            .and_then(|()| stderr.flush())
            .map_err(|err| CliError::failure(anyhow!("failed to write prompt: {err}")))?;
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|err| CliError::failure(anyhow!("failed to read from stdin: {err}")))?;
        Ok(line.trim().to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn input(&self, label: &str) -> CliResult<String> {
        Self::require_terminal(label)?;
        Self::read_line(&format!("{label}: "))
    }

    fn secret(&self, label: &str) -> CliResult<String> {
        Self::require_terminal(label)?;
        rpassword::prompt_password(format!("{label}: "))
            .map(|value| value.trim().to_string())
            .map_err(|err| CliError::failure(anyhow!("failed to read {label} from stdin: {err}")))
    }

    fn confirm(&self, question: &str) -> CliResult<bool> {
        if !io::stdin().is_terminal() {
            return Err(CliError::validation(format!(
                "confirmation required ({question}); rerun from an interactive terminal"
            )));
        }
        let answer = Self::read_line(&format!("{question} [y/N]: "))?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}

/// Use the flag value when present, otherwise prompt for it and parse the answer.
pub(crate) fn value_or_prompt<T>(
    prompter: &dyn Prompter,
    value: Option<T>,
    label: &str,
) -> CliResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    if let Some(value) = value {
        return Ok(value);
    }
    let answer = prompter.input(label)?;
    if answer.is_empty() {
        return Err(CliError::validation(format!("{label} cannot be empty")));
    }
    answer
        .parse::<T>()
        .map_err(|err| CliError::validation(format!("invalid {label} '{answer}': {err}")))
}

/// Multi-valued flavour of [`value_or_prompt`]; a prompt yields a single value.
pub(crate) fn values_or_prompt<T>(
    prompter: &dyn Prompter,
    values: Vec<T>,
    label: &str,
) -> CliResult<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    if values.is_empty() {
        Ok(vec![value_or_prompt(prompter, None, label)?])
    } else {
        Ok(values)
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedPrompter;
