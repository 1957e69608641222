//! Shared prompt helpers.
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `name: `
//! - Feedback: single word when possible: `Saved.`

use anyhow::Result;
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, Confirm, InquireError, Select, Text};
use std::io::{self, Write};

/// Render config for inquire prompts: no prefix decorations
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Prompt for a line of text, trimmed. Returns None when the user cancels
/// (Escape or Ctrl+C).
pub fn text(prompt: &str) -> Result<Option<String>> {
    let result = Text::new(prompt)
        .with_render_config(minimal_render_config())
        .prompt_skippable();

    match result {
        Ok(value) => Ok(value.map(|v| v.trim().to_string())),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Display a selection menu and return the chosen index
pub fn select(prompt: &str, options: &[&str]) -> Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = options.iter().map(|o| o.to_string()).collect();

    let result = Select::new(prompt, items)
        .with_render_config(minimal_render_config())
        .with_vim_mode(true)
        .prompt_skippable();

    match result {
        Ok(Some(selected)) => Ok(options.iter().position(|o| *o == selected)),
        Ok(None) => Ok(None),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Prompt for yes/no confirmation (default: no). Cancelling counts as no.
pub fn confirm(prompt: &str) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(false)
        .prompt_skippable();

    match result {
        Ok(answer) => Ok(answer.unwrap_or(false)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Clear the terminal and move the cursor home.
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}
