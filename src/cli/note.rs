//! Interactive handlers for note commands.

use anyhow::Result;
use chrono::NaiveDate;

use super::{cancelled, ui};
use crate::models::Note;
use crate::store::{create_table_with_note_titles, create_table_with_notes, Assistant};

pub fn run_add_note(assistant: &mut Assistant) -> Result<()> {
    let Some(title) = ui::text("title:")? else {
        return cancelled();
    };
    let Some(content) = ui::text("content:")? else {
        return cancelled();
    };
    assistant.add_note(&title, &content)?;
    println!("Added: {}", title);
    Ok(())
}

pub fn run_edit_note(assistant: &mut Assistant) -> Result<()> {
    let Some(title) = ui::text("title:")? else {
        return cancelled();
    };
    if !assistant.note_exists(&title) {
        println!("No note titled '{}'.", title);
        return Ok(());
    }

    const PARTS: &[&str] = &["title", "content"];
    let Some(choice) = ui::select("edit what:", PARTS)? else {
        return cancelled();
    };

    match PARTS[choice] {
        "title" => {
            let Some(new) = ui::text("new title:")? else {
                return cancelled();
            };
            assistant.edit_notes_title(&title, &new)?;
        }
        "content" => {
            let Some(new) = ui::text("new content:")? else {
                return cancelled();
            };
            assistant.edit_notes_content(&title, &new)?;
        }
        _ => {}
    }
    println!("Saved.");
    Ok(())
}

pub fn run_remove_note(assistant: &mut Assistant) -> Result<()> {
    let Some(title) = ui::text("title:")? else {
        return cancelled();
    };
    if !ui::confirm(&format!("Remove note '{}'?", title))? {
        return cancelled();
    }
    assistant.remove_note(&title)?;
    println!("Removed: {}", title);
    Ok(())
}

pub fn run_show_note(assistant: &Assistant) -> Result<()> {
    let Some(title) = ui::text("title:")? else {
        return cancelled();
    };
    match assistant.get_note(&title) {
        Some(note) => println!("{}", create_table_with_notes(&[note])),
        None => println!("No note titled '{}'.", title),
    }
    Ok(())
}

pub fn run_show_notes(assistant: &Assistant) -> Result<()> {
    print_notes(&assistant.get_notes());
    Ok(())
}

pub fn run_find_notes_by_date(assistant: &Assistant) -> Result<()> {
    let Some(start) = prompt_date("from DD.MM.YYYY:")? else {
        return cancelled();
    };
    let Some(end) = prompt_date("to DD.MM.YYYY:")? else {
        return cancelled();
    };
    let notes = assistant.get_notes_by_period_of_dates(start, end);
    if notes.is_empty() {
        println!("No notes in that period.");
        return Ok(());
    }
    println!("{}", create_table_with_note_titles(&notes));
    Ok(())
}

pub fn run_find_notes_by_word(assistant: &Assistant) -> Result<()> {
    let Some(word) = ui::text("word:")? else {
        return cancelled();
    };
    let notes = assistant.get_notes_by_word_in_title(&word);
    if notes.is_empty() {
        println!("No titles containing '{}'.", word);
        return Ok(());
    }
    println!("{}", create_table_with_note_titles(&notes));
    Ok(())
}

pub fn run_find_notes_by_tag(assistant: &Assistant) -> Result<()> {
    let Some(tag) = ui::text("tag:")? else {
        return cancelled();
    };
    print_notes(&assistant.get_notes_by_tag(&tag));
    Ok(())
}

fn print_notes(notes: &[&Note]) {
    if notes.is_empty() {
        println!("No notes.");
        return;
    }
    println!("{}", create_table_with_notes(notes));
}

/// Keep asking until the input parses as a date; None when the user cancels.
fn prompt_date(prompt: &str) -> Result<Option<NaiveDate>> {
    loop {
        let Some(raw) = ui::text(prompt)? else {
            return Ok(None);
        };
        match NaiveDate::parse_from_str(&raw, "%d.%m.%Y") {
            Ok(date) => return Ok(Some(date)),
            Err(_) => println!("'{}' is not a DD.MM.YYYY date.", raw),
        }
    }
}
