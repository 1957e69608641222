//! Interactive handlers for tag commands.

use anyhow::Result;

use super::{cancelled, ui};
use crate::store::{show_tags, Assistant};

pub fn run_create_tag(assistant: &mut Assistant) -> Result<()> {
    let Some(name) = ui::text("tag:")? else {
        return cancelled();
    };
    assistant.create_tag(&name)?;
    println!("Created: {}", name);
    Ok(())
}

pub fn run_delete_tag(assistant: &mut Assistant) -> Result<()> {
    let Some(name) = ui::text("tag:")? else {
        return cancelled();
    };
    if !ui::confirm(&format!("Delete tag '{}'? Notes keep their text.", name))? {
        return cancelled();
    }
    assistant.delete_tag(&name)?;
    println!("Deleted: {}", name);
    Ok(())
}

pub fn run_show_tags(assistant: &Assistant) -> Result<()> {
    let tags = assistant.get_tags();
    if tags.is_empty() {
        println!("No tags.");
        return Ok(());
    }
    println!("{}", show_tags(&tags));
    Ok(())
}

/// Attach a tag to a note, offering to create a missing tag on the way.
/// Declining the offer leaves the note untagged.
pub fn run_link_tag(assistant: &mut Assistant) -> Result<()> {
    let Some(title) = ui::text("note title:")? else {
        return cancelled();
    };
    if !assistant.note_exists(&title) {
        println!("No note titled '{}'.", title);
        return Ok(());
    }
    let Some(tag) = ui::text("tag:")? else {
        return cancelled();
    };
    if !assistant.tag_exists(&tag) {
        if !ui::confirm(&format!("Tag '{}' does not exist. Create it?", tag))? {
            println!("Note left untagged.");
            return Ok(());
        }
        assistant.create_tag(&tag)?;
    }
    assistant.add_tag_to_note(&title, &tag)?;
    println!("Tagged.");
    Ok(())
}
