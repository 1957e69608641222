//! Interactive handlers for contact commands.

use anyhow::Result;

use super::{cancelled, ui};
use crate::models::Record;
use crate::store::{create_table_with_notes, Assistant};

pub fn run_add_record(assistant: &mut Assistant) -> Result<()> {
    let Some(name) = ui::text("name:")? else {
        return cancelled();
    };
    let Some(phone) = ui::text("phone:")? else {
        return cancelled();
    };
    let Some(email) = ui::text("email (optional):")? else {
        return cancelled();
    };
    let Some(address) = ui::text("address (optional):")? else {
        return cancelled();
    };
    let Some(birthday) = ui::text("birthday DD.MM.YYYY (optional):")? else {
        return cancelled();
    };

    assistant.add_record(
        &name,
        &phone,
        non_empty(&email),
        non_empty(&address),
        non_empty(&birthday),
    )?;
    println!("Added: {}", name);
    Ok(())
}

pub fn run_edit_record(assistant: &mut Assistant) -> Result<()> {
    let Some(name) = ui::text("name:")? else {
        return cancelled();
    };
    if !assistant.record_exists(&name) {
        println!("No record named '{}'.", name);
        return Ok(());
    }

    const FIELDS: &[&str] = &["name", "phone", "email", "address", "birthday"];
    let Some(choice) = ui::select("field:", FIELDS)? else {
        return cancelled();
    };

    match FIELDS[choice] {
        "name" => {
            let Some(new) = ui::text("new name:")? else {
                return cancelled();
            };
            assistant.edit_record_name(&name, &new)?;
        }
        "phone" => {
            let Some(old) = ui::text("phone to replace:")? else {
                return cancelled();
            };
            if !assistant.phone_exists(&old) {
                println!("No phone '{}' on file.", old);
                return Ok(());
            }
            let Some(new) = ui::text("new phone:")? else {
                return cancelled();
            };
            assistant.edit_record_phone(&name, &old, &new)?;
        }
        "email" => {
            let Some(new) = ui::text("new email:")? else {
                return cancelled();
            };
            assistant.edit_record_email(&name, &new)?;
        }
        "address" => {
            let Some(new) = ui::text("new address:")? else {
                return cancelled();
            };
            assistant.edit_record_address(&name, &new)?;
        }
        "birthday" => {
            let Some(new) = ui::text("new birthday DD.MM.YYYY:")? else {
                return cancelled();
            };
            assistant.edit_record_birthday(&name, &new)?;
        }
        _ => {}
    }
    println!("Saved.");
    Ok(())
}

pub fn run_remove_record(assistant: &mut Assistant) -> Result<()> {
    let Some(name) = ui::text("name:")? else {
        return cancelled();
    };
    if !ui::confirm(&format!("Remove '{}'?", name))? {
        return cancelled();
    }
    assistant.remove_record(&name)?;
    println!("Removed: {}", name);
    Ok(())
}

pub fn run_show_all_records(assistant: &Assistant) -> Result<()> {
    let records = assistant.get_records();
    if records.is_empty() {
        println!("No records.");
        return Ok(());
    }
    println!("Contacts ({} total)\n", records.len());
    for record in records {
        print_record(record);
        println!();
    }
    Ok(())
}

pub fn run_show_record(assistant: &Assistant) -> Result<()> {
    let Some(name) = ui::text("name:")? else {
        return cancelled();
    };
    match assistant.get_record(&name) {
        Some(record) => print_record(record),
        None => println!("No record named '{}'.", name),
    }
    Ok(())
}

pub fn run_add_phone(assistant: &mut Assistant) -> Result<()> {
    let Some(name) = ui::text("name:")? else {
        return cancelled();
    };
    let Some(phone) = ui::text("additional phone:")? else {
        return cancelled();
    };
    assistant.add_phone(&name, &phone)?;
    println!("Saved.");
    Ok(())
}

pub fn run_remove_phone(assistant: &mut Assistant) -> Result<()> {
    let Some(name) = ui::text("name:")? else {
        return cancelled();
    };
    let Some(phone) = ui::text("phone:")? else {
        return cancelled();
    };
    assistant.remove_phone(&name, &phone)?;
    println!("Saved.");
    Ok(())
}

pub fn run_upcoming_bdays(assistant: &Assistant) -> Result<()> {
    let mut found = false;
    for (name, congratulation) in assistant.get_records_with_upcoming_birthday() {
        println!("{:<25}  {}", name, congratulation.format("%d.%m.%Y"));
        found = true;
    }
    if !found {
        println!("No upcoming birthdays.");
    }
    Ok(())
}

pub fn run_link_note(assistant: &mut Assistant) -> Result<()> {
    let Some(name) = ui::text("record name:")? else {
        return cancelled();
    };
    let Some(title) = ui::text("note title:")? else {
        return cancelled();
    };
    assistant.link_note_to_record(&name, &title)?;
    println!("Linked.");
    Ok(())
}

pub fn run_show_record_notes(assistant: &Assistant) -> Result<()> {
    let Some(name) = ui::text("record name:")? else {
        return cancelled();
    };
    let notes = assistant.get_record_notes(&name)?;
    if notes.is_empty() {
        println!("No notes linked to '{}'.", name);
        return Ok(());
    }
    println!("{}", create_table_with_notes(&notes));
    Ok(())
}

/// Print only the fields a record actually has, indented under the name.
fn print_record(record: &Record) {
    println!("{}", record.name);
    for phone in &record.phones {
        println!("  {}", phone);
    }
    if let Some(ref email) = record.email {
        println!("  {}", email);
    }
    if let Some(ref address) = record.address {
        println!("  {}", address);
    }
    if let Some(ref birthday) = record.birthday {
        println!("  born {}", birthday);
    }
    if !record.notes.is_empty() {
        println!("  notes: {}", record.notes.join(", "));
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
