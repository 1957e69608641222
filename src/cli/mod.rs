use anyhow::Result;

use crate::store::Assistant;

pub mod note;
pub mod record;
pub mod tag;
pub mod ui;

pub use note::{
    run_add_note, run_edit_note, run_find_notes_by_date, run_find_notes_by_tag,
    run_find_notes_by_word, run_remove_note, run_show_note, run_show_notes,
};
pub use record::{
    run_add_phone, run_add_record, run_edit_record, run_link_note, run_remove_phone,
    run_remove_record, run_show_all_records, run_show_record, run_show_record_notes,
    run_upcoming_bdays,
};
pub use tag::{run_create_tag, run_delete_tag, run_link_tag, run_show_tags};

/// Everything the dispatcher understands. Tokens are resolved here, once, at
/// the boundary; nothing downstream ever matches on command strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddRecord,
    EditRecord,
    RemoveRecord,
    ShowAllRecords,
    ShowRecord,
    AddPhone,
    RemovePhone,
    ShowUpcomingBdays,
    CreateTag,
    DeleteTag,
    ShowTags,
    LinkTag,
    AddNote,
    EditNote,
    RemoveNote,
    ShowNote,
    ShowNotes,
    FindNotesByDate,
    FindNotesByWordInTitle,
    FindNotesByTag,
    LinkNote,
    ShowRecordNotes,
    Help,
    Exit,
}

impl Command {
    pub fn parse(token: &str) -> Option<Command> {
        let command = match token {
            "add-record" => Self::AddRecord,
            "edit-record" => Self::EditRecord,
            "remove-record" => Self::RemoveRecord,
            "show-all-records" => Self::ShowAllRecords,
            "search-record" | "show-record" => Self::ShowRecord,
            "add-phone" => Self::AddPhone,
            "remove-phone" => Self::RemovePhone,
            "show-upcoming-bdays" => Self::ShowUpcomingBdays,
            "create-tag" => Self::CreateTag,
            "delete-tag" => Self::DeleteTag,
            "show-tags" => Self::ShowTags,
            "link-tag" => Self::LinkTag,
            "add-note" => Self::AddNote,
            "edit-note" => Self::EditNote,
            "remove-note" => Self::RemoveNote,
            "show-note" => Self::ShowNote,
            "show-notes" => Self::ShowNotes,
            "find-notes-by-date" => Self::FindNotesByDate,
            "find-notes-by-word-in-title" => Self::FindNotesByWordInTitle,
            "find-notes-by-tag" => Self::FindNotesByTag,
            "link-note" => Self::LinkNote,
            "show-record-notes" => Self::ShowRecordNotes,
            "help" => Self::Help,
            "exit" | "close" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }
}

const HELP: &[(&str, &str)] = &[
    ("add-record", "Add a new contact. Name and phone are required."),
    ("edit-record", "Edit one contact field: name, phone, email, address or birthday."),
    ("remove-record", "Remove a contact from the book."),
    ("show-all-records", "Display every contact."),
    ("search-record", "Show one contact by name (alias: show-record)."),
    ("add-phone", "Add another phone to a contact."),
    ("remove-phone", "Drop a phone from a contact."),
    ("show-upcoming-bdays", "Contacts with a birthday in the next week."),
    ("create-tag", "Register a new tag."),
    ("delete-tag", "Delete a tag and detach it from every note."),
    ("show-tags", "List all tags."),
    ("link-tag", "Attach a tag to a note."),
    ("add-note", "Add a new note. The title must be unique."),
    ("edit-note", "Edit a note's title or content."),
    ("remove-note", "Delete a note."),
    ("show-note", "Show one note by title."),
    ("show-notes", "Show every note."),
    ("find-notes-by-date", "Notes created between two dates."),
    ("find-notes-by-word-in-title", "Notes whose title contains a word."),
    ("find-notes-by-tag", "Notes carrying a tag."),
    ("link-note", "Link a note to a contact."),
    ("show-record-notes", "Notes linked to a contact."),
    ("help", "Show this list."),
    ("exit", "Save and quit (alias: close)."),
];

fn print_help() {
    for (keyword, description) in HELP {
        println!("{:<28} - {}", keyword, description);
    }
}

pub(crate) fn cancelled() -> Result<()> {
    println!("Cancelled.");
    Ok(())
}

/// Read commands until exit. Handler errors are printed and the loop keeps
/// going; only failure of the prompt itself ends the session.
pub fn run(assistant: &mut Assistant) -> Result<()> {
    // best effort; a pipe or dumb terminal still works
    let _ = ui::clear_screen();
    println!("contactbook. Type 'help' for the command list.");
    loop {
        let Some(line) = ui::text("command:")? else {
            // Ctrl+C / Escape at the top prompt quits like `exit`
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }
        match Command::parse(&line) {
            None => println!("Unknown command '{}'. Type 'help' to list commands.", line),
            Some(Command::Exit) => return Ok(()),
            Some(command) => {
                if let Err(e) = dispatch(assistant, command) {
                    eprintln!("{}", e);
                }
            }
        }
    }
}

fn dispatch(assistant: &mut Assistant, command: Command) -> Result<()> {
    match command {
        Command::AddRecord => run_add_record(assistant),
        Command::EditRecord => run_edit_record(assistant),
        Command::RemoveRecord => run_remove_record(assistant),
        Command::ShowAllRecords => run_show_all_records(assistant),
        Command::ShowRecord => run_show_record(assistant),
        Command::AddPhone => run_add_phone(assistant),
        Command::RemovePhone => run_remove_phone(assistant),
        Command::ShowUpcomingBdays => run_upcoming_bdays(assistant),
        Command::CreateTag => run_create_tag(assistant),
        Command::DeleteTag => run_delete_tag(assistant),
        Command::ShowTags => run_show_tags(assistant),
        Command::LinkTag => run_link_tag(assistant),
        Command::AddNote => run_add_note(assistant),
        Command::EditNote => run_edit_note(assistant),
        Command::RemoveNote => run_remove_note(assistant),
        Command::ShowNote => run_show_note(assistant),
        Command::ShowNotes => run_show_notes(assistant),
        Command::FindNotesByDate => run_find_notes_by_date(assistant),
        Command::FindNotesByWordInTitle => run_find_notes_by_word(assistant),
        Command::FindNotesByTag => run_find_notes_by_tag(assistant),
        Command::LinkNote => run_link_note(assistant),
        Command::ShowRecordNotes => run_show_record_notes(assistant),
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Exit => Ok(()),
    }
}
