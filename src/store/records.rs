use chrono::{Datelike, Duration, Local, NaiveDate};

use super::Assistant;
use crate::error::{Entity, Error, Result};
use crate::models::{Address, Birthday, Email, Name, Note, Phone, Record};

impl Assistant {
    // ==================== RECORD CREATE ====================

    /// Add a contact. The name must be free and the phone unknown to the
    /// whole store; optional fields are validated before anything is stored.
    pub fn add_record(
        &mut self,
        name: &str,
        phone: &str,
        email: Option<&str>,
        address: Option<&str>,
        birthday: Option<&str>,
    ) -> Result<()> {
        let name = Name::new(name)?;
        if self.record_exists(name.as_str()) {
            return Err(Error::duplicate(Entity::Record, name.as_str()));
        }
        let phone = Phone::new(phone)?;
        if self.phone_exists(phone.as_str()) {
            return Err(Error::duplicate(Entity::Phone, phone.as_str()));
        }

        let mut record = Record::new(name, phone);
        if let Some(raw) = email {
            record.email = Some(Email::new(raw)?);
        }
        if let Some(raw) = address {
            record.address = Some(Address::new(raw)?);
        }
        if let Some(raw) = birthday {
            record.birthday = Some(Birthday::new(raw)?);
        }

        let key = record.name.as_str().to_string();
        self.record_order.push(key.clone());
        self.records.insert(key, record);
        Ok(())
    }

    // ==================== RECORD READ ====================

    pub fn get_record(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// All records in the order they were added.
    pub fn get_records(&self) -> Vec<&Record> {
        self.record_order
            .iter()
            .filter_map(|key| self.records.get(key))
            .collect()
    }

    // ==================== RECORD UPDATE ====================

    fn record_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| Error::not_found(Entity::Record, name))
    }

    /// Changes the display name only; the record stays under the key it was
    /// created with.
    pub fn edit_record_name(&mut self, name: &str, new_name: &str) -> Result<()> {
        let new_name = Name::new(new_name)?;
        self.record_mut(name)?.name = new_name;
        Ok(())
    }

    /// Replace the first phone equal to `old` in place. Does nothing when
    /// `old` is not on the record; callers check `phone_exists` first.
    pub fn edit_record_phone(&mut self, name: &str, old: &str, new: &str) -> Result<()> {
        let new = Phone::new(new)?;
        let record = self.record_mut(name)?;
        if let Some(slot) = record.phones.iter_mut().find(|p| p.as_str() == old) {
            *slot = new;
        }
        Ok(())
    }

    pub fn edit_record_email(&mut self, name: &str, email: &str) -> Result<()> {
        let email = Email::new(email)?;
        self.record_mut(name)?.email = Some(email);
        Ok(())
    }

    pub fn edit_record_address(&mut self, name: &str, address: &str) -> Result<()> {
        let address = Address::new(address)?;
        self.record_mut(name)?.address = Some(address);
        Ok(())
    }

    pub fn edit_record_birthday(&mut self, name: &str, birthday: &str) -> Result<()> {
        let birthday = Birthday::new(birthday)?;
        self.record_mut(name)?.birthday = Some(birthday);
        Ok(())
    }

    /// Append a phone. Uniqueness is store-wide, checked here at add time.
    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<()> {
        let phone = Phone::new(phone)?;
        if self.phone_exists(phone.as_str()) {
            return Err(Error::duplicate(Entity::Phone, phone.as_str()));
        }
        self.record_mut(name)?.phones.push(phone);
        Ok(())
    }

    /// Drop every phone equal to `phone` from the record's list.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<()> {
        self.record_mut(name)?.phones.retain(|p| p.as_str() != phone);
        Ok(())
    }

    // ==================== RECORD DELETE ====================

    pub fn remove_record(&mut self, name: &str) -> Result<()> {
        if !self.record_exists(name) {
            return Err(Error::not_found(Entity::Record, name));
        }
        self.records.remove(name);
        self.record_order.retain(|key| key != name);
        Ok(())
    }

    // ==================== NOTE LINKS ====================

    /// Link an existing note to an existing record. Linking twice is a no-op.
    pub fn link_note_to_record(&mut self, name: &str, title: &str) -> Result<()> {
        if !self.note_exists(title) {
            return Err(Error::not_found(Entity::Note, title));
        }
        let record = self.record_mut(name)?;
        if !record.notes.iter().any(|t| t == title) {
            record.notes.push(title.to_string());
        }
        Ok(())
    }

    /// Notes linked to a record, in link order.
    pub fn get_record_notes(&self, name: &str) -> Result<Vec<&Note>> {
        let record = self
            .get_record(name)
            .ok_or_else(|| Error::not_found(Entity::Record, name))?;
        Ok(record
            .notes
            .iter()
            .filter_map(|title| self.notes.get(title))
            .collect())
    }

    // ==================== BIRTHDAYS ====================

    /// Records whose birthday falls within the next week, paired with the
    /// congratulation date (weekend occurrences shift to Monday). Yields in
    /// record order, not date order.
    pub fn get_records_with_upcoming_birthday(
        &self,
    ) -> impl Iterator<Item = (&str, NaiveDate)> + '_ {
        self.get_records_with_upcoming_birthday_on(Local::now().date_naive())
    }

    /// Same scan against an explicit "today" so tests can pin the clock.
    /// The window is `[today, today + 7 days]`, both ends inclusive, and only
    /// this year's occurrence counts.
    pub fn get_records_with_upcoming_birthday_on(
        &self,
        today: NaiveDate,
    ) -> impl Iterator<Item = (&str, NaiveDate)> + '_ {
        let window_end = today + Duration::days(7);
        self.record_order.iter().filter_map(move |key| {
            let record = self.records.get(key)?;
            let birthday = record.birthday.as_ref()?;
            let occurrence = birthday.occurrence_in(today.year());
            if occurrence < today || occurrence > window_end {
                return None;
            }
            Some((
                record.name.as_str(),
                Birthday::congratulation_for(occurrence),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn store_with_alice() -> Assistant {
        let mut store = Assistant::new();
        store
            .add_record("alice", "0501234567", None, None, None)
            .unwrap();
        store
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn added_record_is_found() {
        let store = store_with_alice();
        assert!(store.record_exists("alice"));
        assert!(store.phone_exists("0501234567"));
        assert_eq!(store.get_record("alice").unwrap().phones.len(), 1);
    }

    #[test]
    fn duplicate_name_is_rejected_without_mutation() {
        let mut store = store_with_alice();
        let err = store
            .add_record("alice", "0507654321", None, None, None)
            .unwrap_err();
        assert!(matches!(err, Error::Duplicate { .. }));
        assert_eq!(store.get_records().len(), 1);
        assert!(!store.phone_exists("0507654321"));
    }

    #[test]
    fn duplicate_phone_anywhere_in_the_store_is_rejected() {
        let mut store = store_with_alice();
        let err = store
            .add_record("bob", "0501234567", None, None, None)
            .unwrap_err();
        assert!(matches!(err, Error::Duplicate { .. }));
        assert!(!store.record_exists("bob"));
    }

    #[test]
    fn invalid_optional_field_leaves_store_unchanged() {
        let mut store = Assistant::new();
        let err = store
            .add_record("bob", "0501234567", Some("not-an-email"), None, None)
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(!store.record_exists("bob"));
        assert!(!store.phone_exists("0501234567"));
    }

    #[test]
    fn records_iterate_in_insertion_order() {
        let mut store = Assistant::new();
        for (name, phone) in [("carol", "0000000001"), ("alice", "0000000002"), ("bob", "0000000003")] {
            store.add_record(name, phone, None, None, None).unwrap();
        }
        let names: Vec<&str> = store.get_records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["carol", "alice", "bob"]);
    }

    #[test]
    fn remove_then_lookup_is_absent_and_second_remove_fails() {
        let mut store = store_with_alice();
        store.remove_record("alice").unwrap();
        assert!(store.get_record("alice").is_none());
        let err = store.remove_record("alice").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn edit_name_does_not_rekey() {
        let mut store = store_with_alice();
        store.edit_record_name("alice", "Alice Smith").unwrap();
        let record = store.get_record("alice").unwrap();
        assert_eq!(record.name.as_str(), "Alice Smith");
        assert!(!store.record_exists("Alice Smith"));
    }

    #[test]
    fn edit_phone_replaces_first_match_in_place() {
        let mut store = store_with_alice();
        store.add_phone("alice", "0507654321").unwrap();
        store
            .edit_record_phone("alice", "0501234567", "0509999999")
            .unwrap();
        let phones: Vec<&str> = store.get_record("alice").unwrap().phones.iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["0509999999", "0507654321"]);
    }

    #[test]
    fn edit_phone_with_unknown_old_is_a_no_op() {
        let mut store = store_with_alice();
        store
            .edit_record_phone("alice", "0500000000", "0509999999")
            .unwrap();
        assert!(store.phone_exists("0501234567"));
        assert!(!store.phone_exists("0509999999"));
    }

    #[test]
    fn field_editors_revalidate() {
        let mut store = store_with_alice();
        assert!(store.edit_record_email("alice", "a@b.co").is_ok());
        assert!(store.edit_record_email("alice", "nope").is_err());
        assert!(store.edit_record_address("alice", "1 Main St").is_ok());
        assert!(store.edit_record_birthday("alice", "12.06.1990").is_ok());
        assert!(store.edit_record_birthday("alice", "12.06").is_err());
        let record = store.get_record("alice").unwrap();
        assert_eq!(record.email.as_ref().unwrap().as_str(), "a@b.co");
    }

    #[test]
    fn add_phone_rejects_store_wide_duplicates() {
        let mut store = store_with_alice();
        store
            .add_record("bob", "0507654321", None, None, None)
            .unwrap();
        let err = store.add_phone("bob", "0501234567").unwrap_err();
        assert!(matches!(err, Error::Duplicate { .. }));
    }

    #[test]
    fn remove_phone_filters_the_list() {
        let mut store = store_with_alice();
        store.add_phone("alice", "0507654321").unwrap();
        store.remove_phone("alice", "0501234567").unwrap();
        let record = store.get_record("alice").unwrap();
        assert_eq!(record.phones.len(), 1);
        assert!(!store.phone_exists("0501234567"));
    }

    #[test]
    fn phone_ops_on_missing_record_fail() {
        let mut store = Assistant::new();
        assert!(matches!(
            store.add_phone("ghost", "0501234567").unwrap_err(),
            Error::NotFound { .. }
        ));
        assert!(matches!(
            store.remove_phone("ghost", "0501234567").unwrap_err(),
            Error::NotFound { .. }
        ));
    }

    #[test]
    fn birthday_window_matches_the_monday_scenario() {
        // 2024-06-10 is a Monday.
        let today = date(2024, 6, 10);
        let mut store = Assistant::new();
        store
            .add_record("midweek", "0000000001", None, None, Some("12.06.1990"))
            .unwrap();
        store
            .add_record("saturday", "0000000002", None, None, Some("15.06.1990"))
            .unwrap();
        store
            .add_record("sunday", "0000000003", None, None, Some("16.06.1990"))
            .unwrap();
        store
            .add_record("outside", "0000000004", None, None, Some("20.06.1990"))
            .unwrap();
        store
            .add_record("passed", "0000000005", None, None, Some("01.06.1990"))
            .unwrap();
        store
            .add_record("no-bday", "0000000006", None, None, None)
            .unwrap();

        let upcoming: Vec<(&str, NaiveDate)> = store.get_records_with_upcoming_birthday_on(today).collect();
        assert_eq!(
            upcoming,
            vec![
                ("midweek", date(2024, 6, 12)),
                ("saturday", date(2024, 6, 17)),
                ("sunday", date(2024, 6, 17)),
            ]
        );
    }

    #[test]
    fn birthday_window_is_inclusive_on_both_ends() {
        let today = date(2024, 6, 10);
        let mut store = Assistant::new();
        store
            .add_record("today", "0000000001", None, None, Some("10.06.1990"))
            .unwrap();
        store
            .add_record("last-day", "0000000002", None, None, Some("17.06.1990"))
            .unwrap();
        store
            .add_record("after", "0000000003", None, None, Some("18.06.1990"))
            .unwrap();

        let names: Vec<&str> = store.get_records_with_upcoming_birthday_on(today).map(|(n, _)| n).collect();
        assert_eq!(names, ["today", "last-day"]);
    }

    #[test]
    fn birthday_scan_is_restartable() {
        let today = date(2024, 6, 10);
        let mut store = Assistant::new();
        store
            .add_record("midweek", "0000000001", None, None, Some("12.06.1990"))
            .unwrap();
        assert_eq!(store.get_records_with_upcoming_birthday_on(today).count(), 1);
        assert_eq!(store.get_records_with_upcoming_birthday_on(today).count(), 1);
    }

    #[test]
    fn linked_notes_follow_the_record() {
        let mut store = store_with_alice();
        store.add_note("meeting", "agenda").unwrap();
        store.link_note_to_record("alice", "meeting").unwrap();
        store.link_note_to_record("alice", "meeting").unwrap();

        let record = store.get_record("alice").unwrap();
        assert_eq!(record.notes, ["meeting"]);

        let notes = store.get_record_notes("alice").unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "meeting");
    }

    #[test]
    fn linking_requires_both_sides() {
        let mut store = store_with_alice();
        assert!(matches!(
            store.link_note_to_record("alice", "missing").unwrap_err(),
            Error::NotFound { .. }
        ));
        store.add_note("meeting", "agenda").unwrap();
        assert!(matches!(
            store.link_note_to_record("ghost", "meeting").unwrap_err(),
            Error::NotFound { .. }
        ));
    }
}
