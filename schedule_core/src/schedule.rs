//! # Schedule Data Structures
//!
//! The `Schedule` struct is the editable model behind a poster: the company
//! name, the service date, and an ordered list of bus rows. It is a
//! session document: created when the editor opens, mutated in place, and
//! discarded when the editor closes. There is no validation anywhere in
//! the model: empty strings, malformed times, and arbitrary text are all
//! accepted, and the renderer is responsible for degrading gracefully.
//!
//! ## Structure
//!
//! ```text
//! Schedule
//! ├── company_name: String (may be empty)
//! ├── date: String (ISO "YYYY-MM-DD", may be empty)
//! └── buses: Vec<BusRow> (display order, UUID row identity)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use schedule_core::schedule::{BusField, Schedule};
//!
//! let mut schedule = Schedule::new();
//! schedule.set_company_name("Royal Travels");
//!
//! let id = schedule.buses[0].id;
//! schedule.set_field(&id, BusField::BusNumber, "12");
//! schedule.set_field(&id, BusField::Time, "09:00");
//!
//! // Serialize to JSON for the CLI or for storage
//! let json = serde_json::to_string_pretty(&schedule).unwrap();
//! assert!(json.contains("Royal Travels"));
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry in the schedule table.
///
/// `time` is expected to be a 24-hour `HH:MM` string but is not validated;
/// `price` and `contact` are optional free text, where a non-empty value on
/// any row switches the whole table to the wider "Details" layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusRow {
    /// Stable identity for list keying and deletion targeting.
    ///
    /// Generated once per row (v4) and never reused: removing a row and
    /// adding a new one always yields a fresh id.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    #[serde(default)]
    pub bus_number: String,

    #[serde(default)]
    pub route: String,

    /// 24-hour `HH:MM`; empty renders as the `--:--` sentinel
    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub price: String,

    #[serde(default)]
    pub contact: String,
}

impl BusRow {
    /// Create an empty row with a freshly generated id.
    pub fn new() -> Self {
        BusRow {
            id: Uuid::new_v4(),
            bus_number: String::new(),
            route: String::new(),
            time: String::new(),
            price: String::new(),
            contact: String::new(),
        }
    }

    /// True if the row contributes to the "Details" column.
    pub fn has_details(&self) -> bool {
        !self.price.is_empty() || !self.contact.is_empty()
    }
}

impl Default for BusRow {
    fn default() -> Self {
        BusRow::new()
    }
}

/// The editable fields of a [`BusRow`].
///
/// `id` is intentionally not part of this set: row identity is fixed for
/// the lifetime of the row and cannot be edited through the mutation
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusField {
    BusNumber,
    Route,
    Time,
    Price,
    Contact,
}

/// The full editable schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Company name; empty renders a placeholder
    #[serde(default)]
    pub company_name: String,

    /// Service date as ISO `YYYY-MM-DD`; empty renders a placeholder
    #[serde(default)]
    pub date: String,

    /// Bus rows in display order, preserved across edits
    #[serde(default)]
    pub buses: Vec<BusRow>,
}

impl Schedule {
    /// Create the schedule a fresh editor session starts from: no company,
    /// today's date, and a single empty row.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schedule_core::schedule::Schedule;
    ///
    /// let schedule = Schedule::new();
    /// assert_eq!(schedule.bus_count(), 1);
    /// assert!(schedule.company_name.is_empty());
    /// ```
    pub fn new() -> Self {
        Schedule {
            company_name: String::new(),
            date: Utc::now().format("%Y-%m-%d").to_string(),
            buses: vec![BusRow::new()],
        }
    }

    /// Append a new empty row and return its id.
    ///
    /// There is no upper bound on the row count; the poster grows
    /// vertically to fit.
    pub fn add_bus(&mut self) -> Uuid {
        let row = BusRow::new();
        let id = row.id;
        self.buses.push(row);
        id
    }

    /// Remove the row with the given id.
    ///
    /// Returns the removed row, or `None` if the id is not present; a
    /// stale id from a rapid-fire UI action is a no-op, not an error.
    /// Removing the last row is permitted; an empty table renders an
    /// explicit placeholder.
    pub fn remove_bus(&mut self, id: &Uuid) -> Option<BusRow> {
        let index = self.buses.iter().position(|bus| bus.id == *id)?;
        Some(self.buses.remove(index))
    }

    /// Set one editable field on the row with the given id.
    ///
    /// Returns `false` (no-op) if the id is not present.
    pub fn set_field(&mut self, id: &Uuid, field: BusField, value: impl Into<String>) -> bool {
        let Some(bus) = self.buses.iter_mut().find(|bus| bus.id == *id) else {
            return false;
        };
        let value = value.into();
        match field {
            BusField::BusNumber => bus.bus_number = value,
            BusField::Route => bus.route = value,
            BusField::Time => bus.time = value,
            BusField::Price => bus.price = value,
            BusField::Contact => bus.contact = value,
        }
        true
    }

    /// Replace the company name.
    pub fn set_company_name(&mut self, value: impl Into<String>) {
        self.company_name = value.into();
    }

    /// Replace the service date.
    pub fn set_date(&mut self, value: impl Into<String>) {
        self.date = value.into();
    }

    /// Derived layout flag: true if any row has a non-empty price or
    /// contact. Recomputed from the full collection, never stored.
    pub fn has_extra_details(&self) -> bool {
        self.buses.iter().any(BusRow::has_details)
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_schedule_has_one_empty_row_and_todays_date() {
        let schedule = Schedule::new();
        assert_eq!(schedule.bus_count(), 1);
        assert!(schedule.buses[0].bus_number.is_empty());
        assert_eq!(schedule.date, Utc::now().format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_add_and_remove_rows() {
        let mut schedule = Schedule::new();
        let first = schedule.buses[0].id;
        let second = schedule.add_bus();
        assert_eq!(schedule.bus_count(), 2);

        let removed = schedule.remove_bus(&first);
        assert!(removed.is_some());
        assert_eq!(schedule.bus_count(), 1);
        assert_eq!(schedule.buses[0].id, second);

        // Removing the last row is allowed
        assert!(schedule.remove_bus(&second).is_some());
        assert_eq!(schedule.bus_count(), 0);
    }

    #[test]
    fn test_remove_stale_id_is_noop() {
        let mut schedule = Schedule::new();
        let stale = Uuid::new_v4();
        assert!(schedule.remove_bus(&stale).is_none());
        assert_eq!(schedule.bus_count(), 1);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut schedule = Schedule::new();
        let mut seen = vec![schedule.buses[0].id];
        for _ in 0..50 {
            let id = schedule.add_bus();
            schedule.remove_bus(&id);
            assert!(!seen.contains(&id), "id {} was reused", id);
            seen.push(id);
        }
    }

    #[test]
    fn test_set_field_updates_matching_row_only() {
        let mut schedule = Schedule::new();
        let first = schedule.buses[0].id;
        let second = schedule.add_bus();

        assert!(schedule.set_field(&second, BusField::Route, "Dhaka - Sylhet"));
        assert!(schedule.buses[0].route.is_empty());
        assert_eq!(schedule.buses[1].route, "Dhaka - Sylhet");

        assert!(schedule.set_field(&first, BusField::Time, "13:00"));
        assert_eq!(schedule.buses[0].time, "13:00");
    }

    #[test]
    fn test_set_field_stale_id_is_noop() {
        let mut schedule = Schedule::new();
        assert!(!schedule.set_field(&Uuid::new_v4(), BusField::Price, "500"));
        assert!(schedule.buses[0].price.is_empty());
    }

    #[test]
    fn test_order_preserved_across_edits() {
        let mut schedule = Schedule::new();
        let a = schedule.buses[0].id;
        let b = schedule.add_bus();
        let c = schedule.add_bus();

        schedule.set_field(&b, BusField::BusNumber, "B");
        schedule.set_field(&a, BusField::BusNumber, "A");
        schedule.set_field(&c, BusField::BusNumber, "C");

        let order: Vec<&str> = schedule
            .buses
            .iter()
            .map(|bus| bus.bus_number.as_str())
            .collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_extra_details_flag_is_derived() {
        let mut schedule = Schedule::new();
        let id = schedule.buses[0].id;
        assert!(!schedule.has_extra_details());

        schedule.set_field(&id, BusField::Price, "450");
        assert!(schedule.has_extra_details());

        schedule.set_field(&id, BusField::Price, "");
        assert!(!schedule.has_extra_details());

        schedule.set_field(&id, BusField::Contact, "01700-000000");
        assert!(schedule.has_extra_details());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut schedule = Schedule::new();
        schedule.set_company_name("Royal Travels");
        schedule.set_date("2024-01-01");
        let id = schedule.buses[0].id;
        schedule.set_field(&id, BusField::Route, "A-B");

        let json = serde_json::to_string_pretty(&schedule).unwrap();
        let roundtrip: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.company_name, "Royal Travels");
        assert_eq!(roundtrip.buses[0].id, id);
        assert_eq!(roundtrip.buses[0].route, "A-B");
    }

    #[test]
    fn test_lenient_deserialization_fills_defaults() {
        // Hand-written input files may omit ids and optional fields
        let json = r#"{"company_name":"X","date":"2024-06-01","buses":[{"bus_number":"7","route":"A-B"}]}"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.buses.len(), 1);
        assert!(schedule.buses[0].time.is_empty());
        assert!(!schedule.buses[0].id.is_nil());
    }
}
