use crate::core::models::Booking;
use crate::core::slots::hour_to_index;
use crate::core::types::{JobLength, SlotIndex, WorkingDay};
use crate::errors::{Error, Result};
use chrono::{Duration, NaiveDate};

/// Fields of a booking before it is assigned an id.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub customer_name: String,
    pub date: NaiveDate,
    pub start_index: SlotIndex,
    pub duration: JobLength,
    pub description: Option<String>,
}

/// In-memory list of confirmed bookings for the session.
///
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice.
#[derive(Debug, Default)]
pub struct Ledger {
    items: Vec<Booking>,
    next_id: u32,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot handed to the availability engine.
    pub fn as_slice(&self) -> &[Booking] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Result<&Booking> {
        self.items
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| Error::Domain(format!("Booking with id {} not found.", id)))
    }

    /// Records a booking. Slot availability is the caller's check; this only
    /// validates the record itself.
    pub fn create(&mut self, new: NewBooking) -> Result<&Booking> {
        let customer_name = new.customer_name.trim().to_string();
        if customer_name.is_empty() {
            return Err(Error::parse("Customer name cannot be empty."));
        }
        let day = WorkingDay::of_date(new.date).ok_or_else(|| {
            Error::parse(format!(
                "{} is not a working day (Monday to Friday).",
                new.date.format("%Y-%m-%d")
            ))
        })?;
        let description = new
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let id = self.allocate_id();
        self.items.push(Booking {
            id,
            customer_name,
            day,
            date: new.date,
            start_index: new.start_index,
            duration: new.duration,
            description,
        });
        let idx = self.items.len() - 1;
        Ok(&self.items[idx])
    }

    /// Bookings ordered by date then start slot, for listings.
    pub fn sorted(&self) -> Vec<&Booking> {
        let mut v: Vec<&Booking> = self.items.iter().collect();
        v.sort_by_key(|b| (b.date, b.start_index));
        v
    }

    /// Loads the demo week used when `seed_demo_bookings` is on.
    pub fn seed_demo(&mut self, week_start: NaiveDate) -> Result<()> {
        let demo: [(&str, i64, f32, u32, &str); 5] = [
            ("John Smith", 0, 9.0, 4, "Kitchen outlet installation"),
            ("Sarah Johnson", 1, 14.0, 5, "Electrical panel upgrade"),
            ("Mike Davis", 2, 8.0, 7, "Full rewiring - basement"),
            ("Lisa Wilson", 3, 10.5, 2, "Light fixture replacement"),
            ("Robert Brown", 4, 13.0, 5, "Outdoor lighting installation"),
        ];
        for (customer, offset, hour, slots, description) in demo {
            self.create(NewBooking {
                customer_name: customer.to_string(),
                date: week_start + Duration::days(offset),
                start_index: hour_to_index(hour),
                duration: JobLength::from_slots(slots),
                description: Some(description.to_string()),
            })?;
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        format!("B{id:04}")
    }
}
