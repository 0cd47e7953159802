
use crate::core::ledger::{Ledger, NewBooking};
use crate::core::types::JobLength;
use chrono::NaiveDate;

/// Wednesday 2099-01-07; its week runs Monday 01/05 to Friday 01/09.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 7).unwrap()
}

pub(super) fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 5).unwrap()
}

pub(super) fn ledger_with(entries: &[(&str, NaiveDate, i32, f32)]) -> Ledger {
    let mut ledger = Ledger::new();
    for (name, date, start, hours) in entries {
        ledger
            .create(NewBooking {
                customer_name: name.to_string(),
                date: *date,
                start_index: *start,
                duration: JobLength::try_from_hours(*hours).unwrap(),
                description: None,
            })
            .unwrap();
    }
    ledger
}
