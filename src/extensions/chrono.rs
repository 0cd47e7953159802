use crate::core::types::WorkingDay;
use chrono::Weekday;

pub trait WeekdayExt {
    /// `None` for Saturday and Sunday.
    fn to_working_day(self) -> Option<WorkingDay>;
}

impl WeekdayExt for Weekday {
    fn to_working_day(self) -> Option<WorkingDay> {
        match self {
            Weekday::Mon => Some(WorkingDay::Monday),
            Weekday::Tue => Some(WorkingDay::Tuesday),
            Weekday::Wed => Some(WorkingDay::Wednesday),
            Weekday::Thu => Some(WorkingDay::Thursday),
            Weekday::Fri => Some(WorkingDay::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }
}
