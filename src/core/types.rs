use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::extensions::string::ToDashSeparators;
use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Canonical scheduling unit: number of 30-minute slots after opening time.
pub type SlotIndex = i32;

/// The five bookable days, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive)]
pub enum WorkingDay {
    #[strum(
        serialize = "mon",
        serialize = "monday",
        serialize = "mon.",
        serialize = "m",
        to_string = "Monday"
    )]
    Monday,
    #[strum(
        serialize = "tue",
        serialize = "tuesday",
        serialize = "tue.",
        serialize = "t",
        to_string = "Tuesday"
    )]
    Tuesday,
    #[strum(
        serialize = "wed",
        serialize = "wednesday",
        serialize = "wed.",
        serialize = "w",
        to_string = "Wednesday"
    )]
    Wednesday,
    #[strum(
        serialize = "thu",
        serialize = "thursday",
        serialize = "thu.",
        serialize = "th",
        to_string = "Thursday"
    )]
    Thursday,
    #[strum(
        serialize = "fri",
        serialize = "friday",
        serialize = "fri.",
        serialize = "f",
        to_string = "Friday"
    )]
    Friday,
}

impl WorkingDay {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid working day: '{}'. Valid days: {}",
                s.trim(),
                valid_csv::<WorkingDay>()
            ))
        })
    }

    /// Zero-based column of this day within the week (Monday = 0).
    pub fn offset(self) -> u32 {
        match self {
            WorkingDay::Monday => 0,
            WorkingDay::Tuesday => 1,
            WorkingDay::Wednesday => 2,
            WorkingDay::Thursday => 3,
            WorkingDay::Friday => 4,
        }
    }

    pub fn abbrev(self) -> &'static str {
        match self {
            WorkingDay::Monday => "MON",
            WorkingDay::Tuesday => "TUE",
            WorkingDay::Wednesday => "WED",
            WorkingDay::Thursday => "THU",
            WorkingDay::Friday => "FRI",
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            WorkingDay::Monday => Weekday::Mon,
            WorkingDay::Tuesday => Weekday::Tue,
            WorkingDay::Wednesday => Weekday::Wed,
            WorkingDay::Thursday => Weekday::Thu,
            WorkingDay::Friday => Weekday::Fri,
        }
    }

    /// The working day a calendar date falls on; `None` on weekends.
    pub fn of_date(date: NaiveDate) -> Option<Self> {
        use crate::extensions::chrono::WeekdayExt;
        date.weekday().to_working_day()
    }
}

/// Render state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIterDerive)]
#[strum(serialize_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
    Preview,
    Selected,
    Conflict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Meridiem {
    #[strum(to_string = "AM")]
    Am,
    #[strum(to_string = "PM")]
    Pm,
}

impl Meridiem {
    /// Single lowercase letter used by the compact time labels.
    pub fn short(self) -> &'static str {
        match self {
            Meridiem::Am => "a",
            Meridiem::Pm => "p",
        }
    }
}

/// Length of a job in half-hour steps. Always in `(0, 8]` hours once built
/// through `try_from_hours`/`try_from_str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobLength {
    slots: u32,
}

impl JobLength {
    pub const MAX_HOURS: f32 = 8.0;

    pub const fn from_slots(slots: u32) -> Self {
        Self { slots }
    }

    pub fn try_from_hours(hours: f32) -> Result<Self> {
        let doubled = hours * 2.0;
        if !hours.is_finite() || hours <= 0.0 || hours > Self::MAX_HOURS {
            return Err(Error::Parse(format!(
                "Invalid duration: {hours} hour(s). Durations must be greater than 0 and at most {} hours.",
                Self::MAX_HOURS
            )));
        }
        if (doubled - doubled.round()).abs() > f32::EPSILON {
            return Err(Error::Parse(format!(
                "Invalid duration: {hours} hour(s). Durations must be in 0.5 hour steps."
            )));
        }
        Ok(Self {
            slots: doubled.round() as u32,
        })
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        let raw = s.trim().trim_end_matches(['h', 'H']);
        let hours: f32 = raw.parse().map_err(|_| {
            Error::Parse(format!(
                "Invalid duration: '{}'. Expected hours such as 1, 1.5 or 2h.",
                s.trim()
            ))
        })?;
        Self::try_from_hours(hours)
    }

    /// Number of 30-minute slots covered.
    pub fn slots(self) -> u32 {
        self.slots
    }

    /// Slot count as a signed offset for index arithmetic.
    pub fn span(self) -> SlotIndex {
        self.slots as SlotIndex
    }

    pub fn hours(self) -> f32 {
        self.slots as f32 / 2.0
    }

    /// `"1 hour"`, `"2.5 hours"`.
    pub fn label(self) -> String {
        if self.slots == 2 {
            "1 hour".to_string()
        } else {
            format!("{self} hours")
        }
    }
}

impl Default for JobLength {
    fn default() -> Self {
        Self::from_slots(4)
    }
}

impl fmt::Display for JobLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.slots % 2 == 0 {
            write!(f, "{}", self.slots / 2)
        } else {
            write!(f, "{}.5", self.slots / 2)
        }
    }
}

impl Serialize for JobLength {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_f32(self.hours())
    }
}

impl<'de> Deserialize<'de> for JobLength {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<JobLength, <D as Deserializer<'de>>::Error> {
        let hours = f32::deserialize(deserializer)?;
        JobLength::try_from_hours(hours).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Date(pub NaiveDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DateFormat {
    #[strum(serialize = "%Y-%m-%d", to_string = "%Y-%m-%d")]
    YmdDash,
    #[strum(serialize = "%m-%d-%Y", to_string = "%m-%d-%Y")]
    MdYDash,
    #[strum(serialize = "%m-%d", to_string = "%m-%d")]
    MdDash,
}

impl DateFormat {
    fn expand(self, input: &str, current_year: i32) -> (String, &'static str) {
        match self {
            DateFormat::YmdDash => (input.to_owned(), "%Y-%m-%d"),
            DateFormat::MdYDash => (input.to_owned(), "%m-%d-%Y"),
            DateFormat::MdDash => (format!("{current_year}-{input}"), "%Y-%m-%d"),
        }
    }
}

impl Date {
    pub fn usage() -> String {
        let today = Local::now().date_naive();
        let formats = DateFormat::iter()
            .map(|df| today.format(df.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported formats: {} (slashes also accepted)", formats)
    }

    /// Parse a user-supplied date; month-day forms take `current_year`.
    pub fn try_from_str(input: &str, current_year: i32) -> Result<Self> {
        let input = input.to_dash_separators();

        for f in DateFormat::iter() {
            let (text, pattern) = f.expand(&input, current_year);
            if let Ok(date) = NaiveDate::parse_from_str(&text, pattern) {
                return Ok(Date(date));
            }
        }

        Err(Error::Parse(format!(
            "Invalid date format: '{}'. {}",
            input,
            Self::usage()
        )))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Clock time typed by the user (`9`, `9:30`, `9:30AM`, `2PM`, `14:30`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime(pub NaiveTime);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
pub enum TimeFormat {
    #[strum(serialize = "%-I:%M%p")]
    HmMeridian,
    #[strum(serialize = "%H:%M")]
    Hm24,
}

impl ClockTime {
    pub fn try_from_str(raw: &str) -> Result<Self> {
        let mut token = raw.trim().to_ascii_uppercase().replace(' ', "");
        if !token.contains(':') {
            match token.find("AM").or_else(|| token.find("PM")) {
                Some(idx) => token.insert_str(idx, ":00"),
                None => token.push_str(":00"),
            }
        }

        for f in TimeFormat::iter() {
            if let Ok(t) = NaiveTime::parse_from_str(&token, f.as_ref()) {
                return Ok(ClockTime(t));
            }
        }
        Err(Error::Parse(format!(
            "Invalid time: '{}'. Examples: 9, 9:30, 9:30AM, 2PM, 14:30.",
            raw.trim()
        )))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0.hour(), self.0.minute())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(matches!(fmt, BoolFormat::TextTrue))),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}
