//! Weekday and time-of-day value types.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// One of the six teaching days. There is no Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Zero-based position in the week (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical uppercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ValidationError;

    /// Case-insensitive. Accepts English names and the Spanish names
    /// found in university course listings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MONDAY" | "LUNES" => Ok(Weekday::Monday),
            "TUESDAY" | "MARTES" => Ok(Weekday::Tuesday),
            "WEDNESDAY" | "MIERCOLES" | "MIÉRCOLES" => Ok(Weekday::Wednesday),
            "THURSDAY" | "JUEVES" => Ok(Weekday::Thursday),
            "FRIDAY" | "VIERNES" => Ok(Weekday::Friday),
            "SATURDAY" | "SABADO" | "SÁBADO" => Ok(Weekday::Saturday),
            _ => Err(ValidationError::Weekday(s.to_string())),
        }
    }
}

impl TryFrom<String> for Weekday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Weekday> for String {
    fn from(day: Weekday) -> Self {
        day.as_str().to_string()
    }
}

/// A wall-clock time with minute resolution.
///
/// Ordering is chronological within a day. The default is midnight.
///
/// # Examples
///
/// ```
/// use u_timetable::model::TimeOfDay;
///
/// let t: TimeOfDay = "09:30".parse().unwrap();
/// assert_eq!(t, TimeOfDay::new(9, 30).unwrap());
/// assert_eq!(t.to_string(), "09:30");
/// assert!("25:00".parse::<TimeOfDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time, checking `hour < 24` and `minute < 60`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour >= 24 {
            return Err(ValidationError::HourOutOfRange(hour));
        }
        if minute >= 60 {
            return Err(ValidationError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Whole-hour shorthand.
    pub fn at_hour(hour: u32) -> Result<Self, ValidationError> {
        Self::new(hour, 0)
    }

    /// Time from minutes since midnight, `None` past 23:59.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        Self::new(minutes / 60, minutes % 60).ok()
    }

    pub fn hour(self) -> u32 {
        self.hour as u32
    }

    pub fn minute(self) -> u32 {
        self.minute as u32
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    /// Reads the first two characters as the hour and the last two as the
    /// minute, so `"09:30"`, `"0930"` and `"09h30"` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let malformed = || ValidationError::MalformedTime(s.to_string());

        if trimmed.len() <= 3 {
            return Err(malformed());
        }
        let hh = trimmed.get(..2).ok_or_else(malformed)?;
        let mm = trimmed.get(trimmed.len() - 2..).ok_or_else(malformed)?;

        let hour = parse_two_digits(hh).ok_or_else(malformed)?;
        let minute = parse_two_digits(mm).ok_or_else(malformed)?;
        Self::new(hour, minute)
    }
}

fn parse_two_digits(s: &str) -> Option<u32> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_case_insensitive() {
        assert_eq!("monday".parse::<Weekday>(), Ok(Weekday::Monday));
        assert_eq!("FrIdAy".parse::<Weekday>(), Ok(Weekday::Friday));
        assert_eq!("  saturday ".parse::<Weekday>(), Ok(Weekday::Saturday));
    }

    #[test]
    fn test_weekday_spanish_names() {
        assert_eq!("lunes".parse::<Weekday>(), Ok(Weekday::Monday));
        assert_eq!("miercoles".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert_eq!("miércoles".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert_eq!("Sábado".parse::<Weekday>(), Ok(Weekday::Saturday));
    }

    #[test]
    fn test_weekday_rejects_sunday() {
        assert_eq!(
            "sunday".parse::<Weekday>(),
            Err(ValidationError::Weekday("sunday".into()))
        );
        assert!("domingo".parse::<Weekday>().is_err());
        assert!("".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_weekday_index_and_display() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(day.to_string().parse::<Weekday>(), Ok(*day));
        }
        assert_eq!(Weekday::Thursday.to_string(), "THURSDAY");
    }

    #[test]
    fn test_time_new_ranges() {
        assert!(TimeOfDay::new(0, 0).is_ok());
        assert!(TimeOfDay::new(23, 59).is_ok());
        assert_eq!(TimeOfDay::new(24, 0), Err(ValidationError::HourOutOfRange(24)));
        assert_eq!(TimeOfDay::new(12, 60), Err(ValidationError::MinuteOutOfRange(60)));
    }

    #[test]
    fn test_time_ordering() {
        let a = TimeOfDay::new(9, 59).unwrap();
        let b = TimeOfDay::new(10, 0).unwrap();
        assert!(a < b);
        assert_eq!(b.minutes(), 600);
        assert_eq!(TimeOfDay::from_minutes(600), Some(b));
        assert_eq!(TimeOfDay::from_minutes(24 * 60), None);
    }

    #[test]
    fn test_time_parse_formats() {
        let expected = TimeOfDay::new(9, 30).unwrap();
        assert_eq!("09:30".parse::<TimeOfDay>(), Ok(expected));
        assert_eq!("0930".parse::<TimeOfDay>(), Ok(expected));
        assert_eq!("09h30".parse::<TimeOfDay>(), Ok(expected));
        assert_eq!(" 09:30 ".parse::<TimeOfDay>(), Ok(expected));
    }

    #[test]
    fn test_time_parse_errors() {
        assert!(matches!(
            "9:30".parse::<TimeOfDay>(),
            Err(ValidationError::MalformedTime(_))
        ));
        assert!(matches!(
            "930".parse::<TimeOfDay>(),
            Err(ValidationError::MalformedTime(_))
        ));
        assert!(matches!(
            "ab:cd".parse::<TimeOfDay>(),
            Err(ValidationError::MalformedTime(_))
        ));
        assert_eq!(
            "24:00".parse::<TimeOfDay>(),
            Err(ValidationError::HourOutOfRange(24))
        );
        assert_eq!(
            "10:75".parse::<TimeOfDay>(),
            Err(ValidationError::MinuteOutOfRange(75))
        );
    }

    #[test]
    fn test_time_parse_non_ascii_does_not_panic() {
        assert!("é9:3é".parse::<TimeOfDay>().is_err());
    }
}
