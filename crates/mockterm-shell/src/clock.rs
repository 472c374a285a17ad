//! Wall-clock abstraction.
//!
//! Commands never read the system clock directly; they go through the
//! `Clock` trait so tests can pin a timestamp.

use mockterm_types::error::Result;

/// A wall-clock timestamp with zone information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Offset east of UTC, in minutes.
    pub utc_offset_minutes: i32,
    /// Zone label, e.g. "UTC".
    pub zone: String,
}

impl WallTime {
    /// Long human format: `h:mm:ss AM/PM, dd/mm/yyyy, {zone} (GMT±hh:mm)`.
    pub fn format_long(&self) -> String {
        let mut h = if self.hour > 12 {
            self.hour - 12
        } else {
            self.hour
        };
        if h == 0 {
            h = 12;
        }
        let meridiem = if self.hour > 11 { "PM" } else { "AM" };
        let off = self.utc_offset_minutes;
        let gmt = match off.cmp(&0) {
            std::cmp::Ordering::Greater => format!("+{:02}:{:02}", off / 60, off % 60),
            std::cmp::Ordering::Less => format!("-{:02}:{:02}", -off / 60, -off % 60),
            std::cmp::Ordering::Equal => "00:00".to_string(),
        };
        format!(
            "{h}:{:02}:{:02} {meridiem}, {:02}/{:02}/{}, {} (GMT{gmt})",
            self.minute, self.second, self.day, self.month, self.year, self.zone,
        )
    }
}

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> Result<WallTime>;
}

/// System clock with a plain UTC breakdown (no zone database).
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<WallTime> {
        use std::time::SystemTime as StdTime;
        let dur = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default();
        let secs = dur.as_secs();

        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let hour = (time_of_day / 3600) as u8;
        let minute = ((time_of_day % 3600) / 60) as u8;
        let second = (time_of_day % 60) as u8;

        let (year, month, day) = days_to_ymd(days);

        Ok(WallTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_minutes: 0,
            zone: "UTC".to_string(),
        })
    }
}

fn is_leap(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days since 1970-01-01 to (year, month, day).
fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let leap = is_leap(year);
    let month_days: [u64; 12] = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 1u8;
    for len in month_days {
        if days < len {
            break;
        }
        days -= len;
        month += 1;
    }
    (year, month, (days + 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_start() {
        assert_eq!(days_to_ymd(0), (1970, 1, 1));
    }

    #[test]
    fn leap_day() {
        // 2024-02-29 is day 19782 since the epoch.
        assert_eq!(days_to_ymd(19782), (2024, 2, 29));
    }

    #[test]
    fn year_boundary() {
        assert_eq!(days_to_ymd(365), (1971, 1, 1));
    }

    #[test]
    fn format_morning() {
        let t = WallTime {
            year: 2024,
            month: 3,
            day: 5,
            hour: 9,
            minute: 7,
            second: 3,
            utc_offset_minutes: 0,
            zone: "UTC".to_string(),
        };
        assert_eq!(t.format_long(), "9:07:03 AM, 05/03/2024, UTC (GMT00:00)");
    }

    #[test]
    fn format_afternoon_rolls_to_twelve_hour() {
        let t = WallTime {
            year: 2024,
            month: 12,
            day: 31,
            hour: 13,
            minute: 30,
            second: 0,
            utc_offset_minutes: 0,
            zone: "UTC".to_string(),
        };
        assert!(t.format_long().starts_with("1:30:00 PM"));
    }

    #[test]
    fn format_midnight_is_twelve_am() {
        let t = WallTime {
            year: 2024,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            utc_offset_minutes: 0,
            zone: "UTC".to_string(),
        };
        assert!(t.format_long().starts_with("12:00:00 AM"));
    }

    #[test]
    fn format_positive_offset() {
        let t = WallTime {
            year: 2024,
            month: 6,
            day: 1,
            hour: 12,
            minute: 0,
            second: 0,
            utc_offset_minutes: 330,
            zone: "IST".to_string(),
        };
        assert!(t.format_long().ends_with("IST (GMT+05:30)"));
    }

    #[test]
    fn format_negative_offset() {
        let t = WallTime {
            year: 2024,
            month: 6,
            day: 1,
            hour: 12,
            minute: 0,
            second: 0,
            utc_offset_minutes: -480,
            zone: "PST".to_string(),
        };
        assert!(t.format_long().ends_with("PST (GMT-08:00)"));
    }

    #[test]
    fn system_clock_produces_plausible_now() {
        let now = SystemClock.now().unwrap();
        assert!(now.year >= 2024);
        assert!((1..=12).contains(&now.month));
        assert!((1..=31).contains(&now.day));
        assert_eq!(now.zone, "UTC");
    }
}
