//! Clock Formatting
//!
//! Localized 12-hour time and long date for the weather card.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::i18n::Locale;

const WEEKDAYS_AR: [&str; 7] = ["الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت", "الأحد"];
const WEEKDAYS_EN: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

const MONTHS_AR: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];
const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub time: String,
    pub date: String,
}

impl ClockFace {
    /// Placeholder shown before the first tick
    pub fn blank() -> Self {
        Self {
            time: "--:--:--".to_string(),
            date: "---".to_string(),
        }
    }
}

pub fn clock_face(now: &NaiveDateTime, locale: Locale) -> ClockFace {
    let (is_pm, hour) = now.hour12();
    let marker = match (locale, is_pm) {
        (Locale::Ar, false) => "ص",
        (Locale::Ar, true) => "م",
        (Locale::En, false) => "AM",
        (Locale::En, true) => "PM",
    };
    let time = format!("{:02}:{:02}:{:02} {}", hour, now.minute(), now.second(), marker);

    let weekday = now.weekday().num_days_from_monday() as usize;
    let month = now.month0() as usize;
    let date = match locale {
        Locale::Ar => format!("{}، {} {} {}", WEEKDAYS_AR[weekday], now.day(), MONTHS_AR[month], now.year()),
        Locale::En => format!("{}, {} {}, {}", WEEKDAYS_EN[weekday], MONTHS_EN[month], now.day(), now.year()),
    };

    ClockFace { time, date }
}

/// Clock face for the local wall-clock time
pub fn local_clock_face(locale: Locale) -> ClockFace {
    clock_face(&chrono::Local::now().naive_local(), locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_english_face() {
        // 2026-10-16 is a Friday
        let face = clock_face(&at(2026, 10, 16, 14, 5, 9), Locale::En);
        assert_eq!(face.time, "02:05:09 PM");
        assert_eq!(face.date, "Friday, October 16, 2026");
    }

    #[test]
    fn test_arabic_face() {
        let face = clock_face(&at(2026, 10, 16, 0, 30, 0), Locale::Ar);
        assert_eq!(face.time, "12:30:00 ص");
        assert_eq!(face.date, "الجمعة، 16 أكتوبر 2026");
    }
}
