use std::fmt;

use serde::{Deserialize, Serialize};

const DAY_BITS: u32 = 9;
const YEAR_SHIFT: u32 = DAY_BITS;
const DAY_MASK: u32 = (1 << DAY_BITS) - 1;

pub const DAYS_PER_YEAR: u32 = 360;
pub const MONTHS_PER_YEAR: u32 = 12;
pub const DAYS_PER_MONTH: u32 = 30;
/// Largest year the packed layout can hold.
pub const MAX_YEAR: u32 = (1 << (32 - YEAR_SHIFT)) - 1;

/// Compact in-game calendar date encoding year and day-of-year in a `u32`.
///
/// Bit layout: `[year:23][day_of_year:9]`. Days run 1–360 in twelve 30-day
/// months. Natural `u32` ordering equals chronological ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "DateRepr", try_from = "DateRepr")]
pub struct SimDate(u32);

#[derive(Serialize, Deserialize)]
struct DateRepr {
    year: u32,
    day: u32,
}

impl From<SimDate> for DateRepr {
    fn from(date: SimDate) -> Self {
        DateRepr {
            year: date.year(),
            day: date.day(),
        }
    }
}

impl TryFrom<DateRepr> for SimDate {
    type Error = String;

    fn try_from(repr: DateRepr) -> Result<Self, Self::Error> {
        SimDate::checked(repr.year, repr.day)
            .ok_or_else(|| format!("invalid date: year {} day {}", repr.year, repr.day))
    }
}

impl SimDate {
    /// Create a date from year and day-of-year (1–360).
    ///
    /// # Panics
    ///
    /// Panics if `day` is outside 1–360 or `year` exceeds [`MAX_YEAR`]. Use
    /// [`SimDate::checked`] for untrusted input.
    pub fn new(year: u32, day: u32) -> Self {
        assert!(
            (1..=DAYS_PER_YEAR).contains(&day),
            "day out of range: {day}"
        );
        assert!(year <= MAX_YEAR, "year out of range: {year}");
        Self((year << YEAR_SHIFT) | day)
    }

    /// Like [`SimDate::new`] but returns `None` for an out-of-range day or year.
    pub fn checked(year: u32, day: u32) -> Option<Self> {
        if !(1..=DAYS_PER_YEAR).contains(&day) || year > MAX_YEAR {
            return None;
        }
        Some(Self::new(year, day))
    }

    /// First day of the given month (1–12).
    ///
    /// # Panics
    ///
    /// Panics if `month` is outside 1–12 or `year` exceeds [`MAX_YEAR`].
    pub fn from_year_month(year: u32, month: u32) -> Self {
        assert!(
            (1..=MONTHS_PER_YEAR).contains(&month),
            "month out of range: {month}"
        );
        Self::new(year, (month - 1) * DAYS_PER_MONTH + 1)
    }

    /// Like [`SimDate::from_year_month`] but returns `None` for an
    /// out-of-range month or year.
    pub fn checked_from_year_month(year: u32, month: u32) -> Option<Self> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return None;
        }
        Self::checked(year, (month - 1) * DAYS_PER_MONTH + 1)
    }

    pub fn year(self) -> u32 {
        self.0 >> YEAR_SHIFT
    }

    pub fn day(self) -> u32 {
        self.0 & DAY_MASK
    }

    /// Month of year (1–12), derived from day.
    pub fn month(self) -> u32 {
        (self.day() - 1) / DAYS_PER_MONTH + 1
    }

    /// Day within the month (1–30).
    pub fn day_of_month(self) -> u32 {
        (self.day() - 1) % DAYS_PER_MONTH + 1
    }

    pub fn season(self) -> Season {
        Season::from_month(self.month())
    }

    /// The following calendar day, rolling over into the next year after day 360.
    /// The last day of [`MAX_YEAR`] is the end of the calendar and stays put.
    pub fn next_day(self) -> Self {
        if self.day() == DAYS_PER_YEAR {
            if self.year() == MAX_YEAR {
                return self;
            }
            Self::new(self.year() + 1, 1)
        } else {
            Self::new(self.year(), self.day() + 1)
        }
    }
}

impl Default for SimDate {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for SimDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y{}.M{}.D{}", self.year(), self.month(), self.day_of_month())
    }
}

/// Calendar season used to scale revenue by business type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

string_enum!(Season {
    Spring => "spring",
    Summer => "summer",
    Fall => "fall",
    Winter => "winter",
});

impl Season {
    /// Season for a one-based month: March–May spring, June–August summer,
    /// September–November fall, everything else winter.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_round_trip() {
        let date = SimDate::new(125, 180);
        assert_eq!(date.year(), 125);
        assert_eq!(date.day(), 180);
    }

    #[test]
    fn chronological_ordering() {
        let a = SimDate::new(100, 1);
        let b = SimDate::new(100, 2);
        let c = SimDate::new(101, 1);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn month_derivation() {
        assert_eq!(SimDate::new(1, 1).month(), 1);
        assert_eq!(SimDate::new(1, 30).day_of_month(), 30);
        assert_eq!(SimDate::new(1, 31).month(), 2);
        assert_eq!(SimDate::new(1, 31).day_of_month(), 1);
        assert_eq!(SimDate::new(1, 360).month(), 12);
        assert_eq!(SimDate::from_year_month(3, 7).month(), 7);
    }

    #[test]
    fn next_day_rolls_over_year() {
        assert_eq!(SimDate::new(4, 17).next_day(), SimDate::new(4, 18));
        assert_eq!(SimDate::new(4, 360).next_day(), SimDate::new(5, 1));
    }

    #[test]
    fn checked_month_path_rejects_out_of_range() {
        assert!(SimDate::checked_from_year_month(1, 0).is_none());
        assert!(SimDate::checked_from_year_month(1, 13).is_none());
        assert!(SimDate::checked_from_year_month(MAX_YEAR + 1, 1).is_none());
        assert_eq!(
            SimDate::checked_from_year_month(2, 12),
            Some(SimDate::new(2, 331))
        );
    }

    #[test]
    #[should_panic(expected = "month out of range")]
    fn month_zero_panics() {
        SimDate::from_year_month(1, 0);
    }

    #[test]
    fn next_day_stops_at_end_of_calendar() {
        let last = SimDate::new(MAX_YEAR, DAYS_PER_YEAR);
        assert_eq!(last.next_day(), last);
        assert_eq!(SimDate::new(MAX_YEAR - 1, 360).next_day(), SimDate::new(MAX_YEAR, 1));
    }

    #[test]
    fn checked_rejects_bad_days() {
        assert!(SimDate::checked(1, 0).is_none());
        assert!(SimDate::checked(1, 361).is_none());
        assert!(SimDate::checked(1, 360).is_some());
    }

    #[test]
    fn season_boundaries() {
        let seasons: Vec<Season> = (1..=12).map(Season::from_month).collect();
        assert_eq!(
            seasons,
            vec![
                Season::Winter,
                Season::Winter,
                Season::Spring,
                Season::Spring,
                Season::Spring,
                Season::Summer,
                Season::Summer,
                Season::Summer,
                Season::Fall,
                Season::Fall,
                Season::Fall,
                Season::Winter,
            ]
        );
    }

    #[test]
    fn date_season_follows_month() {
        assert_eq!(SimDate::from_year_month(2, 4).season(), Season::Spring);
        assert_eq!(SimDate::from_year_month(2, 12).season(), Season::Winter);
    }

    #[test]
    fn serde_shape() {
        let date = SimDate::new(3, 45);
        let value = serde_json::to_value(date).unwrap();
        assert_eq!(value["year"], 3);
        assert_eq!(value["day"], 45);
    }

    #[test]
    fn serde_rejects_out_of_range_day() {
        let parsed: Result<SimDate, _> = serde_json::from_str(r#"{"year":1,"day":400}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(SimDate::new(2, 31).to_string(), "Y2.M2.D1");
    }
}
