use jiff::civil::Date;
use std::fmt::{Display, Formatter};

/// Integer driving all pseudo-randomness of a single day.
///
/// The same calendar date always yields the same seed. Distinct dates yield distinct seeds as
/// long as `month` and `day` stay in their calendar ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(pub i64);

impl Seed {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Seed shifted by `offset`, used to derive the individual draws of a generation run.
    #[inline]
    pub fn offset(&self, offset: i64) -> i64 {
        self.0 + offset
    }
}

/// `year * 10000 + month * 100 + day`.
///
/// The date is not validated: passing a non-existent date is a precondition violation of the caller.
pub fn derive_seed(year: i32, month: u32, day: u32) -> Seed {
    Seed(year as i64 * 10_000 + month as i64 * 100 + day as i64)
}

impl From<Date> for Seed {
    fn from(date: Date) -> Self {
        derive_seed(date.year() as i32, date.month() as u32, date.day() as u32)
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
