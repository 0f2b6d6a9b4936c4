use chrono::{Datelike, NaiveDate};

/// Scheme rule: applicants must be at least 21 on the day they apply.
pub const MINIMUM_AGE_YEARS: i32 = 21;

/// Completed years between `date_of_birth` and `as_of`, by calendar
/// anniversary rather than day counting. A leap-day birthdate completes its
/// year on March 1 in non-leap years.
pub fn age_in_years(date_of_birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - date_of_birth.year();
    if (as_of.month(), as_of.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

pub fn is_eligible(date_of_birth: NaiveDate, as_of: NaiveDate) -> bool {
    age_in_years(date_of_birth, as_of) >= MINIMUM_AGE_YEARS
}
