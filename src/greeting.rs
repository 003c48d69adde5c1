//! Birthday greeting arithmetic.
//!
//! All "today" comparisons use the UTC calendar date; time of day and local
//! timezone never enter the calculation. Feb 29 birthdays are observed on
//! Mar 1 in non-leap years.

use chrono::{Datelike, NaiveDate, Utc};

use crate::store::User;

/// Builds the greeting message for a user, evaluated against today's UTC date.
pub fn birthday_message(user: &User) -> String {
    birthday_message_on(user, Utc::now().date_naive())
}

/// Builds the greeting message for a user as of a given calendar day.
///
/// If `today` matches the birthday's month and day the greeting wishes a happy
/// birthday; otherwise it counts the days to the next occurrence, which is
/// always at least 1.
fn birthday_message_on(user: &User, today: NaiveDate) -> String {
    let dob = user.date_of_birth;
    if observed_month_day(dob, today.year()) == (today.month(), today.day()) {
        return format!("Hello, {}! Happy birthday!", user.username);
    }

    let next = next_birthday(dob, today);
    let days = (next - today).num_days();
    format!("Hello, {}! Your birthday is in {} day(s)", user.username, days)
}

/// The next occurrence of the birthday strictly after `today`.
fn next_birthday(dob: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = birthday_in_year(dob, today.year());
    if this_year > today {
        this_year
    } else {
        birthday_in_year(dob, today.year() + 1)
    }
}

/// The calendar day the birthday is observed on in a given year.
fn birthday_in_year(dob: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, dob.month(), dob.day()).unwrap_or_else(|| {
        // Feb 29 in a non-leap year, observed on Mar 1
        NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
    })
}

/// The (month, day) the birthday is observed on in a given year.
fn observed_month_day(dob: NaiveDate, year: i32) -> (u32, u32) {
    let observed = birthday_in_year(dob, year);
    (observed.month(), observed.day())
}
