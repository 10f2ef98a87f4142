//! Schedule line parser
//!
//! A schedule line is five cron fields followed by a command:
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ ┌───────────── day of week (0-6, 0=Sunday)
//! │ │ │ │ │
//! * * * * * /usr/bin/command --args
//! ```

use crate::error::ScheduleError;
use crate::field::FieldSpec;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A fully expanded schedule line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    minute: BTreeSet<u32>,
    hour: BTreeSet<u32>,
    day_of_month: BTreeSet<u32>,
    month: BTreeSet<u32>,
    day_of_week: BTreeSet<u32>,
    command: String,
}

impl Schedule {
    pub fn minute(&self) -> &BTreeSet<u32> {
        &self.minute
    }

    pub fn hour(&self) -> &BTreeSet<u32> {
        &self.hour
    }

    pub fn day_of_month(&self) -> &BTreeSet<u32> {
        &self.day_of_month
    }

    pub fn month(&self) -> &BTreeSet<u32> {
        &self.month
    }

    /// Days of week, 0 = Sunday
    pub fn day_of_week(&self) -> &BTreeSet<u32> {
        &self.day_of_week
    }

    /// The command, with runs of whitespace collapsed to single spaces
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Each field spec paired with its expanded values, in expression order
    pub fn fields(&self) -> impl Iterator<Item = (FieldSpec, &BTreeSet<u32>)> {
        FieldSpec::ALL.into_iter().zip([
            &self.minute,
            &self.hour,
            &self.day_of_month,
            &self.month,
            &self.day_of_week,
        ])
    }
}

/// Parse a schedule line into its expanded fields and command
///
/// Fields are expanded in expression order and the first failure is
/// returned as-is; no partial schedule is ever produced.
///
/// # Examples
///
/// ```
/// use a3s_cron_expand::parse_schedule;
///
/// let schedule = parse_schedule("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
/// assert_eq!(schedule.minute().len(), 4);
/// assert_eq!(schedule.command(), "/usr/bin/find");
/// ```
pub fn parse_schedule(input: &str) -> Result<Schedule, ScheduleError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ScheduleError::Empty);
    }
    if tokens.len() < 6 {
        return Err(ScheduleError::TooFewFields {
            found: tokens.len(),
        });
    }

    let command = tokens[5..].join(" ");
    if command.trim().is_empty() {
        return Err(ScheduleError::EmptyCommand);
    }

    let schedule = Schedule {
        minute: FieldSpec::MINUTE.expand(tokens[0])?,
        hour: FieldSpec::HOUR.expand(tokens[1])?,
        day_of_month: FieldSpec::DAY_OF_MONTH.expand(tokens[2])?,
        month: FieldSpec::MONTH.expand(tokens[3])?,
        day_of_week: FieldSpec::DAY_OF_WEEK.expand(tokens[4])?,
        command,
    };

    debug!(command = %schedule.command, "Parsed cron schedule");
    Ok(schedule)
}

impl FromStr for Schedule {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_schedule(s)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::table(self))
    }
}
