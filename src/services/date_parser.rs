use chrono::{Days, Local, NaiveDate};

use crate::errors::CoachError;

/// Recognized date texts, tried in order. Keywords come after every numeric format.
const STRATEGIES: [DateStrategy; 6] = [
    DateStrategy::Format("%Y-%m-%d"),
    DateStrategy::Format("%Y/%m/%d"),
    DateStrategy::Format("%d-%m-%Y"),
    DateStrategy::Format("%m/%d/%Y"),
    DateStrategy::Today,
    DateStrategy::Tomorrow,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateStrategy {
    Format(&'static str),
    Today,
    Tomorrow,
}

impl DateStrategy {
    fn apply(&self, text: &str, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateStrategy::Format(format) => NaiveDate::parse_from_str(text, format).ok(),
            DateStrategy::Today => text.eq_ignore_ascii_case("today").then_some(today),
            DateStrategy::Tomorrow => {
                if text.eq_ignore_ascii_case("tomorrow") {
                    today.checked_add_days(Days::new(1))
                } else {
                    None
                }
            }
        }
    }
}

/// Parses calendar dates written in any of the accepted formats
#[derive(Debug, Clone, Copy)]
pub struct DateParser {
    today: NaiveDate,
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DateParser {
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Parser with a fixed reference day for the relative keywords
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn parse(&self, text: &str) -> Result<NaiveDate, CoachError> {
        let trimmed = text.trim();
        STRATEGIES
            .iter()
            .find_map(|strategy| strategy.apply(trimmed, self.today))
            .ok_or_else(|| CoachError::DateParse(text.to_string()))
    }
}
