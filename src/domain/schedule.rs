//! Recurring save-settings schedule.
//!
//! Two surface forms are accepted:
//!
//! ```text
//! hh:mm [hh:mm]...
//! Every <n> {mins | minutes | hours} [hh:mm [hh:mm]...]
//! ```
//!
//! The first token picks the grammar. Any token that does not fit rejects
//! the whole expression; a partially-read schedule is never returned.

use crate::domain::error::ScheduleFormatError;
use crate::domain::time_of_day::{format_time_of_day, parse_time_of_day};
use chrono::{NaiveTime, TimeDelta};
use std::fmt;

const EVERY_MARKER: &str = "every";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalUnit {
    Minutes,
    Hours,
}

impl IntervalUnit {
    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "mins" | "minutes" => Some(Self::Minutes),
            "hours" => Some(Self::Hours),
            _ => None,
        }
    }

    fn minutes(self) -> i64 {
        match self {
            Self::Minutes => 1,
            Self::Hours => 60,
        }
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes => write!(f, "mins"),
            Self::Hours => write!(f, "hours"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleDescriptor {
    /// Explicit daily instants, in the order written.
    Times(Vec<NaiveTime>),
    /// A period counted from each anchor (from midnight when there are none).
    Every {
        multiplier: u32,
        unit: IntervalUnit,
        anchors: Vec<NaiveTime>,
    },
}

impl ScheduleDescriptor {
    pub fn period(&self) -> Option<TimeDelta> {
        match self {
            Self::Times(_) => None,
            Self::Every {
                multiplier, unit, ..
            } => Some(TimeDelta::minutes(i64::from(*multiplier) * unit.minutes())),
        }
    }

    /// Every instant of one day on which the schedule fires, sorted and
    /// without duplicates.
    pub fn daily_times(&self) -> Vec<NaiveTime> {
        let mut times = match self {
            Self::Times(times) => times.clone(),
            Self::Every { anchors, .. } => {
                let period = self.period().unwrap_or(TimeDelta::zero());
                let midnight = [NaiveTime::default()];
                let starts: &[NaiveTime] = if anchors.is_empty() {
                    &midnight[..]
                } else {
                    anchors.as_slice()
                };
                let mut times = Vec::new();
                for start in starts {
                    let mut t = *start;
                    loop {
                        times.push(t);
                        let (next, wrapped) = t.overflowing_add_signed(period);
                        if wrapped != 0 || next <= t {
                            break;
                        }
                        t = next;
                    }
                }
                times
            }
        };
        times.sort();
        times.dedup();
        times
    }
}

impl fmt::Display for ScheduleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |times: &[NaiveTime]| {
            times
                .iter()
                .map(|t| format_time_of_day(*t))
                .collect::<Vec<_>>()
                .join(" ")
        };
        match self {
            Self::Times(times) => write!(f, "{}", join(times.as_slice())),
            Self::Every {
                multiplier,
                unit,
                anchors,
            } => {
                write!(f, "Every {multiplier} {unit}")?;
                if !anchors.is_empty() {
                    write!(f, " {}", join(anchors.as_slice()))?;
                }
                Ok(())
            }
        }
    }
}

pub fn parse_schedule(input: &str) -> Result<ScheduleDescriptor, ScheduleFormatError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.split_first() {
        None => Err(ScheduleFormatError::new(input, "no times specified")),
        Some((first, rest)) if first.eq_ignore_ascii_case(EVERY_MARKER) => {
            parse_periodic(input, rest)
        }
        Some(_) => parse_times(input, &tokens).map(ScheduleDescriptor::Times),
    }
}

fn parse_periodic(input: &str, tokens: &[&str]) -> Result<ScheduleDescriptor, ScheduleFormatError> {
    let Some((count, tokens)) = tokens.split_first() else {
        return Err(ScheduleFormatError::new(
            input,
            "'Every' must be followed by a number",
        ));
    };
    if !count.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScheduleFormatError::new(
            input,
            format!("interval '{count}' must be a positive whole number"),
        ));
    }
    let multiplier = match count.parse::<u32>() {
        Ok(0) => {
            return Err(ScheduleFormatError::new(
                input,
                format!("interval '{count}' must be a positive number"),
            ));
        }
        Ok(n) => n,
        Err(_) => {
            return Err(ScheduleFormatError::new(
                input,
                format!("interval '{count}' is too large"),
            ));
        }
    };

    let Some((unit, anchors)) = tokens.split_first() else {
        return Err(ScheduleFormatError::new(
            input,
            "interval unit missing: expected 'mins' or 'hours'",
        ));
    };
    let unit = IntervalUnit::from_token(unit).ok_or_else(|| {
        ScheduleFormatError::new(
            input,
            format!("unknown interval unit '{unit}': expected 'mins' or 'hours'"),
        )
    })?;

    Ok(ScheduleDescriptor::Every {
        multiplier,
        unit,
        anchors: parse_times(input, anchors)?,
    })
}

fn parse_times(input: &str, tokens: &[&str]) -> Result<Vec<NaiveTime>, ScheduleFormatError> {
    tokens
        .iter()
        .map(|token| parse_time_of_day(token).map_err(|e| ScheduleFormatError::from((input, e))))
        .collect()
}
