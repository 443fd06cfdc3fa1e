//! Request parsing and validation.
//!
//! This is the only place where task invariants are checked. Everything
//! downstream trusts the records built here. Ids are assigned from input
//! position (1-based) so dependency lists can refer to sibling tasks.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::sort::SortStrategy;
use crate::error::GatewayError;
use crate::task::{Task, TaskId};

pub const MIN_IMPORTANCE: i64 = 1;
pub const MAX_IMPORTANCE: i64 = 10;
pub const MIN_ESTIMATED_HOURS: f64 = 0.1;

const REQUIRED_FIELDS: [&str; 4] = ["title", "due_date", "estimated_hours", "importance"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Body of an Analyze call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub tasks: Vec<Task>,
    pub sort_by: Option<SortStrategy>,
    pub include_breakdown: Option<bool>,
}

impl AnalyzeRequest {
    pub fn from_json(body: &str) -> Result<Self, GatewayError> {
        let body = parse_body(body)?;
        let tasks = parse_tasks(&body)?;
        let sort_by = match body.get("sort_by") {
            Some(Value::String(s)) => Some(SortStrategy::parse_lenient(s)),
            _ => None,
        };
        let include_breakdown = body.get("include_breakdown").and_then(Value::as_bool);
        Ok(Self {
            tasks,
            sort_by,
            include_breakdown,
        })
    }
}

/// Body of a Suggest call.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestRequest {
    pub tasks: Vec<Task>,
    pub limit: Option<usize>,
}

impl SuggestRequest {
    pub fn from_json(body: &str) -> Result<Self, GatewayError> {
        let body = parse_body(body)?;
        let tasks = parse_tasks(&body)?;
        let limit = parse_limit(body.get("limit"))?;
        Ok(Self { tasks, limit })
    }
}

fn parse_body(body: &str) -> Result<Map<String, Value>, GatewayError> {
    serde_json::from_str(body).map_err(GatewayError::MalformedBody)
}

fn parse_limit(value: Option<&Value>) -> Result<Option<usize>, GatewayError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => match v.as_u64() {
            Some(n) if n > 0 => usize::try_from(n)
                .map(Some)
                .map_err(|_| GatewayError::InvalidLimit),
            _ => Err(GatewayError::InvalidLimit),
        },
    }
}

/// Validate the `tasks` array of a request body into records.
pub fn parse_tasks(body: &Map<String, Value>) -> Result<Vec<Task>, GatewayError> {
    let entries = match body.get("tasks") {
        None | Some(Value::Null) => return Err(GatewayError::EmptyTaskList),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(GatewayError::TasksNotList),
    };
    if entries.is_empty() {
        return Err(GatewayError::EmptyTaskList);
    }

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| parse_task(idx + 1, entry))
        .collect()
}

/// Validate one task entry. `position` is 1-based and doubles as the id.
pub fn parse_task(position: usize, entry: &Value) -> Result<Task, GatewayError> {
    let fields = entry
        .as_object()
        .ok_or_else(|| GatewayError::invalid_data(position, "expected a task object"))?;

    if !REQUIRED_FIELDS.iter().all(|k| fields.contains_key(*k)) {
        return Err(GatewayError::MissingFields { position });
    }

    let due_date = match &fields["due_date"] {
        Value::String(s) => parse_due_date(position, s)?,
        _ => return Err(GatewayError::invalid_data(position, "due_date must be a string")),
    };

    let importance = parse_integer(&fields["importance"])
        .ok_or_else(|| GatewayError::invalid_data(position, "importance must be an integer"))?;
    if !(MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&importance) {
        return Err(GatewayError::ImportanceOutOfRange { position });
    }

    let estimated_hours = parse_number(&fields["estimated_hours"])
        .ok_or_else(|| GatewayError::invalid_data(position, "estimated_hours must be a number"))?;
    if estimated_hours < MIN_ESTIMATED_HOURS {
        return Err(GatewayError::HoursTooLow { position });
    }

    let title = match &fields["title"] {
        Value::String(s) => s.clone(),
        _ => return Err(GatewayError::invalid_data(position, "title must be a string")),
    };

    let dependencies = parse_dependencies(fields.get("dependencies"))
        .ok_or_else(|| GatewayError::invalid_data(position, "dependencies must be a list of task ids"))?;

    // Range was checked above, the cast cannot truncate.
    let mut task = Task::new(
        position as TaskId,
        title,
        due_date,
        estimated_hours,
        importance as u8,
    );
    task.dependencies = dependencies;
    Ok(task)
}

/// `YYYY-MM-DD` into a date.
///
/// Text that is not date-shaped is a format error; a well-shaped but
/// impossible date (month 13, February 30th) is invalid data.
fn parse_due_date(position: usize, raw: &str) -> Result<NaiveDate, GatewayError> {
    if !is_date_shaped(raw) {
        return Err(GatewayError::InvalidDueDate { position });
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        let month = raw.split('-').nth(1).and_then(|m| m.parse::<u32>().ok());
        let message = match month {
            Some(1..=12) => "day is out of range for month",
            _ => "month must be in 1..12",
        };
        GatewayError::invalid_data(position, message)
    })
}

/// Four-digit year, one- or two-digit month and day.
fn is_date_shaped(raw: &str) -> bool {
    let digits = |part: &str, lengths: std::ops::RangeInclusive<usize>| {
        lengths.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    match raw.split('-').collect::<Vec<_>>().as_slice() {
        [year, month, day] => digits(year, 4..=4) && digits(month, 1..=2) && digits(day, 1..=2),
        _ => false,
    }
}

/// JSON integer, integral float, or integral string.
fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// JSON number or numeric string. Non-finite values are rejected.
fn parse_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Dependency references. Only the list shape is checked: entries that
/// cannot name a task id (negative, fractional, non-numeric) are dropped, the
/// same way a reference to a task outside the collection is inert.
fn parse_dependencies(value: Option<&Value>) -> Option<Vec<TaskId>> {
    match value {
        None | Some(Value::Null) => Some(Vec::new()),
        Some(Value::Array(items)) => Some(items.iter().filter_map(dependency_id).collect()),
        Some(_) => None,
    }
}

fn dependency_id(item: &Value) -> Option<TaskId> {
    let Value::Number(n) = item else {
        return None;
    };
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as TaskId)
    })
}
