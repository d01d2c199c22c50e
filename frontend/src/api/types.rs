use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shift is a named timing template scoped to one organization.
/// `is_active` and `assigned_employee_count` are backend-owned and never
/// written from this module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shift {
    pub id: i64,
    pub organization_id: i64,
    #[serde(default)]
    pub organization_name: Option<String>,
    pub name: String,
    pub code: String,
    pub start_time: String,
    pub end_time: String,
    pub grace_minutes: i32,
    pub half_day_hours: f64,
    pub full_day_hours: f64,
    pub break_minutes: i32,
    #[serde(default)]
    pub week_off_days: Vec<u8>,
    #[serde(default)]
    pub is_night_shift: bool,
    #[serde(default)]
    pub is_flexible: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub assigned_employee_count: i64,
}

/// Normalized create/update body produced by the shift form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftPayload {
    pub organization_id: i64,
    pub name: String,
    pub code: String,
    pub start_time: String,
    pub end_time: String,
    pub grace_minutes: i32,
    pub half_day_hours: f64,
    pub full_day_hours: f64,
    pub break_minutes: i32,
    pub week_off_days: Vec<u8>,
    pub is_night_shift: bool,
    pub is_flexible: bool,
    pub description: Option<String>,
}

/// Dated binding of one employee to one shift. `is_current` is computed by
/// the backend; the UI never re-derives it from the dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftAssignment {
    pub id: i64,
    pub shift_id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub employee_code: Option<String>,
    pub effective_from: NaiveDate,
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
}

/// `effective_to` serializes as an explicit null when open-ended, never as
/// an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignShiftRequest {
    pub employee_id: i64,
    pub shift_id: i64,
    pub effective_from: NaiveDate,
    pub effective_to: Option<NaiveDate>,
}

/// Read-only reference data owned by the employee-management module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub employee_code: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub designation_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Employee {
    pub fn display_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.trim().is_empty() => {
                format!("{} {}", self.first_name, last)
            }
            _ => self.first_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Organization {
    pub organization_id: i64,
    pub organization_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemEnvelope<T> {
    pub data: T,
}

/// Raw list-filter values as they live in the UI (selects and inputs hold
/// strings). `to_query` applies the normalization contract: absent, empty
/// and the "all" sentinel are dropped, id/pagination keys must parse as
/// integers or are dropped, and the active flag becomes a strict boolean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftListOptions {
    pub page: String,
    pub page_size: String,
    pub organization_id: String,
    pub is_active: String,
}

impl ShiftListOptions {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_int_param(&mut query, "page", &self.page);
        push_int_param(&mut query, "pageSize", &self.page_size);
        push_int_param(&mut query, "organization_id", &self.organization_id);
        if let Some(raw) = filter_value(&self.is_active) {
            query.push(("is_active", (raw == "true").to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeListOptions {
    pub organization_id: i64,
    pub is_active: bool,
    pub page_size: u32,
}

impl EmployeeListOptions {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("organization_id", self.organization_id.to_string()),
            ("is_active", self.is_active.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

fn filter_value(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "all" {
        None
    } else {
        Some(trimmed)
    }
}

fn push_int_param(query: &mut Vec<(&'static str, String)>, key: &'static str, raw: &str) {
    if let Some(value) = filter_value(raw) {
        if let Ok(parsed) = value.parse::<i64>() {
            query.push((key, parsed.to_string()));
        }
    }
}

/// One field-keyed message from client-side form validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    #[serde(skip_deserializing)]
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Uniform error currency for every operation in this module. Backend
/// error bodies arrive either as `{ "errors": [ { "message": .. }, .. ] }`
/// or as a single `{ "message": .. }`; both normalize here so calling code
/// never probes response shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidId(String),
    #[error("{}", join_field_errors(.0))]
    Validation(Vec<FieldError>),
    #[error("{}", .0.join(" / "))]
    Backend(Vec<String>),
    #[error("{0}")]
    Message(String),
    #[error("{0}")]
    Transport(String),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|err| err.message.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}

impl ApiError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Individual display lines, used by the inline banner to list every
    /// failing field at once.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => {
                errors.iter().map(|err| err.message.clone()).collect()
            }
            Self::Backend(messages) => messages.clone(),
            Self::InvalidId(msg) | Self::Message(msg) | Self::Transport(msg) => {
                vec![msg.clone()]
            }
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl leptos::IntoView for ApiError {
    fn into_view(self) -> leptos::View {
        self.to_string().into_view()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorEnvelope {
    Fields { errors: Vec<ErrorEntry> },
    Single { message: String },
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEntry {
    pub message: String,
}

impl ErrorEnvelope {
    pub(crate) fn into_api_error(self) -> ApiError {
        match self {
            Self::Fields { errors } => {
                ApiError::Backend(errors.into_iter().map(|entry| entry.message).collect())
            }
            Self::Single { message } => ApiError::Message(message),
        }
    }
}
