//! Delivery lifecycle of a single apartment.
//!
//! All mutators here are immutable updates: they return a new value and the
//! caller threads it back into the owning [`Building`](super::Building).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DomainError;

/// Lifecycle status of one apartment's mail.
///
/// Every transition is permitted, including back to `Pending`; the model
/// does not forbid manual correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "DELIVERED")]
    Delivered,
    #[serde(rename = "NOT_HOME")]
    NotHome,
    #[serde(rename = "REFUSED")]
    Refused,
    #[serde(rename = "WRONG_ADDRESS")]
    WrongAddress,
    #[serde(rename = "RTS")]
    ReturnToSender,
}

impl DeliveryStatus {
    /// All statuses in declaration order.
    pub const ALL: [DeliveryStatus; 6] = [
        DeliveryStatus::Pending,
        DeliveryStatus::Delivered,
        DeliveryStatus::NotHome,
        DeliveryStatus::Refused,
        DeliveryStatus::WrongAddress,
        DeliveryStatus::ReturnToSender,
    ];

    /// Stable wire string for this status.
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "PENDING",
            DeliveryStatus::Delivered => "DELIVERED",
            DeliveryStatus::NotHome => "NOT_HOME",
            DeliveryStatus::Refused => "REFUSED",
            DeliveryStatus::WrongAddress => "WRONG_ADDRESS",
            DeliveryStatus::ReturnToSender => "RTS",
        }
    }

    /// Parse a wire string, rejecting unknown values.
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        match code {
            "PENDING" => Ok(DeliveryStatus::Pending),
            "DELIVERED" => Ok(DeliveryStatus::Delivered),
            "NOT_HOME" => Ok(DeliveryStatus::NotHome),
            "REFUSED" => Ok(DeliveryStatus::Refused),
            "WRONG_ADDRESS" => Ok(DeliveryStatus::WrongAddress),
            "RTS" => Ok(DeliveryStatus::ReturnToSender),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// One recorded delivery attempt.
///
/// Attempts are append-only history: never reordered, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub id: String,
    /// When the attempt was made (epoch milliseconds on the wire).
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Registered/certified mail metadata.
///
/// Only present for mail requiring signature or tracking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
    /// Hand-back deadline, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts_allowed: Option<u32>,
}

/// Days-remaining view over a registered-mail due date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredSla {
    pub due: NaiveDate,
    /// Calendar days from the reference date to the due date.
    pub days_left: i64,
    /// True exactly when the due date has passed.
    pub overdue: bool,
}

/// One deliverable unit: an apartment within a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    pub id: String,
    pub label: String,
    pub status: DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub attempts: Vec<Attempt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered: Option<RegisteredMeta>,
}

impl Apartment {
    /// Create a fresh pending apartment with no history.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            status: DeliveryStatus::Pending,
            note: None,
            attempts: Vec::new(),
            registered: None,
        }
    }

    /// Return a copy with the status replaced.
    ///
    /// The note is replaced only when one is given; passing `None` keeps
    /// the existing note.
    pub fn with_status(&self, status: DeliveryStatus, note: Option<String>) -> Self {
        Self {
            status,
            note: note.or_else(|| self.note.clone()),
            ..self.clone()
        }
    }

    /// Return a copy with one more attempt appended.
    ///
    /// Does not change the status; callers decide whether an attempt
    /// implies a status change.
    pub fn with_attempt(&self, at: DateTime<Utc>, reason: Option<&str>) -> Self {
        let mut next = self.clone();
        next.attempts.push(Attempt {
            id: Uuid::new_v4().to_string(),
            at,
            reason: reason.map(str::to_string),
        });
        next
    }

    /// SLA view for registered mail, relative to `today`.
    ///
    /// `None` when the apartment carries no registered due date.
    /// `overdue` holds exactly when `days_left` is negative.
    pub fn registered_sla(&self, today: NaiveDate) -> Option<RegisteredSla> {
        let due = self.registered.as_ref()?.due?;
        let days_left = due.signed_duration_since(today).num_days();
        Some(RegisteredSla {
            due,
            days_left,
            overdue: days_left < 0,
        })
    }
}

#[cfg(test)]
#[path = "delivery_tests.rs"]
mod delivery_tests;
