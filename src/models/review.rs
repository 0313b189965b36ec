use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::datetime::parse_timestamp;

/// Placeholder shown for an instructor or committee not yet assigned.
pub const PENDING_ASSIGNMENT: &str = "待分配";

/// Approval stage of a review. Serialized as its integer code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ReviewState {
    #[default]
    InstructorPending,
    InstructorRejected,
    CommitteePending,
    CommitteeApproved,
    CommitteeRejected,
}

impl ReviewState {
    pub const ALL: [ReviewState; 5] = [
        Self::InstructorPending,
        Self::InstructorRejected,
        Self::CommitteePending,
        Self::CommitteeApproved,
        Self::CommitteeRejected,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: i64) -> Option<Self> {
        u8::try_from(code)
            .ok()
            .and_then(|c| Self::ALL.get(usize::from(c)).copied())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InstructorPending => "instructor_pending",
            Self::InstructorRejected => "instructor_rejected",
            Self::CommitteePending => "committee_pending",
            Self::CommitteeApproved => "committee_approved",
            Self::CommitteeRejected => "committee_rejected",
        }
    }
}

impl From<ReviewState> for u8 {
    fn from(state: ReviewState) -> Self {
        state.code()
    }
}

impl TryFrom<u8> for ReviewState {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(i64::from(code)).ok_or_else(|| format!("unknown review state {code}"))
    }
}

/// One review record attached to an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub activity_id: String,
    #[serde(rename = "type")]
    pub kind: i64,
    pub owner: String,
    pub instructor: String,
    pub instructor_comment: String,
    pub committee: String,
    pub committee_comment: String,
    pub state: ReviewState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Zero-valued placeholder for forms.
    pub fn template() -> Self {
        Self::default()
    }

    /// Build a review from an untyped JSON object.
    ///
    /// Never fails: missing or mistyped fields become empty strings, `0`, or
    /// the first state. `updatedAt` is kept only when it parses.
    pub fn from_json(json: &Value) -> Self {
        Self {
            id: str_field(json, "id"),
            activity_id: str_field(json, "activityId"),
            kind: int_field(json, "type"),
            owner: str_field(json, "owner"),
            instructor: str_field(json, "instructor"),
            instructor_comment: str_field(json, "instructorComment"),
            committee: str_field(json, "committee"),
            committee_comment: str_field(json, "committeeComment"),
            state: state_field(json, "state"),
            updated_at: timestamp_field(json, "updatedAt"),
        }
    }

    /// Map every element of a JSON array through [`Review::from_json`].
    /// Anything other than an array yields an empty list.
    pub fn from_json_list(json: &Value) -> Vec<Self> {
        match json.as_array() {
            Some(items) => items.iter().map(Self::from_json).collect(),
            None => {
                tracing::warn!(kind = json_kind(json), "expected a JSON array of reviews");
                Vec::new()
            }
        }
    }

    /// Provisional review synthesized from a raw activity record.
    ///
    /// The assigned-reviews endpoint returns activities, not reviews, so the
    /// reviewer columns are filled with [`PENDING_ASSIGNMENT`].
    pub fn from_activity(activity: &Value) -> Self {
        Self {
            id: str_field(activity, "id"),
            activity_id: str_field(activity, "name"),
            kind: 0,
            owner: str_field(activity, "owner"),
            instructor: PENDING_ASSIGNMENT.to_string(),
            instructor_comment: String::new(),
            committee: PENDING_ASSIGNMENT.to_string(),
            committee_comment: String::new(),
            state: state_field(activity, "state"),
            updated_at: timestamp_field(activity, "updatedAt"),
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

fn json_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn str_field(json: &Value, key: &str) -> String {
    match json.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn int_field(json: &Value, key: &str) -> i64 {
    match json.get(key) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

fn state_field(json: &Value, key: &str) -> ReviewState {
    let code = int_field(json, key);
    ReviewState::from_code(code).unwrap_or_else(|| {
        tracing::warn!(code, "unknown review state, using default");
        ReviewState::default()
    })
}

fn timestamp_field(json: &Value, key: &str) -> Option<DateTime<Utc>> {
    json.get(key).and_then(Value::as_str).and_then(parse_timestamp)
}
