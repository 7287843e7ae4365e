//! Purchase request (RFQ) entity and its partial-update policy.

use crate::{CoreError, RequestStatus, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A request for quotation raised by an employee.
///
/// `department` is only carried by records created through the richer
/// request form; older records have none and never grow one on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// `RFQ-<year>-<sequence>`, assigned by the store
    pub id: String,
    pub title: String,
    pub requester: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// `YYYY-MM-DD`
    pub date: String,
    pub status: RequestStatus,
    /// Currency-formatted amount exactly as supplied (e.g. "$1,250")
    pub amount: String,
}

impl PurchaseRequest {
    /// Overwrite the fields named in `patch` that already exist on this record.
    ///
    /// Unknown keys are ignored, as is `id`. `department` only counts as an
    /// existing field when the record already has one. The patch is applied
    /// all-or-nothing: on error the record is left untouched.
    ///
    /// Returns the names of the fields that were written.
    pub fn apply_patch(
        &mut self,
        patch: &Map<String, Value>,
    ) -> CoreErrorResult<Vec<&'static str>> {
        let mut staged = self.clone();
        let mut applied = Vec::new();

        for (key, value) in patch {
            let field = match key.as_str() {
                "title" => {
                    staged.title = string_value("title", value)?;
                    "title"
                }
                "requester" => {
                    staged.requester = string_value("requester", value)?;
                    "requester"
                }
                "department" if staged.department.is_some() => {
                    staged.department = Some(string_value("department", value)?);
                    "department"
                }
                "date" => {
                    staged.date = string_value("date", value)?;
                    "date"
                }
                "status" => {
                    staged.status = RequestStatus::from_str(&string_value("status", value)?)?;
                    "status"
                }
                "amount" => {
                    staged.amount = string_value("amount", value)?;
                    "amount"
                }
                _ => continue,
            };
            applied.push(field);
        }

        *self = staged;
        Ok(applied)
    }

    /// Case-insensitive substring match over id, title and requester.
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle)
            || self.title.to_lowercase().contains(needle)
            || self.requester.to_lowercase().contains(needle)
    }
}

#[track_caller]
fn string_value(field: &'static str, value: &Value) -> CoreErrorResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(CoreError::invalid_field_value(field)),
    }
}
