use crate::{CoreError, PurchaseRequest, RequestStatus, Result as CoreErrorResult};

use serde::Deserialize;

/// Caller-supplied fields for a new purchase request.
///
/// Every field is optional at the type level so that a missing field is
/// reported by name instead of as a generic body parse failure. Any
/// `status` (or other extra key) in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPurchaseRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub requester: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl NewPurchaseRequest {
    /// Build the stored record. New requests always start as drafts.
    ///
    /// Required fields are checked in the order title, requester, amount,
    /// department and the first missing one is reported. `issue_id` only
    /// runs once every required field is present, so a rejected payload
    /// never consumes an id.
    #[track_caller]
    pub fn into_purchase_request<F>(
        self,
        issue_id: F,
        date: String,
    ) -> CoreErrorResult<PurchaseRequest>
    where
        F: FnOnce() -> String,
    {
        let title = required(self.title, "title")?;
        let requester = required(self.requester, "requester")?;
        let amount = required(self.amount, "amount")?;
        let department = required(self.department, "department")?;

        Ok(PurchaseRequest {
            id: issue_id(),
            title,
            requester,
            department: Some(department),
            date,
            status: RequestStatus::Draft,
            amount,
        })
    }
}

#[track_caller]
fn required(value: Option<String>, field: &'static str) -> CoreErrorResult<String> {
    match value {
        Some(v) => Ok(v),
        None => Err(CoreError::missing_field(field)),
    }
}
