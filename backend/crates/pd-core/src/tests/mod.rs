mod pagination;

use crate::{PurchaseRequest, RequestStatus};

/// Build a request with a department
pub(crate) fn sample(
    id: &str,
    title: &str,
    requester: &str,
    dept: &str,
    status: RequestStatus,
) -> PurchaseRequest {
    PurchaseRequest {
        id: id.to_string(),
        title: title.to_string(),
        requester: requester.to_string(),
        department: Some(dept.to_string()),
        date: "2023-06-15".to_string(),
        status,
        amount: "$100".to_string(),
    }
}
