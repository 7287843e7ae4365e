//! Fixed demo data served by the dashboard and catalog endpoints, and the
//! seed set the request store starts with.

use crate::{
    DashboardSummary, Negotiation, ProcurementMonth, PurchaseOrder, PurchaseRequest,
    RequestStatus, Supplier, UserProfile, VendorSpend,
};

/// Default numeric offset added to the store size when numbering requests
pub const REQUEST_ID_OFFSET: u64 = 1288;

/// Number of requests shown in the dashboard's "recent requests" panel
pub const RECENT_REQUEST_COUNT: usize = 4;

fn request(
    id: &str,
    title: &str,
    requester: &str,
    department: &str,
    date: &str,
    status: RequestStatus,
    amount: &str,
) -> PurchaseRequest {
    PurchaseRequest {
        id: id.to_string(),
        title: title.to_string(),
        requester: requester.to_string(),
        department: Some(department.to_string()),
        date: date.to_string(),
        status,
        amount: amount.to_string(),
    }
}

pub fn seed_requests() -> Vec<PurchaseRequest> {
    vec![
        request(
            "RFQ-2023-1287",
            "Office Supplies Bulk Order",
            "Jane Cooper",
            "Administration",
            "2023-06-15",
            RequestStatus::Approved,
            "$1,250",
        ),
        request(
            "RFQ-2023-1286",
            "IT Hardware Procurement",
            "Wade Warren",
            "IT",
            "2023-06-14",
            RequestStatus::Pending,
            "$12,750",
        ),
        request(
            "RFQ-2023-1285",
            "Software Licenses Renewal",
            "Esther Howard",
            "IT",
            "2023-06-13",
            RequestStatus::Draft,
            "$8,500",
        ),
        request(
            "RFQ-2023-1284",
            "Marketing Materials",
            "Cameron Williamson",
            "Marketing",
            "2023-06-12",
            RequestStatus::Rejected,
            "$3,200",
        ),
    ]
}

pub fn dashboard_summary() -> DashboardSummary {
    DashboardSummary {
        total_requests: 127,
        pending_approval: 24,
        total_spent: "$284,543".to_string(),
        active_vendors: 38,
    }
}

pub fn procurement_history() -> Vec<ProcurementMonth> {
    [
        ("Jan", 14, 12, 2),
        ("Feb", 19, 15, 4),
        ("Mar", 23, 20, 3),
        ("Apr", 18, 14, 4),
        ("May", 25, 22, 3),
        ("Jun", 28, 24, 4),
    ]
    .into_iter()
    .map(|(month, requests, approved, rejected)| ProcurementMonth {
        month: month.to_string(),
        requests,
        approved,
        rejected,
    })
    .collect()
}

pub fn top_vendors() -> Vec<VendorSpend> {
    [
        ("Acme Supplies Inc.", "$45,280", "Office Supplies"),
        ("TechPro Solutions", "$38,750", "IT Hardware"),
        ("Global Software Ltd", "$32,400", "Software"),
        ("Meridian Services", "$28,900", "Consulting"),
        ("Prime Logistics", "$26,340", "Shipping"),
    ]
    .into_iter()
    .map(|(name, spend, category)| VendorSpend {
        name: name.to_string(),
        spend: spend.to_string(),
        category: category.to_string(),
    })
    .collect()
}

pub fn negotiations() -> Vec<Negotiation> {
    vec![
        Negotiation {
            id: "NEG-2023-001".to_string(),
            request_id: "RFQ-2023-1286".to_string(),
            supplier: "TechPro Solutions".to_string(),
            status: "active".to_string(),
            created_at: "2023-06-15".to_string(),
            last_message_at: "2023-06-16".to_string(),
        },
        Negotiation {
            id: "NEG-2023-002".to_string(),
            request_id: "RFQ-2023-1285".to_string(),
            supplier: "Global Software Ltd".to_string(),
            status: "completed".to_string(),
            created_at: "2023-06-13".to_string(),
            last_message_at: "2023-06-14".to_string(),
        },
    ]
}

pub fn purchase_orders() -> Vec<PurchaseOrder> {
    vec![PurchaseOrder {
        id: "PO-2023-001".to_string(),
        request_id: "RFQ-2023-1287".to_string(),
        supplier: "Acme Supplies Inc.".to_string(),
        status: "processed".to_string(),
        created_at: "2023-06-16".to_string(),
        amount: "$1,250".to_string(),
    }]
}

pub fn suppliers() -> Vec<Supplier> {
    [
        ("SUP-001", "Acme Supplies Inc.", "Office Supplies", "sales@acmesupplies.com", 4.5),
        ("SUP-002", "TechPro Solutions", "IT Hardware", "info@techpro.com", 4.2),
        ("SUP-003", "Global Software Ltd", "Software", "sales@globalsoftware.com", 4.8),
    ]
    .into_iter()
    .map(|(id, name, category, contact_email, rating)| Supplier {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        contact_email: contact_email.to_string(),
        rating,
    })
    .collect()
}

/// The single account the login stub knows about
pub fn demo_user(email: &str) -> UserProfile {
    UserProfile {
        id: "user-001".to_string(),
        name: "John Doe".to_string(),
        email: email.to_string(),
        role: "procurement_manager".to_string(),
    }
}
