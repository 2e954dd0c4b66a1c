use crate::storage::{ProductStatus, Role};
use soroban_sdk::String;

pub fn is_non_empty(value: &String) -> bool {
    value.len() > 0
}

// Quality scores are percentages
pub fn is_valid_score(score: u32) -> bool {
    score <= 100
}

pub fn is_passing_score(score: u32) -> bool {
    score >= 50
}

/// Status assigned by a transfer, as a pure function of the recipient role.
/// Producers and regulators are not valid custodians, so they map to `None`.
/// This mapping deliberately bypasses the explicit transition table: a
/// Created product transferred straight to a consumer becomes Delivered.
pub fn status_for_recipient(role: Role) -> Option<ProductStatus> {
    match role {
        Role::Distributor => Some(ProductStatus::Shipped),
        Role::Retailer => Some(ProductStatus::Received),
        Role::Consumer => Some(ProductStatus::Delivered),
        Role::Producer | Role::Regulator => None,
    }
}

/// Explicit status-update transition table. Strictly linear with a single
/// branch at Received; no skipping. Delivered is terminal.
pub fn is_valid_transition(from: ProductStatus, to: ProductStatus) -> bool {
    matches!(
        (from, to),
        (ProductStatus::Created, ProductStatus::Shipped)
            | (ProductStatus::Shipped, ProductStatus::Received)
            | (ProductStatus::Received, ProductStatus::Stored)
            | (ProductStatus::Received, ProductStatus::Delivered)
            | (ProductStatus::Stored, ProductStatus::Delivered)
    )
}
