use crate::storage::{ProductStatus, Role, VerificationKind};
use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductRegisteredEvent {
    pub product_id: u64,
    pub producer: Address,
    pub name: String,
    pub batch_id: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub product_id: u64,
    pub from: Address,
    pub to: Address,
    pub shipment_details: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusUpdatedEvent {
    pub product_id: u64,
    pub old_status: ProductStatus,
    pub new_status: ProductStatus,
    pub updated_by: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductMetadataUpdatedEvent {
    pub product_id: u64,
    pub metadata_hash: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductVerifiedEvent {
    pub product_id: u64,
    pub verifier: Address,
    pub kind: VerificationKind,
    pub result: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthenticityConfirmedEvent {
    pub product_id: u64,
    pub verifier: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComplianceCheckedEvent {
    pub product_id: u64,
    pub regulator: Address,
    pub compliant: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleAssignedEvent {
    pub target: Address,
    pub role: Role,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRevokedEvent {
    pub target: Address,
    pub timestamp: u64,
}

pub fn emit_product_registered(
    env: &Env,
    product_id: u64,
    producer: Address,
    name: String,
    batch_id: String,
    timestamp: u64,
) {
    let event = ProductRegisteredEvent {
        product_id,
        producer,
        name,
        batch_id,
        timestamp,
    };
    env.events().publish(("product_registered",), event);
}

pub fn emit_ownership_transferred(
    env: &Env,
    product_id: u64,
    from: Address,
    to: Address,
    shipment_details: String,
    timestamp: u64,
) {
    let event = OwnershipTransferredEvent {
        product_id,
        from,
        to,
        shipment_details,
        timestamp,
    };
    env.events().publish(("ownership_transferred",), event);
}

pub fn emit_status_updated(
    env: &Env,
    product_id: u64,
    old_status: ProductStatus,
    new_status: ProductStatus,
    updated_by: Address,
    timestamp: u64,
) {
    let event = StatusUpdatedEvent {
        product_id,
        old_status,
        new_status,
        updated_by,
        timestamp,
    };
    env.events().publish(("status_updated",), event);
}

pub fn emit_product_metadata_updated(
    env: &Env,
    product_id: u64,
    metadata_hash: String,
    timestamp: u64,
) {
    let event = ProductMetadataUpdatedEvent {
        product_id,
        metadata_hash,
        timestamp,
    };
    env.events().publish(("product_metadata_updated",), event);
}

pub fn emit_product_verified(
    env: &Env,
    product_id: u64,
    verifier: Address,
    kind: VerificationKind,
    result: bool,
    timestamp: u64,
) {
    let event = ProductVerifiedEvent {
        product_id,
        verifier,
        kind,
        result,
        timestamp,
    };
    env.events().publish(("product_verified",), event);
}

pub fn emit_authenticity_confirmed(env: &Env, product_id: u64, verifier: Address, timestamp: u64) {
    let event = AuthenticityConfirmedEvent {
        product_id,
        verifier,
        timestamp,
    };
    env.events().publish(("authenticity_confirmed",), event);
}

pub fn emit_compliance_checked(
    env: &Env,
    product_id: u64,
    regulator: Address,
    compliant: bool,
    timestamp: u64,
) {
    let event = ComplianceCheckedEvent {
        product_id,
        regulator,
        compliant,
        timestamp,
    };
    env.events().publish(("compliance_checked",), event);
}

pub fn emit_role_assigned(env: &Env, target: Address, role: Role, timestamp: u64) {
    let event = RoleAssignedEvent {
        target,
        role,
        timestamp,
    };
    env.events().publish(("role_assigned",), event);
}

pub fn emit_role_revoked(env: &Env, target: Address, timestamp: u64) {
    let event = RoleRevokedEvent { target, timestamp };
    env.events().publish(("role_revoked",), event);
}
