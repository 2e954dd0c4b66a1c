use crate::error::ContractError;
use crate::events;
use crate::history::{self, EventData};
use crate::registry;
use crate::roles::Authorizer;
use crate::storage::{self, Product, ProductEventKind, ProductStatus};
use crate::utils;
use soroban_sdk::{Address, Env, String, Vec};

/// Validate a transfer against current state and return the product together
/// with the status the recipient's role dictates. Does not mutate.
fn validate_transfer(
    env: &Env,
    auth: &impl Authorizer,
    caller: &Address,
    product_id: u64,
    to: &Address,
) -> Result<(Product, ProductStatus), ContractError> {
    let product = registry::get_product(env, product_id)?;

    if product.current_owner != *caller {
        return Err(ContractError::NotOwner);
    }

    if *to == *caller {
        return Err(ContractError::InvalidArgument);
    }

    if product.status == ProductStatus::Delivered {
        return Err(ContractError::TerminalStatus);
    }

    let recipient_role = auth.role_of(env, to);
    let new_status =
        utils::status_for_recipient(recipient_role).ok_or(ContractError::InvalidRecipient)?;

    Ok((product, new_status))
}

fn apply_transfer(
    env: &Env,
    caller: &Address,
    mut product: Product,
    to: &Address,
    new_status: ProductStatus,
    shipment_details: &String,
) {
    let old_status = product.status;
    let product_id = product.id;

    product.current_owner = to.clone();
    product.status = new_status;
    storage::set_product(env, &product);

    history::record_event(
        env,
        product_id,
        ProductEventKind::OwnershipTransferred,
        caller,
        EventData {
            counterparty: Some(to.clone()),
            details: Some(shipment_details.clone()),
            ..EventData::none()
        },
    );
    history::record_event(
        env,
        product_id,
        ProductEventKind::StatusUpdated,
        caller,
        EventData {
            old_status: Some(old_status),
            new_status: Some(new_status),
            ..EventData::none()
        },
    );

    let timestamp = env.ledger().timestamp();
    events::emit_ownership_transferred(
        env,
        product_id,
        caller.clone(),
        to.clone(),
        shipment_details.clone(),
        timestamp,
    );
    events::emit_status_updated(env, product_id, old_status, new_status, caller.clone(), timestamp);
}

/// Hand custody to `to`. The new status is a pure function of the recipient
/// role (Distributor -> Shipped, Retailer -> Received, Consumer -> Delivered)
/// and takes effect regardless of the product's prior status.
pub fn transfer_ownership(
    env: &Env,
    auth: &impl Authorizer,
    caller: &Address,
    product_id: u64,
    to: &Address,
    shipment_details: String,
) -> Result<(), ContractError> {
    let (product, new_status) = validate_transfer(env, auth, caller, product_id, to)?;
    apply_transfer(env, caller, product, to, new_status, &shipment_details);
    Ok(())
}

/// Transfer several products to the same recipient, all-or-nothing: every id
/// is validated against pre-transfer state before any is applied, so one bad
/// id rejects the whole batch. Duplicate ids are rejected for the same reason.
pub fn batch_transfer_ownership(
    env: &Env,
    auth: &impl Authorizer,
    caller: &Address,
    product_ids: Vec<u64>,
    to: &Address,
    shipment_details: String,
) -> Result<(), ContractError> {
    if product_ids.is_empty() {
        return Err(ContractError::EmptyBatch);
    }

    let mut validated = Vec::new(env);
    for (i, product_id) in product_ids.iter().enumerate() {
        for j in 0..i as u32 {
            if product_ids.get(j) == Some(product_id) {
                return Err(ContractError::InvalidArgument);
            }
        }
        let (product, new_status) = validate_transfer(env, auth, caller, product_id, to)?;
        validated.push_back((product, new_status));
    }

    for (product, new_status) in validated.iter() {
        apply_transfer(env, caller, product, to, new_status, &shipment_details);
    }

    Ok(())
}
