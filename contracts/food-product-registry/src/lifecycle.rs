use crate::error::ContractError;
use crate::events;
use crate::history::{self, EventData};
use crate::registry;
use crate::storage::{self, ProductEventKind, ProductStatus};
use crate::utils;
use soroban_sdk::{Address, Env};

/// Explicit status update, restricted to the current owner. Unlike the
/// transfer path, this one walks the strict transition table:
/// Created -> Shipped -> Received -> {Stored, Delivered}, Stored -> Delivered.
pub fn update_status(
    env: &Env,
    caller: &Address,
    product_id: u64,
    new_status: ProductStatus,
) -> Result<(), ContractError> {
    let mut product = registry::get_product(env, product_id)?;

    if product.current_owner != *caller {
        return Err(ContractError::NotOwner);
    }

    let old_status = product.status;

    if new_status == old_status {
        return Err(ContractError::NoStatusChange);
    }

    if old_status == ProductStatus::Delivered {
        return Err(ContractError::TerminalStatus);
    }

    if !utils::is_valid_transition(old_status, new_status) {
        return Err(ContractError::InvalidTransition);
    }

    product.status = new_status;
    storage::set_product(env, &product);

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

    events::emit_status_updated(
        env,
        product_id,
        old_status,
        new_status,
        caller.clone(),
        env.ledger().timestamp(),
    );

    Ok(())
}
