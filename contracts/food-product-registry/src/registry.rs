use crate::error::ContractError;
use crate::events;
use crate::history::{self, EventData};
use crate::roles::Authorizer;
use crate::storage::{self, Product, ProductEventKind, ProductStatus, Role};
use crate::utils;
use soroban_sdk::{Address, Env, String, Vec};

/// Register a new product under the caller, who becomes both producer and
/// initial owner. Ids are sequential starting at 1.
pub fn register_product(
    env: &Env,
    auth: &impl Authorizer,
    caller: &Address,
    name: String,
    batch_id: String,
    origin: String,
    metadata_hash: String,
) -> Result<u64, ContractError> {
    if !auth.has_role(env, caller, Role::Producer) {
        return Err(ContractError::Unauthorized);
    }

    // metadata_hash may be empty; the off-chain certificate can be attached later
    if !utils::is_non_empty(&name) || !utils::is_non_empty(&batch_id) || !utils::is_non_empty(&origin)
    {
        return Err(ContractError::InvalidArgument);
    }

    let product_id = storage::get_next_product_id(env);
    let timestamp = env.ledger().timestamp();

    let product = Product {
        id: product_id,
        name: name.clone(),
        batch_id: batch_id.clone(),
        producer: caller.clone(),
        current_owner: caller.clone(),
        origin,
        metadata_hash,
        status: ProductStatus::Created,
        created_at: timestamp,
        has_quality_passed: false,
        has_compliance_passed: false,
        is_authentic: false,
    };

    storage::set_product(env, &product);
    storage::add_producer_product(env, caller, product_id);

    history::record_event(
        env,
        product_id,
        ProductEventKind::Registered,
        caller,
        EventData {
            new_status: Some(ProductStatus::Created),
            details: Some(batch_id.clone()),
            ..EventData::none()
        },
    );

    events::emit_product_registered(env, product_id, caller.clone(), name, batch_id, timestamp);

    Ok(product_id)
}

/// Overwrite the off-chain metadata pointer. Only the producer may do this;
/// custody changes hands but certificate authority does not.
pub fn update_product_metadata(
    env: &Env,
    caller: &Address,
    product_id: u64,
    metadata_hash: String,
) -> Result<(), ContractError> {
    let mut product = get_product(env, product_id)?;

    if product.producer != *caller {
        return Err(ContractError::Unauthorized);
    }

    product.metadata_hash = metadata_hash.clone();
    storage::set_product(env, &product);

    history::record_event(
        env,
        product_id,
        ProductEventKind::MetadataUpdated,
        caller,
        EventData {
            details: Some(metadata_hash.clone()),
            ..EventData::none()
        },
    );

    events::emit_product_metadata_updated(env, product_id, metadata_hash, env.ledger().timestamp());

    Ok(())
}

pub fn get_product(env: &Env, product_id: u64) -> Result<Product, ContractError> {
    storage::get_product(env, product_id).ok_or(ContractError::ProductNotFound)
}

pub fn is_product_exists(env: &Env, product_id: u64) -> bool {
    storage::has_product(env, product_id)
}

pub fn get_current_owner(env: &Env, product_id: u64) -> Result<Address, ContractError> {
    Ok(get_product(env, product_id)?.current_owner)
}

pub fn get_product_status(env: &Env, product_id: u64) -> Result<ProductStatus, ContractError> {
    Ok(get_product(env, product_id)?.status)
}

pub fn is_product_authentic(env: &Env, product_id: u64) -> Result<bool, ContractError> {
    Ok(get_product(env, product_id)?.is_authentic)
}

pub fn get_producer_products(
    env: &Env,
    producer: &Address,
    offset: u32,
    limit: u32,
) -> Vec<u64> {
    let all_products = storage::get_producer_product_ids(env, producer);
    let mut result = Vec::new(env);

    let end = offset.saturating_add(limit).min(all_products.len());
    for i in offset..end {
        if let Some(product_id) = all_products.get(i) {
            result.push_back(product_id);
        }
    }

    result
}
