use crate::error::ContractError;
use crate::storage::{self, ProductEvent, ProductEventKind, ProductStatus, VerificationKind};
use soroban_sdk::{Address, Env, String, Vec};

/// Everything a history record can carry beyond its kind, actor and time.
/// Callers fill only the fields their operation produces.
pub struct EventData {
    pub verification: Option<VerificationKind>,
    pub result: Option<bool>,
    pub old_status: Option<ProductStatus>,
    pub new_status: Option<ProductStatus>,
    pub counterparty: Option<Address>,
    pub details: Option<String>,
}

impl EventData {
    pub fn none() -> Self {
        EventData {
            verification: None,
            result: None,
            old_status: None,
            new_status: None,
            counterparty: None,
            details: None,
        }
    }
}

/// Append a record to the product's event log. Event ids are a global
/// sequence, so ascending event_id is chronological order across the ledger.
pub fn record_event(
    env: &Env,
    product_id: u64,
    kind: ProductEventKind,
    actor: &Address,
    data: EventData,
) {
    let event_id = storage::get_next_event_id(env);
    let event = ProductEvent {
        event_id,
        product_id,
        kind,
        actor: actor.clone(),
        timestamp: env.ledger().timestamp(),
        verification: data.verification,
        result: data.result,
        old_status: data.old_status,
        new_status: data.new_status,
        counterparty: data.counterparty,
        details: data.details,
    };
    storage::set_event(env, &event);
    storage::add_product_event(env, product_id, event_id);
}

/// Event log for one product in emission order, paginated.
pub fn get_product_history(
    env: &Env,
    product_id: u64,
    offset: u32,
    limit: u32,
) -> Result<Vec<ProductEvent>, ContractError> {
    if !storage::has_product(env, product_id) {
        return Err(ContractError::ProductNotFound);
    }

    let event_ids = storage::get_product_history_ids(env, product_id);
    let mut events = Vec::new(env);

    let end = offset.saturating_add(limit).min(event_ids.len());
    for i in offset..end {
        if let Some(event_id) = event_ids.get(i) {
            if let Some(event) = storage::get_event(env, event_id) {
                events.push_back(event);
            }
        }
    }

    Ok(events)
}

/// Event log for one product filtered by record kind. Offset and limit apply
/// to the filtered sequence; emission order is preserved.
pub fn get_product_history_by_kind(
    env: &Env,
    product_id: u64,
    kind: ProductEventKind,
    offset: u32,
    limit: u32,
) -> Result<Vec<ProductEvent>, ContractError> {
    if !storage::has_product(env, product_id) {
        return Err(ContractError::ProductNotFound);
    }

    let event_ids = storage::get_product_history_ids(env, product_id);
    let mut events = Vec::new(env);
    let mut matched: u32 = 0;

    for event_id in event_ids.iter() {
        if let Some(event) = storage::get_event(env, event_id) {
            if event.kind != kind {
                continue;
            }
            if matched >= offset {
                if events.len() >= limit {
                    break;
                }
                events.push_back(event);
            }
            matched += 1;
        }
    }

    Ok(events)
}
