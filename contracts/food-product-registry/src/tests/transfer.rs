#![cfg(test)]

use crate::{ContractError, ProductStatus};
use soroban_sdk::{testutils::Address as _, Address, String, Vec};

use super::utils::{register_test_product, setup_with_participants};

#[test]
fn test_transfer_to_distributor_ships() {
    let (ctx, p) = setup_with_participants();
    let id = register_test_product(&ctx, &p.producer);

    ctx.client.transfer_ownership(
        &p.producer,
        &id,
        &p.distributor,
        &String::from_str(&ctx.env, "reefer truck, 4C"),
    );

    let product = ctx.client.get_product(&id);
    assert_eq!(product.current_owner, p.distributor);
    assert_eq!(product.status, ProductStatus::Shipped);
    // Producer identity survives the custody change
    assert_eq!(product.producer, p.producer);
}

#[test]
fn test_transfer_to_retailer_receives() {
    let (ctx, p) = setup_with_participants();
    let id = register_test_product(&ctx, &p.producer);

    ctx.client.transfer_ownership(
        &p.producer,
        &id,
        &p.distributor,
        &String::from_str(&ctx.env, "leg 1"),
    );
    ctx.client.transfer_ownership(
        &p.distributor,
        &id,
        &p.retailer,
        &String::from_str(&ctx.env, "leg 2"),
    );

    let product = ctx.client.get_product(&id);
    assert_eq!(product.current_owner, p.retailer);
    assert_eq!(product.status, ProductStatus::Received);
}

#[test]
fn test_transfer_to_consumer_bypasses_transition_table() {
    let (ctx, p) = setup_with_participants();
    let id = register_test_product(&ctx, &p.producer);

    // Created jumps straight to Delivered when sold directly to a consumer,
    // skipping Shipped/Received/Stored entirely.
    ctx.client.transfer_ownership(
        &p.producer,
        &id,
        &p.consumer,
        &String::from_str(&ctx.env, "farm gate sale"),
    );

    let product = ctx.client.get_product(&id);
    assert_eq!(product.current_owner, p.consumer);
    assert_eq!(product.status, ProductStatus::Delivered);
}

#[test]
fn test_transfer_status_depends_only_on_recipient_role() {
    let (ctx, p) = setup_with_participants();
    let second_distributor = Address::generate(&ctx.env);
    ctx.client
        .assign_role(&ctx.admin, &second_distributor, &crate::Role::Distributor);

    let id = register_test_product(&ctx, &p.producer);
    let details = String::from_str(&ctx.env, "");

    ctx.client.transfer_ownership(&p.producer, &id, &p.distributor, &details);
    ctx.client.transfer_ownership(&p.distributor, &id, &p.retailer, &details);
    assert_eq!(ctx.client.get_product_status(&id), ProductStatus::Received);

    // Sending a Received product back to a distributor yields Shipped again
    ctx.client.transfer_ownership(&p.retailer, &id, &second_distributor, &details);
    assert_eq!(ctx.client.get_product_status(&id), ProductStatus::Shipped);
}

#[test]
fn test_transfer_rejects_producer_and_regulator_recipients() {
    let (ctx, p) = setup_with_participants();
    let other_producer = Address::generate(&ctx.env);
    ctx.client
        .assign_role(&ctx.admin, &other_producer, &crate::Role::Producer);

    let id = register_test_product(&ctx, &p.producer);
    let details = String::from_str(&ctx.env, "");

    let result = ctx
        .client
        .try_transfer_ownership(&p.producer, &id, &other_producer, &details);
    assert_eq!(result, Err(Ok(ContractError::InvalidRecipient)));

    let result = ctx
        .client
        .try_transfer_ownership(&p.producer, &id, &p.regulator, &details);
    assert_eq!(result, Err(Ok(ContractError::InvalidRecipient)));

    // Rejected transfers leave custody and status alone
    let product = ctx.client.get_product(&id);
    assert_eq!(product.current_owner, p.producer);
    assert_eq!(product.status, ProductStatus::Created);
}

#[test]
fn test_self_transfer_fails() {
    let (ctx, p) = setup_with_participants();
    let id = register_test_product(&ctx, &p.producer);

    let result = ctx.client.try_transfer_ownership(
        &p.producer,
        &id,
        &p.producer,
        &String::from_str(&ctx.env, ""),
    );
    assert_eq!(result, Err(Ok(ContractError::InvalidArgument)));
}

#[test]
fn test_only_current_owner_can_transfer() {
    let (ctx, p) = setup_with_participants();
    let id = register_test_product(&ctx, &p.producer);

    let result = ctx.client.try_transfer_ownership(
        &p.distributor,
        &id,
        &p.retailer,
        &String::from_str(&ctx.env, ""),
    );
    assert_eq!(result, Err(Ok(ContractError::NotOwner)));
}

#[test]
fn test_transfer_of_missing_product_fails() {
    let (ctx, p) = setup_with_participants();

    let result = ctx.client.try_transfer_ownership(
        &p.producer,
        &99,
        &p.distributor,
        &String::from_str(&ctx.env, ""),
    );
    assert_eq!(result, Err(Ok(ContractError::ProductNotFound)));
}

#[test]
fn test_delivered_product_cannot_be_transferred_again() {
    let (ctx, p) = setup_with_participants();
    let id = register_test_product(&ctx, &p.producer);
    let details = String::from_str(&ctx.env, "");

    ctx.client.transfer_ownership(&p.producer, &id, &p.consumer, &details);

    let result = ctx
        .client
        .try_transfer_ownership(&p.consumer, &id, &p.distributor, &details);
    assert_eq!(result, Err(Ok(ContractError::TerminalStatus)));
}

#[test]
fn test_batch_transfer_applies_to_every_product() {
    let (ctx, p) = setup_with_participants();
    let a = register_test_product(&ctx, &p.producer);
    let b = register_test_product(&ctx, &p.producer);
    let c = register_test_product(&ctx, &p.producer);

    let mut ids = Vec::new(&ctx.env);
    ids.push_back(a);
    ids.push_back(b);
    ids.push_back(c);

    ctx.client.batch_transfer_ownership(
        &p.producer,
        &ids,
        &p.distributor,
        &String::from_str(&ctx.env, "pallet 12"),
    );

    for id in [a, b, c] {
        let product = ctx.client.get_product(&id);
        assert_eq!(product.current_owner, p.distributor);
        assert_eq!(product.status, ProductStatus::Shipped);
    }
}

#[test]
fn test_batch_transfer_is_all_or_nothing() {
    let (ctx, p) = setup_with_participants();
    let a = register_test_product(&ctx, &p.producer);
    let b = register_test_product(&ctx, &p.producer);
    let c = register_test_product(&ctx, &p.producer);

    // The middle product is owned by someone else
    ctx.client.transfer_ownership(
        &p.producer,
        &b,
        &p.distributor,
        &String::from_str(&ctx.env, ""),
    );

    let mut ids = Vec::new(&ctx.env);
    ids.push_back(a);
    ids.push_back(b);
    ids.push_back(c);

    let result = ctx.client.try_batch_transfer_ownership(
        &p.producer,
        &ids,
        &p.retailer,
        &String::from_str(&ctx.env, ""),
    );
    assert_eq!(result, Err(Ok(ContractError::NotOwner)));

    // None of the three moved
    assert_eq!(ctx.client.get_current_owner(&a), p.producer);
    assert_eq!(ctx.client.get_current_owner(&b), p.distributor);
    assert_eq!(ctx.client.get_current_owner(&c), p.producer);
    assert_eq!(ctx.client.get_product_status(&a), ProductStatus::Created);
    assert_eq!(ctx.client.get_product_status(&c), ProductStatus::Created);
}

#[test]
fn test_batch_transfer_rejects_empty_and_duplicate_ids() {
    let (ctx, p) = setup_with_participants();
    let id = register_test_product(&ctx, &p.producer);
    let details = String::from_str(&ctx.env, "");

    let empty: Vec<u64> = Vec::new(&ctx.env);
    let result = ctx
        .client
        .try_batch_transfer_ownership(&p.producer, &empty, &p.distributor, &details);
    assert_eq!(result, Err(Ok(ContractError::EmptyBatch)));

    let mut dupes = Vec::new(&ctx.env);
    dupes.push_back(id);
    dupes.push_back(id);
    let result = ctx
        .client
        .try_batch_transfer_ownership(&p.producer, &dupes, &p.distributor, &details);
    assert_eq!(result, Err(Ok(ContractError::InvalidArgument)));

    assert_eq!(ctx.client.get_current_owner(&id), p.producer);
}
