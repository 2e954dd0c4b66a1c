use crate::error::ContractError;
use crate::events;
use crate::history::{self, EventData};
use crate::registry;
use crate::roles::Authorizer;
use crate::storage::{self, Product, ProductEventKind, Role, VerificationKind};
use crate::utils;
use soroban_sdk::{Address, Env, String};

/// Record a quality check. Retailers and regulators only. A score of 50 or
/// above passes; a passing check sets the (monotonic) quality flag and, when
/// a certificate hash is supplied, replaces the metadata pointer. The caller
/// is responsible for pre-merging any existing certificate data.
pub fn perform_quality_check(
    env: &Env,
    auth: &impl Authorizer,
    caller: &Address,
    product_id: u64,
    score: u32,
    notes: String,
    certificate_hash: String,
) -> Result<bool, ContractError> {
    if !auth.has_role(env, caller, Role::Retailer) && !auth.has_role(env, caller, Role::Regulator) {
        return Err(ContractError::Unauthorized);
    }

    if !utils::is_valid_score(score) {
        return Err(ContractError::InvalidScore);
    }

    let mut product = registry::get_product(env, product_id)?;
    let passed = utils::is_passing_score(score);

    if passed {
        product.has_quality_passed = true;
        if utils::is_non_empty(&certificate_hash) {
            product.metadata_hash = certificate_hash;
        }
    }
    storage::set_product(env, &product);

    history::record_event(
        env,
        product_id,
        ProductEventKind::Verified,
        caller,
        EventData {
            verification: Some(VerificationKind::QualityCheck),
            result: Some(passed),
            details: Some(notes),
            ..EventData::none()
        },
    );
    events::emit_product_verified(
        env,
        product_id,
        caller.clone(),
        VerificationKind::QualityCheck,
        passed,
        env.ledger().timestamp(),
    );

    if passed {
        confirm_authenticity_if_earned(env, caller, product_id, None)?;
    }

    Ok(passed)
}

/// Record a regulatory compliance check. Regulators only. A compliant check
/// sets the (monotonic) compliance flag and optionally replaces the metadata
/// pointer, then re-evaluates authenticity.
pub fn check_compliance(
    env: &Env,
    auth: &impl Authorizer,
    caller: &Address,
    product_id: u64,
    compliant: bool,
    certificate_hash: String,
) -> Result<(), ContractError> {
    if !auth.has_role(env, caller, Role::Regulator) {
        return Err(ContractError::Unauthorized);
    }

    let mut product = registry::get_product(env, product_id)?;

    if compliant {
        product.has_compliance_passed = true;
        if utils::is_non_empty(&certificate_hash) {
            product.metadata_hash = certificate_hash;
        }
    }
    storage::set_product(env, &product);

    let timestamp = env.ledger().timestamp();

    history::record_event(
        env,
        product_id,
        ProductEventKind::ComplianceChecked,
        caller,
        EventData {
            result: Some(compliant),
            ..EventData::none()
        },
    );
    events::emit_compliance_checked(env, product_id, caller.clone(), compliant, timestamp);

    history::record_event(
        env,
        product_id,
        ProductEventKind::Verified,
        caller,
        EventData {
            verification: Some(VerificationKind::RegulatoryApproval),
            result: Some(compliant),
            ..EventData::none()
        },
    );
    events::emit_product_verified(
        env,
        product_id,
        caller.clone(),
        VerificationKind::RegulatoryApproval,
        compliant,
        timestamp,
    );

    if compliant {
        confirm_authenticity_if_earned(env, caller, product_id, None)?;
    }

    Ok(())
}

/// Open authenticity query: re-evaluates the stored flags (never the full
/// history) and, when the product newly qualifies, flips the flag and emits
/// the confirmation exactly once. Idempotent when already authentic.
pub fn verify_authenticity(
    env: &Env,
    caller: &Address,
    product_id: u64,
    notes: String,
) -> Result<bool, ContractError> {
    let product = registry::get_product(env, product_id)?;
    if product.is_authentic {
        return Ok(true);
    }
    confirm_authenticity_if_earned(env, caller, product_id, Some(notes))
}

fn is_authenticity_earned(product: &Product) -> bool {
    // The original also required a non-zero producer address; Soroban
    // addresses cannot be zero, so that conjunct is always satisfied here.
    product.has_quality_passed
        && product.has_compliance_passed
        && utils::is_non_empty(&product.metadata_hash)
}

/// Shared authenticity rule, run after every passing check and on explicit
/// verification. Decides from the cached flags only. No effect and no
/// duplicate events when the flag is already set.
fn confirm_authenticity_if_earned(
    env: &Env,
    caller: &Address,
    product_id: u64,
    notes: Option<String>,
) -> Result<bool, ContractError> {
    let mut product = registry::get_product(env, product_id)?;

    if product.is_authentic {
        return Ok(true);
    }
    if !is_authenticity_earned(&product) {
        return Ok(false);
    }

    product.is_authentic = true;
    storage::set_product(env, &product);

    let timestamp = env.ledger().timestamp();

    history::record_event(
        env,
        product_id,
        ProductEventKind::AuthenticityConfirmed,
        caller,
        EventData {
            details: notes,
            ..EventData::none()
        },
    );
    events::emit_authenticity_confirmed(env, product_id, caller.clone(), timestamp);

    history::record_event(
        env,
        product_id,
        ProductEventKind::Verified,
        caller,
        EventData {
            verification: Some(VerificationKind::Authenticity),
            result: Some(true),
            ..EventData::none()
        },
    );
    events::emit_product_verified(
        env,
        product_id,
        caller.clone(),
        VerificationKind::Authenticity,
        true,
        timestamp,
    );

    Ok(true)
}
