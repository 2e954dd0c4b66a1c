#![no_std]

mod error;
mod events;
mod storage;
mod roles;
mod registry;
mod transfer;
mod lifecycle;
mod verification;
mod history;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use roles::RoleRegistry;

pub use error::*;
pub use events::*;
pub use storage::{Product, ProductEvent, ProductEventKind, ProductStatus, Role, VerificationKind};

#[contract]
pub struct FoodProductRegistry;

#[contractimpl]
impl FoodProductRegistry {
    /// Initialize the contract with the role-registry admin
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if storage::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        Ok(())
    }

    /// Assign a role to an address, overwriting any prior assignment (admin only)
    pub fn assign_role(
        env: Env,
        admin: Address,
        target: Address,
        role: Role,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        roles::assign_role(&env, &admin, &target, role)
    }

    /// Remove an address's role assignment, reverting it to Consumer (admin only)
    pub fn revoke_role(env: Env, admin: Address, target: Address) -> Result<(), ContractError> {
        admin.require_auth();
        roles::revoke_role(&env, &admin, &target)
    }

    /// Role of an address; Consumer for addresses with no assignment
    pub fn get_role(env: Env, address: Address) -> Role {
        roles::get_role(&env, &address)
    }

    /// Exact role check; the Consumer check succeeds for every address
    pub fn has_role(env: Env, address: Address, role: Role) -> bool {
        roles::has_role(&env, &address, role)
    }

    /// Register a new product (producers only); returns the product id
    pub fn register_product(
        env: Env,
        caller: Address,
        name: String,
        batch_id: String,
        origin: String,
        metadata_hash: String,
    ) -> Result<u64, ContractError> {
        caller.require_auth();
        registry::register_product(&env, &RoleRegistry, &caller, name, batch_id, origin, metadata_hash)
    }

    /// Replace a product's off-chain metadata pointer (producer only)
    pub fn update_product_metadata(
        env: Env,
        caller: Address,
        product_id: u64,
        metadata_hash: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        registry::update_product_metadata(&env, &caller, product_id, metadata_hash)
    }

    /// Transfer custody of a product; status follows the recipient's role
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        product_id: u64,
        to: Address,
        shipment_details: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        transfer::transfer_ownership(&env, &RoleRegistry, &caller, product_id, &to, shipment_details)
    }

    /// Transfer several products to one recipient, all-or-nothing
    pub fn batch_transfer_ownership(
        env: Env,
        caller: Address,
        product_ids: Vec<u64>,
        to: Address,
        shipment_details: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        transfer::batch_transfer_ownership(
            &env,
            &RoleRegistry,
            &caller,
            product_ids,
            &to,
            shipment_details,
        )
    }

    /// Move a product along the explicit status transition table (owner only)
    pub fn update_status(
        env: Env,
        caller: Address,
        product_id: u64,
        new_status: ProductStatus,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        lifecycle::update_status(&env, &caller, product_id, new_status)
    }

    /// Record a quality check (retailer or regulator); returns whether it passed
    pub fn perform_quality_check(
        env: Env,
        caller: Address,
        product_id: u64,
        score: u32,
        notes: String,
        certificate_hash: String,
    ) -> Result<bool, ContractError> {
        caller.require_auth();
        verification::perform_quality_check(
            &env,
            &RoleRegistry,
            &caller,
            product_id,
            score,
            notes,
            certificate_hash,
        )
    }

    /// Record a regulatory compliance check (regulator only)
    pub fn check_compliance(
        env: Env,
        caller: Address,
        product_id: u64,
        compliant: bool,
        certificate_hash: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        verification::check_compliance(
            &env,
            &RoleRegistry,
            &caller,
            product_id,
            compliant,
            certificate_hash,
        )
    }

    /// Re-evaluate and return a product's authenticity; open to any caller
    pub fn verify_authenticity(
        env: Env,
        caller: Address,
        product_id: u64,
        notes: String,
    ) -> Result<bool, ContractError> {
        caller.require_auth();
        verification::verify_authenticity(&env, &caller, product_id, notes)
    }

    /// Get product details
    pub fn get_product(env: Env, product_id: u64) -> Result<Product, ContractError> {
        registry::get_product(&env, product_id)
    }

    /// Number of products registered so far
    pub fn get_product_count(env: Env) -> u64 {
        storage::get_product_count(&env)
    }

    pub fn is_product_exists(env: Env, product_id: u64) -> bool {
        registry::is_product_exists(&env, product_id)
    }

    pub fn get_current_owner(env: Env, product_id: u64) -> Result<Address, ContractError> {
        registry::get_current_owner(&env, product_id)
    }

    pub fn get_product_status(env: Env, product_id: u64) -> Result<ProductStatus, ContractError> {
        registry::get_product_status(&env, product_id)
    }

    pub fn is_product_authentic(env: Env, product_id: u64) -> Result<bool, ContractError> {
        registry::is_product_authentic(&env, product_id)
    }

    /// Event log for a product in emission order
    pub fn get_product_history(
        env: Env,
        product_id: u64,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<ProductEvent>, ContractError> {
        history::get_product_history(&env, product_id, offset, limit)
    }

    /// Event log for a product filtered by record kind
    pub fn get_product_history_by_kind(
        env: Env,
        product_id: u64,
        kind: ProductEventKind,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<ProductEvent>, ContractError> {
        history::get_product_history_by_kind(&env, product_id, kind, offset, limit)
    }

    /// Ids of the products registered by a producer
    pub fn get_producer_products(
        env: Env,
        producer: Address,
        offset: u32,
        limit: u32,
    ) -> Vec<u64> {
        registry::get_producer_products(&env, &producer, offset, limit)
    }
}
