use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

/// Participant roles. An address with no stored assignment is implicitly
/// `Consumer` for every permission check.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Producer,
    Distributor,
    Retailer,
    Regulator,
    Consumer,
}

/// Lifecycle stage of a product. `Delivered` is terminal for both the
/// explicit status-update path and the transfer path.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ProductStatus {
    Created,
    Shipped,
    Received,
    Stored,
    Delivered,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VerificationKind {
    QualityCheck,
    RegulatoryApproval,
    Authenticity,
}

// In testutils builds, `Option<T>` fields in a `#[contracttype]` struct need
// `T: Into<ScVal>`, but the macro only generates `TryFrom`. A `From` impl
// would collide with the generated `TryFrom` through core's blanket impl, so
// implement `Into` directly, delegating to the generated conversion. These
// enums are unit-variant only, so the conversion cannot fail.
#[cfg(test)]
macro_rules! impl_into_scval {
    ($t:ty) => {
        #[allow(clippy::from_over_into)]
        impl Into<soroban_sdk::xdr::ScVal> for $t {
            fn into(self) -> soroban_sdk::xdr::ScVal {
                (&self).try_into().unwrap()
            }
        }
    };
}

#[cfg(test)]
impl_into_scval!(ProductStatus);
#[cfg(test)]
impl_into_scval!(VerificationKind);

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ProductEventKind {
    Registered,
    OwnershipTransferred,
    StatusUpdated,
    MetadataUpdated,
    Verified,
    AuthenticityConfirmed,
    ComplianceChecked,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub batch_id: String,
    pub producer: Address,
    pub current_owner: Address,
    pub origin: String,
    pub metadata_hash: String,
    pub status: ProductStatus,
    pub created_at: u64,
    pub has_quality_passed: bool,
    pub has_compliance_passed: bool,
    pub is_authentic: bool,
}

/// Append-only history record. The per-product event log is the sole source
/// of historical truth; the `Product` map gives current state only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductEvent {
    pub event_id: u64,
    pub product_id: u64,
    pub kind: ProductEventKind,
    pub actor: Address,
    pub timestamp: u64,
    pub verification: Option<VerificationKind>,
    pub result: Option<bool>,
    pub old_status: Option<ProductStatus>,
    pub new_status: Option<ProductStatus>,
    pub counterparty: Option<Address>,
    pub details: Option<String>,
}

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Role(Address),             // address -> Role
    Product(u64),              // product_id -> Product
    Event(u64),                // event_id -> ProductEvent
    ProductHistory(u64),       // product_id -> Vec<event_id>
    ProducerProducts(Address), // producer -> Vec<product_id>
}

// Sequence counters live in instance storage
const PRODUCT_COUNTER: Symbol = symbol_short!("PRD_CNT");
const EVENT_COUNTER: Symbol = symbol_short!("EVT_CNT");

/// Next sequential product id, starting at 1. Id 0 is reserved and never
/// refers to a product.
pub fn get_next_product_id(env: &Env) -> u64 {
    let current = env.storage().instance().get(&PRODUCT_COUNTER).unwrap_or(0u64);
    let next = current + 1;
    env.storage().instance().set(&PRODUCT_COUNTER, &next);
    next
}

pub fn get_product_count(env: &Env) -> u64 {
    env.storage().instance().get(&PRODUCT_COUNTER).unwrap_or(0u64)
}

pub fn get_next_event_id(env: &Env) -> u64 {
    let current = env.storage().instance().get(&EVENT_COUNTER).unwrap_or(0u64);
    let next = current + 1;
    env.storage().instance().set(&EVENT_COUNTER, &next);
    next
}

// Admin storage functions
pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

// Role storage functions
pub fn get_stored_role(env: &Env, address: &Address) -> Option<Role> {
    env.storage().persistent().get(&DataKey::Role(address.clone()))
}

pub fn set_role(env: &Env, address: &Address, role: &Role) {
    env.storage().persistent().set(&DataKey::Role(address.clone()), role);
}

pub fn remove_role(env: &Env, address: &Address) {
    env.storage().persistent().remove(&DataKey::Role(address.clone()));
}

// Product storage functions
pub fn get_product(env: &Env, product_id: u64) -> Option<Product> {
    env.storage().persistent().get(&DataKey::Product(product_id))
}

pub fn set_product(env: &Env, product: &Product) {
    env.storage().persistent().set(&DataKey::Product(product.id), product);
}

pub fn has_product(env: &Env, product_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Product(product_id))
}

// Event storage functions
pub fn get_event(env: &Env, event_id: u64) -> Option<ProductEvent> {
    env.storage().persistent().get(&DataKey::Event(event_id))
}

pub fn set_event(env: &Env, event: &ProductEvent) {
    env.storage().persistent().set(&DataKey::Event(event.event_id), event);
}

// Per-product history index
pub fn get_product_history_ids(env: &Env, product_id: u64) -> Vec<u64> {
    let key = DataKey::ProductHistory(product_id);
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_product_event(env: &Env, product_id: u64, event_id: u64) {
    let key = DataKey::ProductHistory(product_id);
    let mut events = get_product_history_ids(env, product_id);
    events.push_back(event_id);
    env.storage().persistent().set(&key, &events);
}

// Producer index
pub fn get_producer_product_ids(env: &Env, producer: &Address) -> Vec<u64> {
    let key = DataKey::ProducerProducts(producer.clone());
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_producer_product(env: &Env, producer: &Address, product_id: u64) {
    let key = DataKey::ProducerProducts(producer.clone());
    let mut products = get_producer_product_ids(env, producer);
    products.push_back(product_id);
    env.storage().persistent().set(&key, &products);
}
