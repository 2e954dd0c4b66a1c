#![cfg(test)]

use crate::{FoodProductRegistry, FoodProductRegistryClient, Role};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

pub struct TestContext {
    pub env: Env,
    pub client: FoodProductRegistryClient<'static>,
    pub admin: Address,
}

pub fn create_test_contract(env: &Env) -> FoodProductRegistryClient<'static> {
    FoodProductRegistryClient::new(env, &env.register(FoodProductRegistry {}, ()))
}

/// Initialized contract with mocked auths
pub fn setup() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let client = create_test_contract(&env);
    let admin = Address::generate(&env);
    client.initialize(&admin);

    TestContext { env, client, admin }
}

pub struct Participants {
    pub producer: Address,
    pub distributor: Address,
    pub retailer: Address,
    pub regulator: Address,
    pub consumer: Address,
}

/// Context with one address assigned per role. The consumer address is left
/// unassigned on purpose: Consumer is the implicit role.
pub fn setup_with_participants() -> (TestContext, Participants) {
    let ctx = setup();

    let participants = Participants {
        producer: Address::generate(&ctx.env),
        distributor: Address::generate(&ctx.env),
        retailer: Address::generate(&ctx.env),
        regulator: Address::generate(&ctx.env),
        consumer: Address::generate(&ctx.env),
    };

    ctx.client
        .assign_role(&ctx.admin, &participants.producer, &Role::Producer);
    ctx.client
        .assign_role(&ctx.admin, &participants.distributor, &Role::Distributor);
    ctx.client
        .assign_role(&ctx.admin, &participants.retailer, &Role::Retailer);
    ctx.client
        .assign_role(&ctx.admin, &participants.regulator, &Role::Regulator);

    (ctx, participants)
}

/// Register a product with placeholder fields and an empty metadata hash
pub fn register_test_product(ctx: &TestContext, producer: &Address) -> u64 {
    ctx.client.register_product(
        producer,
        &String::from_str(&ctx.env, "Arabica Coffee"),
        &String::from_str(&ctx.env, "LOT-2024-001"),
        &String::from_str(&ctx.env, "Huila, Colombia"),
        &String::from_str(&ctx.env, ""),
    )
}
