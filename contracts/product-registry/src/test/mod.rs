pub mod directory_test;

use crate::{ProductRegistry, ProductRegistryClient};
use soroban_sdk::{
    contract, contractimpl,
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env, String,
};

pub const HASH_A: &str = "hash1234567890abcdef1234567890abcdef1234567890abcdef1234567890ab";
pub const HASH_B: &str = "hashabcdef1234567890abcdef1234567890abcdef1234567890abcdef1234";
pub const STARTING_BALANCE: i128 = 10_000;

/// ASCII string of `len` copies of `byte`.
pub fn filled(env: &Env, byte: u8, len: usize) -> String {
    let bytes = [byte; 256];
    String::from_str(env, core::str::from_utf8(&bytes[..len]).unwrap())
}

/// `count` copies of a possibly multi-byte `ch`.
pub fn repeated(env: &Env, ch: char, count: usize) -> String {
    let mut bytes = [0u8; 1024];
    let width = ch.len_utf8();
    for i in 0..count {
        ch.encode_utf8(&mut bytes[i * width..(i + 1) * width]);
    }
    String::from_str(env, core::str::from_utf8(&bytes[..count * width]).unwrap())
}

/// Stand-in for the producer directory: membership is whatever the test sets.
#[contract]
pub struct MockDirectory;

#[contractimpl]
impl MockDirectory {
    pub fn set_listed(env: Env, producer: Address, listed: bool) {
        env.storage().instance().set(&producer, &listed);
    }

    pub fn is_authorized_producer(env: Env, producer: Address) -> bool {
        env.storage().instance().get(&producer).unwrap_or(false)
    }
}

pub struct TestContext {
    pub env: Env,
    pub client: ProductRegistryClient<'static>,
    pub directory: MockDirectoryClient<'static>,
    pub token: token::TokenClient<'static>,
    pub admin: Address,
    pub authority: Address,
    pub producer: Address,
}

impl TestContext {
    pub fn s(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    /// Register with the coffee-beans fixture under `product_id`.
    pub fn register(&self, producer: &Address, product_id: &str) -> u64 {
        self.client.register_product(
            producer,
            &self.s(product_id),
            &self.s(HASH_A),
            &self.s("Organic Coffee Beans"),
            &self.s("Ethiopia"),
            &self.s("food"),
        )
    }

    /// Add a funded, listed producer.
    pub fn new_producer(&self) -> Address {
        let producer = Address::generate(&self.env);
        self.directory.set_listed(&producer, &true);
        token::StellarAssetClient::new(&self.env, &self.token.address)
            .mint(&producer, &STARTING_BALANCE);
        producer
    }
}

/// Deployed but uninitialized registry, plus its collaborators.
pub fn setup_uninitialized() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 1000000,
    });

    let contract_id = env.register(ProductRegistry, ());
    let client = ProductRegistryClient::new(&env, &contract_id);

    let directory_id = env.register(MockDirectory, ());
    let directory = MockDirectoryClient::new(&env, &directory_id);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token = token::TokenClient::new(&env, &token_contract.address());

    let admin = Address::generate(&env);
    let authority = Address::generate(&env);
    let producer = Address::generate(&env);

    directory.set_listed(&producer, &true);
    token::StellarAssetClient::new(&env, &token_contract.address())
        .mint(&producer, &STARTING_BALANCE);

    TestContext {
        env,
        client,
        directory,
        token,
        admin,
        authority,
        producer,
    }
}

/// Initialized registry with the given capacity; no authority yet.
pub fn setup_with_capacity(max_products: Option<u64>) -> TestContext {
    let ctx = setup_uninitialized();
    ctx.client.initialize(
        &ctx.admin,
        &ctx.directory.address,
        &ctx.token.address,
        &max_products,
    );
    ctx
}

/// Initialized registry with an authority configured.
pub fn setup_test() -> TestContext {
    let ctx = setup_with_capacity(None);
    ctx.client.configure_authority(&ctx.admin, &ctx.authority);
    ctx
}
