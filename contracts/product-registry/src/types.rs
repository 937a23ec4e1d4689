use soroban_sdk::{contracttype, Address, Env, String};

/// Storage keys for the product registry
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Config,
    /// Product record by numeric id
    Product(u64),
    /// Numeric id by business-facing product id
    ProductKey(String),
    /// Last applied update by numeric id
    ProductUpdate(u64),
}

/// Product category, fixed at registration
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Category {
    Food = 0,
    Pharma = 1,
    Luxury = 2,
    Electronics = 3,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Pharma,
        Category::Luxury,
        Category::Electronics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Pharma => "pharma",
            Category::Luxury => "luxury",
            Category::Electronics => "electronics",
        }
    }

    /// Parse the wire form used by `register_product`.
    pub fn from_string(env: &Env, value: &String) -> Option<Category> {
        Self::ALL
            .into_iter()
            .find(|category| *value == String::from_str(env, category.as_str()))
    }
}

/// Provenance record for a registered product
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    /// Business-facing identifier, unique for the registry's lifetime
    pub product_id: String,
    /// Registering producer; never changes
    pub producer: Address,
    pub metadata_hash: String,
    pub description: String,
    pub origin: String,
    pub category: Category,
    /// Ledger sequence of the last write
    pub timestamp: u64,
    pub status: bool,
}

/// Most recent update applied to a product
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductUpdate {
    pub metadata_hash: String,
    pub description: String,
    pub origin: String,
    pub timestamp: u64,
    pub updater: Address,
}

/// Registry configuration and counters
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Address allowed to configure the authority
    pub admin: Address,
    /// Contract answering `is_authorized_producer`
    pub producer_directory: Address,
    /// Token registration fees are paid in
    pub fee_token: Address,
    /// Fee collector and fee administrator, set once
    pub authority: Option<Address>,
    pub registration_fee: u64,
    pub max_products: u64,
    /// Next numeric id; also the number of products ever registered
    pub next_product_id: u64,
}

/// Default capacity when `initialize` is not given one
pub const DEFAULT_MAX_PRODUCTS: u64 = 10_000;

/// Fee charged per registration until the authority changes it
pub const DEFAULT_REGISTRATION_FEE: u64 = 500;

/// Stellar zero account; rejected as an authority
pub const BURN_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
