use soroban_sdk::{contractevent, Address, String};

use crate::types::Category;

/// Emitted once when the registry is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryInitializedEvent {
    #[topic]
    pub admin: Address,
    pub producer_directory: Address,
    pub fee_token: Address,
    pub max_products: u64,
}

/// Emitted when the authority is configured
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorityConfiguredEvent {
    #[topic]
    pub authority: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrationFeeUpdatedEvent {
    #[topic]
    pub authority: Address,
    pub old_fee: u64,
    pub new_fee: u64,
}

/// Emitted when a registration fee is paid to the authority
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeCollectedEvent {
    #[topic]
    pub producer: Address,
    pub authority: Address,
    pub amount: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductRegisteredEvent {
    #[topic]
    pub producer: Address,
    #[topic]
    pub id: u64,
    pub product_id: String,
    pub category: Category,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductUpdatedEvent {
    #[topic]
    pub updater: Address,
    #[topic]
    pub id: u64,
    pub metadata_hash: String,
    pub timestamp: u64,
}
