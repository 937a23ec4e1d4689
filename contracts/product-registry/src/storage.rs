use soroban_sdk::{Env, String};

use crate::types::{
    Product, ProductUpdate, RegistryConfig, StorageKey, INSTANCE_TTL_AMOUNT,
    INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ========== Config ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Config)
}

pub fn get_config(env: &Env) -> Option<RegistryConfig> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Products ==========

/// Store a new product under `id` and index its business key.
///
/// This is the only writer of the `ProductKey` index, so the two maps
/// cannot drift apart.
pub fn insert_product(env: &Env, id: u64, product: &Product) {
    set_product(env, id, product);

    let key = StorageKey::ProductKey(product.product_id.clone());
    env.storage().persistent().set(&key, &id);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Overwrite an existing record. The business key never changes, so the
/// index is left as is.
pub fn set_product(env: &Env, id: u64, product: &Product) {
    let key = StorageKey::Product(id);
    env.storage().persistent().set(&key, product);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn get_product(env: &Env, id: u64) -> Option<Product> {
    let key = StorageKey::Product(id);
    let product = env.storage().persistent().get::<_, Product>(&key);
    if product.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    product
}

pub fn get_product_id(env: &Env, product_id: &String) -> Option<u64> {
    let key = StorageKey::ProductKey(product_id.clone());
    let id = env.storage().persistent().get::<_, u64>(&key);
    if id.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    id
}

pub fn product_exists(env: &Env, product_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&StorageKey::ProductKey(product_id.clone()))
}

// ========== Updates ==========

pub fn set_product_update(env: &Env, id: u64, update: &ProductUpdate) {
    let key = StorageKey::ProductUpdate(id);
    env.storage().persistent().set(&key, update);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn get_product_update(env: &Env, id: u64) -> Option<ProductUpdate> {
    let key = StorageKey::ProductUpdate(id);
    let update = env.storage().persistent().get::<_, ProductUpdate>(&key);
    if update.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    update
}
