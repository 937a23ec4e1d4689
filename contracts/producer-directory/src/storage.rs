use soroban_sdk::{contracttype, Address, Env};

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    /// Present while the producer is listed
    Producer(Address),
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

pub fn is_listed(env: &Env, producer: &Address) -> bool {
    let key = StorageKey::Producer(producer.clone());
    let listed = env.storage().persistent().has(&key);
    if listed {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    listed
}

pub fn add_producer(env: &Env, producer: &Address) {
    let key = StorageKey::Producer(producer.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_producer(env: &Env, producer: &Address) {
    env.storage()
        .persistent()
        .remove(&StorageKey::Producer(producer.clone()));
}
