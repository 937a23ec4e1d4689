#![no_std]

//! Directory of producers verified to register products.
//!
//! The product registry queries `is_authorized_producer` before accepting a
//! registration; membership is managed by a single admin.

use soroban_sdk::{contract, contractimpl, Address, Env};

mod errors;
mod events;
mod storage;

pub use errors::Error;

use events::{DirectoryInitializedEvent, ProducerAddedEvent, ProducerRemovedEvent};

#[contract]
pub struct ProducerDirectory;

#[contractimpl]
impl ProducerDirectory {
    /// Initialize the directory with its admin
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::get_admin(&env).is_some() {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        storage::set_admin(&env, &admin);
        storage::extend_instance_ttl(&env);

        DirectoryInitializedEvent { admin }.publish(&env);

        Ok(())
    }

    /// List a producer (admin only)
    pub fn add_producer(env: Env, admin: Address, producer: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        if storage::is_listed(&env, &producer) {
            return Err(Error::ProducerAlreadyListed);
        }

        storage::add_producer(&env, &producer);
        storage::extend_instance_ttl(&env);

        ProducerAddedEvent { producer, admin }.publish(&env);

        Ok(())
    }

    /// Delist a producer (admin only). Products it already registered stay
    /// in the registry.
    pub fn remove_producer(env: Env, admin: Address, producer: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        if !storage::is_listed(&env, &producer) {
            return Err(Error::ProducerNotListed);
        }

        storage::remove_producer(&env, &producer);
        storage::extend_instance_ttl(&env);

        ProducerRemovedEvent { producer, admin }.publish(&env);

        Ok(())
    }

    pub fn is_authorized_producer(env: Env, producer: Address) -> bool {
        storage::is_listed(&env, &producer)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotInitialized)
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        admin.require_auth();
        let stored_admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        if *admin != stored_admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
