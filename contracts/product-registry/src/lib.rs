#![no_std]

//! Product provenance registry.
//!
//! Authorized producers register products under a unique business key and
//! receive a sequential numeric id. Only the registering producer may amend
//! a record afterwards. Every registration pays `registration_fee` in
//! `fee_token` to the configured authority.

use soroban_sdk::{
    contract, contractimpl, log, token, vec, Address, Env, IntoVal, String, Symbol, Val, Vec,
};

mod errors;
mod events;
mod storage;
mod types;
mod validation;

pub use errors::Error;
pub use types::{Category, Product, ProductUpdate, RegistryConfig};

use events::{
    AuthorityConfiguredEvent, FeeCollectedEvent, ProductRegisteredEvent, ProductUpdatedEvent,
    RegistrationFeeUpdatedEvent, RegistryInitializedEvent,
};
use types::{BURN_ADDRESS, DEFAULT_MAX_PRODUCTS, DEFAULT_REGISTRATION_FEE};

#[contract]
pub struct ProductRegistry;

#[contractimpl]
impl ProductRegistry {
    // ========== INITIALIZATION ==========

    /// Initialize the registry.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to configure the authority
    /// * `producer_directory` - Contract exposing `is_authorized_producer`
    /// * `fee_token` - Token registration fees are paid in
    /// * `max_products` - Capacity, `DEFAULT_MAX_PRODUCTS` when `None`
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If called twice
    /// * `Error::InvalidMaxProducts` - If capacity is zero
    pub fn initialize(
        env: Env,
        admin: Address,
        producer_directory: Address,
        fee_token: Address,
        max_products: Option<u64>,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        let max_products = max_products.unwrap_or(DEFAULT_MAX_PRODUCTS);
        if max_products == 0 {
            return Err(Error::InvalidMaxProducts);
        }

        let config = RegistryConfig {
            admin: admin.clone(),
            producer_directory: producer_directory.clone(),
            fee_token: fee_token.clone(),
            authority: None,
            registration_fee: DEFAULT_REGISTRATION_FEE,
            max_products,
            next_product_id: 0,
        };
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        RegistryInitializedEvent {
            admin,
            producer_directory,
            fee_token,
            max_products,
        }
        .publish(&env);

        Ok(())
    }

    // ========== AUTHORITY & FEES ==========

    /// Set the authority. Succeeds at most once per registry lifetime.
    ///
    /// # Errors
    /// * `Error::NotAuthorized` - If `admin` is not the registry admin
    /// * `Error::InvalidAuthority` - If `authority` is the burn address
    /// * `Error::AuthorityAlreadyConfigured` - If an authority is already set
    pub fn configure_authority(env: Env, admin: Address, authority: Address) -> Result<(), Error> {
        let mut config = Self::load_config(&env)?;
        Self::require_admin(&config, &admin)?;

        if authority == Address::from_string(&String::from_str(&env, BURN_ADDRESS)) {
            return Err(Error::InvalidAuthority);
        }
        if config.authority.is_some() {
            return Err(Error::AuthorityAlreadyConfigured);
        }

        config.authority = Some(authority.clone());
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        AuthorityConfiguredEvent { authority }.publish(&env);

        Ok(())
    }

    /// Change the registration fee (authority only). No upper bound.
    ///
    /// # Errors
    /// * `Error::AuthorityNotVerified` - If no authority is configured
    /// * `Error::NotAuthorized` - If `authority` is not the configured one
    pub fn set_registration_fee(env: Env, authority: Address, new_fee: u64) -> Result<(), Error> {
        let mut config = Self::load_config(&env)?;
        Self::require_authority(&config, &authority)?;

        let old_fee = config.registration_fee;
        config.registration_fee = new_fee;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        RegistrationFeeUpdatedEvent {
            authority,
            old_fee,
            new_fee,
        }
        .publish(&env);

        Ok(())
    }

    // ========== PRODUCTS ==========

    /// Register a product and return its numeric id.
    ///
    /// Checks run in a fixed order: capacity, field validation (product id,
    /// metadata hash, description, origin, category), producer directory,
    /// authority, uniqueness. Nothing is written before all of them pass.
    pub fn register_product(
        env: Env,
        producer: Address,
        product_id: String,
        metadata_hash: String,
        description: String,
        origin: String,
        category: String,
    ) -> Result<u64, Error> {
        producer.require_auth();

        let mut config = Self::load_config(&env)?;

        if config.next_product_id >= config.max_products {
            return Err(Error::MaxProductsExceeded);
        }

        let category = validation::validate_registration(
            &env,
            &product_id,
            &metadata_hash,
            &description,
            &origin,
            &category,
        )?;

        Self::require_producer(&env, &config, &producer)?;
        let authority = config.authority.clone().ok_or(Error::AuthorityNotVerified)?;

        if storage::product_exists(&env, &product_id) {
            return Err(Error::ProductAlreadyExists);
        }

        Self::collect_fee(&env, &config, &producer, &authority);

        let id = config.next_product_id;
        let timestamp = Self::current_height(&env);
        let product = Product {
            product_id: product_id.clone(),
            producer: producer.clone(),
            metadata_hash,
            description,
            origin,
            category,
            timestamp,
            status: true,
        };

        storage::insert_product(&env, id, &product);
        config.next_product_id += 1;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        log!(&env, "product registered", id, product_id);
        ProductRegisteredEvent {
            producer,
            id,
            product_id,
            category,
            timestamp,
        }
        .publish(&env);

        Ok(id)
    }

    /// Amend the mutable fields of a product (original producer only).
    ///
    /// # Errors
    /// * `Error::ProductNotFound` - If `id` is unknown
    /// * `Error::NotAuthorized` - If `producer` did not register the product
    /// * `Error::InvalidMetadataHash`, `Error::InvalidDescription`,
    ///   `Error::InvalidOrigin` - First failing field, in that order
    pub fn update_product(
        env: Env,
        producer: Address,
        id: u64,
        metadata_hash: String,
        description: String,
        origin: String,
    ) -> Result<(), Error> {
        producer.require_auth();

        let mut product = storage::get_product(&env, id).ok_or(Error::ProductNotFound)?;

        if producer != product.producer {
            return Err(Error::NotAuthorized);
        }

        validation::validate_mutable_fields(&metadata_hash, &description, &origin)?;

        let timestamp = Self::current_height(&env);
        product.metadata_hash = metadata_hash.clone();
        product.description = description.clone();
        product.origin = origin.clone();
        product.timestamp = timestamp;
        storage::set_product(&env, id, &product);

        let update = ProductUpdate {
            metadata_hash: metadata_hash.clone(),
            description,
            origin,
            timestamp,
            updater: producer.clone(),
        };
        storage::set_product_update(&env, id, &update);
        storage::extend_instance_ttl(&env);

        ProductUpdatedEvent {
            updater: producer,
            id,
            metadata_hash,
            timestamp,
        }
        .publish(&env);

        Ok(())
    }

    // ========== QUERIES ==========

    pub fn get_product(env: Env, id: u64) -> Option<Product> {
        storage::get_product(&env, id)
    }

    /// Last update applied to a product, if it was ever updated
    pub fn get_product_update(env: Env, id: u64) -> Option<ProductUpdate> {
        storage::get_product_update(&env, id)
    }

    /// Numeric id registered for a business-facing product id
    pub fn get_product_id(env: Env, product_id: String) -> Option<u64> {
        storage::get_product_id(&env, &product_id)
    }

    /// Status flag of a product
    pub fn verify_product(env: Env, id: u64) -> Result<bool, Error> {
        storage::get_product(&env, id)
            .map(|product| product.status)
            .ok_or(Error::ProductNotFound)
    }

    /// Total number of products ever registered
    pub fn get_product_count(env: Env) -> u64 {
        storage::get_config(&env).map_or(0, |config| config.next_product_id)
    }

    pub fn check_product_existence(env: Env, product_id: String) -> bool {
        storage::product_exists(&env, &product_id)
    }

    pub fn get_config(env: Env) -> Result<RegistryConfig, Error> {
        Self::load_config(&env)
    }

    pub fn get_registration_fee(env: Env) -> Result<u64, Error> {
        Ok(Self::load_config(&env)?.registration_fee)
    }

    pub fn get_authority(env: Env) -> Option<Address> {
        storage::get_config(&env).and_then(|config| config.authority)
    }

    // ========== INTERNAL HELPERS ==========

    fn load_config(env: &Env) -> Result<RegistryConfig, Error> {
        storage::get_config(env).ok_or(Error::NotInitialized)
    }

    fn current_height(env: &Env) -> u64 {
        env.ledger().sequence() as u64
    }

    fn require_admin(config: &RegistryConfig, admin: &Address) -> Result<(), Error> {
        admin.require_auth();
        if *admin != config.admin {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }

    fn require_authority(config: &RegistryConfig, caller: &Address) -> Result<(), Error> {
        let authority = config.authority.as_ref().ok_or(Error::AuthorityNotVerified)?;
        caller.require_auth();
        if caller != authority {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }

    /// Ask the producer directory whether `producer` may register products.
    fn require_producer(env: &Env, config: &RegistryConfig, producer: &Address) -> Result<(), Error> {
        let args: Vec<Val> = vec![env, producer.into_val(env)];
        let listed: bool = env.invoke_contract(
            &config.producer_directory,
            &Symbol::new(env, "is_authorized_producer"),
            args,
        );
        if !listed {
            return Err(Error::InvalidProducer);
        }
        Ok(())
    }

    /// Pay the registration fee from `producer` to the authority. A failed
    /// transfer aborts the whole invocation, so no record is written.
    fn collect_fee(env: &Env, config: &RegistryConfig, producer: &Address, authority: &Address) {
        if config.registration_fee == 0 {
            return;
        }
        let token_client = token::Client::new(env, &config.fee_token);
        token_client.transfer(producer, authority, &(config.registration_fee as i128));

        FeeCollectedEvent {
            producer: producer.clone(),
            authority: authority.clone(),
            amount: config.registration_fee,
        }
        .publish(env);
    }
}

#[cfg(test)]
mod test;
