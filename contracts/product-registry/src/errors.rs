use soroban_sdk::contracterror;

/// Error codes for the product registry.
/// Codes 100-112 are stable and shared with existing off-chain tooling.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller lacks the required ownership or role
    NotAuthorized = 100,
    /// Product id is empty or longer than 50 characters
    InvalidProductId = 101,
    /// Metadata hash is empty or longer than 64 characters
    InvalidMetadataHash = 102,
    /// Description is empty or longer than 200 characters
    InvalidDescription = 103,
    /// Product id is already registered
    ProductAlreadyExists = 104,
    /// No product with the given numeric id
    ProductNotFound = 105,
    /// No authority has been configured yet
    AuthorityNotVerified = 107,
    /// Caller is not listed in the producer directory
    InvalidProducer = 108,
    /// Registry reached its product capacity
    MaxProductsExceeded = 110,
    /// Origin is empty or longer than 100 characters
    InvalidOrigin = 111,
    /// Category is not one of food, pharma, luxury, electronics
    InvalidCategory = 112,
    AuthorityAlreadyConfigured = 113,
    /// Authority cannot be the burn address
    InvalidAuthority = 114,
    AlreadyInitialized = 115,
    NotInitialized = 116,
    InvalidMaxProducts = 117,
}
