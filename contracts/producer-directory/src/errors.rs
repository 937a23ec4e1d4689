use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 200,
    NotInitialized = 201,
    Unauthorized = 202,
    ProducerAlreadyListed = 203,
    ProducerNotListed = 204,
}
