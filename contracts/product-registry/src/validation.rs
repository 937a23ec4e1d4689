//! Field checks run before any registry state is touched.
//!
//! Length limits count characters, not bytes of the UTF-8 encoding.

use soroban_sdk::{Env, String};

use crate::errors::Error;
use crate::types::Category;

pub const MAX_PRODUCT_ID_LEN: u32 = 50;
pub const MAX_METADATA_HASH_LEN: u32 = 64;
pub const MAX_DESCRIPTION_LEN: u32 = 200;
pub const MAX_ORIGIN_LEN: u32 = 100;

/// A character takes at most four bytes in UTF-8.
const MAX_UTF8_CHAR_LEN: u32 = 4;

/// Scratch space for the longest value any field may carry.
const SCRATCH_LEN: usize = (MAX_UTF8_CHAR_LEN * MAX_DESCRIPTION_LEN) as usize;

fn check_len(value: &String, max: u32, error: Error) -> Result<(), Error> {
    let byte_len = value.len();
    if byte_len == 0 || byte_len > MAX_UTF8_CHAR_LEN * max {
        return Err(error);
    }

    let mut buf = [0u8; SCRATCH_LEN];
    let bytes = &mut buf[..byte_len as usize];
    value.copy_into_slice(bytes);

    let chars = core::str::from_utf8(bytes).map_err(|_| error)?.chars().count();
    if chars > max as usize {
        return Err(error);
    }
    Ok(())
}

pub fn validate_product_id(product_id: &String) -> Result<(), Error> {
    check_len(product_id, MAX_PRODUCT_ID_LEN, Error::InvalidProductId)
}

pub fn validate_metadata_hash(metadata_hash: &String) -> Result<(), Error> {
    check_len(metadata_hash, MAX_METADATA_HASH_LEN, Error::InvalidMetadataHash)
}

pub fn validate_description(description: &String) -> Result<(), Error> {
    check_len(description, MAX_DESCRIPTION_LEN, Error::InvalidDescription)
}

pub fn validate_origin(origin: &String) -> Result<(), Error> {
    check_len(origin, MAX_ORIGIN_LEN, Error::InvalidOrigin)
}

pub fn parse_category(env: &Env, category: &String) -> Result<Category, Error> {
    Category::from_string(env, category).ok_or(Error::InvalidCategory)
}

/// Checks for the fields an update may change, in reporting order.
pub fn validate_mutable_fields(
    metadata_hash: &String,
    description: &String,
    origin: &String,
) -> Result<(), Error> {
    validate_metadata_hash(metadata_hash)?;
    validate_description(description)?;
    validate_origin(origin)
}

/// Full registration check in reporting order. Returns the parsed category.
pub fn validate_registration(
    env: &Env,
    product_id: &String,
    metadata_hash: &String,
    description: &String,
    origin: &String,
    category: &String,
) -> Result<Category, Error> {
    validate_product_id(product_id)?;
    validate_mutable_fields(metadata_hash, description, origin)?;
    parse_category(env, category)
}
