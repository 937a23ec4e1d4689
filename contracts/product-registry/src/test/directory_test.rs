use super::*;
use crate::Error;
use producer_directory::{ProducerDirectory, ProducerDirectoryClient};
use soroban_sdk::{testutils::Address as _, Address};

struct DirectoryContext {
    ctx: TestContext,
    directory: ProducerDirectoryClient<'static>,
    directory_admin: Address,
}

/// Registry wired to a deployed `ProducerDirectory` instead of the mock.
fn setup_with_directory() -> DirectoryContext {
    let ctx = setup_uninitialized();

    let directory_id = ctx.env.register(ProducerDirectory, ());
    let directory = ProducerDirectoryClient::new(&ctx.env, &directory_id);
    let directory_admin = Address::generate(&ctx.env);
    directory.initialize(&directory_admin);

    ctx.client
        .initialize(&ctx.admin, &directory_id, &ctx.token.address, &None);
    ctx.client.configure_authority(&ctx.admin, &ctx.authority);

    DirectoryContext {
        ctx,
        directory,
        directory_admin,
    }
}

#[test]
fn test_directory_listing_gates_registration() {
    let DirectoryContext {
        ctx,
        directory,
        directory_admin,
    } = setup_with_directory();

    // Listed in the mock only; the wired directory has never seen it.
    let res = ctx.client.try_register_product(
        &ctx.producer,
        &ctx.s("PROD001"),
        &ctx.s(HASH_A),
        &ctx.s("Organic Coffee Beans"),
        &ctx.s("Ethiopia"),
        &ctx.s("food"),
    );
    assert_eq!(res, Err(Ok(Error::InvalidProducer)));

    directory.add_producer(&directory_admin, &ctx.producer);
    assert_eq!(ctx.register(&ctx.producer, "PROD001"), 0);
    assert_eq!(ctx.token.balance(&ctx.authority), 500);

    directory.remove_producer(&directory_admin, &ctx.producer);
    let res = ctx.client.try_register_product(
        &ctx.producer,
        &ctx.s("PROD002"),
        &ctx.s(HASH_A),
        &ctx.s("Organic Coffee Beans"),
        &ctx.s("Ethiopia"),
        &ctx.s("food"),
    );
    assert_eq!(res, Err(Ok(Error::InvalidProducer)));

    assert_eq!(ctx.client.get_product_count(), 1);
    assert!(!ctx.client.check_product_existence(&ctx.s("PROD002")));
    assert_eq!(ctx.token.balance(&ctx.authority), 500);
}

#[test]
fn test_delisting_does_not_touch_existing_products() {
    let DirectoryContext {
        ctx,
        directory,
        directory_admin,
    } = setup_with_directory();

    directory.add_producer(&directory_admin, &ctx.producer);
    let id = ctx.register(&ctx.producer, "PROD001");
    directory.remove_producer(&directory_admin, &ctx.producer);

    // Updates are gated on ownership, not directory membership.
    ctx.client.update_product(
        &ctx.producer,
        &id,
        &ctx.s(HASH_B),
        &ctx.s("Roasted Coffee Beans"),
        &ctx.s("Ethiopia"),
    );
    assert!(ctx.client.verify_product(&id));
    assert_eq!(ctx.client.get_product(&id).unwrap().metadata_hash, ctx.s(HASH_B));
}
