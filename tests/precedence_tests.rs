// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for resolver ordering.
//!
//! The locator must consult resolvers strictly in the order they were added
//! and stop at the first one that finds the resource.

mod common;

use common::{create_temp_tree, MockResolver};
use rescfg::adapters::{ContextResolver, EmbeddedResolver};
use rescfg::service::ResourceLocator;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn three_tier() -> (MockResolver, MockResolver, MockResolver) {
    let first = MockResolver::new("first")
        .with_resource("key1", "from_first")
        .with_resource("key2", "first_only");
    let second = MockResolver::new("second")
        .with_resource("key1", "from_second")
        .with_resource("key3", "second_only");
    let third = MockResolver::new("third")
        .with_resource("key1", "from_third")
        .with_resource("key4", "third_only");
    (first, second, third)
}

#[test]
fn test_first_hit_wins() {
    let (first, second, third) = three_tier();
    let locator = ResourceLocator::builder()
        .with_resolver(Box::new(first))
        .with_resolver(Box::new(second))
        .with_resolver(Box::new(third))
        .build();

    assert_eq!(locator.read_to_string("key1").unwrap(), "from_first");
    assert_eq!(locator.read_to_string("key2").unwrap(), "first_only");
    assert_eq!(locator.read_to_string("key3").unwrap(), "second_only");
    assert_eq!(locator.read_to_string("key4").unwrap(), "third_only");
}

#[test]
fn test_order_is_insertion_order() {
    let (first, second, third) = three_tier();
    let locator = ResourceLocator::builder()
        .with_resolver(Box::new(third))
        .with_resolver(Box::new(second))
        .with_resolver(Box::new(first))
        .build();

    assert_eq!(locator.resolver_names(), vec!["third", "second", "first"]);
    assert_eq!(locator.read_to_string("key1").unwrap(), "from_third");
}

#[test]
fn test_later_resolvers_not_consulted_after_hit() {
    let (first, second, third) = three_tier();
    let second_calls = second.counter();
    let third_calls = third.counter();

    let locator = ResourceLocator::builder()
        .with_resolver(Box::new(first))
        .with_resolver(Box::new(second))
        .with_resolver(Box::new(third))
        .build();

    locator.locate("key1").unwrap();
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    assert_eq!(third_calls.load(Ordering::SeqCst), 0);

    locator.locate("key3").unwrap();
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    assert_eq!(third_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_every_resolver_consulted_on_miss() {
    let (first, second, third) = three_tier();
    let counters = [first.counter(), second.counter(), third.counter()];

    let locator = ResourceLocator::builder()
        .with_resolver(Box::new(first))
        .with_resolver(Box::new(second))
        .with_resolver(Box::new(third))
        .build();

    assert!(locator.locate("absent").is_none());
    for counter in &counters {
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}

#[test]
fn test_context_then_embedded_then_directory() {
    let dir = create_temp_tree(&[("tier.txt", "directory")]);
    let assets = EmbeddedResolver::new();
    let locator = ResourceLocator::builder()
        .with_context()
        .with_embedded(assets.clone())
        .with_directory(dir.path())
        .build();

    assert_eq!(locator.read_to_string("tier.txt").unwrap(), "directory");

    assets.insert("tier.txt", b"embedded".to_vec());
    assert_eq!(locator.read_to_string("tier.txt").unwrap(), "embedded");

    let context = MockResolver::new("override").with_resource("tier.txt", "context");
    ContextResolver::scope(Arc::new(context), || {
        assert_eq!(locator.read_to_string("tier.txt").unwrap(), "context");
    });

    assert_eq!(locator.read_to_string("tier.txt").unwrap(), "embedded");
}

#[test]
fn test_closure_resolvers_in_order() {
    let locator = ResourceLocator::builder()
        .with_fn("never", |_| None)
        .with_resolver(Box::new(
            MockResolver::new("mock").with_resource("x.txt", "mock"),
        ))
        .build();

    assert_eq!(locator.resolver_names(), vec!["never", "mock"]);
    assert_eq!(locator.read_to_string("x.txt").unwrap(), "mock");
}
