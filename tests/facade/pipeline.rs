//! Transaction tests

use std::sync::Arc;
use std::thread;

use crate::common::*;
use keyfront::{names, Batch, Command, SetOptions, TxnOutcome};

#[test]
fn test_commit_applies_every_command() {
    let (facade, _) = create_facade("bank:");
    facade.set("alice", "100", SetOptions::new()).unwrap();

    let batch = Batch::new()
        .watch("alice")
        .add(Command::new(names::DECRBY).key("alice").arg(30))
        .add(Command::new(names::INCRBY).key("bob").arg(30));

    let replies = facade.pipeline(batch).unwrap().into_replies().unwrap();

    assert_eq!(replies.len(), 2);
    assert_eq!(facade.get_string("alice").unwrap().as_deref(), Some("70"));
    assert_eq!(facade.get_string("bob").unwrap().as_deref(), Some("30"));
}

#[test]
fn test_conflict_on_watched_key_aborts() {
    let (facade, store) = create_facade("bank:");
    facade.set("alice", "100", SetOptions::new()).unwrap();

    store.interfere_next_transaction("bank:alice", "5");
    let outcome = facade
        .pipeline(
            Batch::new()
                .watch("alice")
                .add(Command::new(names::SET).key("alice").arg("70")),
        )
        .unwrap();

    assert_eq!(outcome, TxnOutcome::Aborted);
    assert_eq!(facade.get_string("alice").unwrap().as_deref(), Some("5"));
}

#[test]
fn test_write_to_unwatched_key_commits() {
    let (facade, store) = create_facade("bank:");

    store.interfere_next_transaction("bank:other", "x");
    let outcome = facade
        .pipeline(
            Batch::new()
                .watch("alice")
                .add(Command::new(names::SET).key("alice").arg("1")),
        )
        .unwrap();

    assert!(outcome.is_committed());
}

#[test]
fn test_concurrent_transactions_do_not_lose_updates() {
    let (facade, _) = create_facade("c:");
    let facade = Arc::new(facade);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let facade = Arc::clone(&facade);
            thread::spawn(move || {
                for _ in 0..25 {
                    let outcome = facade
                        .pipeline(
                            Batch::new()
                                .watch("n")
                                .add(Command::new(names::INCR).key("n"))
                                .add(Command::new(names::INCR).key("n")),
                        )
                        .unwrap();
                    assert!(outcome.is_committed());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(facade.get_string("n").unwrap().as_deref(), Some("400"));
}
