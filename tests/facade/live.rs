//! Tests against a running server
//!
//! Ignored by default. Point them at a disposable instance with
//! `KEYFRONT_TEST_HOST` / `KEYFRONT_TEST_PORT` and run with `--ignored`.

use std::time::Duration;

use keyfront::{names, Batch, ClientConfig, Command, SetOptions, TxnOutcome};

fn live_client(prefix: &str) -> keyfront::Client {
    let host = std::env::var("KEYFRONT_TEST_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("KEYFRONT_TEST_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(6379);
    let config = ClientConfig::new(host, port)
        .with_prefix(prefix)
        .with_timeout(Duration::from_secs(2));
    keyfront::connect(&config).unwrap()
}

#[test]
#[ignore]
fn test_live_ping() {
    assert_eq!(live_client("kf-test:").ping().unwrap(), "PONG");
}

#[test]
#[ignore]
fn test_live_string_round_trip() {
    let client = live_client("kf-test:");

    client.set("live:k", "v", SetOptions::new().ex(30)).unwrap();
    assert_eq!(client.get_string("live:k").unwrap().as_deref(), Some("v"));
    assert!(client.ttl("live:k").unwrap() > 0);

    client.del(["live:k"]).unwrap();
}

#[test]
#[ignore]
fn test_live_transaction() {
    let client = live_client("kf-test:");
    client.del(["live:n"]).unwrap();

    let outcome = client
        .pipeline(
            Batch::new()
                .watch("live:n")
                .add(Command::new(names::INCR).key("live:n"))
                .add(Command::new(names::INCR).key("live:n")),
        )
        .unwrap();

    assert!(matches!(outcome, TxnOutcome::Committed(ref r) if r.len() == 2));
    client.del(["live:n"]).unwrap();
}
