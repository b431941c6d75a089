//! Namespace isolation tests

use crate::common::*;
use keyfront::SetOptions;

#[test]
fn test_same_logical_key_in_two_namespaces() {
    let (tenant_a, store) = create_facade("a:");
    let tenant_b = share_store(&store, "b:");

    tenant_a.set("config", "red", SetOptions::new()).unwrap();
    tenant_b.set("config", "blue", SetOptions::new()).unwrap();

    assert_eq!(tenant_a.get_string("config").unwrap().as_deref(), Some("red"));
    assert_eq!(tenant_b.get_string("config").unwrap().as_deref(), Some("blue"));
    assert_eq!(store.effective_keys(), vec!["a:config", "b:config"]);
}

#[test]
fn test_keys_lists_only_own_namespace() {
    let (tenant_a, store) = create_facade("a:");
    let tenant_b = share_store(&store, "b:");

    tenant_a.set("x", "1", SetOptions::new()).unwrap();
    tenant_a.set("y", "2", SetOptions::new()).unwrap();
    tenant_b.set("z", "3", SetOptions::new()).unwrap();

    assert_eq!(tenant_a.keys(None).unwrap(), vec!["x", "y"]);
    assert_eq!(tenant_b.keys(Some("*")).unwrap(), vec!["z"]);
}

#[test]
fn test_empty_prefix_sees_effective_keys() {
    let (tenant_a, store) = create_facade("a:");
    let root = share_store(&store, "");

    tenant_a.set("x", "1", SetOptions::new()).unwrap();

    assert_eq!(root.keys(None).unwrap(), vec!["a:x"]);
    assert_eq!(root.get_string("a:x").unwrap().as_deref(), Some("1"));
}

#[test]
fn test_key_type_reports_stored_kind() {
    let (facade, _) = create_facade("t:");

    facade.set("s", "v", SetOptions::new()).unwrap();
    facade.sadd("set", ["m"]).unwrap();

    assert_eq!(facade.key_type("s").unwrap(), "string");
    assert_eq!(facade.key_type("set").unwrap(), "set");
    assert_eq!(facade.key_type("none").unwrap(), "none");
}

mod properties {
    use crate::common::*;
    use keyfront::SetOptions;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn stored_keys_carry_prefix_and_list_without_it(
            prefix in "[a-z]{1,6}:",
            key in "[a-z0-9:]{1,12}",
        ) {
            let (facade, store) = create_facade(&prefix);
            facade.set(&key, "v", SetOptions::new()).unwrap();

            prop_assert_eq!(store.effective_keys(), vec![format!("{}{}", prefix, key)]);
            prop_assert_eq!(facade.keys(None).unwrap(), vec![key]);
        }
    }
}
