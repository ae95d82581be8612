use proptest::prelude::*;
use serde_json::{json, Value};
use wave_expando::{check_attr_name, Expando};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".*".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn set_then_get_by_key(key in ".*", value in scalar()) {
        let mut e = Expando::new();
        e.set(key.clone(), value.clone());
        prop_assert_eq!(e.get(&key), &value);
        prop_assert!(e.contains(&key));
    }

    #[test]
    fn attr_and_key_views_agree(name in "[a-z_][a-z0-9_]{0,12}", value in scalar()) {
        prop_assume!(check_attr_name(&name).is_ok());

        let mut by_attr = Expando::new();
        by_attr.set_attr(&name, value.clone()).unwrap();
        prop_assert_eq!(&by_attr[name.as_str()], &value);

        let mut by_key = Expando::new();
        by_key.set(name.clone(), value.clone());
        prop_assert_eq!(by_key.attr(&name).unwrap(), &value);

        prop_assert_eq!(by_attr, by_key);
    }

    #[test]
    fn unrelated_writes_leave_absent_key_absent(
        key in "[a-z]{1,8}",
        other in "[A-Z]{1,8}",
        value in scalar(),
    ) {
        let mut e = Expando::new();
        prop_assert!(e.get(&key).is_null());
        e.set(other.clone(), value);
        prop_assert!(!e.contains(&key));
        prop_assert!(e.get(&key).is_null());
        e.remove(&other);
        prop_assert!(!e.contains(&key));
    }

    #[test]
    fn remove_makes_key_absent(key in ".*") {
        let mut e = Expando::try_from(json!({"keep": 1})).unwrap();
        e.set(key.clone(), 1);
        e.remove(&key);
        prop_assert!(!e.contains(&key));
        prop_assert!(e.get(&key).is_null());
        e.remove(&key);
        prop_assert!(!e.contains(&key));
    }
}
