use sovran_any::{AnyError, AnyValue};
use std::collections::HashMap;

#[test]
fn test_basic_operations() {
    let mut value = AnyValue::from_value(5i32);

    // Read it back with the exact type
    assert_eq!(value.cast_to::<i32>(), Some(&5));
    assert_eq!(value.cast_to::<f64>(), None);

    // Replace with entirely new value of different type
    value.set("x".to_string());
    assert_eq!(value.cast_to::<i32>(), None);
    assert_eq!(value.cast_to::<String>().map(String::as_str), Some("x"));

    // Update in place
    value
        .with_mut(|text: &mut String| text.push('y'))
        .unwrap();
    assert_eq!(value.get::<String>().unwrap(), "xy");
}

#[test]
fn test_copy_then_mutate_original() {
    let mut a = AnyValue::from_value(5i32);
    let b = a.clone();

    a.set(10i32);

    assert_eq!(a.cast_to::<i32>(), Some(&10));
    assert_eq!(b.cast_to::<i32>(), Some(&5));
}

#[test]
fn test_copy_then_mutate_copy() {
    let a = AnyValue::from_value(vec![1, 2, 3]);
    let mut b = a.clone();

    b.set(vec![9]);

    assert_eq!(a.cast_to::<Vec<i32>>(), Some(&vec![1, 2, 3]));
    assert_eq!(b.cast_to::<Vec<i32>>(), Some(&vec![9]));
}

#[test]
fn test_move_leaves_source_empty() {
    let mut a = AnyValue::from_value(String::from("moved"));
    let b = a.take();

    assert!(a.is_empty());
    assert!(a.cast_to::<String>().is_none());
    assert!(a.cast_to::<i32>().is_none());
    assert_eq!(b.get::<String>().unwrap(), "moved");
}

#[test]
fn test_state_transitions() {
    let mut value = AnyValue::new();
    assert!(value.is_empty());

    // Empty -> Holding(u8)
    value.set(1u8);
    assert!(value.is::<u8>());

    // Holding(u8) -> Holding(u8), in place
    value.set(2u8);
    assert_eq!(value.cast_to::<u8>(), Some(&2));

    // Holding(u8) -> Holding(String) via copy
    let other = AnyValue::from_value(String::from("other"));
    value.clone_from(&other);
    assert!(value.is::<String>());

    // Holding(String) -> Holding(bool) via move
    let mut flag = AnyValue::from_value(true);
    value = flag.take();
    assert_eq!(value.cast_to::<bool>(), Some(&true));
    assert!(flag.is_empty());

    // Holding(bool) -> Empty
    value.reset();
    assert!(value.is_empty());
}

#[test]
fn test_heterogeneous_collection() {
    let mut slots: HashMap<&str, AnyValue> = HashMap::new();
    slots.insert("count", AnyValue::from_value(3usize));
    slots.insert("name", AnyValue::from_value(String::from("sovran")));
    slots.insert("ratio", AnyValue::from_value(0.25f32));

    assert_eq!(slots["count"].cast_to::<usize>(), Some(&3));
    assert_eq!(
        slots["name"].cast_to::<String>().map(String::as_str),
        Some("sovran")
    );
    assert_eq!(slots["ratio"].cast_to::<f32>(), Some(&0.25));

    // A cloned map carries independent values
    let snapshot = slots.clone();
    if let Some(count) = slots.get_mut("count") {
        count.set(4usize);
    }
    assert_eq!(snapshot["count"].cast_to::<usize>(), Some(&3));
    assert_eq!(slots["count"].cast_to::<usize>(), Some(&4));
}

#[test]
fn test_container_passed_as_value_is_copied() {
    let a = AnyValue::from_value(5i32);

    // Constructing from a container copies it instead of nesting it
    let b = AnyValue::from_value(a.clone());
    assert_eq!(b.cast_to::<i32>(), Some(&5));
    assert!(b.cast_to::<AnyValue>().is_none());

    // Assigning a container copies it as well
    let mut c = AnyValue::from_value(String::from("before"));
    c.set(a.clone());
    assert_eq!(c.cast_to::<i32>(), Some(&5));
    assert!(c.cast_to::<String>().is_none());

    // The copies stay independent of the source
    c.set(6i32);
    assert_eq!(a.cast_to::<i32>(), Some(&5));
    assert_eq!(b.cast_to::<i32>(), Some(&5));
}

#[test]
fn test_error_handling() {
    let empty = AnyValue::new();
    assert!(matches!(empty.get::<i32>(), Err(AnyError::Empty)));

    let value = AnyValue::from_value(42i32);
    let result = value.with(|text: &String| text.clone());
    assert!(matches!(result, Err(AnyError::TypeMismatch { .. })));

    let mut target = AnyValue::from_value(1i32);
    assert!(matches!(
        target.assign_from(&empty),
        Err(AnyError::EmptySource)
    ));
    assert_eq!(target.cast_to::<i32>(), Some(&1));

    let err: Box<dyn std::error::Error> = Box::new(AnyError::Empty);
    assert_eq!(err.to_string(), "Container holds no value");
}
