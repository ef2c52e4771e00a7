use sovran_any::{AnyError, AnyValue};
use std::collections::BTreeMap;

fn main() -> Result<(), AnyError> {
    let mut defaults: BTreeMap<&str, AnyValue> = BTreeMap::new();
    defaults.insert("retries", AnyValue::from_value(3u32));
    defaults.insert("verbose", AnyValue::from_value(false));
    defaults.insert("endpoint", AnyValue::from_value(String::from("localhost")));

    // Start the user's settings from a copy of the defaults
    let mut user = defaults.clone();

    // Overrides of the same type reuse the existing slot
    if let Some(retries) = user.get_mut("retries") {
        retries.set(5u32);
    }

    // Overrides can also come from another container
    let from_env = AnyValue::from_value(true);
    if let Some(verbose) = user.get_mut("verbose") {
        verbose.assign_from(&from_env)?;
    }

    for (key, value) in &user {
        let default = &defaults[key];
        println!("{}: {:?} (default {:?})", key, value, default);
    }

    let retries = *user["retries"].get::<u32>()?;
    let verbose = *user["verbose"].get::<bool>()?;
    let endpoint = user["endpoint"].get::<String>()?;
    println!("retries={} verbose={} endpoint={}", retries, verbose, endpoint);

    // Asking for the wrong type is an error, not a silent conversion
    if let Err(e) = user["retries"].get::<i64>() {
        println!("Lookup failed: {}", e);
    }

    Ok(())
}
