//! Basic usage example for fieldcheck-validator

use fieldcheck_validator::prelude::*;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    registry::register(
        "isAdult",
        Predicate::new(|v, _, _, _| v.as_f64().is_some_and(|n| n >= 21.0)),
        Vec::new(),
    )?;

    let validator = Validator::new(json!({"name": "isNotEmptyString", "age": "isAdult"}).into())?;

    for input in [
        json!({"name": "Ada", "age": 37}),
        json!({"name": "  ", "age": 37}),
        json!({"name": "Bob", "age": 12}),
    ] {
        let value = Value::from(input);
        if validator.test(&value)? {
            println!("✓ {} is valid", serde_json::to_string(&value)?);
        } else {
            println!(
                "✗ {} is invalid, valid fields: {}",
                serde_json::to_string(&value)?,
                serde_json::to_string(&validator.pick(&value)?)?
            );
        }
    }

    // Positional arguments are mapped onto parameter names first
    let args = Value::from(Arguments::new([Value::from("Cy"), Value::from(40)]));
    let ok = validator.test_with(&args, &Signature::new(["name", "age"]))?;
    println!("\narguments (\"Cy\", 40) valid: {ok}");

    Ok(())
}
