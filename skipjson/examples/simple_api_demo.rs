// Example demonstrating the per-root-kind entry points

use skipjson::{parse_array_from_str, parse_object_from_str, tokenize, ParseError, Value};

fn main() -> Result<(), ParseError> {
    let json = r#"{"name": 'value', "number": 42, "flags": [1, true, null]}"#;
    println!("Input: {}", json);

    println!("Tokens:");
    for token in tokenize(json)? {
        println!("  {}", token);
    }

    let object = parse_object_from_str(json)?;
    for (key, value) in &object {
        match value {
            Value::Number(n) => println!("Key: '{}' Number: {} (object numbers are floats)", key, n),
            Value::Array(a) => println!("Key: '{}' Array of {}: {}", key, a.len(), a),
            other => println!("Key: '{}' Value: {}", key, other),
        }
    }

    // The same literal inside an array is an integer
    let array = parse_array_from_str("[42]")?;
    println!("Array element: {:?}", array[0]);

    println!();
    println!("✅ Successfully parsed!");
    Ok(())
}
