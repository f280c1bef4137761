//! Fallback demonstration: swallow a configured failure kind, let the
//! rest propagate.
//!
//! Division by zero is in the suppression set, so it quietly becomes 0.0.
//! A null operand is a different failure kind entirely and reaches the
//! caller untouched.

use filigree::prelude::*;
use serde_json::json;

fn divide() -> Wrapped {
    from_fn("divide", |args| {
        let pair = args
            .as_array()
            .filter(|pair| pair.len() == 2)
            .cloned()
            .ok_or_else(|| CallError::InvalidArgument("divide takes exactly two operands".into()))?;
        if pair[0].is_null() {
            return Err(CallError::InvalidArgument("x can't be null".into()));
        }
        if pair[1].is_null() {
            return Err(CallError::InvalidArgument("y can't be null".into()));
        }
        let x = pair[0]
            .as_f64()
            .ok_or_else(|| CallError::InvalidArgument("x must be a number".into()))?;
        let y = pair[1]
            .as_f64()
            .ok_or_else(|| CallError::InvalidArgument("y must be a number".into()))?;
        if y == 0.0 {
            return Err(CallError::Arithmetic(format!("{x} / 0")));
        }
        Ok(json!(x / y))
    })
}

fn main() {
    println!("=== Filigree Fallback Demo ===\n");

    let divide = wrap(
        divide(),
        Policy::Suppress {
            kinds: vec![FailureKind::Arithmetic],
            fallback: json!(0.0),
        },
    );

    for operands in [json!([4, 2]), json!([4, 0]), json!([4, CallValue::Null])] {
        match divide.call(operands.clone()) {
            Ok(v) => println!("divide({operands}) = {v}"),
            Err(e) => println!("divide({operands}) failed: {e}"),
        }
    }
}
