//! Validation demonstration: reject empty input before the base callable runs.
//!
//! Three little text transformers get the same treatment. With non-empty
//! input the wrapper is invisible; with empty input the base callable is
//! never invoked and the caller sees a rejection instead.

use filigree::prelude::*;

fn main() {
    println!("=== Filigree Validation Demo ===\n");

    let add_smile = wrap(
        from_fn("add_smile", |args| {
            let text = args.as_str().unwrap_or_default();
            Ok(CallValue::from(format!("{text} 🙂")))
        }),
        Policy::Validate,
    );

    let add_snake = wrap(
        from_fn("add_snake", |args| {
            let text = args.as_str().unwrap_or_default();
            Ok(CallValue::from(format!("{text} 🐍")))
        }),
        Policy::Validate,
    );

    let repeat = wrap(
        from_fn("repeat", |args| {
            let text = args.as_str().unwrap_or_default();
            Ok(CallValue::from(format!("{text} {text}")))
        }),
        Policy::Validate,
    );

    // Well-formed input sails through all three
    for callable in [&add_smile, &add_snake, &repeat] {
        show(callable, "Hello");
    }

    // Empty input is stopped at the door
    for callable in [&add_smile, &add_snake, &repeat] {
        show(callable, "");
    }
}

fn show(callable: &Wrapped, text: &str) {
    match callable.call(text.into()) {
        Ok(out) => println!("{}", out.as_str().unwrap_or_default()),
        Err(e) => println!("{callable} rejected {text:?}: {e}"),
    }
}
