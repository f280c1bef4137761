//! Timing demonstration: measure wall-clock time around each invocation.
//!
//! The measured callables here just sleep, so the printed durations land
//! a hair above one second. The records arrive through a `Timing` sink
//! that prints them as they come in.

use filigree::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Timing sink that prints each record as it arrives.
struct StdoutTimings;

impl Timing for StdoutTimings {
    fn record(&self, entry: TimingEntry) {
        println!("Execution time of {}: {:?}", entry.label, entry.elapsed);
    }

    fn flush(&self) {}
}

fn main() {
    println!("=== Filigree Timing Demo ===\n");

    let sink: Arc<dyn Timing> = Arc::new(StdoutTimings);

    let wait_one_second = new_measured_with_sink(
        from_fn("wait_one_second", |_args| {
            thread::sleep(Duration::from_secs(1));
            Ok(CallValue::Null)
        }),
        Arc::clone(&sink),
    );

    let wait_and_print = new_measured_with_sink(
        from_fn("wait_and_print", |args| {
            thread::sleep(Duration::from_secs(1));
            println!("{}", args.as_str().unwrap_or_default());
            Ok(CallValue::Null)
        }),
        Arc::clone(&sink),
    );

    wait_one_second
        .call(CallValue::Null)
        .expect("sleeping can't fail");
    wait_and_print
        .call("Hello".into())
        .expect("printing can't fail");
}
