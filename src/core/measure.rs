use crate::core::CallValue;
use crate::core::call::{CallLogic, Wrapped};
use crate::core::error::CallError;
use crate::core::timing::{Timing, TimingEntry};
use std::sync::Arc;
use std::time::Instant;

/// ------- Measure --------------------------------------------------------------
/// Wall-clock timing around a single synchronous call. The elapsed
/// duration is always emitted on the log facade; a [`Timing`] sink can
/// additionally be attached to get one structured record per invocation.
/// The base callable's result passes through untouched, failures
/// included: a failed call still gets timed.
#[derive(Clone)]
pub struct MeasureLogic<L: CallLogic> {
    inner: L,
    sink: Option<Arc<dyn Timing>>,
}

impl<L: CallLogic> MeasureLogic<L> {
    pub fn new(inner: L) -> Self {
        MeasureLogic { inner, sink: None }
    }

    pub fn with_sink(inner: L, sink: Arc<dyn Timing>) -> Self {
        MeasureLogic {
            inner,
            sink: Some(sink),
        }
    }
}

impl<L: CallLogic + Clone> CallLogic for MeasureLogic<L> {
    fn call(&self, args: CallValue) -> Result<CallValue, CallError> {
        let start = Instant::now();
        let result = self.inner.call(args);
        let elapsed = start.elapsed();

        log::info!("{}: execution time {:?}", self.inner.name(), elapsed);
        if let Some(sink) = &self.sink {
            sink.record(TimingEntry::new(self.inner.name(), elapsed, result.is_ok()));
        }

        result
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn clone_box(&self) -> Box<dyn CallLogic> {
        Box::new((*self).clone())
    }
}

/// The measured-callable factory
pub fn new_measured<L: CallLogic + Clone>(logic: L) -> Wrapped {
    Wrapped::new(MeasureLogic::new(logic))
}

/// Same, but every invocation also pushes a record into the given sink.
pub fn new_measured_with_sink<L: CallLogic + Clone>(logic: L, sink: Arc<dyn Timing>) -> Wrapped {
    Wrapped::new(MeasureLogic::with_sink(logic, sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::call::from_fn;
    use crate::core::timing::MemoryTimings;
    use serde_json::json;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_result_passes_through_unchanged() {
        let double = from_fn("double", |args| {
            let n = args.as_f64().unwrap_or_default();
            Ok(json!(n * 2.0))
        });

        let wrapped = new_measured(double);
        assert_eq!(wrapped.call(json!(21.0)).unwrap(), json!(42.0));
    }

    #[test]
    fn test_sink_gets_one_record_per_invocation() {
        let sink = Arc::new(MemoryTimings::new());
        let nap = from_fn("nap", |args| {
            thread::sleep(Duration::from_millis(10));
            Ok(args)
        });

        let wrapped = new_measured_with_sink(nap, Arc::clone(&sink) as Arc<dyn Timing>);
        wrapped.call(CallValue::Null).unwrap();
        wrapped.call(CallValue::Null).unwrap();

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "nap");
        assert!(entries[0].ok);
        // Slept 10ms, so the wall clock saw at least that much
        assert!(entries[0].elapsed >= Duration::from_millis(10));
    }

    #[test]
    fn test_failures_are_timed_and_propagated() {
        let sink = Arc::new(MemoryTimings::new());
        let broken = from_fn("broken", |_args| {
            Err(CallError::Arithmetic("division by zero".into()))
        });

        let wrapped = new_measured_with_sink(broken, Arc::clone(&sink) as Arc<dyn Timing>);
        assert!(wrapped.call(CallValue::Null).is_err());

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].ok);
    }
}
