use crate::core::CallValue;
use crate::core::call::{CallLogic, Wrapped};
use crate::core::error::CallError;

/// ------- Validate -------------------------------------------------------------
/// The simplest of the policies: look at the sole string argument before
/// the base callable ever runs, and refuse to proceed if it is empty.
/// Implemented generically over any `CallLogic` so it composes with the
/// other policies the same way they compose with each other.
#[derive(Clone)]
pub struct ValidateLogic<L: CallLogic> {
    inner: L,
}

impl<L: CallLogic> ValidateLogic<L> {
    pub fn new(inner: L) -> Self {
        ValidateLogic { inner }
    }
}

impl<L: CallLogic + Clone> CallLogic for ValidateLogic<L> {
    fn call(&self, args: CallValue) -> Result<CallValue, CallError> {
        match args.as_str() {
            Some("") => {
                log::debug!("{}: rejected empty input", self.inner.name());
                Err(CallError::InvalidArgument("text can't be empty".into()))
            }
            Some(_) => self.inner.call(args),
            // Nothing to validate on a non-string, so that is a rejection too.
            None => Err(CallError::InvalidArgument(format!(
                "{} expects a string argument",
                self.inner.name()
            ))),
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn clone_box(&self) -> Box<dyn CallLogic> {
        Box::new((*self).clone())
    }
}

/// The validated-callable factory
pub fn new_validated<L: CallLogic + Clone>(logic: L) -> Wrapped {
    Wrapped::new(ValidateLogic { inner: logic })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::call::from_fn;
    use crate::core::error::FailureKind;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn shout() -> Wrapped {
        from_fn("shout", |args| {
            let text = args.as_str().unwrap_or_default();
            Ok(json!(text.to_uppercase()))
        })
    }

    #[test]
    fn test_non_empty_passes_through_unchanged() {
        let wrapped = new_validated(shout());

        assert_eq!(wrapped.call(json!("hello")).unwrap(), json!("HELLO"));
        // Same result the bare callable would have produced
        assert_eq!(
            wrapped.call(json!("hello")).unwrap(),
            shout().call(json!("hello")).unwrap()
        );
    }

    #[test]
    fn test_empty_string_is_rejected() {
        let wrapped = new_validated(shout());

        let err = wrapped.call(json!("")).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidArgument);
    }

    #[test]
    fn test_base_is_not_invoked_on_rejection() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counting = from_fn("counting", move |args| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(args)
        });

        let wrapped = new_validated(counting);
        let _ = wrapped.call(json!(""));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        wrapped.call(json!("x")).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_non_string_is_rejected() {
        let wrapped = new_validated(shout());

        let err = wrapped.call(json!(42)).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidArgument);
    }

    #[test]
    fn test_name_is_preserved() {
        let wrapped = new_validated(shout());
        assert_eq!(wrapped.name(), "shout");
    }
}
