use crate::core::CallValue;
use crate::core::call::{CallLogic, Wrapped};
use crate::core::error::{CallError, FailureKind};

/// ------- Suppress -------------------------------------------------------------
/// Fallback-on-error: failures whose kind belongs to the configured set
/// are swallowed and replaced with a pre-configured value. Anything
/// outside the set propagates to the caller untouched, so a suppressor
/// configured for arithmetic failures will not eat a bad-argument error.
#[derive(Clone)]
pub struct SuppressLogic<L: CallLogic> {
    inner: L,
    kinds: Vec<FailureKind>,
    fallback: CallValue,
}

impl<L: CallLogic> SuppressLogic<L> {
    pub fn new(inner: L, kinds: Vec<FailureKind>, fallback: CallValue) -> Self {
        SuppressLogic {
            inner,
            kinds,
            fallback,
        }
    }
}

impl<L: CallLogic + Clone> CallLogic for SuppressLogic<L> {
    fn call(&self, args: CallValue) -> Result<CallValue, CallError> {
        match self.inner.call(args) {
            Err(e) if self.kinds.contains(&e.kind()) => {
                log::warn!(
                    "{}: suppressed {e}, returning {}",
                    self.inner.name(),
                    self.fallback
                );
                Ok(self.fallback.clone())
            }
            other => other,
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn clone_box(&self) -> Box<dyn CallLogic> {
        Box::new((*self).clone())
    }
}

/// The suppressed-callable factory
pub fn new_suppressed<L: CallLogic + Clone>(
    logic: L,
    kinds: Vec<FailureKind>,
    fallback: CallValue,
) -> Wrapped {
    Wrapped::new(SuppressLogic {
        inner: logic,
        kinds,
        fallback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::call::from_fn;
    use serde_json::json;

    fn divide() -> Wrapped {
        from_fn("divide", |args| {
            let pair = args
                .as_array()
                .filter(|pair| pair.len() == 2)
                .cloned()
                .ok_or_else(|| {
                    CallError::InvalidArgument("divide takes exactly two operands".into())
                })?;
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

    fn suppressed_divide() -> Wrapped {
        new_suppressed(divide(), vec![FailureKind::Arithmetic], json!(0.0))
    }

    #[test]
    fn test_success_is_untouched() {
        assert_eq!(
            suppressed_divide().call(json!([4, 2])).unwrap(),
            json!(2.0)
        );
    }

    #[test]
    fn test_configured_kind_becomes_fallback() {
        assert_eq!(
            suppressed_divide().call(json!([4, 0])).unwrap(),
            json!(0.0)
        );
    }

    #[test]
    fn test_unconfigured_kind_propagates() {
        // A null operand is a bad argument, not an arithmetic failure,
        // and the suppressor is only configured for the latter.
        let err = suppressed_divide()
            .call(json!([4, CallValue::Null]))
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidArgument);
    }

    #[test]
    fn test_empty_kind_set_suppresses_nothing() {
        let wrapped = new_suppressed(divide(), vec![], json!(0.0));
        assert!(wrapped.call(json!([4, 0])).is_err());
    }
}
