use crate::core::CallValue;
use crate::core::error::CallError;

/// A wrapped callable.
pub struct Wrapped {
    /// The logic implementation that defines the callable's behavior
    pub behaviour: Box<dyn CallLogic>,
}

impl Clone for Wrapped {
    fn clone(&self) -> Self {
        Self {
            behaviour: self.behaviour.clone_box(),
        }
    }
}

impl Wrapped {
    /// Creates a new wrapped callable with the given logic.
    pub fn new<L: CallLogic + 'static>(behaviour: L) -> Self {
        Wrapped {
            behaviour: Box::new(behaviour),
        }
    }

    /// Invokes the callable.
    ///
    /// A unary callable receives its argument directly; a variadic one
    /// receives a `Value::Array` of its arguments.
    pub fn call(&self, args: CallValue) -> Result<CallValue, CallError> {
        self.behaviour.call(args)
    }

    /// The callable's label, preserved through every wrapping layer.
    pub fn name(&self) -> &str {
        self.behaviour.name()
    }
}

/// Printing a wrapped callable shows the base callable's name, however
/// many layers deep it sits.
impl std::fmt::Display for Wrapped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<wrapped {}>", self.name())
    }
}

/// A `Wrapped` is itself call logic, so policies stack by re-wrapping.
impl CallLogic for Wrapped {
    fn call(&self, args: CallValue) -> Result<CallValue, CallError> {
        self.behaviour.call(args)
    }

    fn name(&self) -> &str {
        self.behaviour.name()
    }

    fn clone_box(&self) -> Box<dyn CallLogic> {
        Box::new(self.clone())
    }
}

/// Defines the behavior of a wrapped callable.
pub trait CallLogic: Send + Sync + 'static {
    /// Invoke the callable with the given argument value.
    fn call(&self, args: CallValue) -> Result<CallValue, CallError>;

    /// The callable's label, used for timing records and diagnostics.
    fn name(&self) -> &str;

    /// Create a boxed clone of this trait object.
    fn clone_box(&self) -> Box<dyn CallLogic>;
}

impl Clone for Box<dyn CallLogic> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Call logic backed by a plain closure.
///
/// Most callables don't warrant a dedicated struct, so this is the
/// workhorse behind [`from_fn`].
#[derive(Clone)]
pub struct FnLogic<F>
where
    F: Fn(CallValue) -> Result<CallValue, CallError> + Clone + Send + Sync + 'static,
{
    name: String,
    f: F,
}

impl<F> CallLogic for FnLogic<F>
where
    F: Fn(CallValue) -> Result<CallValue, CallError> + Clone + Send + Sync + 'static,
{
    fn call(&self, args: CallValue) -> Result<CallValue, CallError> {
        (self.f)(args)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn clone_box(&self) -> Box<dyn CallLogic> {
        Box::new((*self).clone())
    }
}

/// The closure-to-callable factory
pub fn from_fn<F>(name: &str, f: F) -> Wrapped
where
    F: Fn(CallValue) -> Result<CallValue, CallError> + Clone + Send + Sync + 'static,
{
    Wrapped::new(FnLogic {
        name: name.to_string(),
        f,
    })
}
