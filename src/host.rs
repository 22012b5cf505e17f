//! The boundary to the embedding scripting host.
//!
//! Hosts see dynamically typed [`Value`]s, construct classes by name out of a
//! module namespace ([`Exports`]) and call methods on the resulting
//! [`Object`]s. Each object owns one native value (its internal field), which
//! is dropped together with the object.

use std::any::Any;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use crate::errors::BindingError;

/// A dynamically typed value as passed across the host boundary.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

static UNDEFINED: Value = Value::Undefined;

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(*self, Value::Undefined)
    }

    pub fn is_number(&self) -> bool {
        matches!(*self, Value::Number(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match *self {
            Value::String(ref s) => Some(s),
            _ => None,
        }
    }

    /// The value as an integer index, if it is a finite number without a
    /// fractional part. Negative indices are returned as-is; integers beyond
    /// the `i64` range saturate to `i64::MIN`/`i64::MAX`.
    pub fn as_index(&self) -> Option<i64> {
        match *self {
            // float-to-int `as` casts saturate
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(n as i64),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Error,
    TypeError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorKind::Error => f.write_str("Error"),
            ErrorKind::TypeError => f.write_str("TypeError"),
        }
    }
}

/// An exception raised into the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    kind: ErrorKind,
    message: String,
}

impl HostError {
    pub fn error<S: Into<String>>(message: S) -> HostError {
        HostError {
            kind: ErrorKind::Error,
            message: message.into(),
        }
    }

    pub fn type_error<S: Into<String>>(message: S) -> HostError {
        HostError {
            kind: ErrorKind::TypeError,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Error for HostError {}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl From<BindingError> for HostError {
    fn from(err: BindingError) -> Self {
        match err {
            BindingError::InvalidArgument(msg) => HostError::type_error(msg),
            other => HostError::error(other.to_string()),
        }
    }
}

/// The arguments of one call from the host.
#[derive(Debug, Clone, Copy)]
pub struct CallInfo<'a> {
    args: &'a [Value],
}

impl<'a> CallInfo<'a> {
    pub fn new(args: &'a [Value]) -> CallInfo<'a> {
        CallInfo { args }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The argument at `index`, or `Undefined` past the end.
    pub fn get(&self, index: usize) -> &'a Value {
        self.args.get(index).unwrap_or(&UNDEFINED)
    }
}

type Constructor<T> = Box<dyn Fn(&CallInfo<'_>) -> Result<T, HostError>>;
type Method<T> = Box<dyn Fn(&mut T, &CallInfo<'_>) -> Result<Value, HostError>>;

/// Describes a constructible class whose instances wrap a native `T`.
pub struct FunctionTemplate<T> {
    class_name: &'static str,
    constructor: Constructor<T>,
    methods: Vec<(&'static str, Method<T>)>,
}

impl<T: 'static> FunctionTemplate<T> {
    pub fn new<F>(class_name: &'static str, constructor: F) -> Self
    where
        F: Fn(&CallInfo<'_>) -> Result<T, HostError> + 'static,
    {
        FunctionTemplate {
            class_name,
            constructor: Box::new(constructor),
            methods: Vec::new(),
        }
    }

    /// Installs (or replaces) a method on every instance of the class.
    pub fn set_prototype_method<F>(&mut self, name: &'static str, method: F)
    where
        F: Fn(&mut T, &CallInfo<'_>) -> Result<Value, HostError> + 'static,
    {
        self.methods.retain(|&(existing, _)| existing != name);
        self.methods.push((name, Box::new(method)));
    }

    pub fn class_name(&self) -> &'static str {
        self.class_name
    }
}

trait Class {
    fn class_name(&self) -> &'static str;
    fn construct(&self, info: &CallInfo<'_>) -> Result<Box<dyn Any>, HostError>;
    fn invoke(&self, internal: &mut dyn Any, method: &str, info: &CallInfo<'_>) -> Result<Value, HostError>;
}

impl<T: 'static> Class for FunctionTemplate<T> {
    fn class_name(&self) -> &'static str {
        self.class_name
    }

    fn construct(&self, info: &CallInfo<'_>) -> Result<Box<dyn Any>, HostError> {
        let native = (self.constructor)(info)?;
        Ok(Box::new(native))
    }

    fn invoke(&self, internal: &mut dyn Any, method: &str, info: &CallInfo<'_>) -> Result<Value, HostError> {
        let (_, method_fn) = self
            .methods
            .iter()
            .find(|&&(name, _)| name == method)
            .ok_or_else(|| HostError::type_error(format!("{}.{} is not a function", self.class_name, method)))?;
        let this = internal
            .downcast_mut::<T>()
            .ok_or_else(|| HostError::type_error("Illegal invocation"))?;
        method_fn(this, info)
    }
}

/// A module namespace that classes are installed into on load.
#[derive(Default)]
pub struct Exports {
    classes: BTreeMap<String, Rc<dyn Class>>,
}

impl Exports {
    pub fn new() -> Exports {
        Exports::default()
    }

    pub fn set<T: 'static>(&mut self, name: &str, template: FunctionTemplate<T>) {
        self.classes.insert(name.to_owned(), Rc::new(template));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// The host's `new <name>(...args)`.
    pub fn construct(&self, name: &str, args: &[Value]) -> Result<Object, HostError> {
        let class = self
            .classes
            .get(name)
            .ok_or_else(|| HostError::type_error(format!("{} is not a constructor", name)))?;
        let internal = class.construct(&CallInfo::new(args))?;
        Ok(Object {
            class: Rc::clone(class),
            internal,
        })
    }
}

/// A host object wrapping one native value.
pub struct Object {
    class: Rc<dyn Class>,
    internal: Box<dyn Any>,
}

impl Object {
    pub fn class_name(&self) -> &'static str {
        self.class.class_name()
    }

    pub fn call(&mut self, method: &str, args: &[Value]) -> Result<Value, HostError> {
        self.class.invoke(&mut *self.internal, method, &CallInfo::new(args))
    }

    /// Borrows the wrapped native value.
    pub fn unwrap<T: 'static>(&self) -> Option<&T> {
        self.internal.downcast_ref::<T>()
    }

    pub fn unwrap_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.internal.downcast_mut::<T>()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[object {}]", self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_exports() -> Exports {
        let mut t = FunctionTemplate::new("Counter", |info: &CallInfo<'_>| {
            Ok(info.get(0).as_index().unwrap_or(0))
        });
        t.set_prototype_method("increment", |this: &mut i64, _| {
            *this += 1;
            Ok(Value::from(*this))
        });
        let mut exports = Exports::new();
        exports.set("Counter", t);
        exports
    }

    #[test]
    fn index_conversion_only_accepts_integers() {
        assert_eq!(Value::from(3).as_index(), Some(3));
        assert_eq!(Value::from(-1).as_index(), Some(-1));
        assert_eq!(Value::from(1e20).as_index(), Some(i64::MAX));
        assert_eq!(Value::from(-1e20).as_index(), Some(i64::MIN));
        assert_eq!(Value::from(1.5).as_index(), None);
        assert_eq!(Value::from(f64::NAN).as_index(), None);
        assert_eq!(Value::from(f64::INFINITY).as_index(), None);
        assert_eq!(Value::from("1").as_index(), None);
        assert_eq!(Value::Undefined.as_index(), None);
    }

    #[test]
    fn missing_arguments_read_as_undefined() {
        let args = [Value::from(1)];
        let info = CallInfo::new(&args);
        assert_eq!(info.len(), 1);
        assert!(info.get(1).is_undefined());
    }

    #[test]
    fn objects_dispatch_to_their_native_value() {
        let exports = counter_exports();
        let mut obj = exports.construct("Counter", &[Value::from(41)]).unwrap();
        assert_eq!(obj.call("increment", &[]).unwrap(), Value::from(42));
        assert_eq!(obj.unwrap::<i64>(), Some(&42));
        assert_eq!(obj.class_name(), "Counter");
        assert_eq!(format!("{:?}", obj), "[object Counter]");
    }

    #[test]
    fn unknown_names_raise_type_errors() {
        let exports = counter_exports();
        let err = exports.construct("Nope", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeError);

        let mut obj = exports.construct("Counter", &[]).unwrap();
        let err = obj.call("decrement", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeError);
        assert_eq!(err.message(), "Counter.decrement is not a function");
    }

    #[test]
    fn binding_errors_map_to_host_error_kinds() {
        let err = HostError::from(BindingError::InvalidArgument("Must pass an index"));
        assert_eq!(err.kind(), ErrorKind::TypeError);
        assert_eq!(err.to_string(), "TypeError: Must pass an index");

        let err = HostError::from(BindingError::HandleClosed);
        assert_eq!(err.kind(), ErrorKind::Error);
        assert_eq!(err.message(), "MIDI resource has been closed");
    }
}
