use std::error::Error;
use std::fmt;

const INIT_ERROR_MSG: &str = "MIDI support could not be initialized";
const PORT_OUT_OF_RANGE_MSG: &str = "provided port number was out of range";
const CANNOT_RETRIEVE_PORT_NAME_MSG: &str = "unknown error when trying to retrieve the port name";
const HANDLE_CLOSED_MSG: &str = "MIDI resource has been closed";

/// The backend could not allocate a MIDI client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InitError {
    detail: Option<String>,
}

impl InitError {
    pub fn new() -> InitError {
        InitError { detail: None }
    }

    /// An initialization error carrying the message reported by the backend.
    pub fn with_detail<S: Into<String>>(detail: S) -> InitError {
        InitError {
            detail: Some(detail.into()),
        }
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl Error for InitError {}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.detail {
            Some(ref detail) => write!(f, "{}: {}", INIT_ERROR_MSG, detail),
            None => f.write_str(INIT_ERROR_MSG),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortInfoError {
    PortNumberOutOfRange,
    CannotRetrievePortName,
}

impl Error for PortInfoError {}

impl fmt::Display for PortInfoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PortInfoError::PortNumberOutOfRange => f.write_str(PORT_OUT_OF_RANGE_MSG),
            PortInfoError::CannotRetrievePortName => f.write_str(CANNOT_RETRIEVE_PORT_NAME_MSG),
        }
    }
}

/// Everything that can go wrong on a call through a wrapper object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The external resource could not be allocated; the wrapper is inert.
    ResourceInit(InitError),
    /// A missing or wrong-kind argument, rejected before any backend call.
    InvalidArgument(&'static str),
    /// The wrapped library failed the forwarded call.
    ExternalResource(PortInfoError),
    /// The wrapper has been closed and no longer owns a resource.
    HandleClosed,
}

impl Error for BindingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            BindingError::ResourceInit(ref err) => Some(err),
            BindingError::ExternalResource(ref err) => Some(err),
            BindingError::InvalidArgument(_) | BindingError::HandleClosed => None,
        }
    }
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BindingError::ResourceInit(ref err) => err.fmt(f),
            BindingError::InvalidArgument(msg) => f.write_str(msg),
            BindingError::ExternalResource(ref err) => err.fmt(f),
            BindingError::HandleClosed => f.write_str(HANDLE_CLOSED_MSG),
        }
    }
}

impl From<InitError> for BindingError {
    fn from(err: InitError) -> Self {
        BindingError::ResourceInit(err)
    }
}

impl From<PortInfoError> for BindingError {
    fn from(err: PortInfoError) -> Self {
        BindingError::ExternalResource(err)
    }
}

impl<T> From<ConstructError<T>> for BindingError {
    fn from(err: ConstructError<T>) -> Self {
        BindingError::ResourceInit(err.cause)
    }
}

/// Construction failed, but the (inert) object is still handed back.
pub struct ConstructError<T> {
    cause: InitError,
    inner: T,
}

impl<T> ConstructError<T> {
    pub fn new(cause: InitError, inner: T) -> ConstructError<T> {
        ConstructError { cause, inner }
    }

    pub fn cause(&self) -> &InitError {
        &self.cause
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> fmt::Debug for ConstructError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.cause.fmt(f)
    }
}

impl<T> fmt::Display for ConstructError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

impl<T> Error for ConstructError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}
