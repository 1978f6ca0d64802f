//! The originating failure referenced by an error
//!
//! A caught value is either one of our own errors, a foreign error type, or
//! plain data (a JSON object from an SDK response, a string, a number, null).
//! All three are held behind shared, read-only handles.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::app_error::AppError;

/// Foreign error handle
pub type ForeignError = Arc<dyn StdError + Send + Sync + 'static>;

/// Original value an error was built from
#[derive(Debug, Clone)]
pub enum Cause {
    /// An error of this system
    App(Arc<AppError>),
    /// Any other error type
    Foreign(ForeignError),
    /// Non-error data, including null
    Value(Value),
}

impl Cause {
    /// Wrap a foreign error value
    pub fn foreign<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Foreign(Arc::new(err))
    }

    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn as_app_error(&self) -> Option<&AppError> {
        match self {
            Self::App(err) => Some(&**err),
            _ => None,
        }
    }

    pub fn as_foreign(&self) -> Option<&ForeignError> {
        match self {
            Self::Foreign(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// View as a `std::error::Error`, if the cause is an error at all
    pub fn as_error(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::App(err) => Some(&**err),
            Self::Foreign(err) => Some(&**err),
            Self::Value(_) => None,
        }
    }

    /// Identity check: same allocation for error causes, equal data for values
    pub fn is_same(&self, other: &Cause) -> bool {
        match (self, other) {
            (Self::App(a), Self::App(b)) => Arc::ptr_eq(a, b),
            (Self::Foreign(a), Self::Foreign(b)) => Arc::ptr_eq(a, b),
            (Self::Value(a), Self::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::App(err) => fmt::Display::fmt(err, f),
            Self::Foreign(err) => fmt::Display::fmt(err, f),
            Self::Value(Value::String(s)) => f.write_str(s),
            Self::Value(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl From<AppError> for Cause {
    fn from(err: AppError) -> Self {
        Self::App(Arc::new(err))
    }
}

impl From<Arc<AppError>> for Cause {
    fn from(err: Arc<AppError>) -> Self {
        Self::App(err)
    }
}

impl From<ForeignError> for Cause {
    fn from(err: ForeignError) -> Self {
        Self::Foreign(err)
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Cause {
    fn from(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::Foreign(Arc::from(err))
    }
}

impl From<anyhow::Error> for Cause {
    fn from(err: anyhow::Error) -> Self {
        Box::<dyn StdError + Send + Sync + 'static>::from(err).into()
    }
}

impl From<std::io::Error> for Cause {
    fn from(err: std::io::Error) -> Self {
        Self::foreign(err)
    }
}

impl From<serde_json::Error> for Cause {
    fn from(err: serde_json::Error) -> Self {
        Self::foreign(err)
    }
}

impl From<Value> for Cause {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<()> for Cause {
    fn from(_: ()) -> Self {
        Self::null()
    }
}

macro_rules! value_cause {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Cause {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

value_cause!(&str, String, bool, i32, i64, u32, u64, f64);

impl<T: Into<Cause>> From<Option<T>> for Cause {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Into::into)
    }
}
