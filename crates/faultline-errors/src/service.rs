//! Leaf error types
//!
//! A leaf is a newtype over [`AppError`] with a fixed name. The shared
//! factory and normalization routine are generic over [`ServiceError`], so a
//! leaf only has to say how to wrap and unwrap the base error.

use std::error::Error as StdError;
use std::fmt;

use crate::app_error::AppError;
use crate::options::ErrorOptions;

/// Constructor contract for error subtypes
pub trait ServiceError:
    Sized + Clone + fmt::Debug + fmt::Display + StdError + Send + Sync + 'static
{
    /// Fixed label recorded as the error's `name`
    const NAME: &'static str;

    /// Adopt a built base error as this subtype
    fn from_app_error(inner: AppError) -> Self;

    fn as_app_error(&self) -> &AppError;

    fn into_app_error(self) -> AppError;

    fn new(message: impl Into<String>, options: ErrorOptions) -> Self {
        Self::from_app_error(AppError::named(Self::NAME, message, options))
    }

    /// Whether an error labelled `name` is this subtype or one of its
    /// descendants. Leaves accept only their own label.
    fn accepts(name: &str) -> bool {
        name == Self::NAME
    }

    /// Whether `err` can be adopted as this subtype without renaming
    fn is_instance(err: &AppError) -> bool {
        Self::accepts(err.name())
    }
}

/// Declare a leaf error type
///
/// Generates a newtype over [`AppError`] that derefs to it, converts into
/// `AppError` and [`Cause`](crate::Cause), and serializes as an error record.
/// A base type for a family of leaves passes `accepts = path;`, a
/// `fn(&str) -> bool` over descendant labels; adopted descendants keep their
/// own name.
///
/// # Example
///
/// ```
/// use faultline_errors::{define_service_error, ErrorOptions, ServiceError};
///
/// define_service_error! {
///     /// Errors raised by the search cluster client
///     pub struct SearchError => "SearchError";
/// }
///
/// let err = SearchError::new("index missing", ErrorOptions::with_defaults("SEARCH_NO_INDEX", 404));
/// assert_eq!(err.name(), "SearchError");
/// ```
#[macro_export]
macro_rules! define_service_error {
    (
        $(#[$meta:meta])* $vis:vis struct $name:ident => $label:literal;
        $(accepts = $accepts:path;)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name($crate::AppError);

        impl $crate::ServiceError for $name {
            const NAME: &'static str = $label;

            fn from_app_error(inner: $crate::AppError) -> Self {
                if <Self as $crate::ServiceError>::accepts(inner.name()) {
                    Self(inner)
                } else {
                    Self(inner.with_name($label))
                }
            }

            fn as_app_error(&self) -> &$crate::AppError {
                &self.0
            }

            fn into_app_error(self) -> $crate::AppError {
                self.0
            }

            $(
                fn accepts(name: &str) -> bool {
                    name == $label || $accepts(name)
                }
            )?
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::AppError;

            fn deref(&self) -> &$crate::AppError {
                &self.0
            }
        }

        impl ::std::convert::AsRef<$crate::AppError> for $name {
            fn as_ref(&self) -> &$crate::AppError {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                ::std::error::Error::source(&self.0)
            }
        }

        impl ::std::convert::From<$name> for $crate::AppError {
            fn from(err: $name) -> $crate::AppError {
                err.0
            }
        }

        impl ::std::convert::From<$name> for $crate::Cause {
            fn from(err: $name) -> $crate::Cause {
                $crate::Cause::from(err.0)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }
    };
}
