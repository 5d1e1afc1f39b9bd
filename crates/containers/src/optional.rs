use crate::error::ValueAccessError;
use crate::outcome::Outcome;

/// Presence or absence of a value of type `T`.
///
/// Immutable after construction; every combinator consumes the container and
/// produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optional<T> {
    Some(T),
    None,
}

impl<T> Optional<T> {
    /// Constructs an `Optional::Some(value)` variant.
    pub fn some(value: T) -> Self {
        Optional::Some(value)
    }

    /// Constructs an `Optional::None` variant.
    pub fn none() -> Self {
        Optional::None
    }

    /// Returns true if the value is `Some`.
    pub fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Returns true if the value is `None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Optional::None)
    }

    /// Returns true if the value is `Some` and the held value satisfies `pred`.
    pub fn is_some_and<F: FnOnce(T) -> bool>(self, pred: F) -> bool {
        match self {
            Optional::Some(value) => pred(value),
            Optional::None => false,
        }
    }

    /// Returns the held value, panicking with a [`ValueAccessError`] message
    /// when called on `None`.
    pub fn unwrap(self) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => panic!("{}", ValueAccessError::new("unwrap", "None")),
        }
    }

    /// Returns the held value, or `fallback` on `None`.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => fallback,
        }
    }

    /// Maps `Optional<T>` to `Optional<U>` by applying `f` to the held value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Optional::Some(value) => Optional::Some(f(value)),
            Optional::None => Optional::None,
        }
    }

    /// Applies `f` to the held value, or returns `fallback` on `None`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, fallback: U, f: F) -> U {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => fallback,
        }
    }

    /// Applies `f` to the held value, or computes the fallback on `None`.
    /// The fallback thunk runs only on `None`.
    pub fn map_or_else<U, D, F>(self, fallback: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => fallback(),
        }
    }

    /// Converts to an [`Outcome`]: `Some` becomes `Ok`, `None` becomes
    /// `Err(error)`.
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Optional::Some(value) => Outcome::Ok(value),
            Optional::None => Outcome::Err(error),
        }
    }

    /// Converts to an [`Outcome`], computing the error only on `None`.
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, error: F) -> Outcome<T, E> {
        match self {
            Optional::Some(value) => Outcome::Ok(value),
            Optional::None => Outcome::Err(error()),
        }
    }

    /// Chains a fallible continuation: `Some` feeds the value to `f`, `None`
    /// stays `None`.
    pub fn and_then<F: FnOnce(T) -> Optional<T>>(self, f: F) -> Optional<T> {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => Optional::None,
        }
    }

    /// Observes the held value without transforming it. The container passes
    /// through unchanged; `f` runs only on `Some`.
    pub fn and_then_continue<F: FnOnce(&T)>(self, f: F) -> Optional<T> {
        match self {
            Optional::Some(value) => {
                f(&value);
                Optional::Some(value)
            }
            Optional::None => Optional::None,
        }
    }

    /// Returns `other` if this is `Some`, otherwise `None`.
    pub fn and(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Some(_) => other,
            Optional::None => Optional::None,
        }
    }

    /// Keeps the held value only if it satisfies `pred`.
    pub fn filter<F: FnOnce(&T) -> bool>(self, pred: F) -> Optional<T> {
        match self {
            Optional::Some(value) => {
                if pred(&value) {
                    Optional::Some(value)
                } else {
                    Optional::None
                }
            }
            Optional::None => Optional::None,
        }
    }

    /// Returns this container if `Some`, otherwise `other`.
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => other,
        }
    }

    /// Returns this container if `Some`, otherwise the thunk's result. The
    /// thunk runs only on `None`.
    pub fn or_else<F: FnOnce() -> Optional<T>>(self, f: F) -> Optional<T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => f(),
        }
    }

    /// Runs `f` only on `None`, for observation; the container passes through
    /// unchanged.
    pub fn or_else_continue<F: FnOnce()>(self, f: F) -> Optional<T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => {
                f();
                Optional::None
            }
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Converts from the standard `Option<T>`.
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }

    /// Converts into the standard `Option<T>`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        Optional::from_option(option)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}
