use crate::error::ValueAccessError;

/// Success (`Ok`, payload `T`) or failure (`Err`, payload `E`) of an
/// operation. An empty payload is expressed with the unit type, e.g.
/// `Outcome::<(), E>::ok(())`.
///
/// Immutable after construction; every combinator consumes the container and
/// produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Constructs an `Outcome::Ok(value)` variant.
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Constructs an `Outcome::Err(error)` variant.
    pub fn error(error: E) -> Self {
        Outcome::Err(error)
    }

    /// Returns true if the outcome is `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns true if the outcome is `Err`.
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Returns true if the outcome is `Ok` and the success value satisfies
    /// `pred`.
    pub fn is_ok_and<F: FnOnce(T) -> bool>(self, pred: F) -> bool {
        match self {
            Outcome::Ok(value) => pred(value),
            Outcome::Err(_) => false,
        }
    }

    /// Returns true if the outcome is `Err` and the error value satisfies
    /// `pred`.
    pub fn is_error_and<F: FnOnce(E) -> bool>(self, pred: F) -> bool {
        match self {
            Outcome::Ok(_) => false,
            Outcome::Err(error) => pred(error),
        }
    }

    /// Returns the success value, panicking with a [`ValueAccessError`]
    /// message when called on `Err`.
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("{}", ValueAccessError::new("unwrap", "Err")),
        }
    }

    /// Returns the error value, panicking with a [`ValueAccessError`] message
    /// when called on `Ok`.
    pub fn unwrap_error(self) -> E {
        match self {
            Outcome::Ok(_) => panic!("{}", ValueAccessError::new("unwrap_error", "Ok")),
            Outcome::Err(error) => error,
        }
    }

    /// Returns the success value, or computes one from the error. `f` runs
    /// only on `Err`.
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => f(error),
        }
    }

    /// Maps `Outcome<T, E>` to `Outcome<U, E>` by applying `f` to the success
    /// value, leaving an error untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies `f` to the success value, or returns `fallback` on `Err`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, fallback: U, f: F) -> U {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(_) => fallback,
        }
    }

    /// Applies `f` to the success value, or `fallback` to the error. Only the
    /// branch that is taken runs.
    pub fn map_or_else<U, D, F>(self, fallback: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => fallback(error),
        }
    }

    /// Returns `other` if this is `Ok`; an `Err` short-circuits and keeps the
    /// original error.
    pub fn and(self, other: Outcome<T, E>) -> Outcome<T, E> {
        match self {
            Outcome::Ok(_) => other,
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a fallible continuation: `Ok` feeds the success value to `f`,
    /// an `Err` short-circuits with the original error.
    pub fn and_then<F: FnOnce(T) -> Outcome<T, E>>(self, f: F) -> Outcome<T, E> {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Observes the success value without transforming it. The container
    /// passes through unchanged; `f` runs only on `Ok`.
    pub fn and_then_continue<F: FnOnce(&T)>(self, f: F) -> Outcome<T, E> {
        match self {
            Outcome::Ok(value) => {
                f(&value);
                Outcome::Ok(value)
            }
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns this outcome if `Ok`, otherwise `other`.
    pub fn or(self, other: Outcome<T, E>) -> Outcome<T, E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(_) => other,
        }
    }

    /// Returns this outcome if `Ok`, otherwise the recovery computed from the
    /// error. `f` runs only on `Err`.
    pub fn or_else<F: FnOnce(E) -> Outcome<T, E>>(self, f: F) -> Outcome<T, E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => f(error),
        }
    }

    /// Observes the error value without transforming it. The container passes
    /// through unchanged; `f` runs only on `Err`.
    pub fn or_else_continue<F: FnOnce(&E)>(self, f: F) -> Outcome<T, E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => {
                f(&error);
                Outcome::Err(error)
            }
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts from the standard `Result<T, E>`.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }

    /// Converts into the standard `Result<T, E>`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
