//! [`Optional`] container and its combinators.

use std::{any, fmt, option};

use crate::{error::NoValueError, zero::ZeroValue};

/// Immutable container that may or may not hold a value of type `T`.
///
/// Unlike using a zero value (`0`, `""`, an empty `Vec` etc.) to signal "no value", `Optional` makes absence explicit:
/// [`Self::of()`] always produces a present value, even if it's zero. The constructors [`Self::of_nonzero()`]
/// and [`Self::of_nonzero_deep()`] opt into treating the zero value as absent, which is useful when the zero value
/// is known to never be a legitimate domain value.
///
/// No method mutates an `Optional`; transformations like [`Self::map()`] produce a new instance.
/// A [default](Default) instance is empty.
///
/// # Examples
///
/// ```
/// use optional_value::{map, Optional};
///
/// let port = Optional::of(8080_u16);
/// assert!(port.is_present());
/// assert_eq!(port.get_or_else(3000), 8080);
///
/// let host = Optional::<String>::empty();
/// assert_eq!(host.get_or_else_with(|| "localhost".into()), "localhost");
///
/// let url = map(port, |port| format!("http://localhost:{port}"));
/// assert_eq!(url, Optional::of("http://localhost:8080".to_owned()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Optional").field(value).finish(),
            None => formatter.write_str("Optional.empty"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(formatter, "Optional({value})"),
            None => formatter.write_str("Optional.empty"),
        }
    }
}

impl<T> Optional<T> {
    /// Creates an optional holding the provided `value`. The value is present even if it's the zero value of `T`.
    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an empty optional.
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Creates an optional that is empty if `value` equals [`T::default()`](Default::default()),
    /// and holds `value` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use optional_value::Optional;
    /// assert!(Optional::of_nonzero(0).is_empty());
    /// assert!(Optional::of_nonzero(42).is_present());
    /// assert!(Optional::of_nonzero(String::new()).is_empty());
    /// ```
    pub fn of_nonzero(value: T) -> Self
    where
        T: PartialEq + Default,
    {
        if value == T::default() {
            tracing::trace!(ty = any::type_name::<T>(), "zero value collapsed to empty optional");
            Self::empty()
        } else {
            Self::of(value)
        }
    }

    /// Creates an optional that is empty if `value` is structurally zero as reported by [`ZeroValue`],
    /// and holds `value` otherwise.
    ///
    /// Unlike [`Self::of_nonzero()`], this doesn't require `T` to be comparable or have a default value.
    /// Composite types are zero if all their components are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use optional_value::Optional;
    /// assert!(Optional::of_nonzero_deep(Vec::<u8>::new()).is_empty());
    /// assert!(Optional::of_nonzero_deep(vec![1, 2, 3]).is_present());
    /// assert!(Optional::of_nonzero_deep((0, "")).is_empty());
    /// ```
    pub fn of_nonzero_deep(value: T) -> Self
    where
        T: ZeroValue,
    {
        if value.is_zero_value() {
            tracing::trace!(ty = any::type_name::<T>(), "zero value collapsed to empty optional");
            Self::empty()
        } else {
            Self::of(value)
        }
    }

    /// Checks whether this optional holds a value.
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Checks whether this optional is empty. Always the negation of [`Self::is_present()`].
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`NoValueError`] if the optional is empty.
    pub fn get(self) -> Result<T, NoValueError> {
        self.value.ok_or_else(|| {
            tracing::trace!(ty = any::type_name::<T>(), "attempted to get value from empty optional");
            NoValueError
        })
    }

    /// Returns the contained value together with no error, or the zero value of `T` together with [`NoValueError`]
    /// if the optional is empty.
    ///
    /// Prefer [`Self::get()`] unless the zero value is meaningful for the caller.
    pub fn get_or_zero(self) -> (T, Option<NoValueError>)
    where
        T: Default,
    {
        match self.get() {
            Ok(value) => (value, None),
            Err(err) => (T::default(), Some(err)),
        }
    }

    /// Returns the contained value, or `fallback` if the optional is empty.
    pub fn get_or_else(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    /// Returns the contained value, or invokes `supplier` if the optional is empty.
    /// `supplier` is invoked at most once and only for an empty optional.
    pub fn get_or_else_with(self, supplier: impl FnOnce() -> T) -> T {
        self.value.unwrap_or_else(supplier)
    }

    /// Invokes `action` with the contained value if it's present.
    pub fn if_present(self, action: impl FnOnce(T)) {
        if let Some(value) = self.value {
            action(value);
        }
    }

    /// Invokes `action` with the contained value if it's present, or `else_action` otherwise.
    /// Exactly one of the two callbacks is invoked.
    pub fn if_present_or_else(self, action: impl FnOnce(T), else_action: impl FnOnce()) {
        match self.value {
            Some(value) => action(value),
            None => else_action(),
        }
    }

    /// Invokes `action` if the optional is empty. Consumes the optional like the other callback methods;
    /// use [`Self::as_ref()`] to keep it.
    pub fn if_empty(self, action: impl FnOnce()) {
        if self.value.is_none() {
            action();
        }
    }

    /// Maps the contained value with `mapper`. For an empty optional, `mapper` is not invoked.
    /// See also the [`map()`](crate::map()) free function.
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Optional<U> {
        Optional {
            value: self.value.map(mapper),
        }
    }

    /// Borrows the contained value.
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }

    /// Borrows the contained value as a standard [`Option`].
    pub const fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Converts this optional into a standard [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Iterates over the contained value (i.e., yields 0 or 1 items).
    pub fn iter(&self) -> option::Iter<'_, T> {
        self.value.iter()
    }
}

/// Maps the value contained in `opt` with `mapper`, possibly changing its type. If `opt` is empty,
/// returns an empty optional without invoking `mapper`.
///
/// This is equivalent to [`Optional::map()`].
///
/// # Examples
///
/// ```
/// use optional_value::{map, Optional};
///
/// let describe = |value: i32| format!("Value is {value}");
/// assert_eq!(map(Optional::of(10), describe), Optional::of("Value is 10".to_owned()));
/// assert_eq!(map(Optional::empty(), describe), Optional::empty());
/// ```
pub fn map<T, U>(opt: Optional<T>, mapper: impl FnOnce(T) -> U) -> Optional<U> {
    opt.map(mapper)
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(opt: Optional<T>) -> Self {
        opt.value
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}
