//! Structural zero-value checks.
//!
//! [`ZeroValue`] is used by [`Optional::of_nonzero_deep()`](crate::Optional::of_nonzero_deep()) to decide
//! whether a value should be treated as absent. Unlike comparing with [`Default::default()`], the check
//! doesn't require the type to implement `PartialEq` or `Default`; composite types are checked recursively.
//!
//! # Implementations
//!
//! | Type | Zero value |
//! |:-----|:-----------|
//! | `bool` | `false` |
//! | Integers | `0` |
//! | `f32`, `f64` | `0.0` (incl. `-0.0`; NaN is not zero) |
//! | `char` | `'\0'` |
//! | `()`, `PhantomData<_>` | always zero |
//! | Strings and paths | empty |
//! | Slices, `Vec`, `VecDeque`, sets and maps | empty |
//! | Arrays `[T; N]`, tuples | all elements are zero |
//! | `Option<T>` | `None` (`Some(_)` is never zero, even if the wrapped value is) |
//! | `&T`, `Box<T>`, `Rc<T>`, `Arc<T>`, `Cow<'_, T>` | the pointee is zero |
//! | `Duration` | zero duration |
//! | [`Optional<T>`](crate::Optional) | empty |
//!
//! For custom structs and enums, `ZeroValue` can be derived.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    ffi::{OsStr, OsString},
    marker::PhantomData,
    path::{Path, PathBuf},
    rc::Rc,
    sync::Arc,
    time::Duration,
};

use crate::Optional;

/// Structural check whether a value is the zero value of its type.
///
/// # Deriving
///
/// The trait can be derived for structs and enums via `#[derive(ZeroValue)]` (requires the `derive` crate feature,
/// which is on by default).
///
/// - A struct is zero if all of its fields are zero. Fields marked with `#[zero_value(skip)]` are not checked.
///   A struct without fields is always zero.
/// - An enum must mark exactly one variant with `#[zero_value(zero)]`. An enum value is zero if it is this variant,
///   and all of the variant fields are zero.
/// - Type params of a generic type get a `ZeroValue` bound.
///
/// ```
/// use optional_value::{Optional, ZeroValue};
///
/// #[derive(Debug, ZeroValue)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// #[derive(Debug, ZeroValue)]
/// enum Shape {
///     #[zero_value(zero)]
///     Nothing,
///     Circle { center: Point, radius: f64 },
/// }
///
/// assert!(Point { x: 0, y: 0 }.is_zero_value());
/// assert!(Optional::of_nonzero_deep(Shape::Nothing).is_empty());
/// let circle = Shape::Circle { center: Point { x: 0, y: 0 }, radius: 1.0 };
/// assert!(Optional::of_nonzero_deep(circle).is_present());
/// ```
pub trait ZeroValue {
    /// Checks whether this value is zero.
    fn is_zero_value(&self) -> bool;
}

macro_rules! impl_zero_value_for_numbers {
    ($zero:literal => $($ty:ty),+) => {
        $(
        impl ZeroValue for $ty {
            fn is_zero_value(&self) -> bool {
                *self == $zero
            }
        }
        )+
    };
}

impl_zero_value_for_numbers!(0 => u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);
impl_zero_value_for_numbers!(0.0 => f32, f64);

impl ZeroValue for bool {
    fn is_zero_value(&self) -> bool {
        !*self
    }
}

impl ZeroValue for char {
    fn is_zero_value(&self) -> bool {
        *self == '\0'
    }
}

impl ZeroValue for () {
    fn is_zero_value(&self) -> bool {
        true
    }
}

impl<T: ?Sized> ZeroValue for PhantomData<T> {
    fn is_zero_value(&self) -> bool {
        true
    }
}

impl ZeroValue for Duration {
    fn is_zero_value(&self) -> bool {
        self.is_zero()
    }
}

macro_rules! impl_zero_value_for_empty {
    ($($ty:ty),+) => {
        $(
        impl ZeroValue for $ty {
            fn is_zero_value(&self) -> bool {
                self.is_empty()
            }
        }
        )+
    };
}

impl_zero_value_for_empty!(str, String, OsStr, OsString);

impl ZeroValue for Path {
    fn is_zero_value(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl ZeroValue for PathBuf {
    fn is_zero_value(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl<T> ZeroValue for [T] {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for Vec<T> {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for VecDeque<T> {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> ZeroValue for HashSet<T, S> {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for BTreeSet<T> {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> ZeroValue for HashMap<K, V, S> {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> ZeroValue for BTreeMap<K, V> {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: ZeroValue, const N: usize> ZeroValue for [T; N] {
    fn is_zero_value(&self) -> bool {
        self.iter().all(ZeroValue::is_zero_value)
    }
}

impl<T> ZeroValue for Option<T> {
    fn is_zero_value(&self) -> bool {
        self.is_none()
    }
}

impl<T> ZeroValue for Optional<T> {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: ZeroValue + ?Sized> ZeroValue for &T {
    fn is_zero_value(&self) -> bool {
        (**self).is_zero_value()
    }
}

impl<T: ZeroValue + ?Sized> ZeroValue for Box<T> {
    fn is_zero_value(&self) -> bool {
        (**self).is_zero_value()
    }
}

impl<T: ZeroValue + ?Sized> ZeroValue for Rc<T> {
    fn is_zero_value(&self) -> bool {
        (**self).is_zero_value()
    }
}

impl<T: ZeroValue + ?Sized> ZeroValue for Arc<T> {
    fn is_zero_value(&self) -> bool {
        (**self).is_zero_value()
    }
}

impl<T: ZeroValue + ToOwned + ?Sized> ZeroValue for Cow<'_, T> {
    fn is_zero_value(&self) -> bool {
        (**self).is_zero_value()
    }
}

macro_rules! impl_zero_value_for_tuple {
    ($($ty:ident : $idx:tt),+) => {
        impl<$($ty: ZeroValue,)+> ZeroValue for ($($ty,)+) {
            fn is_zero_value(&self) -> bool {
                $(self.$idx.is_zero_value())&&+
            }
        }
    };
}

impl_zero_value_for_tuple!(A: 0);
impl_zero_value_for_tuple!(A: 0, B: 1);
impl_zero_value_for_tuple!(A: 0, B: 1, C: 2);
impl_zero_value_for_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_zero_value_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_zero_value_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_zero_value_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_zero_value_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_primitives() {
        assert!(0_u8.is_zero_value());
        assert!(0_i64.is_zero_value());
        assert!(!(-1_i64).is_zero_value());
        assert!(!u128::MAX.is_zero_value());
        assert!(false.is_zero_value());
        assert!(!true.is_zero_value());
        assert!('\0'.is_zero_value());
        assert!(!'a'.is_zero_value());
        assert!(().is_zero_value());
        assert!(PhantomData::<String>.is_zero_value());
    }

    #[test]
    fn zero_floats() {
        assert!(0.0_f64.is_zero_value());
        assert!((-0.0_f64).is_zero_value());
        assert!(!f64::NAN.is_zero_value());
        assert!(!f32::MIN_POSITIVE.is_zero_value());
    }

    #[test]
    fn zero_strings_and_paths() {
        assert!("".is_zero_value());
        assert!(!"test".is_zero_value());
        assert!(String::new().is_zero_value());
        assert!(Path::new("").is_zero_value());
        assert!(!PathBuf::from("/tmp").is_zero_value());
        assert!(OsString::new().is_zero_value());
        assert!(Cow::<str>::Borrowed("").is_zero_value());
        assert!(!Cow::<str>::Owned("owned".into()).is_zero_value());
    }

    #[test]
    fn zero_collections() {
        assert!(Vec::<u32>::new().is_zero_value());
        assert!(!vec![0_u32].is_zero_value());
        assert!(VecDeque::<u32>::new().is_zero_value());
        assert!([0_u8; 0][..].is_zero_value());
        assert!(HashMap::<String, u32>::new().is_zero_value());
        assert!(!HashMap::from([("a", 0)]).is_zero_value());
        assert!(BTreeSet::<u32>::new().is_zero_value());
        assert!(!HashSet::from([0]).is_zero_value());
        assert!(BTreeMap::<u32, u32>::new().is_zero_value());
    }

    #[test]
    fn zero_arrays_and_tuples() {
        assert!([0_u32; 4].is_zero_value());
        assert!(![0, 0, 1].is_zero_value());
        assert!((0, "", false).is_zero_value());
        assert!(!(0, "", true).is_zero_value());
        assert!(((0, 0.0), [None::<u8>; 2]).is_zero_value());
    }

    #[test]
    fn zero_options_and_pointers() {
        assert!(None::<u32>.is_zero_value());
        assert!(!Some(0_u32).is_zero_value());
        assert!(Box::new(0_u32).is_zero_value());
        assert!(!Box::new(1_u32).is_zero_value());
        assert!(Rc::new(String::new()).is_zero_value());
        assert!(Arc::<str>::from("").is_zero_value());
        assert!(!Arc::<[u8]>::from([1_u8].as_slice()).is_zero_value());
        assert!(<&u64 as ZeroValue>::is_zero_value(&&0));
        assert!(Optional::<u32>::empty().is_zero_value());
        assert!(!Optional::of(0_u32).is_zero_value());
    }

    #[test]
    fn zero_duration() {
        assert!(Duration::ZERO.is_zero_value());
        assert!(!Duration::from_millis(1).is_zero_value());
    }
}
