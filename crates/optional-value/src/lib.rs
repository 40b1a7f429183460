//! `optional-value` – explicit optional value container with zero-value aware constructors.
//!
//! # Overview
//!
//! The library provides [`Optional`], a container that explicitly represents the presence or absence of a value.
//! It's intended to replace ad-hoc use of zero / sentinel values (`0`, `""`, an empty `Vec` etc.) to mean "no value".
//!
//! - [`Optional::of()`] and [`Optional::empty()`] construct present and empty optionals respectively.
//!   A present optional may hold a zero value.
//! - [`Optional::of_nonzero()`] and [`Optional::of_nonzero_deep()`] treat the zero value of a type as absent.
//!   The former compares with [`Default::default()`]; the latter uses the structural [`ZeroValue`] check, which
//!   can be derived for composite types.
//! - [`Optional::get()`] is the only fallible operation; it returns [`NoValueError`] for an empty optional.
//!   Other accessors take a fallback ([`Optional::get_or_else()`]), a fallback supplier ([`Optional::get_or_else_with()`])
//!   or branch callbacks ([`Optional::if_present_or_else()`]) and cannot fail.
//! - [`map()`] transforms the contained value, possibly changing its type.
//!
//! `Optional` is immutable: no method mutates an existing instance. Callbacks passed to its methods
//! are invoked synchronously, at most once, and only for the matching presence state.
//!
//! # Crate features
//!
//! ## `derive`
//!
//! *(On by default)*
//!
//! Re-exports the `ZeroValue` derive macro.
//!
//! ## `serde`
//!
//! *(Off by default)*
//!
//! Implements `Serialize` and `Deserialize` for [`Optional`]. An optional is (de)serialized in the same way
//! as the corresponding [`Option`].
//!
//! # Examples
//!
//! ## Basic workflow
//!
//! ```
//! use optional_value::{map, NoValueError, Optional};
//!
//! let timeout = Optional::of_nonzero(0_u64);
//! assert!(timeout.is_empty());
//! assert_eq!(timeout.get(), Err(NoValueError));
//! assert_eq!(timeout.get_or_else(30), 30);
//!
//! let retries = Optional::of(3_u32);
//! retries.if_present_or_else(
//!     |count| println!("retrying {count} times"),
//!     || unreachable!(),
//! );
//! let message = map(retries, |count| format!("{count} retries"));
//! assert_eq!(message.get()?, "3 retries");
//! # anyhow::Ok(())
//! ```
//!
//! ## Structural zero values
//!
//! ```
//! use optional_value::{Optional, ZeroValue};
//!
//! #[derive(Debug, ZeroValue)]
//! struct Credentials {
//!     user: String,
//!     tokens: Vec<String>,
//! }
//!
//! let creds = Credentials { user: String::new(), tokens: vec![] };
//! assert!(Optional::of_nonzero_deep(creds).is_empty());
//! let creds = Credentials { user: "admin".into(), tokens: vec![] };
//! assert!(Optional::of_nonzero_deep(creds).is_present());
//! ```

// Documentation settings
#![doc(html_root_url = "https://docs.rs/optional-value/0.2.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
// Linter settings
#![warn(missing_docs)]

/// Derives the [`ZeroValue`](trait@ZeroValue) trait for a type.
///
/// See the [trait docs](trait@ZeroValue#deriving) for the semantics of the derived implementation.
///
/// # Container attributes
///
/// ## `crate`
///
/// **Type:** path
///
/// Path to the `optional_value` crate, in case it's re-exported or renamed. Defaults to `::optional_value`.
///
/// # Variant attributes
///
/// ## `zero`
///
/// Marks the variant as the zero variant of an enum. Exactly one variant must be marked.
///
/// # Field attributes
///
/// ## `skip`
///
/// Excludes the field from the zero check.
///
/// # Examples
///
/// ```
/// use optional_value::ZeroValue;
///
/// #[derive(ZeroValue)]
/// struct Request<B> {
///     body: B,
///     #[zero_value(skip)]
///     id: u64,
/// }
///
/// assert!(Request { body: "", id: 42 }.is_zero_value());
/// assert!(!Request { body: vec![1], id: 0 }.is_zero_value());
/// ```
#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use optional_value_derive::ZeroValue;

pub use crate::{
    error::NoValueError,
    optional::{Optional, map},
    zero::ZeroValue,
};

mod error;
mod optional;
#[cfg(feature = "serde")]
mod serde_impl;
#[cfg(all(test, feature = "derive"))]
mod testonly;
pub mod zero;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
