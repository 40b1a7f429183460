//! Procedural macros for `optional-value`.
//!
//! All macros in this crate are re-exported from the `optional-value` crate. See its docs for more details
//! and the examples of usage.

// Documentation settings
#![doc(html_root_url = "https://docs.rs/optional-value-derive/0.2.0")]
// General settings
#![recursion_limit = "128"]
// Linter settings
#![allow(missing_docs)] // Adding docs here would interfere with docs in the main crate

extern crate proc_macro;

use proc_macro::TokenStream;

mod zero_value;

#[proc_macro_derive(ZeroValue, attributes(zero_value))]
pub fn zero_value(input: TokenStream) -> TokenStream {
    zero_value::impl_zero_value(input)
}
