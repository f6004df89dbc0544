//! Derive macros for the quickprop property testing engine

use proc_macro::TokenStream;

mod derive;

/// Derive a record shape for a struct with named fields
///
/// `#[derive(Record)]` on `User` generates a `UserShape` struct with one
/// public `BoxedArbitrary` field per field of `User`, implements
/// `Arbitrary<User>` for it, and implements `Record` for `User`. Every sample
/// populates each field exactly once from its own generator.
///
/// ```rust
/// use quickprop::{Arbitrary, Record, booleans, records, strings, StringConfig};
///
/// #[derive(Debug, Record)]
/// struct User {
///     name: String,
///     active: bool,
/// }
///
/// let users = records(UserShape::new(
///     strings(StringConfig::with_lengths(3, 12)).unwrap(),
///     booleans(),
/// ));
/// let user: User = users.arbitrary();
/// assert!(user.name.chars().count() >= 3);
/// ```
///
/// Generic structs, tuple structs, unit structs, enums and unions are
/// rejected at compile time.
#[proc_macro_derive(Record)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    derive::derive_record_impl(input)
}
