//! See [`Record`](derive_record).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` implements `fs_reflect::Record` for a struct with
/// named fields. Each readable field is mapped to its name, and a lookup
/// calls `ToValue::to_value` on the field, so it always sees the current
/// content.
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// ## Readable Fields
///
/// Only `pub` fields are readable by default. Private fields do not exist
/// for lookups unless marked with `expose`:
///
/// ```rust, ignore
/// #[derive(Record)]
/// pub struct User {
///     pub name: String,      // readable as "name"
///     password: String,      // hidden
///     #[record(expose)]
///     score: u32,            // readable as "score"
/// }
/// ```
///
/// ## Field Attributes
///
/// - `#[record(skip)]`: hide the field. Required for readable fields whose
///   type does not implement `ToValue`.
/// - `#[record(expose)]`: make a private field readable.
/// - `#[record(rename = "...")]`: look the field up under another name.
///
/// Combining `skip` with `expose` or `rename` is an error, as are two fields
/// that end up with the same name.
///
/// ## Generics
///
/// For generic structs every readable field type gets a `ToValue` bound.
///
/// ```rust, ignore
/// #[derive(Record)]
/// pub struct Wrapper<T> {
///     pub inner: T, // where T: ToValue
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let info = match derive_data::RecordStruct::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let record_impl = impls::impl_record(&info);

    TokenStream::from(quote! {
        const _: () = {
            #record_impl
        };
    })
}
