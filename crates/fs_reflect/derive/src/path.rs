//! Paths of the items the generated code refers to.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `fs_reflect` crate.
///
/// 1. For crates that depend on `fs_reflect`, `::fs_reflect` is returned.
/// 2. For crates that depend on `fieldser`, `::fieldser::reflect` is returned.
/// 3. Otherwise `::fs_reflect` is returned, which may be incorrect.
///
/// This reads the caller's `Cargo.toml`, call it once per derive.
pub(crate) fn fs_reflect() -> syn::Path {
    fs_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("fs_reflect"))
}

#[inline(always)]
pub(crate) fn record_(fs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fs_reflect_path::Record
    }
}

#[inline(always)]
pub(crate) fn value_(fs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fs_reflect_path::Value
    }
}

#[inline(always)]
pub(crate) fn to_value_(fs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fs_reflect_path::ToValue
    }
}

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! {
        ::core::option::Option
    }
}
