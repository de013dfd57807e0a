use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, parse_quote};

use crate::derive_data::RecordStruct;

/// Generate `Record` trait implementation tokens.
pub(crate) fn impl_record(info: &RecordStruct) -> TokenStream {
    let fs_reflect_path = crate::path::fs_reflect();
    let record_ = crate::path::record_(&fs_reflect_path);
    let value_ = crate::path::value_(&fs_reflect_path);
    let to_value_ = crate::path::to_value_(&fs_reflect_path);
    let option_ = crate::path::option_();

    let names: Vec<&str> = info.fields.iter().map(|f| f.name.as_str()).collect();
    let idents = info.fields.iter().map(|f| f.ident);

    // Generic structs need every readable field type to be convertible.
    let mut generics = info.generics.clone();
    if !info.generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for field in &info.fields {
            let ty = field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: #to_value_));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let real_ident = info.ident;
    let name_ = Ident::new("__name", Span::call_site());

    quote! {
        impl #impl_generics #record_ for #real_ident #ty_generics #where_clause {
            fn field(&self, #name_: &str) -> #option_<#value_> {
                match #name_ {
                    #(#names => #option_::Some(#to_value_::to_value(&self.#idents)),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_names(&self) -> &'static [&'static str] {
                &[#(#names),*]
            }
        }
    }
}
