use std::collections::BTreeMap;

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Visibility};

use super::FieldAttributes;

/// A readable field of the derived struct.
pub(crate) struct RecordField<'a> {
    /// The Rust field identifier.
    pub ident: &'a Ident,
    /// The name used for lookups.
    pub name: String,
    pub ty: &'a Type,
}

/// A struct with named fields, reduced to its readable fields.
pub(crate) struct RecordStruct<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub fields: Vec<RecordField<'a>>,
}

impl<'a> RecordStruct<'a> {
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let data = match &ast.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Record` can only be derived for structs with named fields",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Record` can only be derived for structs with named fields",
                ));
            }
        };

        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                data.struct_token.span(),
                "`Record` can only be derived for structs with named fields",
            ));
        };

        let mut fields = Vec::with_capacity(named.named.len());
        let mut seen: BTreeMap<String, &Ident> = BTreeMap::new();

        for field in &named.named {
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            let ident = field
                .ident
                .as_ref()
                .expect("Named fields should have an ident.");

            let public = matches!(field.vis, Visibility::Public(_));
            if attrs.skip.is_some() || !(public || attrs.expose.is_some()) {
                continue;
            }

            let name = match &attrs.rename {
                Some(lit) => lit.value(),
                None => ident.unraw().to_string(),
            };

            if let Some(other) = seen.insert(name.clone(), ident) {
                return Err(syn::Error::new(
                    field.span(),
                    format!("record field name `{name}` is already used by `{other}`"),
                ));
            }

            fields.push(RecordField {
                ident,
                name,
                ty: &field.ty,
            });
        }

        Ok(Self {
            ident: &ast.ident,
            generics: &ast.generics,
            fields,
        })
    }
}
