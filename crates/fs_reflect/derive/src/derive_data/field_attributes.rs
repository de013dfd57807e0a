use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr, meta::ParseNestedMeta};

use crate::RECORD_ATTRIBUTE_NAME;

/// Parsed `#[record(...)]` attributes of a single field.
///
/// Examples:
/// - `#[record(skip)]`
/// - `#[record(expose)]`
/// - `#[record(rename = "label")]`
/// - `#[record(expose, rename = "label")]`
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub skip: Option<Span>,
    pub expose: Option<Span>,
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut args = Self::default();

        for attr in attrs {
            if attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| args.parse_meta(meta))?;
            }
        }

        args.validate()?;
        Ok(args)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.span();

        if meta.path.is_ident("skip") {
            Self::set_flag(&mut self.skip, span, &meta, "skip")
        } else if meta.path.is_ident("expose") {
            Self::set_flag(&mut self.expose, span, &meta, "expose")
        } else if meta.path.is_ident("rename") {
            if self.rename.is_some() {
                return Err(meta.error("duplicate `rename` attribute"));
            }
            let name: LitStr = meta.value()?.parse()?;
            if name.value().is_empty() {
                return Err(syn::Error::new(name.span(), "`rename` expects a non-empty name"));
            }
            self.rename = Some(name);
            Ok(())
        } else {
            Err(meta.error("unknown record attribute, expected `skip`, `expose` or `rename`"))
        }
    }

    fn set_flag(
        slot: &mut Option<Span>,
        span: Span,
        meta: &ParseNestedMeta,
        name: &str,
    ) -> syn::Result<()> {
        if slot.is_some() {
            return Err(meta.error(format!("duplicate `{name}` attribute")));
        }
        *slot = Some(span);
        Ok(())
    }

    fn validate(&self) -> syn::Result<()> {
        if let Some(span) = self.skip {
            if self.expose.is_some() {
                return Err(syn::Error::new(span, "`skip` conflicts with `expose`"));
            }
            if self.rename.is_some() {
                return Err(syn::Error::new(span, "`skip` conflicts with `rename`"));
            }
        }
        Ok(())
    }
}
