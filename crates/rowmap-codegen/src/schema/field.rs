use super::ErrorSet;

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Rust field identifier
    pub(crate) ident: syn::Ident,

    /// Field name handed to the naming resolver
    pub(crate) name: syn::LitStr,

    /// Field type
    pub(crate) ty: syn::Type,

    /// How the field maps to columns
    pub(crate) kind: FieldTy,

    /// True if the column name skips the naming convention
    pub(crate) verbatim: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldTy {
    /// Stored in one column through a type adapter
    Scalar,

    /// A nested record stored inline
    Embedded,

    /// A record whose fields are spliced into this one
    Parent,

    /// Not persisted
    Ignored,
}

#[derive(Default)]
struct FieldAttr {
    ignore: Option<syn::Path>,
    embedded: Option<syn::Path>,
    parent: Option<syn::Path>,
    verbatim: Option<syn::Path>,
    rename: Option<syn::LitStr>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("rowmap") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                let slot = if meta.path.is_ident("ignore") {
                    &mut attrs.ignore
                } else if meta.path.is_ident("embedded") {
                    &mut attrs.embedded
                } else if meta.path.is_ident("parent") {
                    &mut attrs.parent
                } else if meta.path.is_ident("verbatim") {
                    &mut attrs.verbatim
                } else if meta.path.is_ident("rename") {
                    let name: syn::LitStr = meta.value()?.parse()?;
                    if attrs.rename.is_some() {
                        errs.push(meta.error("duplicate `rename` marker"));
                    } else {
                        attrs.rename = Some(name);
                    }
                    return Ok(());
                } else {
                    return Err(meta.error("unknown rowmap attribute"));
                };

                if slot.is_some() {
                    let name = meta.path.get_ident().map(|i| i.to_string());
                    errs.push(meta.error(format!(
                        "duplicate `{}` marker",
                        name.unwrap_or_default()
                    )));
                } else {
                    *slot = Some(meta.path.clone());
                }

                Ok(())
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        let markers: Vec<_> = [&attrs.ignore, &attrs.embedded, &attrs.parent]
            .into_iter()
            .flatten()
            .collect();

        for path in markers.iter().skip(1) {
            errs.push(syn::Error::new_spanned(
                path,
                "a field can only be one of `ignore`, `embedded` or `parent`",
            ));
        }

        let kind = if attrs.ignore.is_some() || is_phantom_data(&field.ty) {
            FieldTy::Ignored
        } else if attrs.embedded.is_some() {
            FieldTy::Embedded
        } else if attrs.parent.is_some() {
            FieldTy::Parent
        } else {
            FieldTy::Scalar
        };

        if kind != FieldTy::Scalar && markers.len() <= 1 {
            if let Some(path) = &attrs.verbatim {
                errs.push(syn::Error::new_spanned(
                    path,
                    "`verbatim` only applies to scalar fields",
                ));
            }

            if let Some(rename) = &attrs.rename {
                errs.push(syn::Error::new_spanned(
                    rename,
                    "`rename` only applies to scalar fields",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let name = attrs
            .rename
            .unwrap_or_else(|| syn::LitStr::new(&ident.unraw().to_string(), ident.span()));

        Ok(Field {
            ident: ident.clone(),
            name,
            ty: field.ty.clone(),
            kind,
            verbatim: attrs.verbatim.is_some(),
        })
    }
}

/// `PhantomData` fields carry no data and are never persisted.
fn is_phantom_data(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };

    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "PhantomData")
}
