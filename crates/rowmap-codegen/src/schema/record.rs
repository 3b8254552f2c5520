use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Record fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        let mut errs = ErrorSet::new();

        if !ast.generics.params.is_empty() {
            errs.push(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        for attr in &ast.attrs {
            if attr.path().is_ident("rowmap") {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "#[rowmap] is only supported on fields",
                ));
            }
        }

        let mut fields = vec![];

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Record {
            ident: ast.ident.clone(),
            fields,
        })
    }
}
