use crate::schema::{Field, FieldTy, Record};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.record.ident;
        let record_name = ident.to_string();
        let fields = self.record.fields.iter().filter_map(|field| self.expand_field(field));

        wrap_in_const(quote! {
            impl #rowmap::Record for #ident {
                fn fields() -> #rowmap::Vec<#rowmap::Field<Self>> {
                    let mut fields = #rowmap::Vec::new();
                    #( #fields )*
                    fields
                }

                fn record_name() -> &'static str {
                    #record_name
                }
            }
        })
    }

    fn expand_field(&self, field: &Field) -> Option<TokenStream> {
        let rowmap = &self.rowmap;
        let ident = &field.ident;
        let name = &field.name;
        let ty = &field.ty;

        let field = match field.kind {
            FieldTy::Ignored => return None,
            FieldTy::Scalar => {
                let verbatim = field.verbatim.then(|| quote!(.verbatim()));

                quote! {
                    fields.push(
                        #rowmap::Field::<Self>::scalar::<#ty>(
                            #name,
                            |record| &record.#ident,
                            |record| &mut record.#ident,
                        )
                        #verbatim
                    );
                }
            }
            FieldTy::Embedded => quote! {
                fields.push(#rowmap::Field::<Self>::embedded::<#ty>(
                    #name,
                    |record| &record.#ident,
                    |record| &mut record.#ident,
                ));
            },
            FieldTy::Parent => quote! {
                fields.extend(
                    <#ty as #rowmap::Record>::fields()
                        .into_iter()
                        .map(|field| field.lift::<Self>(
                            |record| &record.#ident,
                            |record| &mut record.#ident,
                        ))
                );
            },
        };

        Some(field)
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        rowmap: quote!(_rowmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
