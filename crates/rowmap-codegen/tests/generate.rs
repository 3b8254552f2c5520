use quote::quote;
use std_util::{assert_err, assert_ok};

fn expand(input: proc_macro2::TokenStream) -> String {
    let output = assert_ok!(rowmap_codegen::generate(input));
    output.to_string().replace(' ', "")
}

fn errors(input: proc_macro2::TokenStream) -> Vec<String> {
    let err = assert_err!(rowmap_codegen::generate(input));
    err.into_iter().map(|err| err.to_string()).collect()
}

#[test]
fn scalar_fields_in_declaration_order() {
    let out = expand(quote! {
        struct User {
            id: i64,
            first_name: String,
            nickname: Option<String>,
        }
    });

    let id = out.find("scalar::<i64>(\"id\"").unwrap();
    let first_name = out.find("scalar::<String>(\"first_name\"").unwrap();
    let nickname = out.find("scalar::<Option<String>>(\"nickname\"").unwrap();

    assert!(id < first_name);
    assert!(first_name < nickname);
    assert!(out.contains("impl_rowmap::codegen_support::RecordforUser"));
    assert!(out.contains("fnrecord_name()->&'staticstr{\"User\"}"));
}

#[test]
fn expansion_is_wrapped_in_const() {
    let out = expand(quote! {
        struct Tag {
            id: i64,
        }
    });

    assert!(out.starts_with("const_:()={userowmapas_rowmap;"));
}

#[test]
fn ignored_and_phantom_fields_are_skipped() {
    let out = expand(quote! {
        struct Cached {
            id: i64,
            #[rowmap(ignore)]
            cache: Vec<u64>,
            marker: std::marker::PhantomData<u8>,
        }
    });

    assert!(out.contains("\"id\""));
    assert!(!out.contains("\"cache\""));
    assert!(!out.contains("\"marker\""));
}

#[test]
fn embedded_and_parent_fields() {
    let out = expand(quote! {
        struct Order {
            #[rowmap(parent)]
            base: Entity,
            #[rowmap(embedded)]
            address: Address,
        }
    });

    assert!(out.contains("<Entityas_rowmap::codegen_support::Record>::fields()"));
    assert!(out.contains("lift::<Self>(|record|&record.base,|record|&mutrecord.base,)"));
    assert!(out.contains("embedded::<Address>(\"address\""));
}

#[test]
fn rename_and_verbatim() {
    let out = expand(quote! {
        struct Legacy {
            #[rowmap(rename = "mDbName")]
            db_name: String,
            #[rowmap(verbatim)]
            raw_Col: i32,
            #[rowmap(verbatim, rename = "KEEP")]
            keep: i32,
        }
    });

    assert!(out.contains("scalar::<String>(\"mDbName\",|record|&record.db_name"));
    assert!(out.contains("\"raw_Col\",|record|&record.raw_Col,|record|&mutrecord.raw_Col,).verbatim()"));
    assert!(out.contains("\"KEEP\",|record|&record.keep,|record|&mutrecord.keep,).verbatim()"));
    assert_eq!(out.matches(".verbatim()").count(), 2);
}

#[test]
fn raw_identifiers_use_the_plain_name() {
    let out = expand(quote! {
        struct Item {
            r#type: String,
        }
    });

    assert!(out.contains("(\"type\",|record|&record.r#type"));
}

#[test]
fn tuple_structs_are_rejected() {
    assert_eq!(
        errors(quote! { struct Pair(i64, i64); }),
        ["record fields must be named"]
    );
}

#[test]
fn generics_are_rejected() {
    assert_eq!(
        errors(quote! {
            struct Wrapper<T> {
                value: T,
            }
        }),
        ["record generics are not supported"]
    );
}

#[test]
fn invalid_markers_are_reported_together() {
    let errors = errors(quote! {
        #[rowmap(embedded)]
        struct Broken {
            #[rowmap(ignore, embedded)]
            a: Address,
            #[rowmap(verbatim, verbatim)]
            b: i64,
            #[rowmap(embedded, verbatim)]
            c: Address,
            #[rowmap(flatten)]
            d: i64,
        }
    });

    assert_eq!(
        errors,
        [
            "#[rowmap] is only supported on fields",
            "a field can only be one of `ignore`, `embedded` or `parent`",
            "duplicate `verbatim` marker",
            "`verbatim` only applies to scalar fields",
            "unknown rowmap attribute",
        ]
    );
}
