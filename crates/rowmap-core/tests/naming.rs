use rowmap_core::naming::{column_name, default_column_name, lower_camel_case};

#[test]
fn default_column_name_table() {
    let cases = [
        ("name", "NAME"),
        ("mDbName", "M_DB_NAME"),
        ("ID", "ID"),
        ("", ""),
        ("aBC", "A_BC"),
        ("ABCd", "AB_CD"),
        ("x", "X"),
        ("userID2", "USER_ID2"),
        ("html5Parser", "HTML5_PARSER"),
        ("HTMLParser", "HTML_PARSER"),
        ("address2Line", "ADDRESS2_LINE"),
    ];

    for (input, expected) in cases {
        assert_eq!(default_column_name(input), expected, "input={input:?}");
    }
}

#[test]
fn default_column_name_is_deterministic() {
    assert_eq!(default_column_name("mDbName"), default_column_name("mDbName"));
}

#[test]
fn lower_camel_case_folds_underscores() {
    assert_eq!(lower_camel_case("first_name"), "firstName");
    assert_eq!(lower_camel_case("m_db_name"), "mDbName");
    assert_eq!(lower_camel_case("mDbName"), "mDbName");
    assert_eq!(lower_camel_case("__private"), "private");
    assert_eq!(lower_camel_case("trailing_"), "trailing");
    assert_eq!(lower_camel_case(""), "");
}

#[test]
fn column_name_keeps_snake_case_word_breaks() {
    assert_eq!(column_name("first_name"), "FIRST_NAME");
    assert_eq!(column_name("user_id"), "USER_ID");
    assert_eq!(column_name("ip_v4_addr"), "IP_V4_ADDR");
    assert_eq!(column_name("mDbName"), "M_DB_NAME");
    assert_eq!(column_name("id"), "ID");
}

#[test]
fn single_letter_segments_fold_into_one_word() {
    assert_eq!(lower_camel_case("point_x_y"), "pointXY");
    assert_eq!(column_name("point_x_y"), "POINT_XY");
    assert_eq!(column_name("a_b_c"), "A_BC");
}

#[test]
fn upper_casing_keeps_the_character_count() {
    assert_eq!(default_column_name("straße"), "STRAßE");
    assert_eq!(default_column_name("ßig"), "ßIG");
    assert_eq!(lower_camel_case("gross_ßig"), "grossßig");
}

#[test]
fn unicode_numerals_count_as_digits() {
    assert_eq!(default_column_name("xⅫy"), "XⅫY");
    assert_eq!(default_column_name("row٣Id"), "ROW٣_ID");
}
