//! Column naming convention.
//!
//! Field names map to upper snake case column names: `mDbName` is stored in
//! `M_DB_NAME`, `firstName` in `FIRST_NAME`.

/// Converts a camel case identifier into its default column name.
///
/// The first character is always upper-cased. Lowercase letters and digits
/// are upper-cased. An uppercase letter starts a new word, and gets an `_`
/// in front of it, when it follows a lowercase letter, or when it follows
/// another letter or digit and is itself followed by a lowercase letter
/// (`HTMLParser` → `HTML_PARSER`). Any other character is dropped.
///
/// Upper-casing never changes the character count: a lowercase letter
/// without a single-character uppercase form is kept as is (`straße` →
/// `STRAßE`). Digits are Unicode numerics, so numerals such as `Ⅻ` are kept
/// and upper-cased like ASCII digits (`xⅫy` → `XⅫY`).
///
/// ```
/// use rowmap_core::naming::default_column_name;
///
/// assert_eq!(default_column_name("mDbName"), "M_DB_NAME");
/// assert_eq!(default_column_name("aBC"), "A_BC");
/// assert_eq!(default_column_name("ID"), "ID");
/// ```
pub fn default_column_name(field_name: &str) -> String {
    let chars: Vec<char> = field_name.chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|i| chars[i]);
        let next = chars.get(i + 1).copied();

        if i == 0 || c.is_lowercase() || c.is_numeric() {
            out.push(to_upper(c));
        } else if c.is_uppercase() {
            let word_start = match prev {
                Some(prev) if prev.is_alphanumeric() => {
                    prev.is_lowercase() || next.is_some_and(char::is_lowercase)
                }
                _ => false,
            };

            if word_start {
                out.push('_');
            }
            out.push(c);
        }
    }

    out
}

/// Upper-cases `c` when its uppercase form is a single character.
fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

/// Folds a `snake_case` identifier into lower camel case.
///
/// Each `_` is removed and the character after it upper-cased. Leading and
/// trailing underscores vanish. Identifiers without underscores are returned
/// unchanged.
///
/// Consecutive single-letter segments fold into one uppercase run, which
/// [`default_column_name`] treats as one word: `point_x_y` becomes `pointXY`
/// and is stored in `POINT_XY`.
pub fn lower_camel_case(field_name: &str) -> String {
    let mut out = String::with_capacity(field_name.len());
    let mut upper_next = false;

    for c in field_name.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(to_upper(c));
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Returns the column a field named `field_name` is stored in.
///
/// Rust `snake_case` field names are folded to camel case first so their
/// word breaks survive: `first_name` is stored in `FIRST_NAME`. Runs of
/// single-letter segments do not keep theirs: `a_b_c` is stored in `A_BC`.
pub fn column_name(field_name: &str) -> String {
    default_column_name(&lower_camel_case(field_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_character_is_kept_even_when_not_alphanumeric() {
        assert_eq!(default_column_name("_id"), "_ID");
    }

    #[test]
    fn separators_are_dropped_without_a_word_break() {
        assert_eq!(default_column_name("my-field"), "MYFIELD");
        assert_eq!(default_column_name("first_name"), "FIRSTNAME");
    }

    #[test]
    fn uppercase_after_separator_starts_no_word() {
        assert_eq!(default_column_name("a_Bc"), "ABC");
    }
}
