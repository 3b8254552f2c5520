use std::{collections::HashSet, hash::Hash};

pub trait SliceUtil<T> {
    /// Returns `true` if the slice only contains unique values
    fn is_unique(&self) -> bool;

    /// Returns every value that occurs more than once, each reported once,
    /// in the order its first repeat is seen
    fn duplicates(&self) -> Vec<&T>;
}

impl<T: Eq + Hash> SliceUtil<T> for [T] {
    fn is_unique(&self) -> bool {
        is_unique(self)
    }

    fn duplicates(&self) -> Vec<&T> {
        duplicates(self)
    }
}

#[macro_export]
macro_rules! assert_unique {
    ($slice:expr) => {{
        use $crate::slice::SliceUtil;
        let slice = &$slice[..];
        assert!(
            slice.is_unique(),
            "expected `{}` to be unique, but it wasn't; actual={:?}",
            stringify!($slice),
            slice,
        );
    }};
}

pub fn is_unique<T: Eq + Hash>(slice: &[T]) -> bool {
    let mut s = HashSet::new();

    for el in slice {
        if !s.insert(el) {
            return false;
        }
    }

    true
}

pub fn duplicates<T: Eq + Hash>(slice: &[T]) -> Vec<&T> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut out = vec![];

    for el in slice {
        if !seen.insert(el) && reported.insert(el) {
            out.push(el);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_reported_once_in_repeat_order() {
        let columns = ["ID", "NAME", "AGE", "NAME", "ID", "NAME"];
        assert_eq!(duplicates(&columns), vec![&"NAME", &"ID"]);
    }

    #[test]
    fn unique_slice_has_no_duplicates() {
        let columns = ["ID", "NAME"];
        assert!(columns.is_unique());
        assert!(columns.duplicates().is_empty());
    }
}
