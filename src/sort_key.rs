//! Sort key derivation and descending ordering for manifest rows.

use log::debug;

/// Sort key for one manifest row.
///
/// The variant is chosen once for the whole batch: numeric keys are used only
/// when every filename yields one, otherwise every row falls back to its raw
/// filename. Keys of different variants are never compared within one sort.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Lexical(String),
    Numeric(u128),
}

/// Concatenates every decimal digit of `name` in order and parses the result.
///
/// Returns `None` when the name has no digits or the digit string overflows
/// `u128`.
fn numeric_key(name: &str) -> Option<u128> {
    let digits: String = name.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Derives one key per filename, all of the same variant.
fn batch_keys(names: &[String]) -> Vec<SortKey> {
    let numeric: Option<Vec<u128>> = names.iter().map(|name| numeric_key(name)).collect();

    match numeric {
        Some(keys) => keys.into_iter().map(SortKey::Numeric).collect(),
        None => {
            debug!("Numeric key derivation failed; sorting the batch lexicographically");
            names
                .iter()
                .map(|name| SortKey::Lexical(name.clone()))
                .collect()
        }
    }
}

/// Sorts filenames descending by their batch sort key.
///
/// Equal keys order by descending filename so reruns over an unchanged
/// directory are byte-identical.
pub fn sort_descending(names: Vec<String>) -> Vec<String> {
    let keys = batch_keys(&names);
    let mut keyed: Vec<(SortKey, String)> = keys.into_iter().zip(names).collect();
    keyed.sort_by(|a, b| b.cmp(a));
    keyed.into_iter().map(|(_, name)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn numeric_key_concatenates_all_digits() {
        assert_eq!(numeric_key("img10.png"), Some(10));
        // "v1_take2.png" contributes "12", not 1 or 2.
        assert_eq!(numeric_key("v1_take2.png"), Some(12));
        assert_eq!(numeric_key("cover.png"), None);
    }

    #[test]
    fn numeric_key_overflow_is_a_failure() {
        let huge = format!("{}.png", "9".repeat(40));
        assert_eq!(numeric_key(&huge), None);
    }

    #[test]
    fn sorts_descending_by_concatenated_digits() {
        let sorted = sort_descending(names(&["img3.png", "img10.png", "img2.png"]));
        assert_eq!(sorted, names(&["img10.png", "img3.png", "img2.png"]));
    }

    #[test]
    fn one_digitless_name_forces_lexical_order_for_all() {
        let sorted = sort_descending(names(&["img3.png", "cover.png", "img10.png"]));
        // Plain descending string order: "img3.png" > "img10.png" > "cover.png".
        assert_eq!(sorted, names(&["img3.png", "img10.png", "cover.png"]));
    }

    #[test]
    fn overflowing_name_forces_lexical_order_for_all() {
        let huge = format!("a{}.png", "9".repeat(40));
        let sorted = sort_descending(names(&["img3.png", &huge]));
        assert_eq!(sorted, names(&["img3.png", &huge]));
    }

    #[test]
    fn equal_keys_order_by_descending_filename() {
        let sorted = sort_descending(names(&["a7.png", "b7.png"]));
        assert_eq!(sorted, names(&["b7.png", "a7.png"]));
    }

    #[test]
    fn empty_batch_stays_empty() {
        assert!(sort_descending(Vec::new()).is_empty());
    }
}
