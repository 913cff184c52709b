//! Words borrowed from general-purpose languages that may not appear in
//! KorvaqScrip source, each with a hint pointing at the local equivalent.

/// Sorted by word for binary search.
const RESTRICTED_WORDS: &[(&str, &str)] = &[
    ("break", "loops run to completion; use `return` inside a function to stop early"),
    ("case", "use nested `if`/`else` blocks"),
    ("catch", "errors are fatal; there is no exception handling"),
    ("class", "there are no classes; group behavior in `func` declarations"),
    ("const", "use `make` for an immutable binding"),
    ("continue", "wrap the rest of the loop body in an `if` block"),
    ("debugger", "use `show` to inspect values"),
    ("default", "use a trailing `else` block"),
    ("delete", "use `delvar` or `delfunc`"),
    ("extends", "there are no classes; group behavior in `func` declarations"),
    ("finally", "errors are fatal; there is no exception handling"),
    ("for", "use `loop (i, start, end) { ... }`"),
    ("in", "use `loop` over indices up to `arrsize`"),
    ("instanceof", "compare against `void` to detect a missing argument"),
    ("new", "build arrays with `[ ... ]` literals"),
    ("super", "there are no classes; group behavior in `func` declarations"),
    ("switch", "use nested `if`/`else` blocks"),
    ("this", "pass values to functions as parameters"),
    ("throw", "use `error` to report a problem"),
    ("try", "errors are fatal; there is no exception handling"),
    ("typeof", "compare against `void` to detect a missing argument"),
    ("var", "use `let` to declare a variable"),
];

/// If `ident` is restricted, return the hint for its replacement.
pub fn lookup_restricted_word(ident: &str) -> Option<&'static str> {
    RESTRICTED_WORDS
        .binary_search_by_key(&ident, |&(word, _)| word)
        .ok()
        .map(|idx| RESTRICTED_WORDS[idx].1)
}

pub fn is_restricted_word(ident: &str) -> bool {
    lookup_restricted_word(ident).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        for window in RESTRICTED_WORDS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "table not sorted: {:?} >= {:?}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn known_words() {
        assert!(is_restricted_word("var"));
        assert!(is_restricted_word("instanceof"));
        assert!(lookup_restricted_word("const").is_some_and(|h| h.contains("make")));
    }

    #[test]
    fn ordinary_identifiers_pass() {
        assert!(!is_restricted_word("variable"));
        assert!(!is_restricted_word("fort"));
        assert!(!is_restricted_word("let"));
        assert!(!is_restricted_word("Var"));
    }
}
