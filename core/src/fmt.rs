//! Diagnostic formatting helpers.

use std::fmt::{Display, Write};

/// Joins `Display` items with `separator`. Empty input gives `""`.
pub fn str_join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", item);
    }
    out
}

/// Logs `name = value` pairs for each expression at debug level.
///
/// ```
/// let seed = 7;
/// let draws = [1u32, 2];
/// xrandom_core::debug_vars!(seed, draws);
/// // emits: "seed = 7, draws = [1, 2]"
/// ```
#[macro_export]
macro_rules! debug_vars {
    ($($value:expr),+ $(,)?) => {
        $crate::log::debug!(
            "{}",
            $crate::fmt::str_join(
                [$(::std::format!("{} = {:?}", ::std::stringify!($value), &$value)),+],
                ", ",
            )
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_empty() {
        assert_eq!(str_join(Vec::<u32>::new(), ", "), "");
    }

    #[test]
    fn join_single() {
        assert_eq!(str_join([42], ", "), "42");
    }

    #[test]
    fn join_many() {
        assert_eq!(str_join([1, 2, 3], " | "), "1 | 2 | 3");
        assert_eq!(str_join(["a", "b"], ""), "ab");
    }

    #[test]
    fn debug_vars_accepts_expressions() {
        let seed = 3;
        let items = vec![1, 2];
        crate::debug_vars!(seed, items, seed + 1);
    }
}
