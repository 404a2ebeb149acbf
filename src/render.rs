//! Rendering of values embedded in guard messages

use std::fmt::Display;

/// Word used for an absent value.
pub(crate) const ABSENT: &str = "null";

/// Render a single value with `Display`, or `null` when absent.
pub(crate) fn scalar<T: Display + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => ABSENT.to_string(),
    }
}

/// Render a sequence as `[a, b, c]`, or `null` when absent.
pub(crate) fn list<T: Display>(values: Option<&[T]>) -> String {
    match values {
        Some(values) => {
            let items: Vec<String> = values.iter().map(ToString::to_string).collect();
            format!("[{}]", items.join(", "))
        }
        None => ABSENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar() {
        assert_eq!(scalar(Some(&42)), "42");
        assert_eq!(scalar(Some("abc")), "abc");
        assert_eq!(scalar::<i32>(None), "null");
    }

    #[test]
    fn test_list() {
        assert_eq!(list(Some(&[1, 2, 3][..])), "[1, 2, 3]");
        assert_eq!(list::<i32>(Some(&[][..])), "[]");
        assert_eq!(list(Some(&["a", "b"][..])), "[a, b]");
        assert_eq!(list::<i32>(None), "null");
    }
}
