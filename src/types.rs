// SPDX-License-Identifier: MIT
// Text decoded into symbol units. Symbols are code points, never UTF-8 bytes,
// except on the all-ASCII fast path where the two coincide.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Seq<'a> {
    Ascii(&'a [u8]),
    Chars(Vec<u32>),
}

#[macro_export]
macro_rules! dispatch_seq {
    ($func:path, $s1:expr, $s2:expr $(, $args:expr)*) => {
        match ($s1, $s2) {
            ($crate::types::Seq::Ascii(a), $crate::types::Seq::Ascii(b)) => $func(*a, *b $(, $args)*),
            ($crate::types::Seq::Ascii(a), $crate::types::Seq::Chars(b)) => $func(&a.iter().map(|&x| x as u32).collect::<Vec<_>>(), b $(, $args)*),
            ($crate::types::Seq::Chars(a), $crate::types::Seq::Ascii(b)) => $func(a, &b.iter().map(|&x| x as u32).collect::<Vec<_>>() $(, $args)*),
            ($crate::types::Seq::Chars(a), $crate::types::Seq::Chars(b)) => $func(a, b $(, $args)*),
        }
    };
}

impl<'a> Seq<'a> {
    pub fn from_str(s: &'a str) -> Self {
        if s.is_ascii() {
            Seq::Ascii(s.as_bytes())
        } else {
            Seq::Chars(s.chars().map(|c| c as u32).collect())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Seq::Ascii(v) => v.is_empty(),
            Seq::Chars(v) => v.is_empty(),
        }
    }

    /// Length in symbols (code points).
    pub fn len(&self) -> usize {
        match self {
            Seq::Ascii(v) => v.len(),
            Seq::Chars(v) => v.len(),
        }
    }

    pub fn to_string_lossy(&self) -> String {
        match self {
            Seq::Ascii(v) => String::from_utf8_lossy(v).into_owned(),
            Seq::Chars(v) => v.iter().filter_map(|&c| char::from_u32(c)).collect(),
        }
    }
}

impl<'a> From<&'a str> for Seq<'a> {
    fn from(s: &'a str) -> Self {
        Seq::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_fast_path() {
        let seq = Seq::from_str("kitten");
        assert_eq!(seq, Seq::Ascii(&b"kitten"[..]));
        assert_eq!(seq.len(), 6);
    }

    #[test]
    fn test_multibyte_counts_code_points() {
        let seq = Seq::from_str("naïve");
        assert!(matches!(seq, Seq::Chars(_)));
        assert_eq!("naïve".len(), 6);
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.to_string_lossy(), "naïve");
    }

    #[test]
    fn test_empty() {
        let seq: Seq<'_> = "".into();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }
}
