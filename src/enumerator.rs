/// Iterator over every substring of a byte string up to a maximum length,
/// longest first and left to right within a length. Each item is the
/// substring together with its start offset.
///
/// The order matters: it is the registration order of patterns in the
/// automaton, which decides ties between equal-length matches.
#[derive(Debug, Clone)]
pub struct Substrings<'a> {
    s: &'a [u8],
    len: usize,
    start: usize,
}

/// Enumerate the substrings of `s` of length `min(max_len, s.len())` down to 1.
pub fn substrings(s: &[u8], max_len: usize) -> Substrings<'_> {
    Substrings {
        s,
        len: max_len.min(s.len()),
        start: 0,
    }
}

/// Number of pairs `substrings(s, max_len)` yields for `s.len() == n`.
pub fn pattern_count(n: usize, max_len: usize) -> usize {
    (1..=max_len.min(n)).map(|len| n - len + 1).sum()
}

impl<'a> Iterator for Substrings<'a> {
    type Item = (&'a [u8], usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        if self.start + self.len > self.s.len() {
            self.len -= 1;
            self.start = 0;
            if self.len == 0 {
                return None;
            }
        }
        let start = self.start;
        self.start += 1;
        Some((&self.s[start..start + self.len], start))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.len == 0 {
            return (0, Some(0));
        }
        let n = self.s.len();
        let current = (n + 1).saturating_sub(self.len + self.start);
        let rest = pattern_count(n, self.len - 1);
        (current + rest, Some(current + rest))
    }
}

impl ExactSizeIterator for Substrings<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(s: &str, max_len: usize) -> Vec<(String, usize)> {
        substrings(s.as_bytes(), max_len)
            .map(|(sub, start)| (String::from_utf8_lossy(sub).into_owned(), start))
            .collect()
    }

    #[test]
    fn longest_first_then_left_to_right() {
        assert_eq!(
            collect("abc", 2),
            vec![
                ("ab".to_string(), 0),
                ("bc".to_string(), 1),
                ("a".to_string(), 0),
                ("b".to_string(), 1),
                ("c".to_string(), 2),
            ]
        );
    }

    #[test]
    fn oversized_max_len_is_clamped() {
        assert_eq!(
            collect("xy", 10),
            vec![
                ("xy".to_string(), 0),
                ("x".to_string(), 0),
                ("y".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(collect("", 5).is_empty());
        assert!(collect("abc", 0).is_empty());
    }

    #[test]
    fn size_hint_tracks_remaining_items() {
        let mut it = substrings(b"abcd", 3);
        assert_eq!(it.len(), pattern_count(4, 3));
        assert_eq!(it.len(), 9);
        it.next();
        it.next();
        assert_eq!(it.len(), 7);
        let rest: Vec<_> = it.collect();
        assert_eq!(rest.len(), 7);
    }

    #[test]
    fn repeated_text_keeps_every_offset() {
        let got = collect("aaa", 2);
        assert_eq!(&got[..2], &[("aa".to_string(), 0), ("aa".to_string(), 1)]);
        assert_eq!(got.len(), 5);
    }
}
