//! Splitting message bodies into transmissible parts.

/// Longest body that still fits a single SMS.
pub const SINGLE_PART_MAX: usize = 160;
/// Room left per part once the 7-byte concatenation header is added.
pub const MULTIPART_PART_MAX: usize = 153;
/// Part counts are written as two decimal digits in the header.
pub const MAX_PARTS: usize = 99;

/// Splits `body` into parts, left to right, on fixed 153-char boundaries.
///
/// Bodies of up to 160 chars come back whole (including the empty body).
/// Lengths count chars, so multi-byte text is never cut mid-character.
/// This is not the UTF-16 unit count: text outside the BMP (emoji) counts
/// one per char here, two per char in UTF-16.
pub fn segment(body: &str) -> Vec<&str> {
    if body.chars().count() <= SINGLE_PART_MAX {
        return vec![body];
    }
    let mut parts = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in body.char_indices() {
        if count == MULTIPART_PART_MAX {
            parts.push(&body[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    parts.push(&body[start..]);
    parts
}

/// Number of parts `segment` would produce for `body`.
pub fn part_count(body: &str) -> usize {
    let len = body.chars().count();
    if len <= SINGLE_PART_MAX {
        1
    }
    else {
        (len + MULTIPART_PART_MAX - 1) / MULTIPART_PART_MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_one_part() {
        assert_eq!(segment("Hi"), vec!["Hi"]);
        assert_eq!(segment(""), vec![""]);
        let full = "x".repeat(160);
        assert_eq!(segment(&full), vec![full.as_str()]);
    }
    #[test]
    fn four_hundred_chars_make_three_parts() {
        let body = "a".repeat(400);
        let parts = segment(&body);
        let lens = parts.iter().map(|p| p.len()).collect::<Vec<_>>();
        assert_eq!(lens, vec![153, 153, 94]);
        assert_eq!(part_count(&body), 3);
    }
    #[test]
    fn just_over_the_limit_splits() {
        let body = "b".repeat(161);
        let parts = segment(&body);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 153);
        assert_eq!(parts[1].len(), 8);
    }
    #[test]
    fn exact_multiple_has_no_empty_tail() {
        let body = "c".repeat(306);
        let parts = segment(&body);
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|p| p.len() == 153));
    }
    #[test]
    fn parts_concatenate_back_to_body() {
        for len in &[161usize, 200, 306, 307, 1000, 1530] {
            let body = (0..*len).map(|i| (b'a' + (i % 26) as u8) as char).collect::<String>();
            let parts = segment(&body);
            assert_eq!(parts.len(), part_count(&body));
            assert_eq!(parts.len(), (len + 152) / 153);
            assert!(parts[..parts.len() - 1].iter().all(|p| p.chars().count() == 153));
            assert_eq!(parts.concat(), body);
        }
    }
    #[test]
    fn counts_chars_not_bytes() {
        let body = "é".repeat(170);
        let parts = segment(&body);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].chars().count(), 153);
        assert_eq!(parts[1].chars().count(), 17);
        assert_eq!(parts.concat(), body);

        let fits = "ü".repeat(160);
        assert_eq!(segment(&fits).len(), 1);
    }
    #[test]
    fn emoji_count_as_one_char() {
        let body = "\u{1F600}".repeat(160);
        assert_eq!(segment(&body), vec![body.as_str()]);
        assert_eq!(part_count(&body), 1);
    }
}
