//! Content line folding for iCalendar (RFC 5545 §3.1).

/// Maximum line length in octets (not including CRLF).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line to comply with the 75-octet limit and terminates it with CRLF.
///
/// Lines are folded by inserting CRLF followed by a single space.
/// Breaks only happen on UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut result = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS) * 3 + 2);
    let mut segment_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();
        if segment_len + char_len > MAX_LINE_OCTETS {
            result.push_str("\r\n ");
            // Continuation lines spend one octet on the leading space
            segment_len = 1;
        }
        result.push(c);
        segment_len += char_len;
    }

    result.push_str("\r\n");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_short_line() {
        assert_eq!(fold_line("SUMMARY:Short"), "SUMMARY:Short\r\n");
    }

    #[test]
    fn fold_exactly_75() {
        let line = "X".repeat(75);
        assert_eq!(fold_line(&line), format!("{line}\r\n"));
    }

    #[test]
    fn fold_boundary_75_octets() {
        let line = "A".repeat(80);
        let result = fold_line(&line);

        let lines: Vec<&str> = result.split("\r\n").filter(|s| !s.is_empty()).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 75);
        assert_eq!(lines[1].len(), 6); // " " + 5 chars
    }

    #[test]
    fn fold_long_line_round_trips() {
        let line = "X".repeat(200);
        let result = fold_line(&line);
        assert!(result.matches("\r\n ").count() >= 2);

        let unfolded = result.replace("\r\n ", "").replace("\r\n", "");
        assert_eq!(unfolded, line);
    }

    #[test]
    fn fold_preserves_utf8() {
        // 课 is 3 bytes in UTF-8
        let line = format!("LOCATION:{}", "课".repeat(40));
        let result = fold_line(&line);

        for segment in result.split("\r\n").filter(|s| !s.is_empty()) {
            assert!(segment.len() <= 75);
        }
        let unfolded = result.replace("\r\n ", "").replace("\r\n", "");
        assert_eq!(unfolded, line);
    }
}
