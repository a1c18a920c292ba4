//! vCard line folding.

use std::io::{self, Write};

/// Maximum line length in octets (not characters) per RFC 2426.
const MAX_LINE_OCTETS: usize = 75;

/// Octets left on a continuation line after the leading space.
const CONTINUATION_OCTETS: usize = MAX_LINE_OCTETS - 1;

/// Writes `unfolded` as CRLF-terminated physical lines of at most 75 octets.
///
/// The first line carries the first 75 octets of `unfolded`; each further
/// line is a single space followed by up to 74 more octets. Folding counts
/// raw octets, so a multi-byte sequence may be split across lines.
pub fn write_folded<W: Write>(out: &mut W, unfolded: &[u8]) -> io::Result<()> {
    let first = unfolded.len().min(MAX_LINE_OCTETS);
    out.write_all(&unfolded[..first])?;
    out.write_all(b"\r\n")?;

    for chunk in unfolded[first..].chunks(CONTINUATION_OCTETS) {
        out.write_all(b" ")?;
        out.write_all(chunk)?;
        out.write_all(b"\r\n")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fold into physical lines, terminators stripped.
    fn fold_lines(unfolded: &[u8]) -> Vec<Vec<u8>> {
        let mut buf = Vec::new();
        write_folded(&mut buf, unfolded).unwrap();
        assert!(buf.ends_with(b"\r\n"));
        buf[..buf.len() - 2]
            .split(|&b| b == b'\n')
            .map(|line| {
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                line.to_vec()
            })
            .collect()
    }

    /// Reverse the fold: strip CRLF and the single leading continuation space.
    fn unfold(lines: &[Vec<u8>]) -> Vec<u8> {
        let mut joined = lines[0].clone();
        for line in &lines[1..] {
            assert_eq!(line[0], b' ');
            joined.extend_from_slice(&line[1..]);
        }
        joined
    }

    #[test]
    fn short_line_is_emitted_unchanged() {
        let input = b"PHOTO;TYPE=jpeg;ENCODING=b:aGVsbG8=".to_vec();
        let lines = fold_lines(&input);
        assert_eq!(lines, vec![input]);
    }

    #[test]
    fn line_of_exactly_75_octets_does_not_fold() {
        let input = vec![b'a'; 75];
        let lines = fold_lines(&input);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 75);
    }

    #[test]
    fn line_of_76_octets_folds_one_octet_onto_continuation() {
        let mut input = vec![b'a'; 75];
        input.push(b'z');
        let lines = fold_lines(&input);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], vec![b'a'; 75]);
        assert_eq!(lines[1], b" z".to_vec());
    }

    #[test]
    fn remainder_of_exactly_74_octets_emits_no_empty_tail() {
        // 75 + 74 fills the first line and one full continuation line
        let input = vec![b'a'; 149];
        let lines = fold_lines(&input);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].len(), 75); // space + 74 octets

        // Two full continuation lines, still no empty third
        let input = vec![b'a'; 75 + 148];
        let lines = fold_lines(&input);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].len(), 75);
    }

    #[test]
    fn every_line_is_at_most_75_octets() {
        for len in [1, 74, 75, 76, 149, 150, 223, 1000] {
            let input = vec![b'x'; len];
            for line in fold_lines(&input) {
                assert!(line.len() <= 75, "len {len}: line of {} octets", line.len());
            }
        }
    }

    #[test]
    fn unfolding_reconstructs_the_input() {
        let input: Vec<u8> = (0..500u32).map(|i| b'A' + (i % 26) as u8).collect();
        let lines = fold_lines(&input);
        assert_eq!(unfold(&lines), input);
    }

    #[test]
    fn folding_counts_octets_not_characters() {
        // 74 ASCII octets then a two-octet sequence straddling the boundary
        let mut input = vec![b'a'; 74];
        input.extend_from_slice("é".as_bytes());
        let lines = fold_lines(&input);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 75);
        assert_eq!(lines[1], vec![b' ', "é".as_bytes()[1]]);
        assert_eq!(unfold(&lines), input);
    }
}
