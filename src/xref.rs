//! Reading back the cross-reference table of a serialized document.
//!
//! Only the layout this crate writes is understood: a single classic xref
//! section starting at object 0, found through the last `startxref`.

use crate::errors::ReportError;

/// One in-use entry of the xref table
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct XrefEntry {
    pub id: u32,
    pub offset: usize,
}

/// Each entry line is exactly 20 bytes: `nnnnnnnnnn ggggg n \n`
const ENTRY_LEN: usize = 20;

fn find_last(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

fn parse_ascii_number(bytes: &[u8]) -> Option<usize> {
    let s = std::str::from_utf8(bytes).ok()?;
    s.trim().parse().ok()
}

/// Returns the in-use entries of the xref table, in id order
pub fn read_xref(bytes: &[u8]) -> Result<Vec<XrefEntry>, ReportError> {
    let startxref = find_last(bytes, b"startxref\n")
        .ok_or(ReportError::MalformedXref("no startxref keyword"))?;
    let after = &bytes[startxref + b"startxref\n".len()..];
    let line_end = after
        .iter()
        .position(|b| *b == b'\n')
        .ok_or(ReportError::MalformedXref("startxref offset is not terminated"))?;
    let xref_offset = parse_ascii_number(&after[..line_end])
        .ok_or(ReportError::MalformedXref("startxref offset is not a number"))?;

    let section = bytes
        .get(xref_offset..)
        .filter(|s| s.starts_with(b"xref\n0 "))
        .ok_or(ReportError::MalformedXref("startxref does not point at an xref section"))?;
    let section = &section[b"xref\n0 ".len()..];
    let count_end = section
        .iter()
        .position(|b| *b == b'\n')
        .ok_or(ReportError::MalformedXref("subsection header is not terminated"))?;
    let count = parse_ascii_number(&section[..count_end])
        .ok_or(ReportError::MalformedXref("subsection count is not a number"))?;
    let table = &section[count_end + 1..];

    let table_len = count
        .checked_mul(ENTRY_LEN)
        .filter(|len| count > 0 && *len <= table.len())
        .ok_or(ReportError::MalformedXref("xref table is truncated"))?;

    let mut entries = Vec::with_capacity(table_len / ENTRY_LEN - 1);
    for (id, line) in table.chunks_exact(ENTRY_LEN).take(count).enumerate() {
        if id == 0 {
            continue;
        }
        if &line[17..] != b"n \n" {
            return Err(ReportError::MalformedXref("object is not marked in use"));
        }
        let offset = parse_ascii_number(&line[..10])
            .ok_or(ReportError::MalformedXref("entry offset is not a number"))?;
        entries.push(XrefEntry {
            id: id as u32,
            offset,
        });
    }

    Ok(entries)
}

/// Checks that every xref entry points at the `<id> 0 obj` line of its object
pub fn verify_xref(bytes: &[u8]) -> Result<usize, ReportError> {
    let entries = read_xref(bytes)?;
    for entry in &entries {
        let marker = format!("{} 0 obj\n", entry.id);
        let found = bytes
            .get(entry.offset..)
            .map(|rest| rest.starts_with(marker.as_bytes()))
            .unwrap_or(false);
        if !found {
            return Err(ReportError::XrefMismatch {
                id: entry.id,
                offset: entry.offset,
            });
        }
    }
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        document::{PdfDocument, PdfObject},
        serialize::serialize,
    };

    fn bytes() -> Vec<u8> {
        serialize(&PdfDocument {
            objects: vec![
                PdfObject::with_stream(1, b"BT ET".to_vec()),
                PdfObject::new(2, "<< /Type /Catalog >>"),
            ],
            root: 2,
        })
        .unwrap()
    }

    #[test]
    fn reads_back_what_was_written() {
        let bytes = bytes();
        let entries = read_xref(&bytes).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[1].id, 2);
        assert_eq!(verify_xref(&bytes).unwrap(), 2);
    }

    #[test]
    fn detects_shifted_offsets() {
        let mut bytes = bytes();
        // one extra byte in front of everything moves every object
        bytes.insert(9, b' ');
        assert!(matches!(
            verify_xref(&bytes),
            Err(ReportError::MalformedXref(_)) | Err(ReportError::XrefMismatch { .. })
        ));
    }

    #[test]
    fn detects_wrong_entry() {
        let mut bytes = bytes();
        let entries = read_xref(&bytes).unwrap();
        let right = format!("{:010} 00000 n \n", entries[1].offset);
        let wrong = format!("{:010} 00000 n \n", entries[1].offset + 1);
        let at = find_last(&bytes, right.as_bytes()).unwrap();
        bytes[at..at + ENTRY_LEN].copy_from_slice(wrong.as_bytes());
        assert!(matches!(
            verify_xref(&bytes),
            Err(ReportError::XrefMismatch { id: 2, .. })
        ));
    }

    #[test]
    fn rejects_huge_subsection_count() {
        let bytes = b"%PDF-1.4\nxref\n0 1000000000000000000\ntrailer\nstartxref\n9\n%%EOF";
        assert!(matches!(
            read_xref(bytes),
            Err(ReportError::MalformedXref("xref table is truncated"))
        ));

        let max = format!("%PDF-1.4\nxref\n0 {}\ntrailer\nstartxref\n9\n%%EOF", usize::MAX);
        assert!(matches!(
            read_xref(max.as_bytes()),
            Err(ReportError::MalformedXref("xref table is truncated"))
        ));
    }

    #[test]
    fn rejects_empty_subsection() {
        let bytes = b"%PDF-1.4\nxref\n0 0\ntrailer\nstartxref\n9\n%%EOF";
        assert!(matches!(read_xref(bytes), Err(ReportError::MalformedXref(_))));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            read_xref(b"%PDF-1.4\n"),
            Err(ReportError::MalformedXref(_))
        ));
    }
}
