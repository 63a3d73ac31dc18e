use log::trace;

use crate::{document::PdfDocument, errors::ReportError};

/// Version line followed by a comment with four bytes above 127, which marks
/// the file as binary for transfer tools
pub const PDF_HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

/// First entry of every xref table: object 0, head of the free list
const XREF_FREE_HEAD: &[u8] = b"0000000000 65535 f \n";

/// Writes the document into its final byte form.
///
/// Each object's offset is the length of the buffer at the moment its
/// `<id> 0 obj` line is appended, so the xref table can only be as wrong as
/// the bytes actually written. Objects must be numbered 1, 2, 3, ... in list
/// order and the root must be one of them.
pub fn serialize(doc: &PdfDocument) -> Result<Vec<u8>, ReportError> {
    for (position, object) in doc.objects.iter().enumerate() {
        let expected = position as u32 + 1;
        if object.id != expected {
            return Err(ReportError::NonSequentialObjectId {
                position,
                expected,
                found: object.id,
            });
        }
    }
    if doc.get_object(doc.root).is_none() {
        return Err(ReportError::MissingRoot {
            root: doc.root,
            count: doc.objects.len(),
        });
    }

    let stream_bytes = doc
        .objects
        .iter()
        .filter_map(|o| o.stream.as_ref().map(Vec::len))
        .sum::<usize>();
    let mut out = Vec::with_capacity(stream_bytes + doc.objects.len() * 160 + 256);
    out.extend_from_slice(PDF_HEADER);

    let mut offsets = Vec::with_capacity(doc.objects.len());
    for object in &doc.objects {
        offsets.push(out.len());
        trace!("object {} at byte {}", object.id, out.len());

        out.extend_from_slice(format!("{} 0 obj\n", object.id).as_bytes());
        out.extend_from_slice(object.body.as_bytes());
        out.push(b'\n');
        if let Some(stream) = &object.stream {
            out.extend_from_slice(b"stream\n");
            out.extend_from_slice(stream);
            out.extend_from_slice(b"\nendstream\n");
        }
        out.extend_from_slice(b"endobj\n");
    }

    let xref_offset = out.len();
    let size = doc.objects.len() + 1;
    out.extend_from_slice(format!("xref\n0 {}\n", size).as_bytes());
    out.extend_from_slice(XREF_FREE_HEAD);
    for offset in &offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }

    out.extend_from_slice(
        format!(
            "trailer << /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF",
            size, doc.root, xref_offset
        )
        .as_bytes(),
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PdfObject;
    use pretty_assertions::assert_eq;

    fn tiny() -> PdfDocument {
        PdfDocument {
            objects: vec![
                PdfObject::with_stream(1, b"abc".to_vec()),
                PdfObject::new(2, "<< /Type /Catalog >>"),
            ],
            root: 2,
        }
    }

    #[test]
    fn exact_bytes() {
        let bytes = serialize(&tiny()).unwrap();
        let header_len = PDF_HEADER.len();
        let first = header_len;
        let second = first + "1 0 obj\n<< /Length 3 >>\nstream\nabc\nendstream\nendobj\n".len();
        let xref = second + "2 0 obj\n<< /Type /Catalog >>\nendobj\n".len();

        let mut expected = PDF_HEADER.to_vec();
        expected.extend_from_slice(
            format!(
                "1 0 obj\n<< /Length 3 >>\nstream\nabc\nendstream\nendobj\n\
                 2 0 obj\n<< /Type /Catalog >>\nendobj\n\
                 xref\n0 3\n\
                 0000000000 65535 f \n\
                 {:010} 00000 n \n\
                 {:010} 00000 n \n\
                 trailer << /Size 3 /Root 2 0 R >>\nstartxref\n{}\n%%EOF",
                first, second, xref
            )
            .as_bytes(),
        );
        assert_eq!(bytes, expected);
    }

    #[test]
    fn rejects_gaps_in_numbering() {
        let mut doc = tiny();
        doc.objects[1].id = 3;
        doc.root = 3;
        assert!(matches!(
            serialize(&doc),
            Err(ReportError::NonSequentialObjectId { position: 1, expected: 2, found: 3 })
        ));
    }

    #[test]
    fn rejects_unknown_root() {
        let mut doc = tiny();
        doc.root = 9;
        assert!(matches!(
            serialize(&doc),
            Err(ReportError::MissingRoot { root: 9, count: 2 })
        ));
    }
}
