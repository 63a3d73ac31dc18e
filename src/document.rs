//! Object graph of a report document.
//!
//! Objects are numbered in allocation order, starting at 1:
//!
//! ```text
//! 1           Helvetica (/F1)
//! 2           Helvetica-Bold (/F2)
//! 3 ..= 2+n   content stream of page 1..=n
//! 3+n ..= 2+2n page 1..=n
//! 3+2n        /Pages tree
//! 4+2n        /Catalog (document root)
//! ```

use crate::{
    font::BuiltinFont,
    layout::{PAGE_HEIGHT, PAGE_WIDTH},
    units::{Pt, Rect},
};

/// A numbered PDF object: a dictionary, optionally followed by a stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfObject {
    /// Object number, generation is always 0
    pub id: u32,
    /// Dictionary written between `obj` and `endobj` (or before `stream`)
    pub body: String,
    /// Raw, uncompressed stream bytes
    pub stream: Option<Vec<u8>>,
}

impl PdfObject {
    pub fn new(id: u32, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
            stream: None,
        }
    }

    /// Stream object, /Length is derived from `stream`
    pub fn with_stream(id: u32, stream: Vec<u8>) -> Self {
        Self {
            id,
            body: format!("<< /Length {} >>", stream.len()),
            stream: Some(stream),
        }
    }

    /// `<id> 0 R`
    pub fn reference(&self) -> String {
        reference(self.id)
    }
}

fn reference(id: u32) -> String {
    format!("{} 0 R", id)
}

/// The complete, ordered object list of a document plus the id of its catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    pub objects: Vec<PdfObject>,
    pub root: u32,
}

impl PdfDocument {
    pub fn get_object(&self, id: u32) -> Option<&PdfObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Number of page objects in the document
    pub fn page_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| o.body.starts_with("<< /Type /Page "))
            .count()
    }
}

/// Hands out object ids 1, 2, 3, ... in call order
#[derive(Debug)]
struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    fn new() -> Self {
        Self { next: 1 }
    }

    fn next(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next call to `next` will return
    fn peek(&self) -> u32 {
        self.next
    }
}

/// A4, shared by all pages
pub fn media_box() -> Rect {
    Rect::from_wh(Pt(PAGE_WIDTH), Pt(PAGE_HEIGHT))
}

/// Builds the object graph for the given page content streams, one page per stream.
pub fn assemble(content_streams: Vec<Vec<u8>>) -> PdfDocument {
    let page_count = content_streams.len();
    let mut ids = IdAllocator::new();
    let mut objects = Vec::with_capacity(2 * page_count + 4);

    let font_refs = BuiltinFont::ALL
        .iter()
        .map(|font| {
            let object = PdfObject::new(ids.next(), font.get_dict());
            let entry = format!("/{} {}", font.get_pdf_id(), object.reference());
            objects.push(object);
            entry
        })
        .collect::<Vec<_>>();
    let resources = format!("<< /Font << {} >> >>", font_refs.join(" "));

    let content_ids = content_streams
        .into_iter()
        .map(|stream| {
            let object = PdfObject::with_stream(ids.next(), stream);
            let id = object.id;
            objects.push(object);
            id
        })
        .collect::<Vec<_>>();

    // pages come right after the contents, the tree right after the pages
    let pages_id = ids.peek() + page_count as u32;
    let media_box = media_box().to_pdf_array();

    let page_ids = content_ids
        .iter()
        .map(|content_id| {
            let id = ids.next();
            objects.push(PdfObject::new(
                id,
                format!(
                    "<< /Type /Page /Parent {} /MediaBox {} /Resources {} /Contents {} >>",
                    reference(pages_id),
                    media_box,
                    resources,
                    reference(*content_id),
                ),
            ));
            id
        })
        .collect::<Vec<_>>();

    let tree_id = ids.next();
    debug_assert_eq!(tree_id, pages_id);
    let kids = page_ids
        .iter()
        .map(|id| reference(*id))
        .collect::<Vec<_>>()
        .join(" ");
    objects.push(PdfObject::new(
        tree_id,
        format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, page_ids.len()),
    ));

    let catalog_id = ids.next();
    objects.push(PdfObject::new(
        catalog_id,
        format!("<< /Type /Catalog /Pages {} >>", reference(tree_id)),
    ));

    PdfDocument {
        objects,
        root: catalog_id,
    }
}
