use lopdf::{Dictionary, Document, Object, Stream};
use toolya_pdf::{
    PdfError, load_document_bytes, merge_documents, save_to_bytes, split, split_document,
};

/// Build an in-memory PDF whose page contents carry identifiable markers
/// like `(Page-1)`, `(Page-2)`, ...
fn create_test_pdf(num_pages: usize, prefix: &str) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for page_num in 0..num_pages {
        let content = format!("BT /F1 12 Tf 50 700 Td ({}-{}) Tj ET", prefix, page_num + 1);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Read back the `(...)` markers of every page, in page order.
fn page_markers(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let content = doc.get_page_content(page_id).unwrap();
            let text = String::from_utf8_lossy(&content).to_string();
            let start = text.find('(').unwrap() + 1;
            let end = text.find(')').unwrap();
            text[start..end].to_string()
        })
        .collect()
}

#[test]
fn split_selects_listed_pages_in_order() {
    let doc = create_test_pdf(5, "Page");

    let result = split_document(&doc, "1-2,4").unwrap();

    assert_eq!(result.get_pages().len(), 3);
    assert_eq!(page_markers(&result), vec!["Page-1", "Page-2", "Page-4"]);
}

#[test]
fn split_honors_expression_order_literally() {
    let doc = create_test_pdf(5, "Page");

    let result = split_document(&doc, "3,1-2").unwrap();

    assert_eq!(page_markers(&result), vec!["Page-3", "Page-1", "Page-2"]);
}

#[test]
fn split_keeps_duplicate_selections() {
    let doc = create_test_pdf(5, "Page");

    let result = split_document(&doc, "2,2").unwrap();

    assert_eq!(page_markers(&result), vec!["Page-2", "Page-2"]);
}

#[test]
fn split_does_not_mutate_the_source() {
    let doc = create_test_pdf(3, "Page");

    split_document(&doc, "2").unwrap();

    assert_eq!(page_markers(&doc), vec!["Page-1", "Page-2", "Page-3"]);
}

#[test]
fn split_rejects_out_of_bounds_index() {
    let doc = create_test_pdf(5, "Page");

    match split_document(&doc, "10") {
        Err(PdfError::PageOutOfBounds {
            page: 10,
            page_count: 5,
        }) => {}
        other => panic!("expected PageOutOfBounds, got {other:?}"),
    }
}

#[test]
fn split_rejects_descending_range() {
    let doc = create_test_pdf(5, "Page");
    assert!(matches!(
        split_document(&doc, "5-3"),
        Err(PdfError::Range(_))
    ));
}

#[test]
fn split_rejects_malformed_expressions() {
    let doc = create_test_pdf(5, "Page");
    assert!(split_document(&doc, "").is_err());
    assert!(split_document(&doc, "abc").is_err());
    assert!(split_document(&doc, "1,,2").is_err());
    assert!(split_document(&doc, "0").is_err());
}

#[test]
fn merge_then_split_reproduces_the_first_page() {
    let doc_a = create_test_pdf(1, "DocA");
    let doc_b = create_test_pdf(1, "DocB");

    let merged = merge_documents(&[doc_a.clone(), doc_b]).unwrap();
    let first = split_document(&merged, "1").unwrap();

    assert_eq!(first.get_pages().len(), 1);
    assert_eq!(page_markers(&first), page_markers(&doc_a));
}

#[test]
fn split_output_survives_a_byte_round_trip() {
    let doc = create_test_pdf(4, "Page");

    let mut result = split_document(&doc, "2,4").unwrap();
    let bytes = save_to_bytes(&mut result).unwrap();
    let reloaded = load_document_bytes(&bytes).unwrap();

    assert_eq!(page_markers(&reloaded), vec!["Page-2", "Page-4"]);
}

#[tokio::test]
async fn split_async_wrapper_extracts_pages() {
    let doc = create_test_pdf(4, "Page");

    let result = split(doc, "4,1").await.unwrap();

    assert_eq!(page_markers(&result), vec!["Page-4", "Page-1"]);
}
