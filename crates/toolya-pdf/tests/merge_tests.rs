use lopdf::{Dictionary, Document, Object, Stream};
use toolya_pdf::{
    PdfError, load_document, merge, merge_documents, merge_documents_with, save_document,
};

/// Build an in-memory PDF whose page contents carry identifiable markers
/// like `(DocA-1)`, `(DocA-2)`, ...
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
fn merge_combines_pages_in_input_order() {
    let doc_a = create_test_pdf(2, "DocA");
    let doc_b = create_test_pdf(3, "DocB");

    let merged = merge_documents(&[doc_a, doc_b]).unwrap();

    assert_eq!(merged.get_pages().len(), 5);
    assert_eq!(
        page_markers(&merged),
        vec!["DocA-1", "DocA-2", "DocB-1", "DocB-2", "DocB-3"]
    );
}

#[test]
fn merge_preserves_total_page_count() {
    let docs = vec![
        create_test_pdf(3, "First"),
        create_test_pdf(1, "Second"),
        create_test_pdf(4, "Third"),
    ];
    let expected: usize = docs.iter().map(|d| d.get_pages().len()).sum();

    let merged = merge_documents(&docs).unwrap();

    assert_eq!(merged.get_pages().len(), expected);
}

#[test]
fn merge_rejects_fewer_than_two_documents() {
    match merge_documents(&[]) {
        Err(PdfError::TooFewDocuments { count: 0 }) => {}
        other => panic!("expected TooFewDocuments, got {other:?}"),
    }

    let single = create_test_pdf(4, "Only");
    match merge_documents(&[single]) {
        Err(PdfError::TooFewDocuments { count: 1 }) => {}
        other => panic!("expected TooFewDocuments, got {other:?}"),
    }
}

#[test]
fn merge_does_not_mutate_inputs() {
    let doc_a = create_test_pdf(2, "DocA");
    let doc_b = create_test_pdf(2, "DocB");

    merge_documents(&[doc_a.clone(), doc_b.clone()]).unwrap();

    assert_eq!(page_markers(&doc_a), vec!["DocA-1", "DocA-2"]);
    assert_eq!(page_markers(&doc_b), vec!["DocB-1", "DocB-2"]);
}

#[test]
fn merge_append_is_associative() {
    let doc_a = create_test_pdf(2, "DocA");
    let doc_b = create_test_pdf(1, "DocB");
    let doc_c = create_test_pdf(2, "DocC");

    let pairwise = {
        let ab = merge_documents(&[doc_a.clone(), doc_b.clone()]).unwrap();
        merge_documents(&[ab, doc_c.clone()]).unwrap()
    };
    let direct = merge_documents(&[doc_a, doc_b, doc_c]).unwrap();

    assert_eq!(page_markers(&pairwise), page_markers(&direct));
}

#[test]
fn merge_progress_is_monotonic_and_complete() {
    let docs: Vec<Document> = (0..4)
        .map(|i| create_test_pdf(1, &format!("Doc{i}")))
        .collect();

    let mut percents = Vec::new();
    merge_documents_with(&docs, |progress| percents.push(progress.percent())).unwrap();

    assert_eq!(percents, vec![25, 50, 75, 100]);
    assert!(percents.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn merge_of_empty_documents_is_rejected() {
    let empty_a = create_test_pdf(0, "EmptyA");
    let empty_b = create_test_pdf(0, "EmptyB");

    match merge_documents(&[empty_a, empty_b]) {
        Err(PdfError::NoPages) => {}
        other => panic!("expected NoPages, got {other:?}"),
    }
}

#[tokio::test]
async fn merged_document_survives_disk_round_trip() {
    use tempfile::NamedTempFile;

    let doc_a = create_test_pdf(2, "DocA");
    let doc_b = create_test_pdf(3, "DocB");

    let merged = merge(vec![doc_a, doc_b]).await.unwrap();

    let temp = NamedTempFile::new().unwrap();
    save_document(merged, temp.path()).await.unwrap();

    let loaded = load_document(temp.path()).await.unwrap();
    assert_eq!(loaded.get_pages().len(), 5);
    assert_eq!(
        page_markers(&loaded),
        vec!["DocA-1", "DocA-2", "DocB-1", "DocB-2", "DocB-3"]
    );
}
