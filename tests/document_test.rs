use tika_remote_reader::domain::{Document, METADATA_SOURCE};

#[test]
fn given_new_document_when_created_then_has_no_source() {
    let document = Document::new("text".to_string());

    assert_eq!(document.content, "text");
    assert!(document.metadata.is_empty());
    assert_eq!(document.source(), None);
}

#[test]
fn given_source_metadata_when_reading_source_then_returns_it() {
    let document = Document::new(String::new()).with_metadata(METADATA_SOURCE, "sample.docx");

    assert_eq!(document.source(), Some("sample.docx"));
    assert_eq!(document.content, "");
}

#[test]
fn given_two_documents_when_created_then_ids_differ() {
    let first = Document::new("a".to_string());
    let second = Document::new("a".to_string());

    assert_ne!(first.id, second.id);
}

#[test]
fn given_document_id_when_displayed_then_matches_uuid() {
    let document = Document::new(String::new());

    assert_eq!(document.id.to_string(), document.id.as_uuid().to_string());
}
