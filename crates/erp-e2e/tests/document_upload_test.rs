// Integration tests for identity-document fields and attachments
//
// Tests cover:
// - Document type lookup opened from the field itself
// - Number, issue and expiry fields
// - Single and multiple file attachments, and a missing file

mod common;
mod test_server;

use playwright_rs::expect;
use std::fs;
use test_server::TestServer;

#[tokio::test]
async fn test_document_fields_and_attachments() {
    common::init_tracing();
    let server = TestServer::start().await;
    let session = common::launch(&server.url()).await;
    let app = session.app();
    app.common
        .navigate_to_app("/document.html")
        .await
        .expect("Failed to open document page");

    app.document
        .select_document_type("Civil ID")
        .await
        .expect("Failed to select document type");
    expect(app.page.locator("#EmployeeDocument_DocumentTypeId").await)
        .to_have_text("Civil ID")
        .await
        .expect("Document type not selected");

    app.document.fill_document_number("A1234567").await.expect("number");
    app.document.fill_date_of_issue("01/02/2024").await.expect("issue date");
    app.document.fill_place_of_issue("Kuwait").await.expect("place");
    app.document.fill_date_of_expiry("01/02/2034").await.expect("expiry date");
    expect(app.page.locator("#EmployeeDocument_DocumentNumber").await)
        .to_have_value("A1234567")
        .await
        .expect("Document number not filled");
    expect(app.page.locator("#EmployeeDocument_DateOfExpiry").await)
        .to_have_value("01/02/2034")
        .await
        .expect("Expiry date not filled");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let scan = dir.path().join("passport-scan.pdf");
    let photo = dir.path().join("photo.png");
    fs::write(&scan, b"%PDF-1.4").expect("Failed to write scan");
    fs::write(&photo, b"png").expect("Failed to write photo");

    app.document
        .click_add_attachment()
        .await
        .expect("Failed to open attachment dialog");
    app.upload.attach_file(&scan).await.expect("Failed to attach file");
    expect(app.page.locator("#attachments").await)
        .to_have_text("passport-scan.pdf")
        .await
        .expect("Attachment not listed");

    app.upload
        .attach_files(&[scan.clone(), photo.clone()])
        .await
        .expect("Failed to attach files");
    expect(app.page.locator("#attachments").await)
        .to_contain_text("photo.png")
        .await
        .expect("Second attachment not listed");
    let listed = app
        .page
        .locator("#attachments li")
        .await
        .count()
        .await
        .expect("Failed to count attachments");
    assert_eq!(listed, 2);

    // A missing file fails before touching the page
    let missing = app.upload.attach_file(dir.path().join("missing.pdf")).await;
    assert!(matches!(missing, Err(erp_e2e::Error::Io(_))));

    session.close().await.expect("Failed to close session");
    server.shutdown();
}
