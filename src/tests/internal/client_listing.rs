use crate::internal::auth::structs::credential::Credential;
use crate::internal::bscw::enums::{DOCUMENT_CLASS, FOLDER_CLASS, ObjectClass};
use crate::internal::bscw::structs::{BscwClient, ObjectId};
use crate::internal::session::structs::bscw_session::BscwSession;
use crate::tests::{FakeTransport, xml};

fn logged_session() -> BscwSession {
    let mut session = BscwSession::new();
    session.set_credential(Credential::new("u", "p"));
    session.set_root_id("100".into());
    session
}

fn listing_client(records: &[String]) -> (FakeTransport, BscwClient) {
    let transport = FakeTransport::new();
    transport.respond(xml::response(&xml::array(records)));
    let client = transport.client();
    (transport, client)
}

#[tokio::test]
async fn listing_keeps_folders_and_documents_only() {
    let (transport, client) = listing_client(&[
        xml::folder("12", "Reports"),
        xml::folder("13", "2024"),
        xml::document("14", "summary.pdf", 2048, "application/pdf"),
        xml::structure(&[
            ("__class__", xml::string("bscw.core.cl_url.URL")),
            ("__id__", xml::string("15")),
            ("name", xml::string("homepage")),
        ]),
        xml::named("16", "no class"),
    ]);
    let mut session = logged_session();

    let entries = client.get_listing(&mut session, "12", 1).await.unwrap();

    assert_eq!(entries.len(), 2);

    let folder = &entries[0];
    assert!(folder.is_dir);
    assert_eq!(folder.id, ObjectId::new("13"));
    assert_eq!(folder.path, "/Reports/2024");
    assert_eq!(folder.size, None);
    assert_eq!(folder.modified_timestamp(), Some(1704450030));

    let file = &entries[1];
    assert!(!file.is_dir);
    assert_eq!(file.name, "summary.pdf");
    assert_eq!(file.size, Some(2048));
    assert_eq!(file.content_type.as_deref(), Some("application/pdf"));

    let body = &transport.calls()[0].body;
    assert!(body.contains("<string>12</string>"));
    assert!(body.contains("<string>__class__</string>"));
    assert!(body.contains("<i4>1</i4>"));
    assert!(body.contains("<boolean>0</boolean>"));
}

#[tokio::test]
async fn listing_caches_folder_names() {
    let (transport, client) = listing_client(&[
        xml::folder("12", "Reports"),
        xml::folder("13", "2024"),
        xml::document("14", "summary.pdf", 10, "application/pdf"),
    ]);
    let mut session = logged_session();

    client.get_listing(&mut session, "12", 1).await.unwrap();

    assert_eq!(session.cached_name(&"13".into()), Some("2024"));
    assert_eq!(session.cached_name(&"14".into()), None);

    let name = client.resolve_id(&mut session, &"13".into()).await.unwrap();
    assert_eq!(name, "2024");
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn root_listing_uses_empty_base_path() {
    let (_transport, client) = listing_client(&[
        xml::folder("100", ":alice"),
        xml::folder("12", "a/b"),
    ]);
    let mut session = logged_session();

    let entries = client.get_listing(&mut session, "/", 1).await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "/a%2Fb");
}

#[tokio::test]
async fn nested_listing_is_flattened() {
    let transport = FakeTransport::new();
    transport.respond(xml::response(&xml::array(&[
        xml::folder("12", "Reports"),
        xml::array(&[
            xml::document("14", "a.txt", 1, "text/plain"),
            xml::document("15", "b.txt", 2, "text/plain"),
        ]),
    ])));
    let client = transport.client();
    let mut session = logged_session();

    let entries = client.get_listing(&mut session, "12", 1).await.unwrap();

    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["a.txt", "b.txt"]);
}

#[tokio::test]
async fn empty_listing_returns_nothing() {
    let (_transport, client) = listing_client(&[]);
    let mut session = logged_session();

    let entries = client.get_listing(&mut session, "12", 1).await.unwrap();
    assert!(entries.is_empty());
}

#[test]
fn object_class_keeps_unknown_tags() {
    let class = ObjectClass::from_tag("bscw.core.cl_url.URL");
    assert_eq!(class, ObjectClass::Unknown("bscw.core.cl_url.URL".to_string()));
    assert_eq!(class.as_tag(), "bscw.core.cl_url.URL");
    assert!(!class.is_folder());

    assert_eq!(ObjectClass::from_tag(FOLDER_CLASS).as_tag(), FOLDER_CLASS);
    assert!(ObjectClass::from_tag(FOLDER_CLASS).is_folder());
    assert_eq!(ObjectClass::from_tag(DOCUMENT_CLASS), ObjectClass::Document);
}
