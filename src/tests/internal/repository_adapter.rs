use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::internal::auth::structs::credential::Credential;
use crate::internal::bscw::structs::{ObjectId, PathCrumb};
use crate::internal::config::structs::memory_config_store::MemoryConfigStore;
use crate::internal::config::structs::repository_config::{
    OPTION_BSCW_URL, OPTION_FORCE_HOST_USERNAME,
};
use crate::internal::config::traits::config_store::ConfigStore;
use crate::internal::entrance::driver::{HostRequest, HostResponse, handle_request};
use crate::internal::errors::bscw_error::BscwError;
use crate::internal::repository::structs::bscw_repository::{
    BscwRepository, LABEL_ROOT, LOGOUT_HINT, session_key,
};
use crate::internal::repository::structs::capabilities::FileTypes;
use crate::internal::repository::structs::folder_listing::{ListItem, ListingResponse};
use crate::internal::repository::structs::host_context::{
    FIELD_PASSWORD, FIELD_USERNAME, HostUser, LoginSubmission, RepositoryOptions,
};
use crate::internal::repository::traits::repository::Repository;
use crate::internal::session::structs::memory_session_store::MemorySessionStore;
use crate::internal::session::traits::session_store::SessionStore;
use crate::tests::{FakeTransport, TEST_SERVER_URL, xml};

const REPOSITORY_ID: u64 = 7;

struct Host {
    transport: FakeTransport,
    config_store: MemoryConfigStore,
    session_store: MemorySessionStore,
    options: RepositoryOptions,
}

impl Host {
    fn new() -> Self {
        let config_store = MemoryConfigStore::new();
        config_store.set(OPTION_BSCW_URL, TEST_SERVER_URL).unwrap();

        Self {
            transport: FakeTransport::new(),
            config_store,
            session_store: MemorySessionStore::new(),
            options: RepositoryOptions::new(HostUser::new("alice", "Alice Example")),
        }
    }

    async fn open(&self, login: LoginSubmission) -> BscwRepository {
        BscwRepository::with_client(
            REPOSITORY_ID,
            self.transport.client(),
            Arc::new(self.config_store.clone()),
            Arc::new(self.session_store.clone()),
            self.options.clone(),
            login,
        )
        .await
    }

    /// 登录一次，之后的请求都从会话存储恢复
    async fn logged_in(&self) -> BscwRepository {
        self.transport.respond(xml::root("100"));
        self.open(LoginSubmission::new("alice", "p")).await
    }
}

fn expect_login(response: ListingResponse) {
    match response {
        ListingResponse::Login(form) => {
            assert!(form.field(FIELD_USERNAME).is_some());
            assert!(form.field(FIELD_PASSWORD).is_some());
        }
        other => panic!("expected login form, got {other:?}"),
    }
}

#[tokio::test]
async fn anonymous_listing_shows_login_form() {
    let host = Host::new();
    let mut repository = host.open(LoginSubmission::default()).await;

    assert!(!repository.is_logged_in());
    assert!(!repository.check_login());
    expect_login(repository.get_listing("", "").await.unwrap());

    let form = repository.print_login();
    let username = form.field(FIELD_USERNAME).unwrap();
    assert_eq!(username.value.as_deref(), Some("alice"));
    assert!(!username.readonly);

    assert_eq!(host.transport.call_count(), 0);
}

#[tokio::test]
async fn login_is_persisted_and_restored() {
    let host = Host::new();
    let repository = host.logged_in().await;

    assert!(repository.is_logged_in());
    assert!(repository.check_login());

    let stored = host.session_store.load(&session_key(REPOSITORY_ID)).unwrap();
    assert_eq!(stored.credential(), Some(&Credential::new("alice", "p")));
    assert_eq!(stored.root_id(), Some(&ObjectId::new("100")));

    let restored = host.open(LoginSubmission::default()).await;
    assert!(restored.is_logged_in());
    assert_eq!(host.transport.call_count(), 1);
}

#[tokio::test]
async fn forced_host_username_overrides_submission() {
    let host = Host::new();
    host.config_store
        .set(OPTION_FORCE_HOST_USERNAME, "1")
        .unwrap();
    host.transport.respond(xml::root("100"));

    let repository = host.open(LoginSubmission::new("mallory", "p")).await;

    assert!(repository.is_logged_in());
    assert_eq!(host.transport.calls()[0].token, Credential::new("alice", "p").as_str());

    let form = repository.print_login();
    assert!(form.field(FIELD_USERNAME).unwrap().readonly);
}

#[tokio::test]
async fn failed_login_leaves_session_empty() {
    let host = Host::new();
    host.transport.respond(xml::fault(401, "unauthorized"));

    let repository = host.open(LoginSubmission::new("alice", "wrong")).await;

    assert!(!repository.is_logged_in());
    assert!(host.session_store.is_empty());
    assert!(repository.session().credential().is_none());
}

#[tokio::test]
async fn incomplete_submission_does_not_log_in() {
    let host = Host::new();
    let fields: HashMap<String, String> =
        [(FIELD_USERNAME.to_string(), "alice".to_string())].into_iter().collect();

    let repository = host.open(LoginSubmission::from_form(&fields)).await;

    assert!(!repository.is_logged_in());
    assert_eq!(host.transport.call_count(), 0);
}

#[tokio::test]
async fn listing_orders_filters_and_builds_breadcrumbs() {
    let mut host = Host::new();
    host.options = host.options.clone().with_accepted_types(&[".pdf"]);
    let mut repository = host.logged_in().await;

    host.transport
        .respond(xml::response(&xml::array(&[
            xml::folder("12", "Reports"),
            xml::document("14", "a.pdf", 10, "application/pdf"),
            xml::document("15", "b.txt", 20, "text/plain"),
            xml::folder("13", "2024"),
        ])))
        .respond(xml::path(&["100", "12"]))
        .respond(xml::response(&xml::named("100", ":alice")))
        .respond(xml::response(&xml::named("12", "Reports")));

    let response = repository.get_listing("12", "/Reports").await.unwrap();

    let listing = match response {
        ListingResponse::Listing(listing) => listing,
        other => panic!("expected listing, got {other:?}"),
    };

    assert!(listing.dynload);
    assert!(listing.nosearch);
    assert_eq!(listing.manage, TEST_SERVER_URL);
    assert_eq!(listing.message, LOGOUT_HINT);
    assert_eq!(
        listing.path,
        vec![
            PathCrumb::new(":alice", "100"),
            PathCrumb::new("Reports", "12"),
            PathCrumb::new("Reports", "/Reports"),
        ]
    );

    let titles: Vec<_> = listing.list.iter().map(ListItem::title).collect();
    assert_eq!(titles, ["2024", "a.pdf"]);
    assert!(listing.list[0].is_folder());
    assert!(matches!(
        &listing.list[1],
        ListItem::File { source, size: Some(10), .. } if source.as_str() == "14"
    ));

    let stored = host.session_store.load(&session_key(REPOSITORY_ID)).unwrap();
    assert_eq!(stored.cached_name(&"13".into()), Some("2024"));
    assert_eq!(stored.cached_name(&"12".into()), Some("Reports"));
}

#[tokio::test]
async fn empty_listing_has_root_breadcrumb_only() {
    let host = Host::new();
    let mut repository = host.logged_in().await;
    host.transport.respond(xml::response(&xml::array(&[])));

    let response = repository.get_listing("", "").await.unwrap();

    match response {
        ListingResponse::Listing(listing) => {
            assert_eq!(listing.path, vec![PathCrumb::new(LABEL_ROOT, "/")]);
            assert!(listing.list.is_empty());
        }
        other => panic!("expected listing, got {other:?}"),
    }
    assert_eq!(host.transport.call_count(), 2);
}

#[tokio::test]
async fn remote_errors_are_returned() {
    let host = Host::new();
    let mut repository = host.logged_in().await;
    host.transport.respond(xml::fault(4, "object not found"));

    let err = repository.get_listing("99", "").await.unwrap_err();
    assert!(matches!(err, BscwError::RemoteFault { code: 4, .. }));
    assert!(repository.is_logged_in());
}

#[tokio::test]
async fn logout_clears_stored_session() {
    let host = Host::new();
    let mut repository = host.logged_in().await;

    let form = repository.logout();

    assert!(form.field(FIELD_PASSWORD).is_some());
    assert!(!repository.is_logged_in());
    assert!(!repository.check_login());
    assert!(host.session_store.is_empty());

    expect_login(repository.get_listing("12", "").await.unwrap());
}

#[tokio::test]
async fn download_through_repository() {
    let host = Host::new();
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("a.pdf");

    let mut anonymous = host.open(LoginSubmission::default()).await;
    let err = anonymous.get_file("14", &destination).await.unwrap_err();
    assert!(err.is_auth_not_set());

    let mut repository = host.logged_in().await;
    host.transport.respond(xml::response(&xml::base64("aGVsbG8=")));

    let fetched = repository.get_file("14", &destination).await.unwrap();
    assert_eq!(fetched.object_id, ObjectId::new("14"));
    assert_eq!(std::fs::read(&destination).unwrap(), b"hello");
}

#[tokio::test]
async fn options_and_capabilities() {
    let host = Host::new();
    let mut repository = host.open(LoginSubmission::default()).await;

    let options: BTreeMap<String, String> = [
        (OPTION_FORCE_HOST_USERNAME.to_string(), "1".to_string()),
        ("pluginname".to_string(), "Team BSCW".to_string()),
    ]
    .into_iter()
    .collect();
    let rest = repository.set_option(&options).unwrap();

    assert_eq!(rest.len(), 1);
    assert!(repository.config().force_host_username);
    assert_eq!(repository.get_option(OPTION_BSCW_URL).as_deref(), Some(TEST_SERVER_URL));

    assert_eq!(repository.supported_filetypes(), FileTypes::All);
    let return_types = repository.supported_returntypes();
    assert!(return_types.internal && return_types.external);
    assert_eq!(
        repository.get_file_source_info("a.pdf"),
        "BSCW (Alice Example): a.pdf"
    );
    assert_eq!(repository.get_link("https://x/y"), "https://x/y");

    assert_eq!(BscwRepository::type_option_names().len(), 3);
    assert_eq!(
        BscwRepository::type_config_form(&host.config_store).fields.len(),
        3
    );
}

#[tokio::test]
async fn driver_dispatches_host_requests() {
    let host = Host::new();
    let mut repository = host.logged_in().await;

    let response = handle_request(
        &mut repository,
        HostRequest::SourceInfo {
            source: "a.pdf".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(
        response,
        HostResponse::SourceInfo("BSCW (Alice Example): a.pdf".to_string())
    );

    host.transport.respond(xml::response(&xml::array(&[])));
    let response = handle_request(
        &mut repository,
        HostRequest::List {
            object_id: "/".to_string(),
            path: String::new(),
        },
    )
    .await
    .unwrap();
    assert!(matches!(
        response,
        HostResponse::Listing(ListingResponse::Listing(_))
    ));

    let response = handle_request(&mut repository, HostRequest::Logout)
        .await
        .unwrap();
    assert!(matches!(response, HostResponse::Login(_)));
    assert!(!repository.is_logged_in());

    let dyn_repository: &mut dyn Repository = &mut repository;
    let response = handle_request(dyn_repository, HostRequest::PrintLogin)
        .await
        .unwrap();
    assert!(matches!(response, HostResponse::Login(_)));
}

#[tokio::test]
async fn external_link_requires_login() {
    let host = Host::new();

    let anonymous = host.open(LoginSubmission::default()).await;
    let err = anonymous.get_file_link("14").await.unwrap_err();
    assert!(err.is_auth_not_set());
    assert_eq!(host.transport.call_count(), 0);

    let repository = host.logged_in().await;
    host.transport
        .respond(xml::response(&xml::array(&[xml::structure(&[
            ("__id__", xml::string("14")),
            ("special_doc_ref", xml::string("d14/a.pdf")),
        ])])))
        .respond(xml::response(&xml::array(&[xml::named("15", "b.txt")])));

    let link = repository.get_file_link("14").await.unwrap();
    assert_eq!(link, Some(format!("{TEST_SERVER_URL}/d14/a.pdf")));
    assert_eq!(
        repository.get_link(link.as_deref().unwrap()),
        format!("{TEST_SERVER_URL}/d14/a.pdf")
    );

    assert_eq!(repository.get_file_link("15").await.unwrap(), None);

    let calls = host.transport.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls[1].body.contains("<string>special_doc_ref</string>"));
}
