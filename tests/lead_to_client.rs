use leadctl::client::{self, ClientUpdate, NewClient};
use leadctl::lead::{self, NewLead};
use leadctl::{ErrorCode, Store};

fn initialized_store(dir: &tempfile::TempDir) -> Store {
    Store::initialize(&dir.path().join("data").join("leadctl.db")).unwrap()
}

fn maria() -> NewLead {
    NewLead {
        first_name: "Maria".to_string(),
        last_name: "Lopez".to_string(),
        email: "maria@lopezelectric.com".to_string(),
        phone: "555-0142".to_string(),
        current_website: Some("lopezelectric.example".to_string()),
        source: None,
    }
}

#[test]
fn open_before_init_reports_not_initialized() {
    let dir = tempfile::tempdir().unwrap();
    let err = Store::open(&dir.path().join("missing.db")).err().unwrap();

    assert_eq!(err.code, ErrorCode::StoreNotInitialized);
}

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("leadctl.db");

    let id = {
        let store = Store::initialize(&path).unwrap();
        lead::add(&store, &maria()).unwrap()
    };

    let reopened = Store::open(&path).unwrap();
    let found = lead::load(&reopened, id).unwrap();
    assert_eq!(found.full_name(), "Maria Lopez");
    assert_eq!(found.source.as_deref(), Some(lead::DEFAULT_SOURCE));
    assert_eq!(found.status.as_deref(), Some("new"));
    assert_eq!(reopened.path(), Some(path.as_path()));
}

#[test]
fn initialize_twice_keeps_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leadctl.db");

    let store = Store::initialize(&path).unwrap();
    lead::add(&store, &maria()).unwrap();
    drop(store);

    let store = Store::initialize(&path).unwrap();
    assert_eq!(lead::list(&store, None).unwrap().len(), 1);
}

#[test]
fn converting_a_lead_links_both_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = initialized_store(&dir);

    let lead_id = lead::add(&store, &maria()).unwrap();
    let client_id = client::add(
        &store,
        &NewClient {
            slug: "lopez-electric".to_string(),
            business_name: "Lopez Electric".to_string(),
            business_type: Some("electrician".to_string()),
            lead_id: Some(lead_id),
            phone: Some("555-0142".to_string()),
            email: Some("maria@lopezelectric.com".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    lead::mark_converted(&store, lead_id, client_id).unwrap();

    let converted = lead::load(&store, lead_id).unwrap();
    assert_eq!(converted.status.as_deref(), Some(lead::STATUS_CONVERTED));
    assert_eq!(
        converted.notes,
        Some(format!("Converted to client #{}", client_id))
    );

    let created = client::load_by_slug(&store, "lopez-electric").unwrap();
    assert_eq!(created.id, client_id);
    assert_eq!(created.lead_id, Some(lead_id));
    assert_eq!(created.status.as_deref(), Some("intake"));
    assert_eq!(created.tier.as_deref(), Some("website_only"));

    assert_eq!(
        lead::list(&store, Some(lead::STATUS_CONVERTED)).unwrap().len(),
        1
    );
    assert!(lead::list(&store, Some("new")).unwrap().is_empty());
}

#[test]
fn client_with_unknown_lead_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = initialized_store(&dir);

    let result = client::add(
        &store,
        &NewClient {
            slug: "ghost".to_string(),
            business_name: "Ghost Co".to_string(),
            lead_id: Some(404),
            ..Default::default()
        },
    );

    assert_eq!(result.err().unwrap().code, ErrorCode::StoreQueryFailed);
    assert!(client::list(&store, None).unwrap().is_empty());
}

#[test]
fn partial_update_leaves_other_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = initialized_store(&dir);

    let id = client::add(
        &store,
        &NewClient {
            slug: "sunrise-cafe".to_string(),
            business_name: "Sunrise Cafe".to_string(),
            business_type: Some("restaurant".to_string()),
            phone: Some("555-0190".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let changes = ClientUpdate {
        address: Some("12 Main St".to_string()),
        tier: Some("full_service".to_string()),
        ..Default::default()
    };
    let updated = client::update(&store, id, &changes).unwrap();
    assert_eq!(updated, vec!["address", "tier"]);

    let after = client::load(&store, id).unwrap();
    assert_eq!(after.address.as_deref(), Some("12 Main St"));
    assert_eq!(after.tier.as_deref(), Some("full_service"));
    assert_eq!(after.phone.as_deref(), Some("555-0190"));
    assert_eq!(after.business_type.as_deref(), Some("restaurant"));

    client::update_status(&store, id, "building").unwrap();
    assert_eq!(
        client::list(&store, Some("building")).unwrap()[0].slug,
        "sunrise-cafe"
    );
}

#[test]
fn renaming_onto_a_taken_slug_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = initialized_store(&dir);

    for (slug, name) in [("first", "First"), ("second", "Second")] {
        client::add(
            &store,
            &NewClient {
                slug: slug.to_string(),
                business_name: name.to_string(),
                ..Default::default()
            },
        )
        .unwrap();
    }
    let second = client::load_by_slug(&store, "second").unwrap();

    let err = client::update(
        &store,
        second.id,
        &ClientUpdate {
            slug: Some("first".to_string()),
            ..Default::default()
        },
    )
    .err()
    .unwrap();

    assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    assert_eq!(client::load(&store, second.id).unwrap().slug, "second");
}
