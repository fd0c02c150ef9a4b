//! Behaviour of the Diesel department repository against a real SQLite file.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use deptdesk::domain::ports::{DepartmentPersistenceError, DepartmentRepository};
use deptdesk::domain::{
    Department, DepartmentDraft, DepartmentForm, DepartmentId, DepartmentList, ErrorCode,
    FormFields, FormProfile, SearchOutcome,
};
use deptdesk::outbound::persistence::DieselDepartmentRepository;
use deptdesk::test_support::TestStore;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> TestStore {
    TestStore::new().expect("test store")
}

fn repository(store: &TestStore) -> DieselDepartmentRepository {
    DieselDepartmentRepository::new(store.store())
}

fn draft(name: &str) -> DepartmentDraft {
    DepartmentDraft::new(10, 100, name, "", "")
}

#[rstest]
fn insert_auto_id_adds_exactly_one_row(store: TestStore) {
    let repo = repository(&store);
    repo.insert_with_id(DepartmentId::new(3), &draft("Existing"))
        .expect("seed row");

    let id = repo
        .insert_auto_id(&DepartmentDraft::new(20, 200, "Maths", "", "m@x.edu"))
        .expect("insert");

    let rows = repo.list().expect("list");
    assert_eq!(rows.len(), 2);
    let added = rows
        .iter()
        .find(|row| row.id() == id)
        .expect("new row listed");
    assert_ne!(id, DepartmentId::new(3));
    assert_eq!(added.school_id(), 20);
    assert_eq!(added.dept_code(), 200);
    assert_eq!(added.name(), "Maths");
    assert_eq!(added.location(), None);
    assert_eq!(added.email(), Some("m@x.edu"));
}

#[rstest]
fn list_orders_by_id(store: TestStore) {
    let repo = repository(&store);
    for id in [9, 2, 5] {
        repo.insert_with_id(DepartmentId::new(id), &draft("Dept"))
            .expect("insert");
    }

    let ids: Vec<i32> = repo
        .list()
        .expect("list")
        .iter()
        .map(|row| row.id().get())
        .collect();

    assert_eq!(ids, vec![2, 5, 9]);
}

#[rstest]
fn auto_id_past_the_largest_id_is_refused_and_rolled_back(store: TestStore) {
    let repo = repository(&store);
    repo.insert_with_id(DepartmentId::new(i32::MAX), &draft("Last"))
        .expect("seed row");

    let err = repo
        .insert_auto_id(&draft("Overflow"))
        .expect_err("next id does not fit");

    assert!(matches!(err, DepartmentPersistenceError::Query { .. }));
    let ids: Vec<DepartmentId> = repo
        .list()
        .expect("list")
        .iter()
        .map(|row| row.id())
        .collect();
    assert_eq!(ids, vec![DepartmentId::new(i32::MAX)]);
}

#[rstest]
fn negative_ids_round_trip(store: TestStore) {
    let repo = repository(&store);
    repo.insert_with_id(DepartmentId::new(-5), &draft("Archive"))
        .expect("insert");

    let stored = repo
        .find_by_id(DepartmentId::new(-5))
        .expect("find")
        .expect("row exists");

    assert_eq!(stored.name(), "Archive");
    assert_eq!(repo.delete(DepartmentId::new(-5)).expect("delete"), 1);
}

#[rstest]
fn duplicate_explicit_id_is_a_uniqueness_error(store: TestStore) {
    let repo = repository(&store);
    repo.insert_with_id(DepartmentId::new(5), &draft("First"))
        .expect("first insert");

    let err = repo
        .insert_with_id(DepartmentId::new(5), &draft("Second"))
        .expect_err("second insert fails");

    assert!(matches!(err, DepartmentPersistenceError::UniqueViolation { .. }));
    let stored = repo
        .find_by_id(DepartmentId::new(5))
        .expect("find")
        .expect("row kept");
    assert_eq!(stored.name(), "First");
}

#[rstest]
fn update_replaces_every_field(store: TestStore) {
    let repo = repository(&store);
    repo.insert_with_id(
        DepartmentId::new(1),
        &DepartmentDraft::new(10, 100, "CS", "Bldg A", "cs@x.edu"),
    )
    .expect("insert");

    let affected = repo
        .update(
            DepartmentId::new(1),
            &DepartmentDraft::new(11, 101, "Computing", "", ""),
        )
        .expect("update");

    assert_eq!(affected, 1);
    let stored = repo
        .find_by_id(DepartmentId::new(1))
        .expect("find")
        .expect("row exists");
    assert_eq!(stored.school_id(), 11);
    assert_eq!(stored.name(), "Computing");
    assert_eq!(stored.location(), None);
    assert_eq!(stored.email(), None);
}

#[rstest]
fn update_and_delete_on_missing_id_touch_nothing(store: TestStore) {
    let repo = repository(&store);
    repo.insert_with_id(DepartmentId::new(1), &draft("CS"))
        .expect("insert");
    let before = repo.list().expect("list");

    assert_eq!(
        repo.update(DepartmentId::new(42), &draft("Ghost"))
            .expect("update"),
        0
    );
    assert_eq!(repo.delete(DepartmentId::new(42)).expect("delete"), 0);
    assert_eq!(repo.list().expect("list"), before);
}

#[rstest]
fn delete_removes_only_that_row(store: TestStore) {
    let repo = repository(&store);
    repo.insert_with_id(DepartmentId::new(1), &draft("CS"))
        .expect("insert");
    repo.insert_with_id(DepartmentId::new(2), &draft("Maths"))
        .expect("insert");

    assert_eq!(repo.delete(DepartmentId::new(1)).expect("delete"), 1);

    let ids: Vec<DepartmentId> = repo
        .list()
        .expect("list")
        .iter()
        .map(|row| row.id())
        .collect();
    assert_eq!(ids, vec![DepartmentId::new(2)]);
}

#[rstest]
fn null_columns_are_listed_with_defaults(store: TestStore) {
    store
        .seed_raw_department(8, None)
        .expect("seed raw row");
    let repo = repository(&store);

    let rows = repo.list().expect("list");

    assert_eq!(rows.len(), 1);
    let row = rows.first().expect("one row");
    assert_eq!(row.id(), DepartmentId::new(8));
    assert_eq!(row.school_id(), 0);
    assert_eq!(row.name(), "");
}

#[rstest]
fn unreachable_store_reports_connection_error(store: TestStore) {
    let unreachable = store.into_unreachable().expect("remove store dir");
    let repo = DieselDepartmentRepository::new(unreachable);

    let err = repo.list().expect_err("store is gone");

    assert!(matches!(err, DepartmentPersistenceError::Connection { .. }));
}

#[rstest]
fn search_falls_back_to_the_store_and_narrows(store: TestStore) {
    let repo = Arc::new(repository(&store));
    repo.insert_with_id(DepartmentId::new(1), &draft("CS"))
        .expect("insert");
    let mut list = DepartmentList::load(repo.clone()).expect("list loads");
    repo.insert_with_id(DepartmentId::new(7), &draft("Law"))
        .expect("insert after load");

    assert_eq!(
        list.search_by_id(DepartmentId::new(1)).expect("hit"),
        SearchOutcome::InSnapshot { row: 0 }
    );
    assert_eq!(
        list.search_by_id(DepartmentId::new(7)).expect("store hit"),
        SearchOutcome::FromStore
    );
    assert_eq!(list.departments().len(), 1);

    let err = list
        .search_by_id(DepartmentId::new(99))
        .expect_err("missing");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(list.highlighted(), None);
}

/// Answers the first `stale` id checks as if the id were free, standing in
/// for editors that all ran their pre-check before any of them inserted.
struct CheckedBeforeInsert {
    inner: DieselDepartmentRepository,
    stale: AtomicUsize,
}

impl DepartmentRepository for CheckedBeforeInsert {
    fn list(&self) -> Result<Vec<Department>, DepartmentPersistenceError> {
        self.inner.list()
    }

    fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, DepartmentPersistenceError> {
        let stale = self
            .stale
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if stale {
            return Ok(None);
        }
        self.inner.find_by_id(id)
    }

    fn insert_with_id(
        &self,
        id: DepartmentId,
        draft: &DepartmentDraft,
    ) -> Result<(), DepartmentPersistenceError> {
        self.inner.insert_with_id(id, draft)
    }

    fn insert_auto_id(
        &self,
        draft: &DepartmentDraft,
    ) -> Result<DepartmentId, DepartmentPersistenceError> {
        self.inner.insert_auto_id(draft)
    }

    fn update(
        &self,
        id: DepartmentId,
        draft: &DepartmentDraft,
    ) -> Result<usize, DepartmentPersistenceError> {
        self.inner.update(id, draft)
    }

    fn delete(&self, id: DepartmentId) -> Result<usize, DepartmentPersistenceError> {
        self.inner.delete(id)
    }
}

#[rstest]
fn editors_racing_on_one_id_leave_one_winner(store: TestStore) {
    let repo = Arc::new(CheckedBeforeInsert {
        inner: repository(&store),
        stale: AtomicUsize::new(2),
    });
    let fields = FormFields {
        id: "5".to_owned(),
        school_id: "10".to_owned(),
        dept_code: "100".to_owned(),
        name: "CS".to_owned(),
        ..FormFields::default()
    };
    let mut first = DepartmentForm::open(repo.clone(), FormProfile::EditorNew).expect("opens");
    let mut second = DepartmentForm::open(repo.clone(), FormProfile::EditorNew).expect("opens");
    first.set_fields(fields.clone());
    second.set_fields(fields);

    let first_result = first.save();
    let second_result = second.save();

    assert!(first_result.is_ok());
    let err = second_result.expect_err("second insert loses");
    assert_eq!(err.code(), ErrorCode::StoreFailure);
    assert_eq!(repo.list().expect("list").len(), 1);
}

#[rstest]
fn editor_checking_after_an_insert_sees_a_conflict(store: TestStore) {
    let repo = Arc::new(repository(&store));
    repo.insert_with_id(DepartmentId::new(5), &draft("CS"))
        .expect("insert");
    let mut form = DepartmentForm::open(repo, FormProfile::EditorNew).expect("opens");
    form.set_fields(FormFields {
        id: "5".to_owned(),
        school_id: "10".to_owned(),
        dept_code: "100".to_owned(),
        name: "Law".to_owned(),
        ..FormFields::default()
    });

    let err = form.save().expect_err("id taken");

    assert_eq!(err.code(), ErrorCode::Conflict);
}
