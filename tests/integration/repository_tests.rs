//! SQLite course store tests

use chrono::{Duration, Utc};
use tokio_test::{assert_err, assert_ok};

use course_management_api::{
    db::{self, SqliteCourseStore},
    models::CourseType,
    CourseStore,
};

use crate::common::{courses_added_in_order, stored_course, test_config, TempDatabase, TestApp};

async fn store() -> (SqliteCourseStore, TempDatabase) {
    let config = test_config();
    let database = TempDatabase::for_config(&config);
    let pool = db::init_pool(&config.database)
        .await
        .expect("Failed to initialize test database");
    (SqliteCourseStore::new(pool), database)
}

#[tokio::test]
async fn test_insert_and_read_back() {
    let (store, _database) = store().await;
    let mut course = stored_course("Compilers", Utc::now());
    course.course_type = CourseType::Private;

    assert!(store.insert(&course).await.unwrap());

    let courses = store.find_all().await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, course.id);
    assert_eq!(courses[0].title, "Compilers");
    assert_eq!(courses[0].course_type, CourseType::Private);
    assert_eq!(courses[0].added_on, course.added_on);
}

#[tokio::test]
async fn test_find_all_returns_insertion_order() {
    let (store, _database) = store().await;
    let mut courses = courses_added_in_order(&["First", "Second", "Third"]);
    // Newest inserted first, so insertion order differs from time order
    courses.reverse();

    for course in &courses {
        assert!(store.insert(course).await.unwrap());
    }

    let titles: Vec<String> = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.title)
        .collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_duplicate_course_codes_are_allowed() {
    let (store, _database) = store().await;
    let first = stored_course("One", Utc::now() - Duration::seconds(1));
    let mut second = stored_course("Two", Utc::now());
    second.course_code = first.course_code.clone();

    assert!(store.insert(&first).await.unwrap());
    assert!(store.insert(&second).await.unwrap());
    assert_eq!(store.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_duplicate_id_is_a_storage_error() {
    let (store, _database) = store().await;
    let course = stored_course("Once", Utc::now());

    assert!(store.insert(&course).await.unwrap());
    assert_err!(store.insert(&course).await);
}

#[tokio::test]
async fn test_health_check_on_fresh_database() {
    let config = test_config();
    let _database = TempDatabase::for_config(&config);
    let pool = db::init_pool(&config.database).await.unwrap();
    assert_ok!(db::check_health(&pool).await);
}

#[tokio::test]
async fn test_database_file_removed_with_test_app() {
    let app = TestApp::new().await;
    let path = app
        .database
        .path()
        .expect("Test database should be a file")
        .to_path_buf();
    assert!(path.exists());

    drop(app);

    assert!(!path.exists());
}
