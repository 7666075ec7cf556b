//! Course step definitions

use cucumber::{given, then, when};
use serde_json::{json, Value};

use crate::features::support::TestWorld;

fn candidate(title: &str, course_type: &str) -> Value {
    json!({
        "title": title,
        "description": format!("About {}", title),
        "course_code": "BDD-1",
        "type": course_type
    })
}

#[given("the course store refuses new courses")]
async fn store_refuses(world: &mut TestWorld) {
    world.store.set_reject_inserts(true);
}

#[given("the following courses were added:")]
async fn courses_added(world: &mut TestWorld, step: &cucumber::gherkin::Step) {
    let table = step.table.as_ref().expect("Step needs a table");
    for row in table.rows.iter().skip(1) {
        world.post_json("/v1/courses", candidate(&row[0], "public")).await;
        assert!(world.response().status.is_success());
        // added_on must differ between courses
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
}

#[when(expr = "I add a {string} course titled {string}")]
async fn add_course(world: &mut TestWorld, course_type: String, title: String) {
    world.post_json("/v1/courses", candidate(&title, &course_type)).await;
}

#[when(expr = "I add a course with a title of {int} characters")]
async fn add_long_course(world: &mut TestWorld, length: usize) {
    world
        .post_json("/v1/courses", candidate(&"x".repeat(length), "public"))
        .await;
}

#[when("I list all courses")]
async fn list_courses(world: &mut TestWorld) {
    world.get("/v1/courses").await;
}

#[when("I list the recently added courses")]
async fn list_recent(world: &mut TestWorld) {
    world.get("/v1/courses/top5").await;
}

#[then(expr = "the course list should contain {int} course(s)")]
async fn course_count(world: &mut TestWorld, count: usize) {
    let courses: Vec<Value> = world.response().json();
    assert_eq!(courses.len(), count);
}

#[then(expr = "the course titles should be {string}")]
async fn course_titles(world: &mut TestWorld, titles: String) {
    let courses: Vec<Value> = world.response().json();
    let actual: Vec<&str> = courses
        .iter()
        .map(|c| c["title"].as_str().unwrap_or_default())
        .collect();
    let expected: Vec<&str> = titles.split(", ").collect();
    assert_eq!(actual, expected);
}

#[then(expr = "the first course should have type {string}")]
async fn first_course_type(world: &mut TestWorld, course_type: String) {
    let courses: Vec<Value> = world.response().json();
    assert_eq!(courses[0]["type"], course_type.as_str());
}
