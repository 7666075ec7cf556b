//! Common step definitions used across features

use cucumber::then;

use crate::features::support::TestWorld;

#[then(expr = "the response status should be {int}")]
async fn response_status(world: &mut TestWorld, status: u16) {
    assert_eq!(world.response().status.as_u16(), status);
}

#[then(expr = "the response message should be {string}")]
async fn response_message(world: &mut TestWorld, message: String) {
    assert_eq!(world.response().message(), message);
}
