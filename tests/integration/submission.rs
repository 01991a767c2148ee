use serde_json::json;

use crate::common::{TestApp, routes, submission_body};

/// An edit payload targeting `index`, with all five fields set from `name`.
fn edit_body(name: &str, index: serde_json::Value) -> serde_json::Value {
    let mut body = submission_body(name);
    body["index"] = index;
    body
}

mod submission_creation {
    use super::*;

    #[tokio::test]
    async fn valid_submission_is_created() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::SUBMIT, &submission_body("alice")).await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["success"], true);
    }

    #[tokio::test]
    async fn created_submission_reads_back_unchanged() {
        let app = TestApp::spawn().await;
        let body = submission_body("alice");

        app.post(routes::SUBMIT, &body).await;
        let res = app.get(&routes::read("0")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, body);
    }

    #[tokio::test]
    async fn missing_field_is_rejected() {
        let app = TestApp::spawn().await;
        let mut body = submission_body("alice");
        body.as_object_mut().unwrap().remove("email");

        let res = app.post(routes::SUBMIT, &body).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "All fields are required");
    }

    #[tokio::test]
    async fn empty_field_is_rejected() {
        let app = TestApp::spawn().await;
        let mut body = submission_body("alice");
        body["phone"] = json!("");

        let res = app.post(routes::SUBMIT, &body).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "All fields are required");
    }

    #[tokio::test]
    async fn repeated_creates_append_duplicates_at_increasing_indices() {
        let app = TestApp::spawn().await;
        let body = submission_body("alice");

        app.post(routes::SUBMIT, &body).await;
        app.post(routes::SUBMIT, &body).await;

        assert_eq!(app.get(&routes::read("0")).await.body, body);
        assert_eq!(app.get(&routes::read("1")).await.body, body);
        assert_eq!(app.get(&routes::read("2")).await.status, 404);
    }

    #[tokio::test]
    async fn store_file_is_rewritten_pretty_printed() {
        let app = TestApp::spawn().await;

        app.create_submission("alice").await;

        let raw = std::fs::read_to_string(&app.store_path).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"name\""), "got: {raw}");
    }
}

mod submission_reading {
    use super::*;

    #[tokio::test]
    async fn missing_index_param_is_invalid() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::READ_WITHOUT_INDEX).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Invalid index");
    }

    #[tokio::test]
    async fn non_numeric_index_is_invalid() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::read("abc")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Invalid index");
    }

    #[tokio::test]
    async fn negative_index_is_invalid() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::read("-1")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Invalid index");
    }

    #[tokio::test]
    async fn index_past_the_end_is_not_found() {
        let app = TestApp::spawn().await;
        app.create_submission("alice").await;
        app.create_submission("bob").await;

        let res = app.get(&routes::read("5")).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["error"], "Submission not found");
    }
}

mod submission_editing {
    use super::*;

    #[tokio::test]
    async fn edit_replaces_the_record_at_the_index() {
        let app = TestApp::spawn().await;
        app.create_submission("alice").await;
        app.create_submission("bob").await;

        let res = app.post(routes::EDIT, &edit_body("carol", json!(0))).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["success"], true);
        assert_eq!(app.get(&routes::read("0")).await.body, submission_body("carol"));
        assert_eq!(app.get(&routes::read("1")).await.body, submission_body("bob"));
    }

    #[tokio::test]
    async fn index_may_be_a_numeric_string() {
        let app = TestApp::spawn().await;
        app.create_submission("alice").await;

        let res = app.post(routes::EDIT, &edit_body("carol", json!("0"))).await;

        assert_eq!(res.status, 200);
        assert_eq!(app.get(&routes::read("0")).await.body, submission_body("carol"));
    }

    #[tokio::test]
    async fn missing_index_is_a_validation_error() {
        let app = TestApp::spawn().await;
        app.create_submission("alice").await;

        let res = app.post(routes::EDIT, &submission_body("carol")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "All fields and index are required");
    }

    #[tokio::test]
    async fn missing_field_is_a_validation_error() {
        let app = TestApp::spawn().await;
        app.create_submission("alice").await;
        let mut body = edit_body("carol", json!(0));
        body.as_object_mut().unwrap().remove("github_link");

        let res = app.post(routes::EDIT, &body).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "All fields and index are required");
    }

    #[tokio::test]
    async fn out_of_range_index_is_invalid_not_missing() {
        let app = TestApp::spawn().await;
        app.create_submission("alice").await;

        let res = app.post(routes::EDIT, &edit_body("carol", json!(3))).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Invalid index");
    }

    #[tokio::test]
    async fn negative_index_is_invalid() {
        let app = TestApp::spawn().await;
        app.create_submission("alice").await;

        let res = app.post(routes::EDIT, &edit_body("carol", json!(-1))).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Invalid index");
    }
}

mod submission_deletion {
    use super::*;

    #[tokio::test]
    async fn delete_shifts_later_entries_down() {
        let app = TestApp::spawn().await;
        app.create_submission("alice").await;
        app.create_submission("bob").await;

        let res = app.delete(&routes::delete("0")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["success"], true);
        assert_eq!(app.get(&routes::read("0")).await.body, submission_body("bob"));
        assert_eq!(app.get(&routes::read("1")).await.status, 404);
    }

    #[tokio::test]
    async fn non_numeric_index_is_invalid() {
        let app = TestApp::spawn().await;

        let res = app.delete(&routes::delete("abc")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Invalid index");
    }

    #[tokio::test]
    async fn negative_index_is_invalid() {
        let app = TestApp::spawn().await;

        let res = app.delete(&routes::delete("-1")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Invalid index");
    }

    #[tokio::test]
    async fn index_past_the_end_is_not_found() {
        let app = TestApp::spawn().await;
        app.create_submission("alice").await;

        let res = app.delete(&routes::delete("1")).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["error"], "Submission not found");
    }
}

mod store_failures {
    use super::*;

    #[tokio::test]
    async fn missing_store_file_is_a_read_error() {
        let app = TestApp::spawn_with_store(None).await;

        let res = app.get(&routes::read("0")).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["error"], "Unable to read submissions");
    }

    #[tokio::test]
    async fn corrupt_store_file_is_a_parse_error() {
        let app = TestApp::spawn_with_store(Some("{ not an array")).await;

        let res = app.delete(&routes::delete("0")).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["error"], "Error parsing submissions JSON");
    }

    #[tokio::test]
    async fn create_against_a_missing_file_does_not_write() {
        let app = TestApp::spawn_with_store(None).await;

        let res = app.post(routes::SUBMIT, &submission_body("alice")).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["error"], "Unable to read submissions");
        assert!(!app.store_path.exists());
    }
}
