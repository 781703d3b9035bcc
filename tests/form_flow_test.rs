//! End-to-end form tests: validation, request, notifications and results.

mod common;

use wordsyn::api::ApiClient;
use wordsyn::display::WordWithSynonyms;
use wordsyn::form::{Action, Form, NotificationKind, Outcome};
use wordsyn::prelude::*;
use wordsyn::schema::Field;

#[tokio::test]
async fn test_add_word_flow() -> Result<()> {
    let mut form = Form::new(ApiClient::new(common::spawn_service().await));
    form.fill("Cat ", " FELINE")?;

    let outcome = form.submit(Action::AddWord).await?;
    match outcome {
        Outcome::WordAdded(added) => {
            assert_eq!(added.word, "cat");
            assert_eq!(added.synonym, "feline");
        }
        other => panic!("Expected WordAdded, got {other:?}"),
    }

    let notifications = form.drain_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Success);
    assert_eq!(notifications[0].to_string(), "Word Added: cat");
    assert_eq!(form.state().word(), "");
    Ok(())
}

#[tokio::test]
async fn test_not_found_notifies_and_reenables() {
    let mut form = Form::new(ApiClient::new(common::spawn_service().await));
    form.fill("unknown", "").unwrap();

    let error = form.submit(Action::GetSynonyms).await.unwrap_err();
    assert_eq!(error.status(), Some(404));

    let notifications = form.drain_notifications();
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].is_error());
    assert!(notifications[0].to_string().contains("not found"));

    let state = form.state();
    assert!(!state.loading());
    assert_eq!(state.word(), "unknown");
    assert!(state.is_enabled(Action::GetSynonyms));
    assert!(state.synonyms_result().is_none());
}

#[tokio::test]
async fn test_server_error_notifies_and_reenables() {
    let mut form = Form::new(ApiClient::new(common::spawn_service().await));
    form.fill("broken", "").unwrap();

    assert!(form.submit(Action::GetSynonyms).await.is_err());
    let notifications = form.drain_notifications();
    assert!(notifications[0].to_string().contains("not found"));
    assert!(form.state().is_enabled(Action::GetSynonyms));
}

#[tokio::test]
async fn test_query_result_renders_in_order() -> Result<()> {
    let mut form = Form::new(ApiClient::new(common::spawn_service().await));
    form.fill("CAT", "")?;

    form.submit(Action::GetSynonyms).await?;
    let result = form.state().synonyms_result().unwrap();
    assert_eq!(
        WordWithSynonyms::from(result).to_string(),
        "cat\n[ feline, kitty ]"
    );
    assert!(form.drain_notifications().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_validation_blocks_request() {
    let mut form = Form::new(ApiClient::new(common::dead_service().await));
    form.fill("3.14", "").unwrap();

    let error = form.submit(Action::AddWord).await.unwrap_err();
    assert!(matches!(error, WordsynError::Validation(_)));
    assert!(form.state().field_errors().get(Field::Word).is_some());
    assert!(form.drain_notifications().is_empty());
}

#[tokio::test]
async fn test_network_failure_notifies() {
    let mut form = Form::new(ApiClient::new(common::dead_service().await));
    form.fill("cat", "kitty").unwrap();

    assert!(form.submit(Action::AddSynonym).await.is_err());
    let notifications = form.drain_notifications();
    assert_eq!(notifications[0].title, "Error Adding Synonym: kitty");
    assert!(!form.state().loading());
    assert_eq!(form.state().synonym(), "kitty");
}
