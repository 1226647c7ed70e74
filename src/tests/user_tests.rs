use crate::core::errors::ContactBookError;
use crate::core::models::activity::ActivityAction;
use crate::core::validation::Field;
use crate::core::services::UserService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::tests::{FailingLogging, create_test_service, valid_input};
use uuid::Uuid;

#[tokio::test]
async fn test_create_user() {
    let service = create_test_service();
    let user = service.create_user(valid_input()).await.unwrap();
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.email, "jane@gmail.com");

    let users = service.list_users().await.unwrap();
    assert_eq!(users, vec![user.clone()]);

    let logs = service.get_activity_logs().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, ActivityAction::UserCreated);
    assert_eq!(logs[0].user_id, user.id.to_string());
}

#[tokio::test]
async fn test_create_user_generates_distinct_ids() {
    let service = create_test_service();
    let first = service.create_user(valid_input()).await.unwrap();
    let second = service.create_user(valid_input()).await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(service.list_users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_user_invalid_input() {
    let service = create_test_service();
    let mut input = valid_input();
    input.email = "jane@yahoo.com".to_string();
    input.phone = "12345".to_string();

    let result = service.create_user(input).await;
    match result {
        Err(ContactBookError::InvalidInput(errors)) => {
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[&Field::Email], "Email must end with @gmail.com");
            assert_eq!(errors[&Field::Phone], "Phone must be exactly 10 digits");
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
    assert!(service.list_users().await.unwrap().is_empty());
    assert!(service.get_activity_logs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_user() {
    let service = create_test_service();
    let user = service.create_user(valid_input()).await.unwrap();
    let fetched = service.get_user(&user.id.to_string()).await.unwrap();
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_get_user_malformed_and_missing() {
    let service = create_test_service();
    let result = service.get_user("not-an-id").await;
    assert!(matches!(result, Err(ContactBookError::InvalidId(_))));

    let result = service.get_user(&Uuid::new_v4().to_string()).await;
    assert!(matches!(result, Err(ContactBookError::UserNotFound(_))));
}

#[tokio::test]
async fn test_update_user_keeps_id() {
    let service = create_test_service();
    let user = service.create_user(valid_input()).await.unwrap();

    let mut input = valid_input();
    input.state = "Goa".to_string();
    let updated = service.update_user(&user.id.to_string(), input).await.unwrap();
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.state, "Goa");

    let fetched = service.get_user(&user.id.to_string()).await.unwrap();
    assert_eq!(fetched.state, "Goa");

    let logs = service.get_activity_logs().await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1].action, ActivityAction::UserUpdated);
    assert_eq!(logs[1].details["before"]["state"], "Kerala");
    assert_eq!(logs[1].details["after"]["state"], "Goa");
}

#[tokio::test]
async fn test_update_user_errors() {
    let service = create_test_service();
    let user = service.create_user(valid_input()).await.unwrap();

    let result = service.update_user(&Uuid::new_v4().to_string(), valid_input()).await;
    assert!(matches!(result, Err(ContactBookError::UserNotFound(_))));

    let result = service.update_user("42", valid_input()).await;
    assert!(matches!(result, Err(ContactBookError::InvalidId(_))));

    let mut input = valid_input();
    input.name = "R2D2".to_string();
    let result = service.update_user(&user.id.to_string(), input).await;
    assert!(matches!(result, Err(ContactBookError::InvalidInput(_))));

    // the stored record is untouched
    let fetched = service.get_user(&user.id.to_string()).await.unwrap();
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_delete_user() {
    let service = create_test_service();
    let user = service.create_user(valid_input()).await.unwrap();
    let id = user.id.to_string();

    service.delete_user(&id).await.unwrap();
    assert!(service.list_users().await.unwrap().is_empty());

    let result = service.delete_user(&id).await;
    assert!(matches!(result, Err(ContactBookError::UserNotFound(_))));

    let result = service.delete_user("xyz").await;
    assert!(matches!(result, Err(ContactBookError::InvalidId(_))));

    let logs = service.get_activity_logs().await.unwrap();
    assert_eq!(logs.last().unwrap().action, ActivityAction::UserDeleted);
}

#[tokio::test]
async fn test_activity_log_failure_does_not_fail_mutations() {
    let service = UserService::new(InMemoryStorage::new(), FailingLogging);

    let user = service.create_user(valid_input()).await.unwrap();
    assert_eq!(service.get_user(&user.id.to_string()).await.unwrap(), user);

    let mut changed = valid_input();
    changed.state = "Goa".to_string();
    let updated = service.update_user(&user.id.to_string(), changed).await.unwrap();
    assert_eq!(updated.state, "Goa");

    service.delete_user(&user.id.to_string()).await.unwrap();
    assert!(service.list_users().await.unwrap().is_empty());
}
