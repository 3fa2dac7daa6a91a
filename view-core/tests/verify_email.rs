mod support;

use std::rc::Rc;

use support::{FakeNotificationApi, FakeRouter, FakeTranslator};
use view_core::verify_email::TOKEN_PARAM;
use view_core::{Activation, ApiError, EmailVerifier, FailureReason, VerificationOutcome};

async fn verify(api: Rc<FakeNotificationApi>, router: FakeRouter) -> Option<VerificationOutcome> {
    EmailVerifier::new(api, Rc::new(router))
        .run(&Activation::new())
        .await
}

#[tokio::test]
async fn test_success_is_verified() {
    let api = FakeNotificationApi::returning(Ok(()));
    let outcome = verify(api.clone(), FakeRouter::default().with_param(TOKEN_PARAM, "tok-abc"))
        .await
        .unwrap();

    assert_eq!(outcome, VerificationOutcome::Verified);
    assert!(!outcome.is_loading());
    assert_eq!(*api.tokens.borrow(), vec!["tok-abc"]);
    assert_eq!(outcome.message(&FakeTranslator), "Email verified");
}

#[tokio::test]
async fn test_not_found_is_expired_token() {
    let api = FakeNotificationApi::returning(Err(ApiError::http(404, Some("Not found".into()))));
    let outcome = verify(api, FakeRouter::default().with_param(TOKEN_PARAM, "tok-abc"))
        .await
        .unwrap();

    assert_eq!(outcome, VerificationOutcome::Failed(FailureReason::ExpiredOrInvalid));
    assert_eq!(outcome.message(&FakeTranslator), "This link has expired or is invalid");
}

#[tokio::test]
async fn test_bad_request_is_expired_token() {
    let api = FakeNotificationApi::returning(Err(ApiError::http(400, None)));
    let outcome = verify(api, FakeRouter::default().with_param(TOKEN_PARAM, "tok-abc"))
        .await
        .unwrap();

    assert_eq!(outcome, VerificationOutcome::Failed(FailureReason::ExpiredOrInvalid));
}

#[tokio::test]
async fn test_server_and_network_errors_are_generic() {
    for error in [
        ApiError::http(500, Some("boom".into())),
        ApiError::Network("connection reset".into()),
        ApiError::Decode("expected value".into()),
    ] {
        let api = FakeNotificationApi::returning(Err(error));
        let outcome = verify(api, FakeRouter::default().with_param(TOKEN_PARAM, "tok-abc"))
            .await
            .unwrap();

        assert_eq!(outcome, VerificationOutcome::Failed(FailureReason::Generic));
        assert_eq!(outcome.message(&FakeTranslator), "Verification failed");
    }
}

#[tokio::test]
async fn test_missing_token_fails_without_network() {
    let routers = [
        FakeRouter::default(),
        FakeRouter::default().with_param(TOKEN_PARAM, ""),
        FakeRouter::default().with_param(TOKEN_PARAM, "  "),
    ];

    for router in routers {
        let api = FakeNotificationApi::returning(Ok(()));
        let outcome = verify(api.clone(), router).await.unwrap();

        assert_eq!(outcome, VerificationOutcome::Failed(FailureReason::InvalidToken));
        assert_eq!(api.call_count(), 0);
        assert_eq!(outcome.message(&FakeTranslator), "Invalid verification link");
    }
}

#[tokio::test]
async fn test_oversized_token_fails_without_network() {
    let api = FakeNotificationApi::returning(Ok(()));
    let token = "t".repeat(600);
    let outcome = verify(api.clone(), FakeRouter::default().with_param(TOKEN_PARAM, &token))
        .await
        .unwrap();

    assert_eq!(outcome, VerificationOutcome::Failed(FailureReason::InvalidToken));
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_late_result_is_dropped() {
    let api = FakeNotificationApi::returning(Ok(()));
    let activation = Activation::new();
    *api.dispose_during_call.borrow_mut() = Some(activation.clone());

    let outcome = EmailVerifier::new(
        api.clone(),
        Rc::new(FakeRouter::default().with_param(TOKEN_PARAM, "tok-abc")),
    )
    .run(&activation)
    .await;

    assert!(outcome.is_none());
    assert_eq!(api.call_count(), 1);
}
