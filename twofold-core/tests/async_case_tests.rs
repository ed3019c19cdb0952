//! Async dispatch: the handler is selected eagerly, only its body suspends.

use std::cell::Cell;
use std::time::Duration;

use twofold_core::{Either, Maybe};

#[tokio::test]
async fn either_handler_is_called_before_the_future_is_polled() {
    let called = Cell::new(false);
    let e: Either<u8, String> = Either::left(3);

    let fut = e.case_async(
        |l| {
            called.set(true);
            async move { u32::from(l) * 2 }
        },
        |r| async move { r.len() as u32 },
    );
    assert!(called.get(), "dispatch must happen before awaiting");
    assert_eq!(fut.await, 6);
}

#[tokio::test]
async fn either_right_handler_may_suspend() {
    let e: Either<u8, String> = Either::right("four".to_string());
    let out = e
        .case_async(
            |l| async move { u32::from(l) },
            |r| async move {
                tokio::time::sleep(Duration::from_millis(1)).await;
                r.len() as u32
            },
        )
        .await;
    assert_eq!(out, 4);
}

#[tokio::test]
async fn maybe_failure_handler_gets_the_record() {
    let m = Maybe::<u8>::failure("remote unavailable");
    let out = m
        .case_async(
            |v| async move { format!("value {v}") },
            |f| async move {
                tokio::task::yield_now().await;
                format!("failed: {f}")
            },
        )
        .await;
    assert_eq!(out, "failed: remote unavailable");
}

#[tokio::test]
async fn maybe_unselected_handler_is_never_called() {
    let failure_calls = Cell::new(0);
    let m = Maybe::success(5u8);
    let out = m
        .case_async(
            |v| async move { v + 1 },
            |_| {
                failure_calls.set(failure_calls.get() + 1);
                async { 0 }
            },
        )
        .await;
    assert_eq!(out, 6);
    assert_eq!(failure_calls.get(), 0);
}
