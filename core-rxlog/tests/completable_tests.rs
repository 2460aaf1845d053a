//! Void-completion future instrumentation.

mod common;

use common::{capture, Boom};
use core_rxlog::{FlavorKind, LogFutureExt, LogSelector};

fn base_selector() -> LogSelector {
    LogSelector::SUBSCRIBE | LogSelector::ERROR | LogSelector::COMPLETE | LogSelector::DISPOSE
}

#[core_async::test]
async fn test_immediate_completion() {
    let (logger, sink) = capture();

    let result = async { Ok::<(), Boom>(()) }
        .logged_completable(&logger.log_with("flush", base_selector()))
        .await;

    assert_eq!(result, Ok(()));
    assert_eq!(
        sink.messages(),
        vec!["[subscribe] flush [Thread:main]", "[onComplete] flush"]
    );
}

#[core_async::test]
async fn test_failure() {
    let (logger, sink) = capture();

    let result = logger
        .log("flush")
        .completable(async { Err::<(), _>(Boom("disk full")) })
        .await;

    assert_eq!(result, Err(Boom("disk full")));
    assert_eq!(
        sink.messages(),
        vec!["[subscribe] flush [Thread:main]", "[onError] flush - disk full"]
    );
}

#[core_async::test]
async fn test_value_taps_are_never_attached() {
    let (logger, sink) = capture();

    let logged = async { Ok::<(), Boom>(()) }.logged_completable(
        &logger.log_with("flush", LogSelector::NEXT_DATA | LogSelector::NEXT_EVENT | LogSelector::TERMINATE),
    );

    assert_eq!(logged.flavor(), FlavorKind::Completable);
    assert!(logged.plan().is_empty());
    assert_eq!(logged.await, Ok(()));
    assert!(sink.is_empty());
}

#[core_async::test]
async fn test_dispose_when_dropped_while_pending() {
    use futures::FutureExt;

    let (logger, sink) = capture();

    let mut pending = futures::future::pending::<Result<(), Boom>>()
        .logged_completable(&logger.log_with("flush", base_selector()));
    assert!((&mut pending).now_or_never().is_none());
    drop(pending);

    assert_eq!(
        sink.messages(),
        vec!["[subscribe] flush [Thread:main]", "[dispose] flush"]
    );
}
