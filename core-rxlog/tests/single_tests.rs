//! Single-value future instrumentation.

mod common;

use std::fmt;

use common::{capture, Boom};
use core_rxlog::{taps, LogEvent, LogFutureExt, LogSelector};
use futures::future::{self, FutureExt};

#[core_async::test]
async fn test_success_with_full_preset() {
    let (logger, sink) = capture();

    let value = async { Ok::<_, Boom>("prd") }
        .logged_single(&logger.log("user"))
        .await;

    assert_eq!(value, Ok("prd"));
    assert_eq!(
        sink.messages(),
        vec![
            "[subscribe] user [Thread:main]",
            "[onSuccess] user \"prd\" [Thread:main]",
        ]
    );
}

#[core_async::test]
async fn test_lifecycle_preset_hides_value() {
    let (logger, sink) = capture();

    let value = logger
        .log_lifecycle("user")
        .single(async { Ok::<_, Boom>(vec![1, 2, 3]) })
        .await;

    assert_eq!(value, Ok(vec![1, 2, 3]));
    assert_eq!(
        sink.messages(),
        vec![
            "[subscribe] user [Thread:main]",
            "[onSuccess] user [Thread:main]",
        ]
    );
}

#[core_async::test]
async fn test_error_only_selector_logs_one_entry() {
    let (logger, sink) = capture();

    let result = async { Err::<i32, _>(Boom("boom")) }
        .logged_single(&logger.log_with("user", LogSelector::ERROR))
        .await;

    assert_eq!(result, Err(Boom("boom")));
    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("user"));
    assert!(messages[0].contains("boom"));
    assert_eq!(messages[0], "[onError] user - boom");
}

#[core_async::test]
async fn test_complete_only_selector_is_transparent() {
    let (logger, sink) = capture();

    let value = async { Ok::<_, Boom>("prd") }
        .logged_single(&logger.log_with("ddd", LogSelector::COMPLETE))
        .await;

    assert_eq!(value, Ok("prd"));
    assert!(sink.is_empty());
}

#[core_async::test]
async fn test_illegal_single_taps_are_skipped() {
    let (logger, sink) = capture();

    let terminate = taps::terminate(&logger, "t").single(async { Ok::<_, Boom>(1) });
    let complete = taps::complete(&logger, "t").single(async { Ok::<_, Boom>(2) });
    assert!(terminate.plan().is_empty());

    assert_eq!(terminate.await, Ok(1));
    assert_eq!(complete.await, Ok(2));
    assert!(sink.is_empty());
}

#[core_async::test]
async fn test_dispose_when_dropped_while_pending() {
    let (logger, sink) = capture();

    let mut pending = future::pending::<Result<i32, Boom>>().logged_single(&logger.log("slow"));
    assert!((&mut pending).now_or_never().is_none());
    drop(pending);

    assert_eq!(
        sink.messages(),
        vec!["[subscribe] slow [Thread:main]", "[dispose] slow"]
    );
}

#[core_async::test]
async fn test_no_dispose_after_success() {
    let (logger, sink) = capture();

    let logged = async { Ok::<_, Boom>(5) }.logged_single(&logger.tap("done", LogEvent::Dispose));
    assert_eq!(logged.await, Ok(5));

    assert!(sink.is_empty());
}

#[derive(Debug)]
struct Silent;

impl fmt::Display for Silent {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

#[core_async::test]
async fn test_error_without_message_uses_type_name() {
    let (logger, sink) = capture();

    let result = async { Err::<(), _>(Silent) }
        .logged_single(&logger.log_with("user", LogSelector::ERROR))
        .await;

    assert!(result.is_err());
    assert_eq!(sink.messages(), vec!["[onError] user - Silent"]);
}

#[core_async::test]
async fn test_entries_carry_structured_fields() {
    let (logger, sink) = capture();

    let _ = async { Ok::<_, Boom>(1) }
        .logged_single(&logger.log_with("user", LogSelector::NEXT_DATA))
        .await;

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].target, "rxlog");
    assert_eq!(entries[0].level, bridge_traits::LogLevel::Debug);
    assert_eq!(entries[0].field("tag"), Some("user"));
    assert_eq!(entries[0].field("flavor"), Some("single"));
    assert_eq!(entries[0].field("thread"), Some("main"));
}

struct Token;

#[core_async::test]
async fn test_opaque_single_with_value_selector() {
    let (logger, sink) = capture();

    let logged = logger
        .log_with("token", LogSelector::NEXT_DATA)
        .single_opaque(async { Ok::<_, Boom>(Token) });
    assert!(logged.plan().contains(LogEvent::NextEvent));
    assert!(!logged.plan().contains(LogEvent::NextData));

    assert!(matches!(logged.await, Ok(Token)));
    assert_eq!(sink.messages(), vec!["[onSuccess] token [Thread:main]"]);
}
