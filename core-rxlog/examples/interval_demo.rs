//! Logs a ticking interval stream and a single-value computation.
//!
//! Run with `cargo run -p core-rxlog --example interval_demo`.

use std::convert::Infallible;
use std::sync::Arc;

use core_async::time::Duration;
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig, TracingSink};
use core_rxlog::{LogFutureExt, LogSelector, LogStreamExt, RxLogConfig, RxLogger};
use futures::StreamExt;

#[core_async::main]
async fn main() -> anyhow::Result<()> {
    init_logging(
        LoggingConfig::default()
            .with_format(LogFormat::Compact)
            .with_level(bridge_traits::LogLevel::Verbose)
            .with_thread_info(true),
    )?;

    let logger = RxLogger::new(
        RxLogConfig::builder()
            .sink(Arc::new(TracingSink))
            .build()?,
    );

    let interval = logger.log("rx2:interval");
    let ticker = core_async::spawn(async move {
        core_async::interval_stream(Duration::from_millis(500))
            .map(Ok::<u64, Infallible>)
            .logged(&interval)
            .take(5)
            .for_each(|tick| async move {
                if let Ok(tick) = tick {
                    tracing::info!(tick, "tick received");
                }
            })
            .await;
    });

    // COMPLETE is not a Single event, so this produces no lines.
    let value = async { Ok::<_, Infallible>("prd") }
        .logged_single(&logger.log_with("ddd", LogSelector::COMPLETE))
        .await?;
    tracing::info!(value, "single resolved");

    ticker.await?;
    logger.flush()?;
    Ok(())
}
