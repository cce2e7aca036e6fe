use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Keeps the background log writer alive; drop it last to flush.
#[must_use]
pub struct TracingGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install the global subscriber.
///
/// With `log_dir` the events go to `qystool-trace.jsonl` in that directory as
/// JSON lines; otherwise they go to stderr. `RUST_LOG` overrides the filter.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) -> TracingGuard {
    use tracing_subscriber::EnvFilter;

    let mut worker = None;
    INIT.call_once(|| match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "qystool-trace.jsonl");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            worker = Some(guard);

            tracing_subscriber::fmt()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("qys_core=debug,qys_cli=debug")),
                )
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .init();
        }
    });
    TracingGuard { _worker: worker }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&Path>) -> TracingGuard {
    TracingGuard {}
}
