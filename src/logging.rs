use tracing::Subscriber;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", nodes = visited.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging for an embedding application.
///
/// `verbose` selects `debug` for this crate, otherwise `warn`; an explicit
/// `log_level` wins over both. `RUST_LOG` and then `ALGOKIT_LOG` override
/// everything when set.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(env_filter(&filter_directive(verbose, log_level)))
        .with(output_layer(log_json))
        .try_init()?;

    Ok(())
}

/// Directive used when neither `RUST_LOG` nor `ALGOKIT_LOG` is set
fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match log_level {
        Some(level) => directive_for(level),
        None if verbose => directive_for("debug"),
        None => directive_for("warn"),
    }
}

/// Build the filter directive for a level string.
/// Bare levels are scoped to this crate; full directives pass through.
fn directive_for(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("algokit={}", level)
    }
}

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("ALGOKIT_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Stderr formatting layer. JSON output carries thread names so events
/// from rayon workers in `par_quicksort` can be told apart.
fn output_layer<S>(log_json: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let base = fmt::layer().with_writer(std::io::stderr).with_ansi(false);
    if log_json {
        base.json()
            .with_thread_names(true)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .boxed()
    } else {
        base.compact().with_target(false).boxed()
    }
}
