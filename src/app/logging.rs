use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_LOG_LEVEL: &str = "warn";
const VERBOSE_LOG_LEVEL: &str = "debug";
const ENV_VAR_NAME: &str = "CLASSPLAN_LOG";

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber, writing to stderr.
///
/// Filter precedence: `CLASSPLAN_LOG` > `verbose` (debug) > default (warn).
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(build_filter(verbose))
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .finish();

        // Another subscriber may already be installed by an embedding program.
        let _ = subscriber.try_init();
    });
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(ENV_VAR_NAME).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_LOG_LEVEL } else { DEFAULT_LOG_LEVEL })
    })
}
