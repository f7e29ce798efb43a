//! Logging setup.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `SLOVO_LOG` or `RUST_LOG` holds a filter
/// (`SLOVO_LOG=slovo_eval=debug`). Output goes to stderr as an indented
/// tree of spans. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = ["SLOVO_LOG", "RUST_LOG"]
            .into_iter()
            .find_map(|var| std::env::var(var).ok())
        else {
            return;
        };

        let _ = tracing_subscriber::registry()
            .with(EnvFilter::new(filter))
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
            .try_init();
    });
}
