use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. When another
/// global subscriber is already installed it is kept, and a `debug` event
/// saying so is sent to it.
/// Enable with `TYMATCH_LOG=tymatch_guard=debug` or `TYMATCH_LOG=trace`;
/// also set `TYMATCH_LOG_TREE` for indented span trees instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if TYMATCH_LOG is set
        let Ok(filter) = EnvFilter::try_from_env("TYMATCH_LOG") else {
            return;
        };

        let tree = std::env::var_os("TYMATCH_LOG_TREE").is_some();
        let flat = (!tree).then(|| fmt::layer().with_target(true).with_level(true));
        let hierarchical = tree.then(|| {
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true)
        });

        let installed = tracing_subscriber::registry()
            .with(flat)
            .with(hierarchical)
            .with(filter)
            .try_init();
        if let Err(err) = installed {
            // Reaches the subscriber that was already installed
            tracing::debug!(%err, "keeping the existing tracing subscriber");
        }
    });
}
