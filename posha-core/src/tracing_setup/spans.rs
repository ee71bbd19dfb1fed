//! Span definitions per operation.

/// Span around assembling an insights report.
#[macro_export]
macro_rules! insights_span {
    ($outfit_count:expr) => {
        tracing::info_span!("posha.insights", outfit_count = $outfit_count)
    };
}

/// Span around a wardrobe store mutation.
#[macro_export]
macro_rules! store_span {
    ($operation:expr) => {
        tracing::debug_span!("posha.store", operation = %$operation)
    };
}
