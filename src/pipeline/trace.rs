//! Diagnostics hooks for pipeline passes.
//!
//! With the `tracing` feature every pass runs inside a `debug` span and
//! reports each predicate decision at `trace` level. Without it the macros
//! expand to nothing.

#[cfg(feature = "tracing")]
macro_rules! enter_pass {
    ($name:literal) => {
        let _pass_guard = ::tracing::debug_span!($name).entered();
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! enter_pass {
    ($name:literal) => {};
}

#[cfg(feature = "tracing")]
macro_rules! trace_decision {
    ($accepted:expr) => {
        ::tracing::trace!(accepted = $accepted, "element tested");
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_decision {
    ($accepted:expr) => {};
}

#[cfg(feature = "tracing")]
macro_rules! trace_failure {
    ($stage:literal) => {
        ::tracing::debug!(stage = $stage, "callback failed, pass aborted");
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_failure {
    ($stage:literal) => {};
}
