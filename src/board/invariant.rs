//! Fatal-invariant reporting: "Internal invariant
//! violations (StackInvariantBroken, unexpected missing piece during undo)
//! are fatal in debug builds and logged in release builds."
//!
//! A broken stack/board invariant is never safe to continue past, so both
//! halves of that policy end the same way here: log it (when the `logging`
//! feature is enabled) and then panic unconditionally.

/// Report an internal invariant violation and abort.
#[cold]
pub(crate) fn fatal_invariant(msg: impl std::fmt::Display) -> ! {
    #[cfg(feature = "logging")]
    log::error!("internal invariant violation: {msg}");
    panic!("internal invariant violation: {msg}");
}
