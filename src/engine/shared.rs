//! A thread-shareable handle to an `Engine`, for hosts that drive the
//! engine from a UI event loop or a background analysis thread rather
//! than owning it on a single call stack.
//!
//! The core board/movegen/legality/deploy logic stays plain `&mut self`
//! throughout — this wrapper only exists at the facade boundary, the one
//! place a caller might reasonably want `Send + Sync`.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{Engine, EngineConfig, EngineError};

/// `Arc<Mutex<Engine>>`, named so callers don't have to spell out the
/// wrapper themselves.
#[derive(Clone)]
pub struct SharedEngine(Arc<Mutex<Engine>>);

impl SharedEngine {
    /// Wrap an already-constructed `Engine`.
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        SharedEngine(Arc::new(Mutex::new(engine)))
    }

    /// Start a new game from `fen`, or the starting position when `None`.
    pub fn new_game(fen: Option<&str>) -> Result<Self, EngineError> {
        Engine::new_game(fen).map(Self::new)
    }

    /// Start a new game with an explicit `EngineConfig`.
    pub fn new_with_config(fen: Option<&str>, config: EngineConfig) -> Result<Self, EngineError> {
        Engine::new_with_config(fen, config).map(Self::new)
    }

    /// Run `f` against the locked engine and return its result.
    ///
    /// Keeps the lock scoped to the closure so callers can't accidentally
    /// hold it across an `.await` or another blocking call.
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        let mut guard = self.0.lock();
        f(&mut guard)
    }

    /// A snapshot FEN of the current position.
    #[must_use]
    pub fn fen(&self) -> String {
        self.with(Engine::fen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_engine_clones_share_state() {
        let shared = SharedEngine::new_game(None).unwrap();
        let other = shared.clone();

        let applied = shared.with(|engine| {
            let mv = engine.legal_moves(None).get(0).cloned().unwrap();
            engine.apply(mv).unwrap();
            engine.fen()
        });

        assert_eq!(other.fen(), applied, "clones observe the same underlying engine");
    }

    #[test]
    fn new_with_config_threads_stalemate_flag() {
        let config = EngineConfig { stalemate_is_loss: false };
        let fen = "4c6/11/11/11/11/11/11/11/11/11/11/4C6 b 0 1";
        let shared = SharedEngine::new_with_config(Some(fen), config).unwrap();
        assert_eq!(shared.fen().split(' ').next(), Some("4c6/11/11/11/11/11/11/11/11/11/11/4C6"));
    }
}
