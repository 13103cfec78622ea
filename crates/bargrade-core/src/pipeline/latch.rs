use std::sync::atomic::{AtomicU32, Ordering};

// Packed as (generation << 2) | state. `reset` bumps the generation so a
// guard from before the reset can no longer change the latch.
const IDLE: u32 = 0;
const PROCESSING: u32 = 1;
const CAPTURED: u32 = 2;
const STATE_MASK: u32 = 0b11;

/// Observable state of a [`CaptureLatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchState {
    /// Waiting for a usable frame.
    Idle,
    /// A frame is running through the pipeline.
    Processing,
    /// A frame has been accepted; everything else is ignored until reset.
    Captured,
}

impl std::fmt::Display for LatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Processing => write!(f, "Processing"),
            Self::Captured => write!(f, "Captured"),
        }
    }
}

/// One-shot capture state for a scanning session.
///
/// Create one per session and hand it to every pipeline call. Frames may
/// only run while the latch is idle, and at most one frame runs at a time.
#[derive(Debug, Default)]
pub struct CaptureLatch {
    word: AtomicU32,
}

impl CaptureLatch {
    pub fn new() -> Self {
        Self {
            word: AtomicU32::new(IDLE),
        }
    }

    pub fn state(&self) -> LatchState {
        decode(self.word.load(Ordering::Acquire))
    }

    pub fn is_captured(&self) -> bool {
        self.state() == LatchState::Captured
    }

    /// Claim the latch for one frame.
    ///
    /// Succeeds only from `Idle`. On failure returns the state that blocked
    /// the frame (`Processing` or `Captured`).
    pub fn try_begin(&self) -> Result<LatchGuard<'_>, LatchState> {
        let mut current = self.word.load(Ordering::Acquire);
        loop {
            if current & STATE_MASK != IDLE {
                return Err(decode(current));
            }
            let generation = current & !STATE_MASK;
            match self.word.compare_exchange_weak(
                current,
                generation | PROCESSING,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    return Ok(LatchGuard {
                        latch: self,
                        generation,
                        committed: false,
                    })
                }
                Err(actual) => current = actual,
            }
        }
    }

    /// Return to `Idle` so the next frame is processed.
    pub fn reset(&self) {
        let _ = self
            .word
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |w| {
                Some(((w & !STATE_MASK).wrapping_add(STATE_MASK + 1)) | IDLE)
            });
    }
}

fn decode(word: u32) -> LatchState {
    match word & STATE_MASK {
        PROCESSING => LatchState::Processing,
        CAPTURED => LatchState::Captured,
        _ => LatchState::Idle,
    }
}

/// Exclusive claim on a [`CaptureLatch`] for one frame.
///
/// Dropping the guard without [`commit`](LatchGuard::commit) releases the
/// latch back to `Idle`.
#[derive(Debug)]
pub struct LatchGuard<'a> {
    latch: &'a CaptureLatch,
    generation: u32,
    committed: bool,
}

impl LatchGuard<'_> {
    /// Mark the session as captured.
    ///
    /// Returns false if the latch was reset while this frame was in flight;
    /// the frame's result is still valid but the session stays open.
    pub fn commit(mut self) -> bool {
        self.committed = true;
        self.transition(CAPTURED)
    }

    fn transition(&self, to: u32) -> bool {
        self.latch
            .word
            .compare_exchange(
                self.generation | PROCESSING,
                self.generation | to,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }
}

impl Drop for LatchGuard<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.transition(IDLE);
        }
    }
}
