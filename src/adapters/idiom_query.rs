//! Idiom query override: answers with the active (spoofed) idiom.
//!
//! The hardware-detected value never reaches the caller while this override
//! is installed; the original behavior is not consulted.

use std::sync::Arc;

use crate::idiom::IdiomState;
use crate::ops::{CallContext, OpResult};
use crate::registry::{OverrideBehavior, Trampoline};

/// Returns the spoofed idiom in place of the hardware-detected one.
pub struct IdiomQuery {
    state: Arc<IdiomState>,
}

impl IdiomQuery {
    pub fn new(state: Arc<IdiomState>) -> Self {
        Self { state }
    }
}

impl OverrideBehavior for IdiomQuery {
    fn apply(&self, _ctx: &CallContext, _original: &Trampoline) -> OpResult {
        OpResult::Idiom(self.state.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idiom::Idiom;
    use crate::ops::OpArgs;

    #[test]
    fn answers_with_active_idiom() {
        let state = Arc::new(IdiomState::new(Idiom::Phone));
        let adapter = IdiomQuery::new(Arc::clone(&state));
        let ctx = CallContext::new(OpArgs::QueryIdiom);

        assert_eq!(
            adapter.apply(&ctx, &Trampoline::absent()),
            OpResult::Idiom(Idiom::Phone)
        );

        state.set(Idiom::Pad);
        assert_eq!(
            adapter.apply(&ctx, &Trampoline::absent()),
            OpResult::Idiom(Idiom::Pad)
        );
    }
}
