//! Text-field line-break override, non-editing display state only.
//!
//! While the field is being edited the native behavior stays in charge; the
//! override answers only for the rendered (non-editing) state, so a long
//! value can e.g. truncate in the middle without disturbing the caret
//! behavior during editing.

use crate::ops::{CallContext, LineBreakMode, OpArgs, OpResult};
use crate::registry::{OverrideBehavior, Trampoline};

/// Overrides the line-break mode of single-line text inputs when they are
/// not being edited.
pub struct NonEditingLineBreak {
    mode: LineBreakMode,
}

impl NonEditingLineBreak {
    pub fn new(mode: LineBreakMode) -> Self {
        Self { mode }
    }
}

impl OverrideBehavior for NonEditingLineBreak {
    fn apply(&self, ctx: &CallContext, original: &Trampoline) -> OpResult {
        let OpArgs::LinebreakMode { editing } = &ctx.args else {
            log::debug!("linebreak: unexpected arguments for {}, skipping", ctx.op);
            return original
                .call(ctx)
                .unwrap_or(OpResult::LineBreak(LineBreakMode::Clip));
        };

        if *editing {
            // Editing state keeps whatever the field natively does.
            return original
                .call(ctx)
                .unwrap_or(OpResult::LineBreak(LineBreakMode::Clip));
        }
        OpResult::LineBreak(self.mode)
    }
}
