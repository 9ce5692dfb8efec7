//! Menu presentation override: picks the preferred layout for
//! context-menu-like UI.
//!
//! Either a fixed layout from configuration, or derived from the active
//! idiom: pad and mac get the full-width presentation, phone and carplay
//! the dense one, everything else defers to the host. The host's own
//! rendering consumes the tag; the adapter never draws anything.

use std::sync::Arc;

use crate::idiom::{Idiom, IdiomState};
use crate::ops::{CallContext, MenuLayout, OpResult};
use crate::registry::{OverrideBehavior, Trampoline};

/// Supplies the preferred context-menu layout.
pub struct MenuPresentation {
    state: Arc<IdiomState>,
    fixed: Option<MenuLayout>,
}

impl MenuPresentation {
    /// Idiom-derived layout.
    pub fn new(state: Arc<IdiomState>) -> Self {
        Self { state, fixed: None }
    }

    /// Fixed layout, ignoring the active idiom.
    pub fn fixed(state: Arc<IdiomState>, layout: MenuLayout) -> Self {
        Self {
            state,
            fixed: Some(layout),
        }
    }

    fn layout_for(idiom: Idiom) -> MenuLayout {
        match idiom {
            Idiom::Pad | Idiom::Mac => MenuLayout::Expanded,
            Idiom::Phone | Idiom::CarPlay => MenuLayout::Compact,
            Idiom::Tv | Idiom::Unspecified => MenuLayout::Automatic,
        }
    }
}

impl OverrideBehavior for MenuPresentation {
    fn apply(&self, _ctx: &CallContext, _original: &Trampoline) -> OpResult {
        let layout = self
            .fixed
            .unwrap_or_else(|| Self::layout_for(self.state.get()));
        OpResult::Menu(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{OpArgs, Point};

    fn present(adapter: &MenuPresentation) -> OpResult {
        adapter.apply(
            &CallContext::new(OpArgs::PresentMenu {
                location: Point::new(12.0, 34.0),
            }),
            &Trampoline::absent(),
        )
    }

    #[test]
    fn layout_follows_active_idiom() {
        let state = Arc::new(IdiomState::new(Idiom::Phone));
        let adapter = MenuPresentation::new(Arc::clone(&state));
        assert_eq!(present(&adapter), OpResult::Menu(MenuLayout::Compact));

        state.set(Idiom::Pad);
        assert_eq!(present(&adapter), OpResult::Menu(MenuLayout::Expanded));

        state.set(Idiom::Tv);
        assert_eq!(present(&adapter), OpResult::Menu(MenuLayout::Automatic));
    }

    #[test]
    fn fixed_layout_wins_over_idiom() {
        let state = Arc::new(IdiomState::new(Idiom::Phone));
        let adapter = MenuPresentation::fixed(state, MenuLayout::Expanded);
        assert_eq!(present(&adapter), OpResult::Menu(MenuLayout::Expanded));
    }
}
