//! Overlay installation and facade.
//!
//! `Overlay::install` is the single installation phase: seed the idiom
//! state from the host's detected value (optionally spoofing it right
//! away), register the configured policy adapters, and hand back a facade
//! exposing `dispatch` plus the administrative surface (idiom setter,
//! pointer-driver attach/detach). Registration happens here, once, before
//! dispatch traffic begins; duplicate registration is a fatal startup
//! error.

use std::sync::Arc;

use crate::adapters::{
    IdiomQuery, ImageResize, MenuPresentation, NonEditingLineBreak, PointerDriverBinding,
    WindowSelect,
};
use crate::config::OverlayConfig;
use crate::dispatch::Dispatcher;
use crate::idiom::{Idiom, IdiomState};
use crate::ops::{CallContext, OpArgs, OpResult, OperationId};
use crate::platform::HostPlatform;
use crate::registry::{OverrideBehavior, Trampoline};
use crate::Result;

/// The installed override layer.
pub struct Overlay {
    dispatcher: Dispatcher,
    idiom: Arc<IdiomState>,
    pointer: Arc<PointerDriverBinding>,
}

impl Overlay {
    /// Runs the installation phase against `host`.
    pub fn install(config: &OverlayConfig, host: Arc<dyn HostPlatform>) -> Result<Self> {
        let detected = host.detected_idiom();
        let idiom = Arc::new(IdiomState::new(detected));
        if let Some(spoof) = config.idiom.spoof {
            idiom.set(spoof);
        }

        let mut dispatcher = Dispatcher::new(Arc::clone(&host));
        let pointer = Arc::new(PointerDriverBinding::new());

        let flags = &config.overrides;
        if flags.query_idiom {
            dispatcher.register(
                OperationId::QueryIdiom,
                Box::new(IdiomQuery::new(Arc::clone(&idiom))),
            )?;
        }
        if flags.resize_image {
            dispatcher.register(
                OperationId::ResizeImage,
                Box::new(ImageResize::new(Arc::clone(&idiom))),
            )?;
        }
        if flags.present_menu {
            let adapter = match config.menu.layout {
                Some(layout) => MenuPresentation::fixed(Arc::clone(&idiom), layout),
                None => MenuPresentation::new(Arc::clone(&idiom)),
            };
            dispatcher.register(OperationId::PresentMenu, Box::new(adapter))?;
        }
        if flags.select_window {
            dispatcher.register(
                OperationId::SelectWindow,
                Box::new(WindowSelect::new(Arc::clone(&host))),
            )?;
        }
        if flags.bind_pointer_driver {
            let binding = Arc::clone(&pointer);
            dispatcher.register(
                OperationId::BindPointerDriver,
                Box::new(move |ctx: &CallContext, original: &Trampoline| {
                    binding.apply(ctx, original)
                }),
            )?;
        }
        if flags.linebreak_mode {
            dispatcher.register(
                OperationId::LinebreakMode,
                Box::new(NonEditingLineBreak::new(config.text.non_editing_linebreak)),
            )?;
        }

        log::info!(
            "overlay: installed {} override(s), detected idiom {:?}, active {:?}, host os {}",
            dispatcher.registry().len(),
            detected,
            idiom.get(),
            host.os_version().complete(),
        );

        Ok(Self {
            dispatcher,
            idiom,
            pointer,
        })
    }

    /// Dispatches one host call through the resolver.
    pub fn dispatch(&self, args: OpArgs) -> OpResult {
        self.dispatcher.dispatch(&CallContext::new(args))
    }

    /// Currently active idiom.
    pub fn active_idiom(&self) -> Idiom {
        self.idiom.get()
    }

    /// Administrative setter: replace the active idiom. Already-rendered UI
    /// is not invalidated; that remains the caller's responsibility.
    pub fn set_idiom(&self, idiom: Idiom) {
        self.idiom.set(idiom);
    }

    /// Shared idiom state, for collaborators that read it directly.
    pub fn idiom_state(&self) -> &Arc<IdiomState> {
        &self.idiom
    }

    /// Pointer-driver bookkeeping (attach/detach admin surface).
    pub fn pointer_drivers(&self) -> &Arc<PointerDriverBinding> {
        &self.pointer
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
