//! Headless host: a scriptable in-process `HostPlatform`.
//!
//! Stands in for a real UI host in tests and in the demo binary. Native
//! behavior is deliberately naive: it reports the detected idiom verbatim,
//! resizes images without touching their scale, knows nothing about
//! external displays, and exposes no pointer-driver bookkeeping at all
//! (`has_native` is false for that operation). The overrides are what make
//! those answers idiom-aware.
//!
//! Surfaces can be connected and disconnected between dispatches to script
//! display topology changes.

use std::sync::Mutex;

use crate::idiom::Idiom;
use crate::ops::{
    CallContext, LineBreakMode, MenuLayout, OpArgs, OpResult, OperationId, SurfaceId,
};
use crate::platform::{HostPlatform, OsVersion, WindowSurface};

/// In-process host with a fixed detected idiom and a mutable surface set.
pub struct HeadlessHost {
    detected: Idiom,
    surfaces: Mutex<Vec<WindowSurface>>,
    os: OsVersion,
}

impl HeadlessHost {
    /// Creates a host with no connected surfaces.
    pub fn new(detected: Idiom) -> Self {
        Self {
            detected,
            surfaces: Mutex::new(Vec::new()),
            os: OsVersion::new("17.4", "21E219"),
        }
    }

    /// Builder-style: adds a surface at construction time.
    pub fn with_surface(self, surface: WindowSurface) -> Self {
        self.connect_surface(surface);
        self
    }

    /// Connects a display surface. Later dispatches observe it.
    pub fn connect_surface(&self, surface: WindowSurface) {
        let mut surfaces = self.surfaces.lock().unwrap_or_else(|e| e.into_inner());
        log::debug!("host: surface {:?} connected", surface.id);
        surfaces.push(surface);
    }

    /// Disconnects a surface; unknown ids are ignored.
    pub fn disconnect_surface(&self, id: SurfaceId) {
        let mut surfaces = self.surfaces.lock().unwrap_or_else(|e| e.into_inner());
        surfaces.retain(|s| s.id != id);
        log::debug!("host: surface {:?} disconnected", id);
    }
}

impl HostPlatform for HeadlessHost {
    fn detected_idiom(&self) -> Idiom {
        self.detected
    }

    fn has_native(&self, op: OperationId) -> bool {
        // Pointer-driver enumeration has no host-side implementation; the
        // overlay's binding adapter owns that bookkeeping outright.
        op != OperationId::BindPointerDriver
    }

    fn native_call(&self, ctx: &CallContext) -> OpResult {
        match &ctx.args {
            OpArgs::QueryIdiom => OpResult::Idiom(self.detected),
            OpArgs::ResizeImage { image, target } => {
                // Native resize adopts the requested point size and keeps
                // the asset's own scale.
                let mut resized = *image;
                resized.point_size = *target;
                OpResult::Image(resized)
            }
            OpArgs::PresentMenu { .. } => OpResult::Menu(MenuLayout::Automatic),
            OpArgs::SelectWindow { class } => {
                use crate::ops::WindowClass;
                let surfaces = self.surfaces.lock().unwrap_or_else(|e| e.into_inner());
                match class {
                    // The native host hands out its first surface as "main"
                    // and has no concept of an external window.
                    WindowClass::Main => OpResult::Window(surfaces.first().map(|s| s.id)),
                    WindowClass::External => OpResult::Window(None),
                }
            }
            OpArgs::BindPointerDriver { .. } => OpResult::PointerDrivers {
                drivers: Vec::new(),
                current: None,
            },
            OpArgs::LinebreakMode { .. } => OpResult::LineBreak(LineBreakMode::Clip),
        }
    }

    fn connected_surfaces(&self) -> Vec<WindowSurface> {
        self.surfaces
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn os_version(&self) -> OsVersion {
        self.os.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{ImageDescriptor, Size, WindowClass};

    #[test]
    fn native_idiom_query_reports_detected_value() {
        let host = HeadlessHost::new(Idiom::Phone);
        let result = host.native_call(&CallContext::new(OpArgs::QueryIdiom));
        assert_eq!(result, OpResult::Idiom(Idiom::Phone));
    }

    #[test]
    fn native_resize_keeps_source_scale() {
        let host = HeadlessHost::new(Idiom::Phone);
        let image = ImageDescriptor::new(Size::new(10.0, 10.0), 2.0);
        let result = host.native_call(&CallContext::new(OpArgs::ResizeImage {
            image,
            target: Size::new(40.0, 40.0),
        }));
        let OpResult::Image(resized) = result else {
            panic!("expected image result");
        };
        assert_eq!(resized.point_size, Size::new(40.0, 40.0));
        assert_eq!(resized.scale, 2.0);
    }

    #[test]
    fn native_host_knows_no_external_window() {
        let host = HeadlessHost::new(Idiom::Pad)
            .with_surface(WindowSurface::builtin(SurfaceId(1)))
            .with_surface(WindowSurface::external(SurfaceId(2)));
        let result = host.native_call(&CallContext::new(OpArgs::SelectWindow {
            class: WindowClass::External,
        }));
        assert_eq!(result, OpResult::Window(None));
    }

    #[test]
    fn surfaces_connect_and_disconnect() {
        let host = HeadlessHost::new(Idiom::Pad);
        host.connect_surface(WindowSurface::builtin(SurfaceId(7)));
        assert_eq!(host.connected_surfaces().len(), 1);
        host.disconnect_surface(SurfaceId(7));
        assert!(host.connected_surfaces().is_empty());
    }

    #[test]
    fn no_native_pointer_driver_behavior() {
        let host = HeadlessHost::new(Idiom::Pad);
        assert!(!host.has_native(OperationId::BindPointerDriver));
        assert!(host.has_native(OperationId::QueryIdiom));
    }

    #[test]
    fn complete_os_version_format() {
        let host = HeadlessHost::new(Idiom::Mac);
        assert_eq!(host.os_version().complete(), "17.4 (21E219)");
    }
}
