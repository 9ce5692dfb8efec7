//! Host platform boundary.
//!
//! Defines the `HostPlatform` trait: the fixed set of interceptable
//! operations, native behavior access, display surface enumeration, and OS
//! version reporting. This is the only module that models host-environment
//! concepts; everything above it is host-agnostic and independently
//! testable.
//!
//! `headless` provides a scriptable in-process implementation used by the
//! demo binary and the test suites.

pub mod headless;

pub use headless::HeadlessHost;

use crate::idiom::Idiom;
use crate::ops::{CallContext, OpResult, OperationId, SurfaceId};

// ---------------------------------------------------------------------------
// Display surfaces
// ---------------------------------------------------------------------------

/// One connected display surface the host can place a window on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSurface {
    pub id: SurfaceId,
    /// True when the surface lives on an external (connected) display.
    pub external: bool,
}

impl WindowSurface {
    pub fn builtin(id: SurfaceId) -> Self {
        Self {
            id,
            external: false,
        }
    }

    pub fn external(id: SurfaceId) -> Self {
        Self { id, external: true }
    }
}

// ---------------------------------------------------------------------------
// OS version
// ---------------------------------------------------------------------------

/// Host OS version as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsVersion {
    pub version: String,
    pub build: String,
}

impl OsVersion {
    pub fn new(version: impl Into<String>, build: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            build: build.into(),
        }
    }

    /// Marketing version plus build, e.g. `"17.4 (21E219)"`.
    pub fn complete(&self) -> String {
        format!("{} ({})", self.version, self.build)
    }
}

// ---------------------------------------------------------------------------
// HostPlatform trait
// ---------------------------------------------------------------------------

/// The thin boundary to the host environment.
///
/// `native_call` is the pre-override implementation of each operation; the
/// dispatcher forwards to it for operations nobody overrode and captures it
/// into trampolines at registration time.
pub trait HostPlatform: Send + Sync {
    /// The hardware-detected device idiom.
    fn detected_idiom(&self) -> Idiom;

    /// Whether the host exposes an original behavior for `op`.
    ///
    /// When false, registration still succeeds but the trampoline stays
    /// empty and overrides must produce a synthetic result.
    fn has_native(&self, op: OperationId) -> bool {
        let _ = op;
        true
    }

    /// Invokes the host's native behavior for the operation in `ctx`.
    fn native_call(&self, ctx: &CallContext) -> OpResult;

    /// Currently connected display surfaces; enumeration order is stable
    /// for the duration of a call.
    fn connected_surfaces(&self) -> Vec<WindowSurface>;

    /// Host OS version.
    fn os_version(&self) -> OsVersion;
}
