//! Interceptable operation identifiers and their call argument/result shapes.
//!
//! The operation set is closed: these six are the only platform operations
//! the overlay knows how to intercept. `OpArgs` and `OpResult` are matching
//! closed enums so every dispatch is type-checked end to end; a `CallContext`
//! built through `CallContext::new` always carries the identifier that
//! matches its arguments.

use std::fmt;

use serde::Deserialize;

use crate::idiom::Idiom;

// ---------------------------------------------------------------------------
// Operation identifiers
// ---------------------------------------------------------------------------

/// Stable identifier for one interceptable platform operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationId {
    /// Query the device idiom the application should render for.
    QueryIdiom,
    /// Produce an image asset for a requested point size.
    ResizeImage,
    /// Present context-menu-like UI at a location.
    PresentMenu,
    /// Resolve the main or external window.
    SelectWindow,
    /// Enumerate pointer-interaction drivers for a surface.
    BindPointerDriver,
    /// Line-break behavior for single-line text inputs.
    LinebreakMode,
}

impl OperationId {
    /// All interceptable operations, in a fixed order.
    pub const ALL: [OperationId; 6] = [
        OperationId::QueryIdiom,
        OperationId::ResizeImage,
        OperationId::PresentMenu,
        OperationId::SelectWindow,
        OperationId::BindPointerDriver,
        OperationId::LinebreakMode,
    ];

    /// Stable wire-style name, used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            OperationId::QueryIdiom => "query-idiom",
            OperationId::ResizeImage => "resize-image",
            OperationId::PresentMenu => "present-menu",
            OperationId::SelectWindow => "select-window",
            OperationId::BindPointerDriver => "bind-pointer-driver",
            OperationId::LinebreakMode => "linebreak-mode",
        }
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Geometry and UI value types
// ---------------------------------------------------------------------------

/// A size in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A location in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Reported metrics of an image asset.
///
/// `point_size` and `scale` together determine the pixel dimensions the host
/// will rasterize at. A `size_fixed` image has opted out of idiom-driven
/// resizing and must be passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageDescriptor {
    pub point_size: Size,
    pub scale: f64,
    pub size_fixed: bool,
}

impl ImageDescriptor {
    pub fn new(point_size: Size, scale: f64) -> Self {
        Self {
            point_size,
            scale,
            size_fixed: false,
        }
    }

    /// Pixel dimensions implied by the point size and scale.
    pub fn pixel_size(&self) -> Size {
        Size::new(
            self.point_size.width * self.scale,
            self.point_size.height * self.scale,
        )
    }
}

/// Preferred layout tag for context-menu-like UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuLayout {
    /// Host picks; the overlay expresses no preference.
    Automatic,
    /// Dense single-column presentation.
    Compact,
    /// Full-width presentation with accessory views.
    Expanded,
}

/// Line-break behavior of a text field's rendered (non-editing) content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineBreakMode {
    WordWrap,
    CharWrap,
    Clip,
    TruncateHead,
    TruncateTail,
    TruncateMiddle,
}

/// Which window a selection call asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowClass {
    /// The application's primary window on the built-in display.
    Main,
    /// The window on a connected external display, if any.
    External,
}

/// Opaque handle for a display surface / window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u32);

/// One pointer-interaction driver bound to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDriver {
    pub id: u32,
    pub surface: SurfaceId,
}

// ---------------------------------------------------------------------------
// Call arguments and results
// ---------------------------------------------------------------------------

/// Input arguments for one dispatch, one variant per operation.
#[derive(Debug, Clone, PartialEq)]
pub enum OpArgs {
    QueryIdiom,
    ResizeImage {
        image: ImageDescriptor,
        target: Size,
    },
    PresentMenu {
        location: Point,
    },
    SelectWindow {
        class: WindowClass,
    },
    BindPointerDriver {
        surface: SurfaceId,
    },
    LinebreakMode {
        /// True while the field is being edited; the override applies only
        /// to the non-editing display state.
        editing: bool,
    },
}

impl OpArgs {
    /// The operation these arguments belong to.
    pub fn operation(&self) -> OperationId {
        match self {
            OpArgs::QueryIdiom => OperationId::QueryIdiom,
            OpArgs::ResizeImage { .. } => OperationId::ResizeImage,
            OpArgs::PresentMenu { .. } => OperationId::PresentMenu,
            OpArgs::SelectWindow { .. } => OperationId::SelectWindow,
            OpArgs::BindPointerDriver { .. } => OperationId::BindPointerDriver,
            OpArgs::LinebreakMode { .. } => OperationId::LinebreakMode,
        }
    }
}

/// Result of one dispatch, one variant per operation.
#[derive(Debug, Clone, PartialEq)]
pub enum OpResult {
    Idiom(Idiom),
    Image(ImageDescriptor),
    Menu(MenuLayout),
    /// `None` means no window of the requested class exists. Callers treat
    /// this as a no-op, never as a failure.
    Window(Option<SurfaceId>),
    PointerDrivers {
        drivers: Vec<PointerDriver>,
        current: Option<PointerDriver>,
    },
    LineBreak(LineBreakMode),
}

// ---------------------------------------------------------------------------
// Call context
// ---------------------------------------------------------------------------

/// Per-invocation record handed through the dispatch path.
///
/// Lifetime is one dispatch call; nothing persists it.
#[derive(Debug, Clone, PartialEq)]
pub struct CallContext {
    pub op: OperationId,
    pub args: OpArgs,
}

impl CallContext {
    /// Builds a context with the identifier derived from the arguments.
    pub fn new(args: OpArgs) -> Self {
        Self {
            op: args.operation(),
            args,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
