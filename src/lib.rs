//! idiomshim -- runtime device-idiom override layer.
//!
//! Lets a prebuilt application perceive and render its host environment as
//! a different device class than the one actually detected, and keeps a
//! small set of dependent UI behaviors (image scaling, menu presentation,
//! window selection, pointer-driver binding, text-field line breaking)
//! consistent with the spoofed idiom.
//!
//! The core is the interception path: [`registry::OverrideRegistry`] maps
//! each named platform operation to an installed override plus a trampoline
//! to the original behavior, and [`dispatch::Dispatcher`] routes every call
//! either to the override or, for operations nobody overrode, straight
//! through to the native implementation. [`overlay::Overlay`] wires the
//! policy adapters up during a single installation phase at startup.
//!
//! Only [`platform`] models host-environment concepts; everything else is
//! host-agnostic.

pub mod adapters;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod idiom;
pub mod ops;
pub mod overlay;
pub mod platform;
pub mod registry;

pub use config::OverlayConfig;
pub use error::{Error, Result};
pub use idiom::{Idiom, IdiomState};
pub use ops::{CallContext, OpArgs, OpResult, OperationId};
pub use overlay::Overlay;
pub use registry::{OverrideBehavior, Trampoline};
