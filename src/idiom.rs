//! Device-class idiom values and the process-wide active idiom state.
//!
//! `Idiom` is the classification UI code conditions its layout on (phone,
//! pad, tv, ...). `IdiomState` holds the currently active value: seeded from
//! the host's detected hardware idiom at install time, replaced only through
//! an explicit `set`. Reads and writes are atomic; idiom changes are rare
//! (administrative action, not per-call churn), so no further coordination
//! is layered on top.
//!
//! Changing the idiom does not invalidate already-rendered UI. Callers that
//! need a re-layout own that side effect.

use std::sync::atomic::{AtomicU8, Ordering};

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Idiom
// ---------------------------------------------------------------------------

/// A device-class classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Idiom {
    Phone,
    Pad,
    Tv,
    #[serde(rename = "carplay")]
    CarPlay,
    Mac,
    Unspecified,
}

impl Idiom {
    /// Display scale convention for assets rendered under this idiom.
    ///
    /// Used by the image-resize policy to normalize reported metrics. The
    /// values follow the usual retina conventions per device class; pixel
    /// content decisions stay with the original behavior.
    pub fn display_scale(self) -> f64 {
        match self {
            Idiom::Phone => 3.0,
            Idiom::Pad => 2.0,
            Idiom::Tv => 1.0,
            Idiom::CarPlay => 2.0,
            Idiom::Mac => 2.0,
            Idiom::Unspecified => 1.0,
        }
    }

    fn to_u8(self) -> u8 {
        match self {
            Idiom::Phone => 0,
            Idiom::Pad => 1,
            Idiom::Tv => 2,
            Idiom::CarPlay => 3,
            Idiom::Mac => 4,
            Idiom::Unspecified => 5,
        }
    }

    fn from_u8(raw: u8) -> Idiom {
        match raw {
            0 => Idiom::Phone,
            1 => Idiom::Pad,
            2 => Idiom::Tv,
            3 => Idiom::CarPlay,
            4 => Idiom::Mac,
            _ => Idiom::Unspecified,
        }
    }
}

// ---------------------------------------------------------------------------
// IdiomState
// ---------------------------------------------------------------------------

/// The active idiom for one overlay.
///
/// Shared between the policy adapters via `Arc`. Last-writer-wins: `set`
/// stores unconditionally and every subsequent `get` observes the new value.
#[derive(Debug)]
pub struct IdiomState {
    active: AtomicU8,
}

impl IdiomState {
    /// Creates the state seeded with the host-detected idiom.
    pub fn new(detected: Idiom) -> Self {
        Self {
            active: AtomicU8::new(detected.to_u8()),
        }
    }

    /// Returns the currently active idiom.
    pub fn get(&self) -> Idiom {
        Idiom::from_u8(self.active.load(Ordering::Relaxed))
    }

    /// Replaces the active idiom unconditionally.
    ///
    /// No derived consequences are inferred here; a caller that also wants
    /// window selection or layout to follow must arrange that itself.
    pub fn set(&self, idiom: Idiom) {
        self.active.store(idiom.to_u8(), Ordering::Relaxed);
        log::info!("idiom: active idiom set to {:?}", idiom);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_starts_at_detected_value() {
        let state = IdiomState::new(Idiom::Phone);
        assert_eq!(state.get(), Idiom::Phone);
    }

    #[test]
    fn set_replaces_value_for_all_reads() {
        let state = IdiomState::new(Idiom::Phone);
        state.set(Idiom::Pad);
        assert_eq!(state.get(), Idiom::Pad);
        assert_eq!(state.get(), Idiom::Pad);
    }

    #[test]
    fn set_is_last_writer_wins() {
        let state = IdiomState::new(Idiom::Tv);
        state.set(Idiom::Mac);
        state.set(Idiom::CarPlay);
        assert_eq!(state.get(), Idiom::CarPlay);
    }

    /// Every variant must survive the u8 round trip used by the atomic cell.
    #[test]
    fn all_variants_round_trip() {
        for idiom in [
            Idiom::Phone,
            Idiom::Pad,
            Idiom::Tv,
            Idiom::CarPlay,
            Idiom::Mac,
            Idiom::Unspecified,
        ] {
            assert_eq!(Idiom::from_u8(idiom.to_u8()), idiom);
        }
    }

    #[test]
    fn phone_and_pad_scale_conventions_differ() {
        assert_ne!(
            Idiom::Phone.display_scale(),
            Idiom::Pad.display_scale()
        );
    }

    #[test]
    fn idiom_names_deserialize() {
        #[derive(Deserialize)]
        struct Wrap {
            idiom: Idiom,
        }
        let w: Wrap = toml::from_str("idiom = \"carplay\"").unwrap();
        assert_eq!(w.idiom, Idiom::CarPlay);
        let w: Wrap = toml::from_str("idiom = \"pad\"").unwrap();
        assert_eq!(w.idiom, Idiom::Pad);
        assert!(toml::from_str::<Wrap>("idiom = \"watch\"").is_err());
    }
}
