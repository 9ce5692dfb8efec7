//! Image resize override: normalizes reported metrics to the active idiom's
//! scale convention.
//!
//! Pixel content decisions stay with the original behavior: the adapter
//! forwards the resize to the trampoline when one exists and only rewrites
//! the scale on the returned descriptor. Size-fixed images are returned
//! unchanged, whatever size was requested.

use std::sync::Arc;

use crate::idiom::IdiomState;
use crate::ops::{CallContext, ImageDescriptor, OpArgs, OpResult};
use crate::registry::{OverrideBehavior, Trampoline};

/// Rewrites resized-image metrics to match the active idiom.
pub struct ImageResize {
    state: Arc<IdiomState>,
}

impl ImageResize {
    pub fn new(state: Arc<IdiomState>) -> Self {
        Self { state }
    }
}

impl OverrideBehavior for ImageResize {
    fn apply(&self, ctx: &CallContext, original: &Trampoline) -> OpResult {
        let OpArgs::ResizeImage { image, target } = &ctx.args else {
            log::debug!("resize: unexpected arguments for {}, skipping", ctx.op);
            return original
                .call(ctx)
                .unwrap_or(OpResult::Image(ImageDescriptor::default()));
        };

        if image.size_fixed {
            log::debug!("resize: image is size-fixed, passing through");
            return OpResult::Image(*image);
        }

        // Let the original do the actual resampling when it exists;
        // synthesize the descriptor otherwise.
        let resized = match original.call(ctx) {
            Some(OpResult::Image(descriptor)) => descriptor,
            _ => ImageDescriptor::new(*target, image.scale),
        };

        let scale = self.state.get().display_scale();
        OpResult::Image(ImageDescriptor {
            point_size: resized.point_size,
            scale,
            size_fixed: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idiom::Idiom;
    use crate::ops::Size;

    fn resize_ctx(image: ImageDescriptor, target: Size) -> CallContext {
        CallContext::new(OpArgs::ResizeImage { image, target })
    }

    /// Phone and pad scale conventions differ, so the same request must
    /// produce differing metrics under the two idioms.
    #[test]
    fn metrics_follow_the_active_idiom() {
        let state = Arc::new(IdiomState::new(Idiom::Phone));
        let adapter = ImageResize::new(Arc::clone(&state));
        let ctx = resize_ctx(
            ImageDescriptor::new(Size::new(100.0, 100.0), 1.0),
            Size::new(100.0, 100.0),
        );

        let OpResult::Image(phone) = adapter.apply(&ctx, &Trampoline::absent()) else {
            panic!("expected image result");
        };
        assert_eq!(phone.scale, Idiom::Phone.display_scale());

        state.set(Idiom::Pad);
        let OpResult::Image(pad) = adapter.apply(&ctx, &Trampoline::absent()) else {
            panic!("expected image result");
        };
        assert_eq!(pad.scale, Idiom::Pad.display_scale());
        assert_ne!(phone.scale, pad.scale);
        assert_ne!(phone.pixel_size(), pad.pixel_size());
    }

    #[test]
    fn size_fixed_image_passes_through_unchanged() {
        let state = Arc::new(IdiomState::new(Idiom::Pad));
        let adapter = ImageResize::new(state);
        let mut image = ImageDescriptor::new(Size::new(32.0, 32.0), 2.0);
        image.size_fixed = true;
        let ctx = resize_ctx(image, Size::new(64.0, 64.0));

        assert_eq!(
            adapter.apply(&ctx, &Trampoline::absent()),
            OpResult::Image(image)
        );
    }

    #[test]
    fn delegates_point_size_to_original() {
        let state = Arc::new(IdiomState::new(Idiom::Pad));
        let adapter = ImageResize::new(state);
        let ctx = resize_ctx(
            ImageDescriptor::new(Size::new(10.0, 10.0), 1.0),
            Size::new(48.0, 48.0),
        );

        // Original clamps the requested size; the adapter must keep that
        // decision and only rewrite the scale.
        let original = Trampoline::new(std::sync::Arc::new(|_ctx: &CallContext| {
            OpResult::Image(ImageDescriptor::new(Size::new(40.0, 40.0), 1.0))
        }));

        let OpResult::Image(resized) = adapter.apply(&ctx, &original) else {
            panic!("expected image result");
        };
        assert_eq!(resized.point_size, Size::new(40.0, 40.0));
        assert_eq!(resized.scale, Idiom::Pad.display_scale());
    }

    #[test]
    fn synthesizes_descriptor_without_original() {
        let state = Arc::new(IdiomState::new(Idiom::Tv));
        let adapter = ImageResize::new(state);
        let ctx = resize_ctx(
            ImageDescriptor::new(Size::new(10.0, 10.0), 2.0),
            Size::new(20.0, 30.0),
        );

        let OpResult::Image(resized) = adapter.apply(&ctx, &Trampoline::absent()) else {
            panic!("expected image result");
        };
        assert_eq!(resized.point_size, Size::new(20.0, 30.0));
        assert_eq!(resized.scale, Idiom::Tv.display_scale());
    }
}
