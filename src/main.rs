//! idiomshim -- runtime device-idiom override layer.
//!
//! Demo initializer: loads configuration, installs the overlay against a
//! headless host, and drives a short scripted dispatch sequence. This is
//! the "external initializer" role; a real embedding performs the same
//! steps against its own `HostPlatform` at application startup.

use std::env;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use idiomshim::ops::{ImageDescriptor, OpArgs, Point, Size, SurfaceId, WindowClass};
use idiomshim::platform::{HeadlessHost, WindowSurface};
use idiomshim::{Idiom, Overlay, OverlayConfig, Result};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    println!("idiomshim v{}", env!("CARGO_PKG_VERSION"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => OverlayConfig::load(Path::new(&path))?,
        None => OverlayConfig::default(),
    };

    let host = Arc::new(
        HeadlessHost::new(Idiom::Phone)
            .with_surface(WindowSurface::builtin(SurfaceId(1)))
            .with_surface(WindowSurface::external(SurfaceId(2))),
    );
    let overlay = Overlay::install(&config, host)?;

    log::info!("idiom query -> {:?}", overlay.dispatch(OpArgs::QueryIdiom));

    overlay.set_idiom(Idiom::Pad);
    log::info!("idiom query -> {:?}", overlay.dispatch(OpArgs::QueryIdiom));

    let resized = overlay.dispatch(OpArgs::ResizeImage {
        image: ImageDescriptor::new(Size::new(100.0, 100.0), 1.0),
        target: Size::new(100.0, 100.0),
    });
    log::info!("image resize -> {:?}", resized);

    log::info!(
        "menu -> {:?}",
        overlay.dispatch(OpArgs::PresentMenu {
            location: Point::new(40.0, 40.0)
        })
    );
    log::info!(
        "external window -> {:?}",
        overlay.dispatch(OpArgs::SelectWindow {
            class: WindowClass::External
        })
    );

    overlay.pointer_drivers().attach(SurfaceId(1));
    log::info!(
        "pointer drivers -> {:?}",
        overlay.dispatch(OpArgs::BindPointerDriver {
            surface: SurfaceId(1)
        })
    );
    log::info!(
        "linebreak -> {:?}",
        overlay.dispatch(OpArgs::LinebreakMode { editing: false })
    );

    Ok(())
}
