//! Event echo demo
//!
//! Opens a bare window and logs every normalized event the shim produces.
//! Escape or the window's close button ends the loop. Pass a `.toml` or
//! `.ron` path as the first argument to override the window settings.

use wndshim::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    wndshim::foundation::logging::init();

    let config = load_config();
    let mut errors = ErrorChannel::new();

    log::info!(
        "Creating window \"{}\" ({}x{})",
        config.title,
        config.width,
        config.height
    );
    let mut window = match Window::create(&mut errors, &config.title, config.width, config.height) {
        Ok(window) => window,
        Err(e) => {
            drain_diagnostics(&mut errors);
            return Err(e.into());
        }
    };

    if config.visible {
        if let Err(e) = window.show(&mut errors) {
            drain_diagnostics(&mut errors);
            return Err(e.into());
        }
    }

    log::info!("Entering main loop");
    while !window.should_close() {
        if let Err(e) = window.pump(&mut errors) {
            log::error!("Pump failed: {}", e);
            break;
        }

        loop {
            match window.poll_event(&mut errors) {
                Ok(Some(event)) => handle_event(&mut window, event),
                Ok(None) => break,
                Err(e) => {
                    log::error!("Poll failed: {}", e);
                    window.request_close();
                    break;
                }
            }
        }
    }

    let stats = window.event_stats();
    log::debug!(
        "Event channel saw {} ops and {} queued events since its last reallocation",
        stats.ops_since_realloc,
        stats.events_since_realloc
    );

    if let Err(e) = window.destroy(&mut errors) {
        log::error!("Destroy failed: {}", e);
    }
    drain_diagnostics(&mut errors);
    Ok(())
}

fn handle_event(window: &mut Window, event: Event) {
    match event {
        Event::Close => {
            log::info!("Close requested");
            window.request_close();
        }
        Event::Minimize => {
            log::info!(
                "Minimize toggled (now {})",
                if window.is_minimized() { "minimized" } else { "restored" }
            );
        }
        Event::Resize => {
            let (width, height) = window.size();
            log::info!("Resized to {}x{}", width, height);
        }
        Event::Key {
            code: KeyCode::Escape,
            pressed: true,
        } => {
            log::info!("Escape pressed, closing");
            window.request_close();
        }
        Event::Key { code, pressed } => {
            log::info!(
                "Key {:?} {}",
                code,
                if pressed { "pressed" } else { "released" }
            );
        }
    }
}

fn load_config() -> WindowConfig {
    match std::env::args().nth(1) {
        Some(path) => match WindowConfig::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Could not load \"{}\": {}; using defaults", path, e);
                WindowConfig::default()
            }
        },
        None => WindowConfig::default(),
    }
}

/// Print whatever the error channel holds
///
/// A latched channel repeats its backup record forever, and `pop` itself
/// can latch mid-drain when a shrink is refused, so the latch is re-checked
/// between pops and the backup record printed exactly once.
fn drain_diagnostics(errors: &mut ErrorChannel) {
    while !errors.is_fatal() {
        match errors.pop() {
            Some(diagnostic) => {
                log::error!("Error ({}): {}", diagnostic.origin, diagnostic.message);
            }
            None => return,
        }
    }
    if let Some(diagnostic) = errors.pop() {
        log::error!("Fatal ({}): {}", diagnostic.origin, diagnostic.message);
    }
}
