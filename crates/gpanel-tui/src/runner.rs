//! Main TUI runner - entry point and event loop

use gpanel_app::message::Message;
use gpanel_app::Engine;
use gpanel_core::prelude::*;
use gpanel_gateway::Gateway;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Run the panel until the user quits or a signal arrives.
pub async fn run<G: Gateway + Sync + 'static>(mut engine: Engine<G>) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    // Size decides whether the sidebar starts collapsed
    match term.size() {
        Ok(size) => engine.process_message(Message::Resize {
            width: size.width,
            height: size.height,
        }),
        Err(e) => warn!("Could not read terminal size: {}", e),
    }

    engine.start();
    info!("Panel started against {}", engine.state.settings.device.url);

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Drain background results, draw, then block briefly on input.
fn run_loop<G: Gateway + Sync + 'static>(
    terminal: &mut DefaultTerminal,
    engine: &mut Engine<G>,
) -> Result<()> {
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    debug!("Event loop finished");
    Ok(())
}
