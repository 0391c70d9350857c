//! Terminal setup and restoration

use ratatui::DefaultTerminal;

use mealdeck_core::prelude::*;

/// Enter raw mode and the alternate screen
///
/// A panic from here on restores the terminal first and records the panic
/// in the log file, since stderr is hidden behind the alternate screen.
pub fn init() -> Result<DefaultTerminal> {
    install_panic_hook();
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave the alternate screen and raw mode
pub fn restore() {
    if let Err(e) = ratatui::try_restore() {
        warn!("Failed to restore terminal: {}", e);
    }
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::try_restore();
        error!("mealdeck panicked: {}", panic_info);
        previous(panic_info);
    }));
}
