//! Terminal setup and restoration

/// Chain a panic hook that puts the terminal back into cooked mode before
/// the default hook prints the panic message
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));
}
