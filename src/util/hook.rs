use crate::ui::tui;

/// Restore the terminal before the default panic output so the message is
/// not swallowed by the alternate screen.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::Tui::restore();
        tracing::error!("panic: {panic_info}");
        hook(panic_info);
    }));
}
