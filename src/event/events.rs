/// App-level events flowing over the flume channel: navigation requests
/// raised by the ancillary listeners (keys, swipe, wheel) plus signals the
/// views react to. Within one input handler everything is synchronous; only
/// page-turn settling lands on a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Commands
    OpenPoem(usize),
    NextPoem,
    PreviousPoem,
    Quit,

    // Signals
    PoemShown(usize),
    ScrollUp,
    ScrollDown,
}
