use std::time::Instant;

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::{debug, warn};

use crate::{
    event::events::Event,
    reader::ViewMode,
    ui::{
        app::App,
        input::InputHandler,
        traits::Action,
        tui::{TerminalEvent, Tui},
        views::{ReaderView, SideContents, side_contents::SIDE_PANEL_WIDTH},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui).await?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
        }
        Ok(())
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse, tui).await,
            TerminalEvent::Resize(_, _) => {}
            TerminalEvent::Tick => {
                let now = Instant::now();
                app.ctx.reader.tick(now);
                Self::sync_reader(app, now);
            }
        }
        Ok(())
    }

    async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }
        if evt.code == KeyCode::Char('c') && evt.modifiers == KeyModifiers::CONTROL {
            app.should_quit = true;
            return;
        }

        if let Some(action) = app.router.handle_input(evt, &app.state, &app.ctx).await {
            Self::dispatch_action(app, action).await;
            return;
        }

        if let Some(event) = InputHandler::handle_key(evt) {
            Self::handle_action(app, event).await;
        }
    }

    pub async fn handle_action(app: &mut App, evt: Event) {
        app.router.on_event(&evt, &app.ctx).await;

        let action = match evt {
            Event::OpenPoem(index) => Some(Action::OpenPoem(index)),
            Event::NextPoem => Some(Action::NextPoem),
            Event::PreviousPoem => Some(Action::PreviousPoem),
            Event::Quit => Some(Action::Quit),
            Event::PoemShown(_) | Event::ScrollUp | Event::ScrollDown => None,
        };
        if let Some(action) = action {
            Self::dispatch_action(app, action).await;
        }
    }

    async fn dispatch_action(app: &mut App, action: Action) {
        let now = Instant::now();
        match action {
            Action::Quit => app.should_quit = true,
            Action::OpenPoem(index) => {
                let from_contents = app.ctx.reader.view_mode() == ViewMode::Contents;
                match app.ctx.reader.open(index, now) {
                    Ok(()) => {
                        if from_contents {
                            app.router.push(Box::new(ReaderView::default()));
                        }
                        app.router.clear_overlay();
                        Self::sync_reader(app, now);
                    }
                    Err(err) => warn!(%err, index, "rejected open"),
                }
            }
            // page turns only apply while the reader is visible
            Action::NextPoem => {
                if app.ctx.reader.view_mode() == ViewMode::Reader && !app.ctx.reader.next(now) {
                    debug!("next ignored at the edge or mid-turn");
                }
            }
            Action::PreviousPoem => {
                if app.ctx.reader.view_mode() == ViewMode::Reader && !app.ctx.reader.previous(now)
                {
                    debug!("previous ignored at the edge or mid-turn");
                }
            }
            Action::CloseReader => {
                app.ctx.reader.close(now);
                app.router.clear_overlay();
                app.router.pop();
            }
            Action::OpenSideContents => {
                let active = app.ctx.reader.active_contents_entry();
                app.router.set_overlay(Box::new(SideContents::new(active)));
            }
            Action::CloseSideContents => app.router.clear_overlay(),
            Action::GoHome => {
                app.router.clear_overlay();
                app.ctx.reader.close(now);
                app.router.pop();
            }
        }
    }

    async fn handle_mouse_event(app: &mut App, evt: MouseEvent, tui: &Tui) {
        let now = Instant::now();
        app.ctx.fx.glow.pointer_moved(evt.column, evt.row, now);

        match evt.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                app.swipe_origin = Some((evt.column, evt.row));
                if app.router.has_overlay() {
                    let width = tui.size().map(|size| size.width).unwrap_or(0);
                    if evt.column < width.saturating_sub(SIDE_PANEL_WIDTH) {
                        Self::dispatch_action(app, Action::CloseSideContents).await;
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some((start_col, _)) = app.swipe_origin.take() else {
                    return;
                };
                if app.ctx.reader.view_mode() != ViewMode::Reader {
                    return;
                }
                let delta = i32::from(evt.column) - i32::from(start_col);
                let threshold = i32::from(app.ctx.reader.config().swipe_threshold);
                if delta.abs() > threshold {
                    // dragging left pulls the next page in, right the previous
                    let action = if delta < 0 {
                        Action::NextPoem
                    } else {
                        Action::PreviousPoem
                    };
                    Self::dispatch_action(app, action).await;
                }
            }
            MouseEventKind::ScrollUp => Self::handle_action(app, Event::ScrollUp).await,
            MouseEventKind::ScrollDown => Self::handle_action(app, Event::ScrollDown).await,
            _ => {}
        }
    }

    /// Side effects of a new poem landing on the page: the first-view
    /// reveal and the scroll-to-top signal the reader view listens for.
    fn sync_reader(app: &mut App, now: Instant) {
        if app.ctx.reader.take_scroll_to_top()
            && let Some(index) = app.ctx.reader.current_index()
        {
            app.ctx.fx.reveal.poem_shown(index, now);
            let _ = app.ctx.event_tx.send(Event::PoemShown(index));
        }
    }
}
