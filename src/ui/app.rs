use std::sync::Arc;

use flume::Receiver;

use ratatui::Frame;

use crate::{
    collection::Collection,
    event::events::Event,
    fx::Effects,
    reader::{Paginator, ReaderConfig},
    ui::{
        context::AppContext,
        layout::AppLayout,
        router::Router,
        state::{AppState, UiState},
        tui::{self, TerminalEvent},
        util::handler::EventHandler,
        views::ContentsView,
    },
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub router: Router,
    /// Column/row of the last primary-button press, for swipe detection.
    pub swipe_origin: Option<(u16, u16)>,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(collection: Collection) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let collection = Arc::new(collection);
        let config = ReaderConfig::default();
        let reader = Paginator::new(collection.len(), config.clone());
        let fx = Effects::new(&config);

        let state = AppState {
            ui: UiState {
                source_label: format!(
                    "{} \u{2014} {} poems",
                    collection.source(),
                    collection.len()
                ),
            },
        };

        Ok(Self {
            event_rx,
            ctx: AppContext {
                collection,
                reader,
                fx,
                event_tx,
            },
            state,
            router: Router::new(Box::new(ContentsView::default())),
            swipe_origin: None,
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.mouse(true);
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            AppLayout::new(self).render(frame, frame.area());
        }
    }
}
