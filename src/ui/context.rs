use std::sync::Arc;

use flume::Sender;

use crate::{collection::Collection, event::events::Event, fx::Effects, reader::Paginator};

pub struct AppContext {
    pub collection: Arc<Collection>,
    pub reader: Paginator,
    pub fx: Effects,
    pub event_tx: Sender<Event>,
}
