use crossterm::event::{self, Event, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::store::Store;
use crate::table::SortDirective;

#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    SwitchTab(usize),
    ToggleHelp,
    Reload,
    SortChanged(SortDirective),
    FilterChanged { key: &'static str, value: String },
    /// Request to show a page; the owner clamps and applies it.
    PageChange(usize),
    RowActivated(String),
    ApproveQuestion(String),
    RejectQuestion(String),
}

/// Messages sent from background store tasks back to the main UI thread.
#[derive(Debug)]
pub enum AppMessage {
    LoadingStarted(String),
    StoreReady(Box<Store>),
    Saved,
    LoadingFinished,
    Error(String),
}

pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Event>) {
    tokio::task::spawn_blocking(move || loop {
        if event::poll(Duration::from_millis(50)).unwrap_or(false) {
            if let Ok(ev) = event::read() {
                if tx.send(ev).is_err() {
                    break;
                }
            }
        }
    });
}

pub fn to_key_event(ev: &Event) -> Option<KeyEvent> {
    match ev {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => Some(*key),
        _ => None,
    }
}
