use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::Tabs;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::components::detail_popup::DetailPopup;
use crate::components::help_popup::HelpPopup;
use crate::components::screens;
use crate::components::status_bar::StatusBar;
use crate::components::{Component, TablePanel};
use crate::event::{spawn_event_reader, to_key_event, Action, AppMessage};
use crate::model::{Exam, Invoice, Question, SystemUser, Teacher};
use crate::store::worker::{spawn_store_worker, StoreCommand};
use crate::store::Store;
use crate::table::DataTable;
use crate::ui::layout::AppLayout;
use crate::ui::theme::Theme;
use crate::ui::Tab;

const TICK: Duration = Duration::from_millis(120);

struct App {
    users: DataTable<SystemUser>,
    teachers: DataTable<Teacher>,
    invoices: DataTable<Invoice>,
    exams: DataTable<Exam>,
    questions: DataTable<Question>,
    status_bar: StatusBar,
    help_popup: HelpPopup,
    detail_popup: DetailPopup,
    active_tab: Tab,
    store: Store,
    store_path: PathBuf,
    /// A load is queued or running; reviews wait until it lands.
    loading: bool,
}

impl App {
    fn new(store_path: PathBuf, page_size: usize, tab: Tab) -> Result<Self> {
        Ok(Self {
            users: screens::users_table(page_size)?,
            teachers: screens::teachers_table(page_size)?,
            invoices: screens::invoices_table(page_size)?,
            exams: screens::exams_table(page_size)?,
            questions: screens::questions_table(page_size)?,
            status_bar: StatusBar::new(store_path.display().to_string()),
            help_popup: HelpPopup::new(),
            detail_popup: DetailPopup::new(),
            active_tab: tab,
            store: Store::default(),
            store_path,
            loading: false,
        })
    }

    fn active_panel(&mut self) -> &mut dyn TablePanel {
        match self.active_tab {
            Tab::Users => &mut self.users,
            Tab::Teachers => &mut self.teachers,
            Tab::Invoices => &mut self.invoices,
            Tab::Exams => &mut self.exams,
            Tab::Questions => &mut self.questions,
        }
    }

    fn panels(&mut self) -> [&mut dyn TablePanel; 5] {
        [
            &mut self.users,
            &mut self.teachers,
            &mut self.invoices,
            &mut self.exams,
            &mut self.questions,
        ]
    }

    fn request_load(&mut self, store_tx: &mpsc::UnboundedSender<StoreCommand>) {
        if store_tx.send(StoreCommand::Load).is_ok() {
            self.loading = true;
        } else {
            self.status_bar.set_error("store worker stopped");
        }
    }

    /// Hand every collection of a freshly loaded store to its table.
    fn install(&mut self, store: Store) {
        self.users.set_data(store.users.clone());
        self.teachers.set_data(store.teachers.clone());
        self.invoices.set_data(store.invoices.clone());
        self.exams.set_data(store.exams.clone());
        self.questions.set_data(store.questions.clone());
        self.store = store;
    }

    fn draw(&mut self, frame: &mut Frame) {
        let counts = self.active_panel().counts();
        self.status_bar.set_counts(counts);

        let layout = AppLayout::new(frame.area());

        let tab_titles: Vec<Line> = Tab::ALL
            .iter()
            .map(|t| {
                if *t == self.active_tab {
                    Line::styled(t.label(), Theme::tab_active())
                } else {
                    Line::styled(t.label(), Theme::tab_inactive())
                }
            })
            .collect();

        let tabs = Tabs::new(tab_titles)
            .select(self.active_tab.index())
            .divider(" │ ")
            .style(Theme::tab_bar_bg());

        frame.render_widget(tabs, layout.tab_bar);

        self.active_panel().render(frame, layout.content, true);
        self.status_bar.render(frame, layout.status_bar, false);

        self.detail_popup.render(frame, frame.area(), true);
        self.help_popup.render(frame, frame.area(), true);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.help_popup.visible {
            return self.help_popup.handle_key(key);
        }

        if self.detail_popup.visible {
            return self.detail_popup.handle_key(key);
        }

        if self.active_panel().is_input_mode() {
            return self.active_panel().handle_key(key);
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => return Some(Action::ToggleHelp),
            KeyCode::Char('1') => return Some(Action::SwitchTab(0)),
            KeyCode::Char('2') => return Some(Action::SwitchTab(1)),
            KeyCode::Char('3') => return Some(Action::SwitchTab(2)),
            KeyCode::Char('4') => return Some(Action::SwitchTab(3)),
            KeyCode::Char('5') => return Some(Action::SwitchTab(4)),
            KeyCode::Char('r') => return Some(Action::Reload),
            _ => {}
        }

        if self.active_tab == Tab::Questions {
            match key.code {
                KeyCode::Char('a') => {
                    return self.questions.selected_key().map(Action::ApproveQuestion)
                }
                KeyCode::Char('x') => {
                    return self.questions.selected_key().map(Action::RejectQuestion)
                }
                _ => {}
            }
        }

        self.active_panel().handle_key(key)
    }

    /// Returns `true` when the app should exit.
    fn handle_action(
        &mut self,
        action: Action,
        store_tx: &mpsc::UnboundedSender<StoreCommand>,
    ) -> bool {
        match action {
            Action::Quit => return true,
            Action::SwitchTab(idx) => {
                if let Some(tab) = Tab::from_index(idx) {
                    self.active_tab = tab;
                    self.detail_popup.hide();
                }
            }
            Action::ToggleHelp => self.help_popup.toggle(),
            Action::Reload => self.request_load(store_tx),
            Action::SortChanged(sort) => {
                debug!(tab = ?self.active_tab, field = ?sort.field, direction = ?sort.direction, "sort changed");
            }
            Action::FilterChanged { key, value } => {
                debug!(tab = ?self.active_tab, filter = key, %value, "filter changed");
            }
            Action::PageChange(page) => {
                let shown = self.active_panel().go_to_page(page);
                debug!(tab = ?self.active_tab, requested = page, shown, "page changed");
            }
            Action::RowActivated(key) => {
                if let Some((key, fields)) = self.active_panel().selected_detail() {
                    self.detail_popup.show(key, fields);
                } else {
                    warn!(%key, "activated row has no record");
                }
            }
            Action::ApproveQuestion(id) => self.review_question(&id, true, store_tx),
            Action::RejectQuestion(id) => self.review_question(&id, false, store_tx),
        }
        false
    }

    fn review_question(
        &mut self,
        id: &str,
        approve: bool,
        store_tx: &mpsc::UnboundedSender<StoreCommand>,
    ) {
        if self.loading {
            self.status_bar
                .set_error("store is loading; review again once it finishes");
            return;
        }
        let Some(question) = self.store.question_mut(id) else {
            self.status_bar.set_error(format!("question {} not found", id));
            return;
        };
        let result = if approve {
            question.approve()
        } else {
            question.reject()
        };
        match result {
            Ok(()) => {
                info!(id, status = %question.status, "question reviewed");
                self.questions.set_data(self.store.questions.clone());
                let snapshot = Box::new(self.store.clone());
                if store_tx.send(StoreCommand::Save(snapshot)).is_err() {
                    self.status_bar.set_error("store worker stopped; review not saved");
                }
            }
            Err(e) => {
                warn!(error = %e, "review refused");
                self.status_bar.set_error(e.to_string());
            }
        }
    }

    fn handle_message(&mut self, msg: AppMessage) {
        for panel in self.panels() {
            panel.handle_message(&msg);
        }
        self.status_bar.handle_message(&msg);

        match msg {
            AppMessage::StoreReady(store) => self.install(*store),
            AppMessage::LoadingFinished => self.loading = false,
            _ => {}
        }
    }
}

// --- Terminal setup ---

pub async fn run(store_path: PathBuf, page_size: usize, tab: Tab) -> Result<()> {
    let mut app = App::new(store_path, page_size, tab)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode().context("failed to enable raw mode")?;
    io::stdout()
        .execute(EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

// --- Event loop ---

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<AppMessage>();
    let store_tx = spawn_store_worker(app.store_path.clone(), msg_tx);
    app.request_load(&store_tx);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    spawn_event_reader(event_tx);

    // Redraws keep the loading spinner moving.
    let mut ticker = tokio::time::interval(TICK);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        tokio::select! {
            Some(event) = event_rx.recv() => {
                let Some(key) = to_key_event(&event) else { continue };
                let Some(action) = app.handle_key(key) else { continue };
                if app.handle_action(action, &store_tx) {
                    info!("quit");
                    return Ok(());
                }
            }
            Some(msg) = msg_rx.recv() => {
                app.handle_message(msg);
            }
            _ = ticker.tick() => {}
        }
    }
}
