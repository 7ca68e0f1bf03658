// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use userdesk_app::{
    APP_VERSION_LABEL, AppCommand, AppEvent, AppState, DetailTab, FilterField, LoginCommand,
    LoginEvent, LoginField, LoginForm, MAX_USER_TIER, ORG_SWITCH_LABEL, PageSize, PageToken,
    Route, RowAction, SidebarEntry, TableCommand, TableEvent, TableState, User, UserDetails,
    UserId, UserStats, UserStatus, is_selectable, sidebar_entries,
};

pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1500);

const POLL_INTERVAL: Duration = Duration::from_millis(120);
const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(4);
const SIDEBAR_WIDTH: u16 = 28;
const STATS_HEIGHT: u16 = 3;
const FILTER_PANEL_WIDTH: u16 = 42;
const FILTER_PANEL_HEIGHT: u16 = 11;
const ROW_MENU_WIDTH: u16 = 22;
const ROW_MENU_HEIGHT: u16 = 5;
const MENU_COLUMN_WIDTH: u16 = 2;
// Top border plus the header row.
const TABLE_BODY_TOP: u16 = 2;
const TABLE_COLUMNS: [(FilterField, &str); 6] = [
    (FilterField::Organization, "ORGANIZATION"),
    (FilterField::Username, "USERNAME"),
    (FilterField::Email, "EMAIL"),
    (FilterField::PhoneNumber, "PHONE NUMBER"),
    (FilterField::Date, "DATE JOINED"),
    (FilterField::Status, "STATUS"),
];

/// Side effects the screens need from the host: the user source, the local
/// handoff store and the (inert) header search.
pub trait AppRuntime {
    fn load_users(&mut self) -> Result<Vec<User>>;
    fn stash_user(&mut self, user: &User) -> Result<()>;
    fn load_user_details(&mut self, id: &UserId) -> UserDetails;
    fn clear_local_state(&mut self) -> Result<()>;
    fn submit_search(&mut self, query: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub login_delay: Duration,
    pub page_size: PageSize,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            login_delay: DEFAULT_LOGIN_DELAY,
            page_size: PageSize::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    LoginElapsed { token: u64 },
}

/// A delayed send on the internal channel. Cancelled explicitly or when
/// dropped; a cancelled task never delivers.
#[derive(Debug)]
struct ScheduledTask {
    cancelled: Arc<AtomicBool>,
}

impl ScheduledTask {
    fn spawn(delay: Duration, internal_tx: &Sender<InternalEvent>, event: InternalEvent) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let sender = internal_tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            if !flag.load(Ordering::SeqCst) {
                let _ = sender.send(event);
            }
        });
        Self { cancelled }
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug, Default)]
struct LoginView {
    form: LoginForm,
    task: Option<ScheduledTask>,
}

#[derive(Debug)]
struct UsersView {
    table: TableState,
    stats: UserStats,
    filter_slot: usize,
    menu_cursor: usize,
}

#[derive(Debug)]
struct DetailView {
    details: UserDetails,
    tab: DetailTab,
}

#[derive(Debug)]
enum Screen {
    Login(LoginView),
    Users(UsersView),
    Detail(DetailView),
}

impl Default for Screen {
    fn default() -> Self {
        Self::Login(LoginView::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    Main,
    Sidebar,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterSlot {
    Field(FilterField),
    Reset,
    Apply,
}

const FILTER_SLOTS: [FilterSlot; 8] = [
    FilterSlot::Field(FilterField::Organization),
    FilterSlot::Field(FilterField::Username),
    FilterSlot::Field(FilterField::Email),
    FilterSlot::Field(FilterField::Date),
    FilterSlot::Field(FilterField::PhoneNumber),
    FilterSlot::Field(FilterField::Status),
    FilterSlot::Reset,
    FilterSlot::Apply,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowMenuItem {
    ViewDetails,
    Blacklist,
    Activate,
}

const ROW_MENU_ITEMS: [RowMenuItem; 3] = [
    RowMenuItem::ViewDetails,
    RowMenuItem::Blacklist,
    RowMenuItem::Activate,
];

impl RowMenuItem {
    const fn label(self) -> &'static str {
        match self {
            Self::ViewDetails => "View Details",
            Self::Blacklist => "Blacklist User",
            Self::Activate => "Activate User",
        }
    }

    fn command(self, id: UserId) -> TableCommand {
        match self {
            Self::ViewDetails => TableCommand::SelectUser(id),
            Self::Blacklist => TableCommand::BlacklistUser(id),
            Self::Activate => TableCommand::ActivateUser(id),
        }
    }
}

#[derive(Debug, Default)]
struct ViewData {
    screen: Screen,
    focus: Focus,
    sidebar_cursor: usize,
    search_query: String,
    help_visible: bool,
    status_token: u64,
    options: UiOptions,
    // Last drawn frame size, for mouse hit testing.
    area: Rect,
}

pub fn run_app<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    options: UiOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    let result = event_loop(&mut terminal, state, runtime, options);

    disable_raw_mode().context("disable raw mode")?;
    execute!(
        io::stdout(),
        DisableMouseCapture,
        terminal::LeaveAlternateScreen
    )
    .context("leave alternate screen")?;
    result
}

fn event_loop<R: AppRuntime>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    runtime: &mut R,
    options: UiOptions,
) -> Result<()> {
    let mut view_data = ViewData {
        options,
        ..ViewData::default()
    };
    let (internal_tx, internal_rx) = mpsc::channel();
    enter_route(state, runtime, &mut view_data, &internal_tx);

    loop {
        process_internal_events(state, runtime, &mut view_data, &internal_tx, &internal_rx);

        let mut area = view_data.area;
        terminal
            .draw(|frame| {
                area = frame.area();
                render(frame, state, &view_data);
            })
            .context("draw frame")?;
        view_data.area = area;

        if !event::poll(POLL_INTERVAL).context("poll event")? {
            continue;
        }
        match event::read().context("read event")? {
            Event::Key(key) => {
                if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                handle_mouse_event(state, runtime, &mut view_data, &internal_tx, mouse);
            }
            _ => {}
        }
    }
}

fn process_internal_events<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        handle_internal_event(state, runtime, view_data, tx, event);
    }
}

fn handle_internal_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    event: InternalEvent,
) {
    match event {
        InternalEvent::ClearStatus { token } if token == view_data.status_token => {
            state.dispatch(AppCommand::ClearStatus);
        }
        InternalEvent::ClearStatus { .. } => {}
        InternalEvent::LoginElapsed { token } => {
            dispatch_login(
                state,
                runtime,
                view_data,
                tx,
                LoginCommand::DelayElapsed { token },
            );
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_DELAY);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn bump_status_token(view_data: &mut ViewData, internal_tx: &Sender<InternalEvent>) {
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    bump_status_token(view_data, internal_tx);
}

/// Rebuilds the screen for the current route. Replacing the login view drops
/// its scheduled task, which cancels any pending transition.
fn enter_route<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    view_data.focus = Focus::Main;
    view_data.sidebar_cursor = 0;
    tracing::debug!(route = %state.route.path(), "entering screen");

    let screen = match state.route.clone() {
        Route::Login => Screen::Login(LoginView::default()),
        Route::Users => {
            let mut table = TableState::loading().with_page_size(view_data.options.page_size);
            match runtime.load_users() {
                Ok(users) => table.set_users(users),
                Err(error) => {
                    tracing::error!(error = %format!("{error:#}"), "load users failed");
                    table.set_users(Vec::new());
                    emit_status(
                        state,
                        view_data,
                        internal_tx,
                        format!("load users failed: {error:#}"),
                    );
                }
            }
            let stats = UserStats::from_users(table.users());
            Screen::Users(UsersView {
                table,
                stats,
                filter_slot: 0,
                menu_cursor: 0,
            })
        }
        Route::UserDetail(id) => Screen::Detail(DetailView {
            details: runtime.load_user_details(&id),
            tab: DetailTab::default(),
        }),
        Route::Unknown(path) => {
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("{path} is not available yet"),
            );
            navigate(state, runtime, view_data, internal_tx, &Route::Login.path());
            return;
        }
    };
    view_data.screen = screen;
}

fn navigate<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    path: &str,
) {
    let events = state.dispatch(AppCommand::Navigate(path.to_owned()));
    apply_app_events(state, runtime, view_data, internal_tx, events);
}

fn logout<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let events = state.dispatch(AppCommand::Logout);
    apply_app_events(state, runtime, view_data, internal_tx, events);
}

fn apply_app_events<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    events: Vec<AppEvent>,
) {
    for event in events {
        match event {
            AppEvent::RouteChanged(_) => enter_route(state, runtime, view_data, internal_tx),
            AppEvent::LocalStateCleared => {
                if let Err(error) = runtime.clear_local_state() {
                    emit_status(
                        state,
                        view_data,
                        internal_tx,
                        format!("clear local state failed: {error:#}"),
                    );
                }
            }
            AppEvent::StatusUpdated(_) => bump_status_token(view_data, internal_tx),
            AppEvent::StatusCleared => {}
        }
    }
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('q') {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    if matches!(view_data.screen, Screen::Login(_)) {
        handle_login_key(state, runtime, view_data, internal_tx, key);
        return false;
    }

    match view_data.focus {
        Focus::Search => {
            handle_search_key(state, runtime, view_data, internal_tx, key);
            return false;
        }
        Focus::Sidebar => {
            handle_sidebar_key(state, runtime, view_data, internal_tx, key);
            return false;
        }
        Focus::Main => {}
    }

    if ctrl && key.code == KeyCode::Char('b') {
        let entries = selectable_sidebar_entries(state, view_data);
        view_data.sidebar_cursor = entries
            .iter()
            .position(|entry| matches!(entry, SidebarEntry::Link { active: true, .. }))
            .unwrap_or(0);
        view_data.focus = Focus::Sidebar;
        return false;
    }

    if !overlay_open(view_data) {
        match key.code {
            KeyCode::Char('?') => {
                view_data.help_visible = true;
                return false;
            }
            KeyCode::Char('/') => {
                view_data.focus = Focus::Search;
                return false;
            }
            _ => {}
        }
    }

    if matches!(view_data.screen, Screen::Users(_)) {
        handle_users_key(state, runtime, view_data, internal_tx, key);
    } else if matches!(view_data.screen, Screen::Detail(_)) {
        handle_detail_key(state, runtime, view_data, internal_tx, key);
    }
    false
}

fn overlay_open(view_data: &ViewData) -> bool {
    match &view_data.screen {
        Screen::Users(view) => {
            view.table.is_filter_panel_open() || view.table.row_menu().is_some()
        }
        _ => false,
    }
}

fn handle_login_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let command = match key.code {
        KeyCode::Char('t') if ctrl => LoginCommand::TogglePasswordVisibility,
        KeyCode::Char(_) if ctrl => return,
        KeyCode::Char(ch) => LoginCommand::Input(ch),
        KeyCode::Backspace => LoginCommand::Backspace,
        KeyCode::Tab | KeyCode::BackTab => LoginCommand::FocusNext,
        KeyCode::Up => LoginCommand::Focus(LoginField::Email),
        KeyCode::Down => LoginCommand::Focus(LoginField::Password),
        KeyCode::Enter => LoginCommand::Submit,
        KeyCode::Esc => LoginCommand::Cancel,
        _ => return,
    };
    dispatch_login(state, runtime, view_data, internal_tx, command);
}

fn login_view_mut(view_data: &mut ViewData) -> Option<&mut LoginView> {
    match &mut view_data.screen {
        Screen::Login(view) => Some(view),
        _ => None,
    }
}

fn dispatch_login<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: LoginCommand,
) {
    let delay = view_data.options.login_delay;
    let Some(view) = login_view_mut(view_data) else {
        tracing::debug!(?command, "login view is gone; dropping command");
        return;
    };
    let events = view.form.dispatch(command);

    for event in events {
        match event {
            LoginEvent::SubmitScheduled { token } => {
                if let Some(view) = login_view_mut(view_data) {
                    view.task = Some(ScheduledTask::spawn(
                        delay,
                        internal_tx,
                        InternalEvent::LoginElapsed { token },
                    ));
                }
            }
            LoginEvent::SubmitRejected(message) => {
                emit_status(state, view_data, internal_tx, message);
            }
            LoginEvent::Cancelled { .. } => {
                if let Some(view) = login_view_mut(view_data) {
                    view.task = None;
                }
                emit_status(state, view_data, internal_tx, "login cancelled");
            }
            LoginEvent::Navigate(path) => navigate(state, runtime, view_data, internal_tx, &path),
            LoginEvent::FieldChanged(_)
            | LoginEvent::FocusChanged(_)
            | LoginEvent::PasswordVisibilityChanged(_) => {}
        }
    }
}

fn handle_users_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Screen::Users(view) = &view_data.screen else {
        return;
    };
    if view.table.is_filter_panel_open() {
        handle_filter_panel_key(state, runtime, view_data, internal_tx, key);
        return;
    }
    if view.table.row_menu().is_some() {
        handle_row_menu_key(state, runtime, view_data, internal_tx, key);
        return;
    }
    if let Some(command) = table_command_for_key(&view.table, key) {
        dispatch_table(state, runtime, view_data, internal_tx, command);
    }
}

fn table_command_for_key(table: &TableState, key: KeyEvent) -> Option<TableCommand> {
    let cursor_id = || table.cursor_user().map(|user| user.id.clone());
    let size = table.pagination().size;
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(TableCommand::MoveCursor(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(TableCommand::MoveCursor(-1)),
        KeyCode::Enter => cursor_id().map(TableCommand::SelectUser),
        KeyCode::Char('m') | KeyCode::Char(' ') => cursor_id().map(TableCommand::ToggleRowMenu),
        KeyCode::Char('f') => Some(TableCommand::ToggleFilterPanel),
        KeyCode::Char('r') => Some(TableCommand::ResetFilter),
        KeyCode::Char('n') | KeyCode::Right => Some(TableCommand::NextPage),
        KeyCode::Char('p') | KeyCode::Left => Some(TableCommand::PrevPage),
        KeyCode::Char('g') | KeyCode::Home => Some(TableCommand::SetPage(1)),
        KeyCode::Char('G') | KeyCode::End => Some(TableCommand::SetPage(table.total_pages())),
        KeyCode::Char('s') => Some(TableCommand::SetPageSize(size.rotate(1))),
        KeyCode::Char('S') => Some(TableCommand::SetPageSize(size.rotate(-1))),
        KeyCode::Esc => Some(TableCommand::PointerDown {
            in_filter_panel: false,
            in_row_menu: false,
        }),
        _ => None,
    }
}

fn handle_filter_panel_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Screen::Users(view) = &mut view_data.screen else {
        return;
    };
    let slots = FILTER_SLOTS.len();
    let slot = FILTER_SLOTS[view.filter_slot.min(slots - 1)];
    let typing = !key.modifiers.contains(KeyModifiers::CONTROL);

    let command = match (key.code, slot) {
        (KeyCode::Esc, _) => Some(TableCommand::ToggleFilterPanel),
        (KeyCode::Tab | KeyCode::Down, _) => {
            view.filter_slot = (view.filter_slot + 1) % slots;
            None
        }
        (KeyCode::BackTab | KeyCode::Up, _) => {
            view.filter_slot = (view.filter_slot + slots - 1) % slots;
            None
        }
        (KeyCode::Left | KeyCode::Right, FilterSlot::Field(field)) if field.is_choice() => {
            let delta = if key.code == KeyCode::Left { -1 } else { 1 };
            Some(TableCommand::EditFilter(
                field,
                cycle_choice(&view.table, field, delta),
            ))
        }
        (KeyCode::Char(ch), FilterSlot::Field(field)) if typing && !field.is_choice() => {
            let mut value = view.table.draft().get(field).to_owned();
            value.push(ch);
            Some(TableCommand::EditFilter(field, value))
        }
        (KeyCode::Backspace, FilterSlot::Field(field)) => {
            let mut value = view.table.draft().get(field).to_owned();
            if field.is_choice() {
                value.clear();
            } else {
                value.pop();
            }
            Some(TableCommand::EditFilter(field, value))
        }
        (KeyCode::Enter, FilterSlot::Reset) => Some(TableCommand::ResetFilter),
        (KeyCode::Enter, _) => Some(TableCommand::SubmitFilter),
        _ => None,
    };

    if let Some(command) = command {
        dispatch_table(state, runtime, view_data, internal_tx, command);
    }
}

/// Options for a chooser field; the empty string stands for "any".
fn choice_options(table: &TableState, field: FilterField) -> Vec<String> {
    let mut options = vec![String::new()];
    match field {
        FilterField::Organization => options.extend(table.organizations().iter().cloned()),
        FilterField::Status => {
            options.extend(UserStatus::ALL.iter().map(|status| status.as_str().to_owned()));
        }
        _ => {}
    }
    options
}

fn cycle_choice(table: &TableState, field: FilterField, delta: isize) -> String {
    let options = choice_options(table, field);
    let current = options
        .iter()
        .position(|option| option == table.draft().get(field))
        .unwrap_or(0) as isize;
    let len = options.len() as isize;
    options[(current + delta).rem_euclid(len) as usize].clone()
}

fn handle_row_menu_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Screen::Users(view) = &mut view_data.screen else {
        return;
    };
    let Some(id) = view.table.row_menu().cloned() else {
        return;
    };
    let items = ROW_MENU_ITEMS.len();

    let command = match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
            view.menu_cursor = (view.menu_cursor + 1) % items;
            None
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
            view.menu_cursor = (view.menu_cursor + items - 1) % items;
            None
        }
        KeyCode::Enter => Some(ROW_MENU_ITEMS[view.menu_cursor % items].command(id)),
        KeyCode::Esc | KeyCode::Char('m') => Some(TableCommand::ToggleRowMenu(id)),
        _ => None,
    };

    if let Some(command) = command {
        dispatch_table(state, runtime, view_data, internal_tx, command);
    }
}

fn dispatch_table<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: TableCommand,
) {
    let Screen::Users(view) = &mut view_data.screen else {
        return;
    };
    let events = view.table.dispatch(command);
    apply_table_events(state, runtime, view_data, internal_tx, events);
}

fn apply_table_events<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    events: Vec<TableEvent>,
) {
    for event in events {
        match event {
            TableEvent::FilterPanelChanged(true) => {
                if let Screen::Users(view) = &mut view_data.screen {
                    view.filter_slot = 0;
                }
            }
            TableEvent::RowMenuChanged(Some(_)) => {
                if let Screen::Users(view) = &mut view_data.screen {
                    view.menu_cursor = 0;
                }
            }
            TableEvent::FilterApplied { matches } => {
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("filter matched {matches} users"),
                );
            }
            TableEvent::FilterReset => emit_status(state, view_data, internal_tx, "filters cleared"),
            TableEvent::PageSizeChanged(size) => {
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("showing {size} rows per page"),
                );
            }
            TableEvent::StashUser(user) => {
                if let Err(error) = runtime.stash_user(&user) {
                    emit_status(
                        state,
                        view_data,
                        internal_tx,
                        format!("save user {} failed: {error:#}", user.id),
                    );
                }
            }
            TableEvent::NavigateToUser(id) => {
                navigate(
                    state,
                    runtime,
                    view_data,
                    internal_tx,
                    &Route::user_detail(&id).path(),
                );
            }
            TableEvent::RowActionRequested(action, id) => {
                emit_status(state, view_data, internal_tx, action_status(action, &id));
            }
            TableEvent::FilterPanelChanged(false)
            | TableEvent::FilterDraftChanged(_)
            | TableEvent::RowMenuChanged(None)
            | TableEvent::PageChanged(_)
            | TableEvent::CursorMoved(_) => {}
        }
    }
}

fn action_status(action: RowAction, id: &UserId) -> String {
    format!("{} requested for {id}; no backend is connected", action.label())
}

fn handle_detail_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Screen::Detail(view) = &mut view_data.screen else {
        return;
    };
    let action = match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
            view.tab = view.tab.rotate(1);
            return;
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
            view.tab = view.tab.rotate(-1);
            return;
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            navigate(state, runtime, view_data, internal_tx, &Route::Users.path());
            return;
        }
        KeyCode::Char('x') => RowAction::Blacklist,
        KeyCode::Char('a') => RowAction::Activate,
        _ => return,
    };

    let id = view.details.user.id.clone();
    tracing::info!(user = %id, action = action.label(), "detail action requested");
    emit_status(state, view_data, internal_tx, action_status(action, &id));
}

fn handle_search_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => view_data.focus = Focus::Main,
        KeyCode::Enter => {
            view_data.focus = Focus::Main;
            let query = view_data.search_query.trim().to_owned();
            if query.is_empty() {
                return;
            }
            let message = match runtime.submit_search(&query) {
                Ok(()) => format!("search for {query:?} is not available yet"),
                Err(error) => format!("search failed: {error:#}"),
            };
            emit_status(state, view_data, internal_tx, message);
        }
        KeyCode::Backspace => {
            view_data.search_query.pop();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            view_data.search_query.push(ch);
        }
        _ => {}
    }
}

fn sidebar_for(state: &AppState, view_data: &ViewData) -> Vec<SidebarEntry> {
    let extra_items = matches!(view_data.screen, Screen::Detail(_));
    sidebar_entries(&state.route.path(), extra_items)
}

fn selectable_sidebar_entries(state: &AppState, view_data: &ViewData) -> Vec<SidebarEntry> {
    sidebar_for(state, view_data)
        .into_iter()
        .filter(is_selectable)
        .collect()
}

fn handle_sidebar_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let targets = selectable_sidebar_entries(state, view_data);
    let last = targets.len().saturating_sub(1);
    match key.code {
        KeyCode::Esc => view_data.focus = Focus::Main,
        KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            view_data.focus = Focus::Main;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            view_data.sidebar_cursor = (view_data.sidebar_cursor + 1).min(last);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.sidebar_cursor = view_data.sidebar_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            view_data.focus = Focus::Main;
            match targets.get(view_data.sidebar_cursor) {
                Some(SidebarEntry::Link { item, .. }) => {
                    navigate(state, runtime, view_data, internal_tx, item.path);
                }
                Some(SidebarEntry::Logout) => logout(state, runtime, view_data, internal_tx),
                _ => {}
            }
        }
        _ => {}
    }
}

fn handle_mouse_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    mouse: MouseEvent,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Screen::Users(view) = &view_data.screen else {
        return;
    };
    let position = Position::new(mouse.column, mouse.row);
    let table_area = users_layout(screen_layout(view_data.area).main).table;

    let in_filter_panel = view.table.is_filter_panel_open()
        && filter_panel_rect(table_area).contains(position);
    let menu_rect = row_menu_rect(&view.table, table_area);
    let in_row_menu = menu_rect.is_some_and(|rect| rect.contains(position));

    let on_glyph = !in_filter_panel && !in_row_menu && in_menu_column(table_area, position);
    let menu_toggle = if on_glyph {
        row_at(&view.table, table_area, position)
    } else {
        None
    };
    let follow_up = match (in_row_menu, menu_rect, view.table.row_menu()) {
        (true, Some(rect), Some(id)) => usize::from(position.y.saturating_sub(rect.y))
            .checked_sub(1)
            .and_then(|index| ROW_MENU_ITEMS.get(index))
            .map(|item| item.command(id.clone())),
        _ if in_filter_panel || in_row_menu => None,
        _ => match menu_toggle {
            Some(id) => Some(TableCommand::ToggleRowMenu(id)),
            None => row_at(&view.table, table_area, position).map(TableCommand::SelectUser),
        },
    };

    // The glyph owns its row's menu, so the press must not close it first.
    let keeps_row_menu =
        in_row_menu || matches!(follow_up, Some(TableCommand::ToggleRowMenu(_)));
    dispatch_table(
        state,
        runtime,
        view_data,
        internal_tx,
        TableCommand::PointerDown {
            in_filter_panel,
            in_row_menu: keeps_row_menu,
        },
    );
    if let Some(command) = follow_up {
        dispatch_table(state, runtime, view_data, internal_tx, command);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScreenLayout {
    header: Rect,
    sidebar: Rect,
    main: Rect,
    status: Rect,
}

fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(rows[1]);
    ScreenLayout {
        header: rows[0],
        sidebar: columns[0],
        main: columns[1],
        status: rows[2],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UsersLayout {
    stats: Rect,
    table: Rect,
    pagination: Rect,
}

fn users_layout(main: Rect) -> UsersLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STATS_HEIGHT),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(main);
    UsersLayout {
        stats: rows[0],
        table: rows[1],
        pagination: rows[2],
    }
}

fn table_body_rows(table_area: Rect) -> usize {
    usize::from(table_area.height.saturating_sub(TABLE_BODY_TOP + 1))
}

/// First visible row index so the cursor stays on screen.
fn table_offset(cursor: usize, body_rows: usize) -> usize {
    if body_rows == 0 {
        return 0;
    }
    cursor.saturating_sub(body_rows - 1)
}

fn row_at(table: &TableState, table_area: Rect, position: Position) -> Option<UserId> {
    let body_top = table_area.y.saturating_add(TABLE_BODY_TOP);
    if !table_area.contains(position) || position.y < body_top {
        return None;
    }
    let body_rows = table_body_rows(table_area);
    let row = usize::from(position.y - body_top);
    if row >= body_rows {
        return None;
    }
    let index = table_offset(table.cursor(), body_rows) + row;
    table
        .visible_users()
        .get(index)
        .map(|user| user.id.clone())
}

/// Whether `position` is in the trailing row-menu column of the table body.
fn in_menu_column(table_area: Rect, position: Position) -> bool {
    let inner_right = table_area.right().saturating_sub(1);
    position.x >= inner_right.saturating_sub(MENU_COLUMN_WIDTH) && position.x < inner_right
}

fn filter_panel_rect(table_area: Rect) -> Rect {
    Rect {
        x: table_area.x.saturating_add(1),
        y: table_area.y.saturating_add(1),
        width: FILTER_PANEL_WIDTH,
        height: FILTER_PANEL_HEIGHT,
    }
    .intersection(table_area)
}

/// Places the open row menu next to its row, kept inside the table.
fn row_menu_rect(table: &TableState, table_area: Rect) -> Option<Rect> {
    let id = table.row_menu()?;
    let index = table
        .visible_users()
        .iter()
        .position(|user| &user.id == id)?;
    let body_rows = table_body_rows(table_area);
    let row = index.saturating_sub(table_offset(table.cursor(), body_rows));
    let row = u16::try_from(row.min(body_rows)).unwrap_or(u16::MAX);

    let below_row = table_area
        .y
        .saturating_add(TABLE_BODY_TOP)
        .saturating_add(row)
        .saturating_add(1);
    let y = below_row.min(table_area.bottom().saturating_sub(ROW_MENU_HEIGHT));
    let x = table_area
        .right()
        .saturating_sub(ROW_MENU_WIDTH)
        .saturating_sub(1);
    Some(
        Rect {
            x,
            y,
            width: ROW_MENU_WIDTH,
            height: ROW_MENU_HEIGHT,
        }
        .intersection(table_area),
    )
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let area = frame.area();
    if let Screen::Login(view) = &view_data.screen {
        render_login(frame, area, state, view, view_data);
        return;
    }

    let layout = screen_layout(area);
    let header = Paragraph::new(render_header_text(view_data))
        .block(Block::default().title("userdesk").borders(Borders::ALL));
    frame.render_widget(header, layout.header);

    let sidebar_cursor = (view_data.focus == Focus::Sidebar).then_some(view_data.sidebar_cursor);
    let sidebar = Paragraph::new(render_sidebar_text(
        &sidebar_for(state, view_data),
        sidebar_cursor,
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(sidebar, layout.sidebar);

    match &view_data.screen {
        Screen::Users(view) => render_users(frame, layout.main, view, view_data.focus),
        Screen::Detail(view) => render_detail(frame, layout.main, view),
        Screen::Login(_) => {}
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    if view_data.help_visible {
        let overlay = centered_rect(70, 50, area);
        frame.render_widget(Clear, overlay);
        let help = Paragraph::new(help_overlay_text())
            .wrap(Wrap { trim: false })
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, overlay);
    }
}

fn render_login(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view: &LoginView,
    view_data: &ViewData,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let form_area = centered_rect(50, 60, rows[0]);
    let form = Paragraph::new(render_login_text(&view.form))
        .wrap(Wrap { trim: false })
        .block(Block::default().title("userdesk").borders(Borders::ALL));
    frame.render_widget(form, form_area);

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, rows[1]);
}

fn render_login_text(form: &LoginForm) -> String {
    let field_line = |field: LoginField, value: String| {
        let marker = if form.focus == field { "> " } else { "  " };
        if value.is_empty() {
            format!("{marker}{}", field.placeholder())
        } else {
            format!("{marker}{value}")
        }
    };
    let button = if form.is_loading() {
        "[ LOGGING IN... ]"
    } else {
        "[ LOG IN ]"
    };

    [
        "Welcome!".to_owned(),
        "Enter details to login.".to_owned(),
        String::new(),
        field_line(LoginField::Email, form.email.clone()),
        format!(
            "{}   {}",
            field_line(LoginField::Password, form.masked_password()),
            form.toggle_label()
        ),
        String::new(),
        "FORGOT PASSWORD?".to_owned(),
        String::new(),
        button.to_owned(),
    ]
    .join("\n")
}

fn render_header_text(view_data: &ViewData) -> String {
    let searching = view_data.focus == Focus::Search;
    let query = if view_data.search_query.is_empty() && !searching {
        "Search for anything"
    } else {
        view_data.search_query.as_str()
    };
    let caret = if searching { "_" } else { "" };
    format!("[/] {query}{caret}    Docs    Adedeji")
}

fn render_sidebar_text(entries: &[SidebarEntry], cursor: Option<usize>) -> String {
    let mut lines = Vec::new();
    let mut selectable = 0;
    for entry in entries {
        let marker = |active: bool| {
            if cursor == Some(selectable) {
                "> "
            } else if active {
                "* "
            } else {
                "  "
            }
        };
        match entry {
            SidebarEntry::OrgSwitch => lines.push(format!("  {ORG_SWITCH_LABEL} v")),
            SidebarEntry::Heading(title) => {
                lines.push(String::new());
                lines.push((*title).to_owned());
            }
            SidebarEntry::Link { item, active } => {
                lines.push(format!("{}{}", marker(*active), item.name));
                selectable += 1;
            }
            SidebarEntry::Logout => {
                lines.push(String::new());
                lines.push(format!("{}Logout", marker(false)));
                selectable += 1;
            }
            SidebarEntry::Version => lines.push(format!("  {APP_VERSION_LABEL}")),
        }
    }
    lines.join("\n")
}

fn render_users(frame: &mut ratatui::Frame<'_>, area: Rect, view: &UsersView, focus: Focus) {
    let layout = users_layout(area);

    let cards = view.stats.cards();
    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(layout.stats);
    for ((label, value), card_area) in cards.iter().zip(card_areas.iter()) {
        let card = Paragraph::new(value.as_str())
            .block(Block::default().title(*label).borders(Borders::ALL));
        frame.render_widget(card, *card_area);
    }

    render_users_table(frame, layout.table, &view.table, focus);

    let pagination = Paragraph::new(render_pagination_text(&view.table))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(pagination, layout.pagination);

    if view.table.is_filter_panel_open() {
        let panel_area = filter_panel_rect(layout.table);
        frame.render_widget(Clear, panel_area);
        let panel = Paragraph::new(render_filter_panel_text(&view.table, view.filter_slot))
            .block(Block::default().title("filter").borders(Borders::ALL));
        frame.render_widget(panel, panel_area);
    }

    if let Some(menu_area) = row_menu_rect(&view.table, layout.table) {
        frame.render_widget(Clear, menu_area);
        let menu = Paragraph::new(render_row_menu_text(view.menu_cursor))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(menu, menu_area);
    }
}

fn render_users_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    table: &TableState,
    focus: Focus,
) {
    let block = Block::default().title("Users").borders(Borders::ALL);
    if table.is_loading() {
        frame.render_widget(Paragraph::new("loading users...").block(block), area);
        return;
    }
    if table.filtered_count() == 0 {
        frame.render_widget(Paragraph::new("No users found").block(block), area);
        return;
    }

    let filtered_fields = table.applied_filter().active_fields();
    let header = Row::new(
        TABLE_COLUMNS
            .iter()
            .map(|(field, label)| {
                let label = if filtered_fields.contains(field) {
                    format!("{label}*")
                } else {
                    (*label).to_owned()
                };
                Cell::from(label)
            })
            .chain(std::iter::once(Cell::from(""))),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let body_rows = table_body_rows(area);
    let offset = table_offset(table.cursor(), body_rows);
    let rows = table
        .visible_users()
        .into_iter()
        .enumerate()
        .skip(offset)
        .take(body_rows)
        .map(|(index, user)| {
            let mut cells: Vec<Cell> = table_row_cells(user).into_iter().map(Cell::from).collect();
            cells.push(
                Cell::from(user.status.as_str())
                    .style(Style::default().fg(status_color(user.status))),
            );
            cells.push(Cell::from("⋮"));
            let row = Row::new(cells);
            if index == table.cursor() && focus == Focus::Main {
                row.style(Style::default().bg(Color::DarkGray))
            } else {
                row
            }
        })
        .collect::<Vec<Row>>();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Min(20),
        Constraint::Length(13),
        Constraint::Length(22),
        Constraint::Length(12),
        Constraint::Length(MENU_COLUMN_WIDTH),
    ];
    frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

/// Text cells for a user row, status excluded.
fn table_row_cells(user: &User) -> [String; 5] {
    [
        user.organization.clone(),
        user.username.clone(),
        user.email.clone(),
        user.phone_number.clone(),
        user.date_joined.clone(),
    ]
}

fn status_color(status: UserStatus) -> Color {
    match status {
        UserStatus::Active => Color::Green,
        UserStatus::Inactive => Color::Gray,
        UserStatus::Pending => Color::Yellow,
        UserStatus::Blacklisted => Color::Red,
    }
}

fn render_pagination_text(table: &TableState) -> String {
    let pages = table
        .page_window()
        .into_iter()
        .map(|token| match token {
            PageToken::Page(page) if page == table.pagination().page => format!("[{page}]"),
            token => token.to_string(),
        })
        .collect::<Vec<String>>()
        .join(" ");
    let prev = if table.has_previous_page() { "<" } else { " " };
    let next = if table.has_next_page() { ">" } else { " " };
    format!(
        "Showing {} out of {}    {prev} {pages} {next}",
        table.pagination().size,
        table.filtered_count()
    )
}

fn render_filter_panel_text(table: &TableState, slot: usize) -> String {
    let marker = |index: usize| if index == slot { "> " } else { "  " };
    let mut lines = Vec::new();
    for (index, entry) in FILTER_SLOTS.iter().enumerate() {
        match entry {
            FilterSlot::Field(field) => {
                let value = table.draft().get(*field);
                let shown = if value.is_empty() { "(any)" } else { value };
                let chooser = if field.is_choice() { " <>" } else { "" };
                lines.push(format!(
                    "{}{}: {shown}{chooser}",
                    marker(index),
                    field.label()
                ));
            }
            FilterSlot::Reset => {
                lines.push(String::new());
                lines.push(format!("{}[ Reset ]", marker(index)));
            }
            FilterSlot::Apply => lines.push(format!("{}[ Filter ]", marker(index))),
        }
    }
    lines.join("\n")
}

fn render_row_menu_text(cursor: usize) -> String {
    ROW_MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let marker = if index == cursor { "> " } else { "  " };
            format!("{marker}{}", item.label())
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn render_detail(frame: &mut ratatui::Frame<'_>, area: Rect, view: &DetailView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let header = Paragraph::new(render_detail_header_text(&view.details))
        .block(Block::default().title("User Details").borders(Borders::ALL));
    frame.render_widget(header, rows[0]);

    let selected = DetailTab::ALL
        .iter()
        .position(|tab| *tab == view.tab)
        .unwrap_or(0);
    let tabs = Tabs::new(DetailTab::ALL.iter().map(|tab| tab.label()).collect::<Vec<_>>())
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, rows[1]);

    let body = Paragraph::new(render_detail_tab_text(&view.details, view.tab))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, rows[2]);
}

fn tier_stars(tier: u8) -> String {
    (1..=MAX_USER_TIER)
        .map(|star| if star <= tier { '★' } else { '☆' })
        .collect()
}

fn render_detail_header_text(details: &UserDetails) -> String {
    let user = &details.user;
    let extras = &details.extras;
    [
        "<- Back to Users (b)    [x] BLACKLIST USER  [a] ACTIVATE USER".to_owned(),
        format!("{}  {}  {}", user.username, user.id, user.status.as_str()),
        format!(
            "User's Tier {}  |  ₦{}  {}/{}",
            tier_stars(details.tier),
            extras.account_balance,
            extras.account_number,
            extras.bank
        ),
    ]
    .join("\n")
}

fn render_detail_tab_text(details: &UserDetails, tab: DetailTab) -> String {
    if tab != DetailTab::General {
        return format!("Content for {} will be displayed here.", tab.label());
    }

    let user = &details.user;
    let extras = &details.extras;
    let mut lines = Vec::new();
    push_section(
        &mut lines,
        "Personal Information",
        &[
            ("FULL NAME", &user.username),
            ("PHONE NUMBER", &user.phone_number),
            ("EMAIL ADDRESS", &user.email),
            ("BVN", &extras.bvn),
            ("GENDER", &extras.gender),
            ("MARITAL STATUS", &extras.marital_status),
            ("CHILDREN", &extras.children),
            ("TYPE OF RESIDENCE", &extras.type_of_residence),
        ],
    );
    push_section(
        &mut lines,
        "Education and Employment",
        &[
            ("LEVEL OF EDUCATION", &extras.level_of_education),
            ("EMPLOYMENT STATUS", &extras.employment_status),
            ("SECTOR OF EMPLOYMENT", &extras.sector_of_employment),
            ("DURATION OF EMPLOYMENT", &extras.duration_of_employment),
            ("OFFICE EMAIL", &extras.office_email),
            ("MONTHLY INCOME", &extras.monthly_income),
            ("LOAN REPAYMENT", &extras.loan_repayment),
        ],
    );
    push_section(
        &mut lines,
        "Socials",
        &[
            ("TWITTER", &extras.twitter),
            ("FACEBOOK", &extras.facebook),
            ("INSTAGRAM", &extras.instagram),
        ],
    );
    for guarantor in &extras.guarantors {
        push_section(
            &mut lines,
            "Guarantor",
            &[
                ("FULL NAME", &guarantor.full_name),
                ("PHONE NUMBER", &guarantor.phone_number),
                ("EMAIL ADDRESS", &guarantor.email),
                ("RELATIONSHIP", &guarantor.relationship),
            ],
        );
    }
    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, title: &str, fields: &[(&str, &String)]) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(title.to_owned());
    for chunk in fields.chunks(3) {
        let row = chunk
            .iter()
            .map(|(label, value)| format!("{:<36}", format!("{label}: {value}")))
            .collect::<String>();
        lines.push(format!("  {}", row.trim_end()));
    }
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible {
        return String::new();
    }
    let hints = key_hints(view_data);
    match &state.status_line {
        Some(status) => format!("{status} | {hints}"),
        None => hints.to_owned(),
    }
}

fn key_hints(view_data: &ViewData) -> &'static str {
    match (&view_data.screen, view_data.focus) {
        (Screen::Login(_), _) => {
            "tab field | ctrl+t show/hide | enter log in | esc cancel | ctrl+q quit"
        }
        (_, Focus::Search) => "type query | enter search | esc close",
        (_, Focus::Sidebar) => "j/k move | enter open | esc close",
        (Screen::Users(view), Focus::Main) if view.table.is_filter_panel_open() => {
            "tab/shift+tab field | left/right choose | enter filter | esc close"
        }
        (Screen::Users(view), Focus::Main) if view.table.row_menu().is_some() => {
            "j/k move | enter pick | esc close"
        }
        (Screen::Users(_), Focus::Main) => {
            "j/k row | enter open | m menu | f filter | n/p page | s size | ? help | ctrl+q"
        }
        (Screen::Detail(_), Focus::Main) => {
            "h/l tab | b back | x blacklist | a activate | ? help | ctrl+q"
        }
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ctrl+b sidebar | / search | ? help\n\
login: tab or up/down field | ctrl+t show/hide password | enter log in | esc cancel\n\
users: j/k row | enter open | m or space row menu | f filter | r reset filter\n\
users: n/p or left/right page | g/G first/last page | s/S rows per page | esc close popups\n\
filter: tab/shift+tab field | type text | left/right choose | enter apply or reset | esc close\n\
row menu: j/k move | enter pick | esc close\n\
detail: h/l or tab switch tab | b back | x blacklist | a activate\n\
sidebar: j/k move | enter open | esc close\n\
mouse: click a row to open it | click outside a popup to close it"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
