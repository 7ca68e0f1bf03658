// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{
    FilterField, PageSize, PageToken, Pagination, User, UserFilter, UserId, apply_filter,
    distinct_organizations,
};

/// Interaction state of the users table.
///
/// The filter panel and the row menu are independent overlays: closing one
/// never touches the other. Filter edits land in a draft and only narrow the
/// rows once submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableState {
    users: Vec<User>,
    filtered: Vec<usize>,
    organizations: Vec<String>,
    draft: UserFilter,
    applied: UserFilter,
    filter_panel_open: bool,
    row_menu: Option<UserId>,
    pagination: Pagination,
    cursor: usize,
    loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    ToggleFilterPanel,
    EditFilter(FilterField, String),
    SubmitFilter,
    ResetFilter,
    ToggleRowMenu(UserId),
    SetPage(usize),
    NextPage,
    PrevPage,
    SetPageSize(PageSize),
    /// A pointer press reported by the host, with whether it landed inside
    /// each open overlay.
    PointerDown {
        in_filter_panel: bool,
        in_row_menu: bool,
    },
    MoveCursor(isize),
    SelectUser(UserId),
    BlacklistUser(UserId),
    ActivateUser(UserId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Blacklist,
    Activate,
}

impl RowAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blacklist => "blacklist",
            Self::Activate => "activate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    FilterPanelChanged(bool),
    FilterDraftChanged(FilterField),
    FilterApplied { matches: usize },
    FilterReset,
    RowMenuChanged(Option<UserId>),
    PageChanged(usize),
    PageSizeChanged(PageSize),
    CursorMoved(usize),
    /// Hand the record to the local store before navigating.
    StashUser(User),
    NavigateToUser(UserId),
    RowActionRequested(RowAction, UserId),
}

impl TableState {
    pub fn new(users: Vec<User>) -> Self {
        let mut state = Self::default();
        state.set_users(users);
        state
    }

    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.pagination.size = size;
        self.pagination.clamp(self.filtered.len());
        self
    }

    pub fn set_users(&mut self, users: Vec<User>) {
        self.organizations = distinct_organizations(&users);
        self.users = users;
        self.loading = false;
        if self
            .row_menu
            .as_ref()
            .is_some_and(|id| !self.users.iter().any(|user| &user.id == id))
        {
            self.row_menu = None;
        }
        self.refilter();
        self.pagination.clamp(self.filtered.len());
        self.clamp_cursor();
    }

    pub fn dispatch(&mut self, command: TableCommand) -> Vec<TableEvent> {
        match command {
            TableCommand::ToggleFilterPanel => {
                self.filter_panel_open = !self.filter_panel_open;
                vec![TableEvent::FilterPanelChanged(self.filter_panel_open)]
            }
            TableCommand::EditFilter(field, value) => {
                self.draft.set(field, value);
                vec![TableEvent::FilterDraftChanged(field)]
            }
            TableCommand::SubmitFilter => {
                self.applied = self.draft.clone();
                self.refilter();
                self.filter_panel_open = false;
                self.pagination.page = 1;
                self.cursor = 0;
                tracing::debug!(
                    fields = ?self.applied.active_fields(),
                    matches = self.filtered.len(),
                    "filter applied"
                );
                vec![
                    TableEvent::FilterApplied {
                        matches: self.filtered.len(),
                    },
                    TableEvent::FilterPanelChanged(false),
                    TableEvent::PageChanged(1),
                ]
            }
            TableCommand::ResetFilter => {
                self.draft = UserFilter::default();
                self.applied = UserFilter::default();
                self.refilter();
                self.pagination.page = 1;
                self.cursor = 0;
                vec![TableEvent::FilterReset, TableEvent::PageChanged(1)]
            }
            TableCommand::ToggleRowMenu(id) => {
                if self.row_menu.as_ref() == Some(&id) {
                    self.row_menu = None;
                } else {
                    self.row_menu = Some(id);
                }
                vec![TableEvent::RowMenuChanged(self.row_menu.clone())]
            }
            TableCommand::SetPage(page) => self.go_to_page(page),
            TableCommand::NextPage => self.go_to_page(self.pagination.page.saturating_add(1)),
            TableCommand::PrevPage => self.go_to_page(self.pagination.page.saturating_sub(1)),
            TableCommand::SetPageSize(size) => {
                self.pagination.size = size;
                self.pagination.page = 1;
                self.cursor = 0;
                vec![
                    TableEvent::PageSizeChanged(size),
                    TableEvent::PageChanged(1),
                ]
            }
            TableCommand::PointerDown {
                in_filter_panel,
                in_row_menu,
            } => {
                let mut events = Vec::new();
                if self.filter_panel_open && !in_filter_panel {
                    self.filter_panel_open = false;
                    events.push(TableEvent::FilterPanelChanged(false));
                }
                if self.row_menu.is_some() && !in_row_menu {
                    self.row_menu = None;
                    events.push(TableEvent::RowMenuChanged(None));
                }
                events
            }
            TableCommand::MoveCursor(delta) => {
                let rows = self.visible_len();
                if rows == 0 {
                    self.cursor = 0;
                } else {
                    let next = (self.cursor as isize).saturating_add(delta);
                    self.cursor = next.clamp(0, rows as isize - 1) as usize;
                }
                vec![TableEvent::CursorMoved(self.cursor)]
            }
            TableCommand::SelectUser(id) => {
                let mut events = Vec::new();
                if self.row_menu.take().is_some() {
                    events.push(TableEvent::RowMenuChanged(None));
                }
                if let Some(user) = self.users.iter().find(|user| user.id == id) {
                    events.push(TableEvent::StashUser(user.clone()));
                }
                tracing::info!(user = %id, "user selected");
                events.push(TableEvent::NavigateToUser(id));
                events
            }
            TableCommand::BlacklistUser(id) => self.row_action(RowAction::Blacklist, id),
            TableCommand::ActivateUser(id) => self.row_action(RowAction::Activate, id),
        }
    }

    fn go_to_page(&mut self, page: usize) -> Vec<TableEvent> {
        let last = self.pagination.total_pages(self.filtered.len()).max(1);
        let page = page.clamp(1, last);
        if page == self.pagination.page {
            return Vec::new();
        }
        self.pagination.page = page;
        self.cursor = 0;
        vec![TableEvent::PageChanged(page)]
    }

    fn row_action(&mut self, action: RowAction, id: UserId) -> Vec<TableEvent> {
        tracing::info!(user = %id, action = action.label(), "row action requested");
        self.row_menu = None;
        vec![
            TableEvent::RowActionRequested(action, id),
            TableEvent::RowMenuChanged(None),
        ]
    }

    /// Recomputes `filtered` as indices into `users`. `apply_filter` keeps
    /// input order, so one forward walk pairs each match with its index.
    fn refilter(&mut self) {
        let mut matches = apply_filter(&self.users, &self.applied).into_iter().peekable();
        self.filtered = self
            .users
            .iter()
            .enumerate()
            .filter_map(|(index, user)| {
                matches
                    .next_if(|candidate| std::ptr::eq(*candidate, user))
                    .map(|_| index)
            })
            .collect();
    }

    fn visible_indices(&self) -> &[usize] {
        self.pagination.slice(&self.filtered)
    }

    fn visible_len(&self) -> usize {
        self.visible_indices().len()
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.visible_len().saturating_sub(1));
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn visible_users(&self) -> Vec<&User> {
        self.visible_indices()
            .iter()
            .filter_map(|index| self.users.get(*index))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.filtered.len())
    }

    pub fn page_window(&self) -> Vec<PageToken> {
        self.pagination.window(self.filtered.len())
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn has_previous_page(&self) -> bool {
        self.pagination.has_previous()
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination.has_next(self.filtered.len())
    }

    pub fn draft(&self) -> &UserFilter {
        &self.draft
    }

    pub fn applied_filter(&self) -> &UserFilter {
        &self.applied
    }

    pub fn organizations(&self) -> &[String] {
        &self.organizations
    }

    pub fn is_filter_panel_open(&self) -> bool {
        self.filter_panel_open
    }

    pub fn row_menu(&self) -> Option<&UserId> {
        self.row_menu.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_user(&self) -> Option<&User> {
        self.visible_indices()
            .get(self.cursor)
            .and_then(|index| self.users.get(*index))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::{RowAction, TableCommand, TableEvent, TableState};
    use crate::{FilterField, PageSize, User, UserFilter, UserId, UserStatus, apply_filter};

    fn user(index: usize, status: UserStatus) -> User {
        User {
            id: UserId::new(format!("user-{index}")),
            organization: if index % 2 == 0 { "Lendsqr" } else { "Irorun" }.to_owned(),
            username: format!("Person {index}"),
            email: format!("user{index}@example.com"),
            phone_number: format!("0801000{index:04}"),
            date_joined: "Mar 3, 2020, 12:00 AM".to_owned(),
            status,
        }
    }

    fn users(count: usize) -> Vec<User> {
        (1..=count)
            .map(|index| user(index, UserStatus::Pending))
            .collect()
    }

    #[test]
    fn toggling_second_row_menu_closes_first() {
        let mut state = TableState::new(users(3));
        state.dispatch(TableCommand::ToggleRowMenu(UserId::from("user-1")));
        let events = state.dispatch(TableCommand::ToggleRowMenu(UserId::from("user-2")));

        assert_eq!(state.row_menu(), Some(&UserId::from("user-2")));
        assert_eq!(
            events,
            vec![TableEvent::RowMenuChanged(Some(UserId::from("user-2")))]
        );
    }

    #[test]
    fn toggling_same_row_menu_closes_it() {
        let mut state = TableState::new(users(3));
        state.dispatch(TableCommand::ToggleRowMenu(UserId::from("user-1")));
        state.dispatch(TableCommand::ToggleRowMenu(UserId::from("user-1")));
        assert_eq!(state.row_menu(), None);
    }

    #[test]
    fn submitted_filter_rows_match_the_filter_engine() {
        let all: Vec<User> = (1..=60)
            .map(|index| user(index, UserStatus::ALL[index % UserStatus::ALL.len()]))
            .collect();
        let mut state = TableState::new(all.clone()).with_page_size(PageSize::Hundred);
        state.dispatch(TableCommand::EditFilter(
            FilterField::Organization,
            "LENDSQR".to_owned(),
        ));
        state.dispatch(TableCommand::EditFilter(FilterField::Username, "1".to_owned()));
        state.dispatch(TableCommand::SubmitFilter);

        let mut filter = UserFilter::default();
        filter.set(FilterField::Organization, "LENDSQR");
        filter.set(FilterField::Username, "1");
        let expected = apply_filter(&all, &filter);

        assert!(!expected.is_empty());
        assert_eq!(state.filtered_count(), expected.len());
        assert_eq!(state.visible_users(), expected);
    }

    #[test]
    fn submitting_status_filter_keeps_matches_and_resets_page() {
        let mut all = vec![
            user(1, UserStatus::Active),
            user(2, UserStatus::Inactive),
            user(3, UserStatus::Active),
            user(4, UserStatus::Inactive),
            user(5, UserStatus::Active),
        ];
        all.extend((6..=40).map(|index| user(index, UserStatus::Pending)));
        let mut state = TableState::new(all).with_page_size(PageSize::Ten);
        state.dispatch(TableCommand::SetPage(3));
        assert_eq!(state.pagination().page, 3);

        state.dispatch(TableCommand::ToggleFilterPanel);
        state.dispatch(TableCommand::EditFilter(
            FilterField::Status,
            "Active".to_owned(),
        ));
        let events = state.dispatch(TableCommand::SubmitFilter);

        let ids: Vec<&str> = state
            .visible_users()
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(ids, vec!["user-1", "user-3", "user-5"]);
        assert_eq!(state.pagination().page, 1);
        assert!(!state.is_filter_panel_open());
        assert_eq!(
            events,
            vec![
                TableEvent::FilterApplied { matches: 3 },
                TableEvent::FilterPanelChanged(false),
                TableEvent::PageChanged(1),
            ]
        );
    }

    #[test]
    fn editing_draft_does_not_refilter_until_submit() {
        let mut state = TableState::new(users(5));
        state.dispatch(TableCommand::EditFilter(
            FilterField::Username,
            "Person 2".to_owned(),
        ));
        assert_eq!(state.filtered_count(), 5);
        assert_eq!(state.draft().username, "Person 2");
        assert!(state.applied_filter().is_empty());

        state.dispatch(TableCommand::SubmitFilter);
        assert_eq!(state.filtered_count(), 1);
    }

    #[test]
    fn reset_clears_criteria_without_touching_panel() {
        let mut state = TableState::new(users(5));
        state.dispatch(TableCommand::EditFilter(
            FilterField::Email,
            "user1@".to_owned(),
        ));
        state.dispatch(TableCommand::SubmitFilter);
        state.dispatch(TableCommand::ToggleFilterPanel);
        assert_eq!(state.filtered_count(), 1);

        let events = state.dispatch(TableCommand::ResetFilter);
        assert!(state.is_filter_panel_open());
        assert!(state.draft().is_empty());
        assert_eq!(state.filtered_count(), 5);
        assert_eq!(
            events,
            vec![TableEvent::FilterReset, TableEvent::PageChanged(1)]
        );
    }

    #[test]
    fn filter_criteria_survive_page_size_changes() {
        let mut state = TableState::new(users(30));
        state.dispatch(TableCommand::EditFilter(
            FilterField::Organization,
            "lendsqr".to_owned(),
        ));
        state.dispatch(TableCommand::SubmitFilter);
        state.dispatch(TableCommand::SetPageSize(PageSize::Ten));
        assert_eq!(state.filtered_count(), 15);
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.applied_filter().organization, "lendsqr");
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut state = TableState::new(users(45)).with_page_size(PageSize::Ten);
        state.dispatch(TableCommand::SetPage(4));
        let events = state.dispatch(TableCommand::SetPageSize(PageSize::Twenty));
        assert_eq!(state.pagination().page, 1);
        assert_eq!(
            events,
            vec![
                TableEvent::PageSizeChanged(PageSize::Twenty),
                TableEvent::PageChanged(1),
            ]
        );
    }

    #[test]
    fn page_changes_stay_in_range() {
        let mut state = TableState::new(users(25)).with_page_size(PageSize::Ten);
        state.dispatch(TableCommand::SetPage(99));
        assert_eq!(state.pagination().page, 3);
        assert_eq!(state.visible_users().len(), 5);

        assert!(state.dispatch(TableCommand::NextPage).is_empty());
        state.dispatch(TableCommand::SetPage(0));
        assert_eq!(state.pagination().page, 1);
        assert!(state.dispatch(TableCommand::PrevPage).is_empty());
    }

    #[test]
    fn outside_pointer_closes_overlays_independently() {
        let mut state = TableState::new(users(3));
        state.dispatch(TableCommand::ToggleFilterPanel);
        state.dispatch(TableCommand::ToggleRowMenu(UserId::from("user-3")));

        let events = state.dispatch(TableCommand::PointerDown {
            in_filter_panel: true,
            in_row_menu: false,
        });
        assert!(state.is_filter_panel_open());
        assert_eq!(state.row_menu(), None);
        assert_eq!(events, vec![TableEvent::RowMenuChanged(None)]);

        state.dispatch(TableCommand::ToggleRowMenu(UserId::from("user-1")));
        state.dispatch(TableCommand::PointerDown {
            in_filter_panel: false,
            in_row_menu: true,
        });
        assert!(!state.is_filter_panel_open());
        assert_eq!(state.row_menu(), Some(&UserId::from("user-1")));
    }

    #[test]
    fn pointer_with_nothing_open_is_quiet() {
        let mut state = TableState::new(users(3));
        let events = state.dispatch(TableCommand::PointerDown {
            in_filter_panel: false,
            in_row_menu: false,
        });
        assert!(events.is_empty());
    }

    #[test]
    fn selecting_user_stashes_then_navigates() {
        let mut state = TableState::new(users(3));
        state.dispatch(TableCommand::ToggleRowMenu(UserId::from("user-2")));
        let events = state.dispatch(TableCommand::SelectUser(UserId::from("user-2")));
        assert_eq!(
            events,
            vec![
                TableEvent::RowMenuChanged(None),
                TableEvent::StashUser(user(2, UserStatus::Pending)),
                TableEvent::NavigateToUser(UserId::from("user-2")),
            ]
        );
    }

    #[test]
    fn selecting_unknown_user_still_navigates() {
        let mut state = TableState::new(users(1));
        let events = state.dispatch(TableCommand::SelectUser(UserId::from("ghost")));
        assert_eq!(events, vec![TableEvent::NavigateToUser(UserId::from("ghost"))]);
    }

    #[test]
    fn row_actions_close_menu() {
        let mut state = TableState::new(users(2));
        state.dispatch(TableCommand::ToggleRowMenu(UserId::from("user-1")));
        let events = state.dispatch(TableCommand::BlacklistUser(UserId::from("user-1")));
        assert_eq!(state.row_menu(), None);
        assert_eq!(
            events[0],
            TableEvent::RowActionRequested(RowAction::Blacklist, UserId::from("user-1"))
        );
    }

    #[test]
    fn cursor_is_clamped_to_visible_page() {
        let mut state = TableState::new(users(12)).with_page_size(PageSize::Ten);
        state.dispatch(TableCommand::MoveCursor(50));
        assert_eq!(state.cursor(), 9);
        state.dispatch(TableCommand::NextPage);
        assert_eq!(state.cursor(), 0);
        state.dispatch(TableCommand::MoveCursor(5));
        assert_eq!(state.cursor(), 1);
        assert_eq!(
            state.cursor_user().map(|u| u.id.as_str()),
            Some("user-12")
        );
        state.dispatch(TableCommand::MoveCursor(-9));
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn loading_state_clears_when_users_arrive() {
        let mut state = TableState::loading();
        assert!(state.is_loading());
        state.set_users(users(2));
        assert!(!state.is_loading());
        assert_eq!(state.organizations(), &["Irorun", "Lendsqr"]);
    }
}
