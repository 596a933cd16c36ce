use crate::config::Config;
use crate::event::AppEvent;
use crate::github::client::profile_url;
use crate::github::types::RepositoryRecord;
use crate::loader::{LoadState, MountId, RepositoryListLoader};
use crate::opener::Opener;
use crate::ui::{
    card::{CardHit, CardRegions},
    contains,
    header_bar::HeaderBar,
    help_panel::HelpPanel,
    input::{self, Action},
    projects_view::{ProjectsLayout, ProjectsView},
    status_bar::StatusBar,
    toast::{Notification, NotifyLevel, Toast},
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use std::time::Instant;

pub struct App {
    pub config: Config,
    pub loader: RepositoryListLoader,
    pub selected: usize,
    pub first_row: usize,
    pub show_help: bool,
    pub notification: Option<Notification>,
    pub should_quit: bool,
    opener: Box<dyn Opener>,
    layout: ProjectsLayout,
    regions: Vec<(usize, CardRegions)>,
}

impl App {
    pub fn new(config: Config, opener: Box<dyn Opener>) -> Self {
        Self {
            config,
            loader: RepositoryListLoader::new(),
            selected: 0,
            first_row: 0,
            show_help: false,
            notification: None,
            should_quit: false,
            opener,
            layout: ProjectsLayout::default(),
            regions: Vec::new(),
        }
    }

    /// Mounts the projects grid. The caller owns issuing the single fetch.
    pub fn mount_projects(&mut self) -> MountId {
        self.selected = 0;
        self.first_row = 0;
        self.loader.mount()
    }

    pub fn unmount_projects(&mut self) {
        self.loader.unmount();
        self.regions.clear();
    }

    pub fn state(&self) -> Option<&LoadState> {
        self.loader.state()
    }

    fn card_count(&self) -> usize {
        self.state()
            .and_then(LoadState::display_list)
            .map_or(0, |list| list.len())
    }

    pub fn selected_record(&self) -> Option<&RepositoryRecord> {
        self.state()
            .and_then(LoadState::display_list)
            .and_then(|list| list.get(self.selected))
    }

    pub fn expire_notification(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        self.expire_notification(Instant::now());

        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key);
                self.handle_action(action);
            }
            AppEvent::Mouse(mouse) => {
                if let Some((column, row)) = input::left_click(mouse) {
                    self.handle_click(column, row);
                }
            }
            AppEvent::Resize | AppEvent::Tick => {}
            AppEvent::ReposLoaded { mount, state } => {
                if self.loader.resolve(mount, state) {
                    self.selected = 0;
                    self.first_row = 0;
                }
            }
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                Action::Help | Action::ClosePopup => self.show_help = false,
                _ => {}
            }
            return;
        }

        let columns = self.layout.columns.max(1);
        match action {
            Action::Quit | Action::ClosePopup => self.should_quit = true,
            Action::MoveRight => self.select(self.selected.saturating_add(1)),
            Action::MoveLeft => self.select(self.selected.saturating_sub(1)),
            Action::MoveDown => {
                if self.selected + columns < self.card_count() {
                    self.select(self.selected + columns);
                }
            }
            Action::MoveUp => {
                if self.selected >= columns {
                    self.select(self.selected - columns);
                }
            }
            Action::OpenRepo => {
                if let Some(url) = self.selected_record().map(|r| r.html_url.clone()) {
                    self.open(&url);
                }
            }
            Action::OpenLive => {
                match self.selected_record().map(|r| r.homepage.clone()) {
                    Some(Some(url)) => self.open(&url),
                    Some(None) => self.notify(NotifyLevel::Warn, "no live demo for this repository"),
                    None => {}
                }
            }
            Action::OpenProfile => {
                let url = profile_url(&self.config.account);
                self.open(&url);
            }
            Action::Help => self.show_help = true,
            Action::None => {}
        }
    }

    /// Routes a click to at most one navigation action. The live badge is
    /// checked before the card body, so a badge click never opens the repo.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        if contains(self.layout.footer_link(), column, row) {
            self.handle_action(Action::OpenProfile);
            return;
        }

        let hit = self
            .regions
            .iter()
            .find_map(|(idx, regions)| regions.hit(column, row).map(|h| (*idx, h)));

        if let Some((idx, hit)) = hit {
            self.selected = idx;
            match hit {
                CardHit::Primary => self.handle_action(Action::OpenRepo),
                CardHit::Secondary => self.handle_action(Action::OpenLive),
            }
        }
    }

    fn select(&mut self, idx: usize) {
        let count = self.card_count();
        if count == 0 {
            return;
        }
        self.selected = idx.min(count - 1);
    }

    fn open(&mut self, url: &str) {
        if let Err(e) = self.opener.open(url) {
            tracing::warn!(url, error = %e, "open failed");
            self.notify(NotifyLevel::Error, e.to_string());
        }
    }

    fn notify(&mut self, level: NotifyLevel, message: impl Into<String>) {
        self.notification = Some(Notification::new(level, message));
    }

    fn ensure_selected_visible(&mut self, visible_rows: usize) {
        let columns = self.layout.columns.max(1);
        let row = self.selected / columns;
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + visible_rows {
            self.first_row = row + 1 - visible_rows;
        }
    }

    /// Recomputes hit regions for `area` without drawing.
    pub fn layout_for(&mut self, area: Rect) {
        let count = self.card_count();
        self.layout = ProjectsLayout::compute(area, count, self.first_row);
        let visible = self.layout.visible_rows();
        let before = self.first_row;
        self.ensure_selected_visible(visible);
        if self.first_row != before {
            self.layout = ProjectsLayout::compute(area, count, self.first_row);
        }

        let list = self.state().and_then(LoadState::display_list);
        self.regions = match list {
            Some(list) => self
                .layout
                .slots
                .iter()
                .filter_map(|(idx, slot)| {
                    list.get(*idx).map(|r| (*idx, CardRegions::compute(*slot, r)))
                })
                .collect(),
            None => Vec::new(),
        };
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let [header, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(size);
        let content = body.inner(ratatui::layout::Margin::new(2, 1));

        self.layout_for(content);

        frame.render_widget(
            HeaderBar {
                account: &self.config.account,
            },
            header,
        );

        frame.render_widget(
            ProjectsView {
                state: self.loader.state(),
                layout: &self.layout,
                selected: self.selected,
            },
            content,
        );

        frame.render_widget(
            StatusBar {
                state: self.loader.state(),
                selected_url: self.selected_record().map(|r| r.html_url.as_str()),
            },
            status,
        );

        if let Some(ref n) = self.notification {
            frame.render_widget(Toast { notification: n }, body);
        }

        if self.show_help {
            frame.render_widget(HelpPanel, size);
        }
    }
}
