//! Main application struct and run loop.
//!
//! This module provides the [`App`] struct which owns the session: it asks
//! the injected [`DataProviders`] for data, applies the key transition
//! table to the [`NavigationState`], and draws every pane from the cached
//! results.

use std::future::Future;
use std::time::Duration;

use dashboard_config::Config;
use dashboard_protocol::{
    ArticleBody, ArticleRef, DashError, DataProviders, FetchError, FetchResult, Message,
    PendingTask, SystemSummary, WindowKind,
};
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::{debug, info, instrument, warn};

use crate::{
    event::{event_to_message, poll_event},
    geometry::ScreenGeometry,
    state::NavigationState,
    terminal::AppTerminal,
    widgets::{
        article_list::visible_count, reader::last_scroll_offset, render_article_list,
        render_article_reader, render_error_screen, render_menu, render_task_list,
        render_top_bar,
    },
};

/// Data shown by the panes, refreshed by [`App::start`] and the `r` key.
#[derive(Debug, Default)]
struct PaneData {
    weather: String,
    cpu_summary: String,
    update_count: Option<u32>,
    /// Headlines, fetched once and reused until a refresh.
    articles: Option<Vec<ArticleRef>>,
    body: Option<ArticleBody>,
    task_backend: bool,
    tasks: Vec<PendingTask>,
}

/// The main application struct.
///
/// Generic over the data source so tests can drive it with
/// [`DummyProviders`](dashboard_protocol::dummy::DummyProviders).
#[derive(Debug)]
pub struct App<P> {
    providers: P,
    config: Config,
    nav: NavigationState,
    /// `None` until the first size is known, or while the screen is too small.
    geometry: Option<ScreenGeometry>,
    /// Once set, the session stays on the error screen until it quits.
    error: Option<DashError>,
    data: PaneData,
    /// Set when the next draw must repaint the whole terminal.
    needs_clear: bool,
    should_quit: bool,
}

impl<P: DataProviders> App<P> {
    /// Creates a new application over `providers`.
    ///
    /// Nothing is fetched until [`start`](Self::start) runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_config::Config;
    /// use dashboard_protocol::dummy::DummyProviders;
    /// use dashboard_tui::App;
    ///
    /// let app = App::new(DummyProviders::new(), Config::default());
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(providers: P, config: Config) -> Self {
        Self {
            providers,
            config,
            nav: NavigationState::new(),
            geometry: None,
            error: None,
            data: PaneData::default(),
            needs_clear: false,
            should_quit: false,
        }
    }

    /// Returns the navigation state.
    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    /// Returns the current geometry, if the screen is large enough.
    #[must_use]
    pub fn geometry(&self) -> Option<&ScreenGeometry> {
        self.geometry.as_ref()
    }

    /// Returns the error the session is stuck on, if any.
    #[must_use]
    pub fn error(&self) -> Option<&DashError> {
        self.error.as_ref()
    }

    /// Returns the cached headlines.
    #[must_use]
    pub fn articles(&self) -> &[ArticleRef] {
        self.data.articles.as_deref().unwrap_or_default()
    }

    /// Returns the article loaded in the reader.
    #[must_use]
    pub fn body(&self) -> Option<&ArticleBody> {
        self.data.body.as_ref()
    }

    /// Returns the data providers.
    #[must_use]
    pub fn providers(&self) -> &P {
        &self.providers
    }

    /// Returns the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` once the session should end.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Starts a session on a `width` x `height` screen.
    ///
    /// Fetches every pane, focuses the headline list and, when the screen
    /// is wide enough, opens the first article. A screen below the minimum
    /// size puts the session on the error screen without fetching.
    #[instrument(skip(self))]
    pub async fn start(&mut self, width: u16, height: u16) {
        info!("starting dashboard session");
        if !self.apply_size(width, height) {
            return;
        }
        self.refresh_all().await;
        self.nav.focus(WindowKind::ArticleList);
        self.open_reader_if_wide().await;
    }

    /// Updates the session based on a message.
    ///
    /// Ctrl+C always quits. On the error screen only `q` does anything.
    /// While the menu is open, `q` closes it and every other key is
    /// ignored. Closing the menu over the list on a wide screen opens the
    /// selected article if the reader does not already hold it.
    pub async fn update(&mut self, msg: Message) {
        debug!(?msg, window = ?self.nav.active_window, "handling message");

        if msg == Message::Interrupt {
            self.should_quit = true;
            return;
        }
        if self.error.is_some() {
            if msg == Message::Quit {
                self.should_quit = true;
            }
            return;
        }
        if let Message::Resize { width, height } = msg {
            self.handle_resize(width, height).await;
            return;
        }
        if self.nav.is_menu_open() {
            if msg == Message::Quit {
                self.nav.close_menu();
                self.settle_focus();
                if self.nav.active_window == WindowKind::ArticleList && !self.body_is_current() {
                    self.open_reader_if_wide().await;
                }
                self.needs_clear = true;
            }
            return;
        }

        match msg {
            Message::Quit | Message::Interrupt => {
                self.should_quit = true;
            }
            Message::OpenMenu => {
                self.nav.open_menu();
            }
            Message::Refresh => {
                self.refresh().await;
            }
            Message::NavigateUp => match self.nav.active_window {
                WindowKind::ArticleList => {
                    if self.nav.select_previous() {
                        self.open_reader_if_wide().await;
                    }
                }
                WindowKind::ArticleReader => {
                    self.nav.scroll_up();
                }
                _ => {}
            },
            Message::NavigateDown => match self.nav.active_window {
                WindowKind::ArticleList => {
                    let visible = self.visible_articles();
                    if self.nav.select_next(visible) {
                        self.open_reader_if_wide().await;
                    }
                }
                WindowKind::ArticleReader => {
                    let max_offset = self.reader_max_offset();
                    self.nav.scroll_down(max_offset);
                }
                _ => {}
            },
            Message::NextArticle => {
                let visible = self.visible_articles();
                if self.nav.active_window.is_navigable() && self.nav.next_article(visible) {
                    self.open_reader_if_wide().await;
                }
            }
            Message::PreviousArticle => {
                if self.nav.active_window.is_navigable() && self.nav.previous_article() {
                    self.open_reader_if_wide().await;
                }
            }
            Message::FocusList => {
                if self.nav.active_window == WindowKind::ArticleReader {
                    self.nav.focus(WindowKind::ArticleList);
                }
            }
            Message::OpenSelected => {
                if self.nav.active_window == WindowKind::ArticleList {
                    self.open_reader_if_wide().await;
                }
            }
            Message::Resize { .. } => {}
        }
    }

    /// Recomputes the geometry for a new screen size.
    ///
    /// Widening past the reader threshold opens the selected article;
    /// narrowing below it moves focus back to the list.
    async fn handle_resize(&mut self, width: u16, height: u16) {
        let was_wide = self.geometry.is_some_and(|g| g.shows_reader());
        if !self.apply_size(width, height) {
            return;
        }
        let is_wide = self.geometry.is_some_and(|g| g.shows_reader());

        if is_wide && !was_wide && self.nav.active_window == WindowKind::ArticleList {
            self.open_reader_if_wide().await;
        }
        self.settle_focus();
    }

    /// Computes the geometry for `width` x `height`.
    ///
    /// Returns `false` and enters the error state if the screen is too
    /// small.
    fn apply_size(&mut self, width: u16, height: u16) -> bool {
        match ScreenGeometry::compute(height, width) {
            Ok(geometry) => {
                debug!(?geometry, "layout computed");
                self.geometry = Some(geometry);
                self.clamp_positions();
                true
            }
            Err(err) => {
                warn!(%err, "screen too small");
                self.geometry = None;
                self.error = Some(DashError::screen_too_small());
                false
            }
        }
    }

    /// Leaves the reader when the screen no longer has room for it.
    fn settle_focus(&mut self) {
        let is_wide = self.geometry.is_some_and(|g| g.shows_reader());
        if self.nav.active_window == WindowKind::ArticleReader && !is_wide {
            self.nav.focus(WindowKind::ArticleList);
        }
    }

    fn clamp_positions(&mut self) {
        let visible = self.visible_articles();
        self.nav.clamp_selection(visible);
        let max_offset = self.reader_max_offset();
        self.nav.clamp_scroll(max_offset);
    }

    /// Number of headlines that fit the list pane.
    fn visible_articles(&self) -> usize {
        self.geometry
            .map_or(0, |g| visible_count(&g, self.articles().len()))
    }

    /// Largest scroll offset that still fills the reader, counting
    /// wrapped rows.
    fn reader_max_offset(&self) -> usize {
        match (&self.geometry, &self.data.body) {
            (Some(geometry), Some(body)) => last_scroll_offset(geometry, &body.lines),
            _ => 0,
        }
    }

    fn selected_article_id(&self) -> Option<u64> {
        self.articles()
            .get(self.nav.current_article_index)
            .map(|a| a.id)
    }

    /// Returns `true` if the loaded body belongs to the selected headline.
    fn body_is_current(&self) -> bool {
        match (&self.data.body, self.selected_article_id()) {
            (Some(body), Some(id)) => body.article_id == id,
            _ => false,
        }
    }

    /// Drops every cached value and fetches again.
    ///
    /// On a wide screen the reader is reloaded for the selected headline,
    /// whichever pane has focus.
    async fn refresh(&mut self) {
        info!("refreshing all panes");
        self.data.articles = None;
        self.refresh_all().await;
        self.clamp_positions();
        if !self.geometry.is_some_and(|g| g.shows_reader()) {
            return;
        }
        if self.nav.active_window == WindowKind::ArticleReader {
            self.open_reader().await;
        } else {
            self.load_body().await;
        }
    }

    /// Fetches the top bar, the headlines (unless cached) and the tasks.
    ///
    /// Failures degrade to placeholder values and are logged.
    async fn refresh_all(&mut self) {
        let deadline = self.config.fetch_timeout();

        self.data.weather = match tokio::time::timeout(
            deadline,
            self.providers.fetch_weather(&self.config.weather_location),
        )
        .await
        {
            Ok(report) => report,
            Err(_) => format!("Error: weather timed out after {}s", deadline.as_secs()),
        };

        let summary = with_deadline(
            deadline,
            "system summary",
            self.providers.fetch_system_summary(),
        )
        .await;
        self.data.cpu_summary = summary
            .unwrap_or_else(|err| {
                warn!(%err, "system summary unavailable");
                SystemSummary::unavailable()
            })
            .summary_line();

        let updates = with_deadline(
            deadline,
            "update count",
            self.providers.fetch_update_count(),
        )
        .await;
        self.data.update_count = updates
            .inspect_err(|err| warn!(%err, "update count unavailable"))
            .ok();

        self.data.task_backend = tokio::time::timeout(deadline, self.providers.has_task_backend())
            .await
            .unwrap_or(false);
        self.data.tasks = if self.data.task_backend {
            with_deadline(deadline, "pending tasks", self.providers.fetch_pending_tasks())
                .await
                .unwrap_or_else(|err| {
                    warn!(%err, "pending tasks unavailable");
                    Vec::new()
                })
        } else {
            Vec::new()
        };

        self.ensure_articles().await;
    }

    /// Fetches the headlines unless they are cached.
    async fn ensure_articles(&mut self) {
        if self.data.articles.is_some() {
            return;
        }
        let Some(geometry) = self.geometry else {
            return;
        };
        let count = usize::from(geometry.article_capacity());
        let fetched = with_deadline(
            self.config.fetch_timeout(),
            "article summaries",
            self.providers.fetch_article_summaries(count),
        )
        .await;

        let articles = fetched.unwrap_or_else(|err| {
            warn!(%err, "headlines unavailable");
            Vec::new()
        });
        debug!(count = articles.len(), "headlines cached");
        self.data.articles = Some(articles);
        self.clamp_positions();
    }

    /// Opens the selected article in the reader if the screen shows one.
    async fn open_reader_if_wide(&mut self) {
        if self.geometry.is_some_and(|g| g.shows_reader()) {
            self.open_reader().await;
        }
    }

    /// Fetches the selected article and focuses the reader.
    ///
    /// With no headlines the reader cannot take focus, so the list keeps
    /// or regains it.
    async fn open_reader(&mut self) {
        if self.load_body().await {
            self.nav.focus(WindowKind::ArticleReader);
        } else if self.nav.active_window == WindowKind::ArticleReader {
            self.nav.focus(WindowKind::ArticleList);
        }
    }

    /// Fetches the selected article into the reader from its first line.
    ///
    /// A failed fetch loads a one-line placeholder instead. Returns `false`
    /// and empties the reader when no headline is selected.
    async fn load_body(&mut self) -> bool {
        let Some(article_id) = self.selected_article_id() else {
            self.data.body = None;
            return false;
        };

        let fetched = with_deadline(
            self.config.fetch_timeout(),
            "article body",
            self.providers.fetch_article_body(article_id),
        )
        .await;

        self.data.body = Some(match fetched {
            Ok(lines) => ArticleBody::new(article_id, lines),
            Err(err) => {
                warn!(%err, article_id, "article body unavailable");
                ArticleBody::placeholder(article_id)
            }
        });
        self.nav.scroll_offset = 0;
        true
    }

    /// Renders the application UI to the given frame.
    ///
    /// The error screen and the menu each take the whole frame. Otherwise
    /// the top bar and headlines are drawn, then the reader when the
    /// screen is wide enough and the task list when a backend exists.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let buf = frame.buffer_mut();

        if let Some(error) = &self.error {
            render_error_screen(error, area, buf);
            return;
        }
        if self.nav.is_menu_open() {
            render_menu(area, buf);
            self.nav.record_cursor((1, 1));
            return;
        }
        let Some(geometry) = self.geometry else {
            return;
        };

        render_top_bar(
            &geometry,
            &self.data.weather,
            self.data.update_count,
            &self.data.cpu_summary,
            buf,
        );
        render_article_list(
            &geometry,
            self.data.articles.as_deref().unwrap_or_default(),
            self.nav.current_article_index,
            buf,
        );
        if geometry.shows_reader()
            && let Some(body) = &self.data.body
        {
            render_article_reader(&geometry, &body.lines, self.nav.scroll_offset, buf);
        }
        if self.data.task_backend {
            render_task_list(&geometry, &self.data.tasks, buf);
        }

        let cursor = match self.nav.active_window {
            WindowKind::ArticleReader => (geometry.content_top(), geometry.two_pane_width),
            _ => {
                let row = u16::try_from(self.nav.current_article_index).unwrap_or(u16::MAX);
                (geometry.content_top().saturating_add(row), 0)
            }
        };
        self.nav.record_cursor(cursor);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It starts the session at the current terminal size, then polls for
    /// events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dashboard_config::Config;
    /// use dashboard_protocol::dummy::DummyProviders;
    /// use dashboard_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(DummyProviders::new(), Config::default());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        let size = terminal.size()?;
        self.start(size.width, size.height).await;

        loop {
            self.render(terminal)?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event)
            {
                self.update(msg).await;
            }

            if self.should_quit {
                break;
            }
        }

        self.finish(terminal)
    }

    /// Draws one frame, repainting the whole terminal first if the menu
    /// was just closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to clear or draw.
    pub fn render<B>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
    {
        if std::mem::take(&mut self.needs_clear) {
            terminal.clear()?;
        }
        terminal.draw(|frame| self.view(frame))?;
        Ok(())
    }

    /// Blanks the terminal at the end of the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to clear.
    pub fn finish<B>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
    {
        info!("dashboard session ended");
        terminal.clear()?;
        Ok(())
    }
}

/// Awaits `fetch`, giving up after `deadline`.
async fn with_deadline<T>(
    deadline: Duration,
    operation: &str,
    fetch: impl Future<Output = FetchResult<T>>,
) -> FetchResult<T> {
    tokio::time::timeout(deadline, fetch)
        .await
        .unwrap_or_else(|_| {
            Err(FetchError::Timeout {
                operation: operation.to_string(),
                secs: deadline.as_secs(),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_protocol::dummy::DummyProviders;
    use dashboard_protocol::ErrorKind;
    use dashboard_protocol::article::BODY_UNAVAILABLE;
    use ratatui::backend::TestBackend;

    use crate::test_utils::{buffer_to_string, row_text};
    use crate::widgets::{error_screen::ERROR_FOOTER, menu::MENU_TITLE, task_list::TASKS_HEADER};

    const FIRST_ID: u64 = 41_000_000;

    async fn started(providers: DummyProviders, width: u16, height: u16) -> App<DummyProviders> {
        let mut app = App::new(providers, Config::default());
        app.start(width, height).await;
        app
    }

    fn draw<P: DataProviders>(app: &mut App<P>, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        terminal
    }

    #[tokio::test]
    async fn too_small_screen_is_sticky_until_quit() {
        let mut app = started(DummyProviders::new(), 100, 30).await;

        let error = app.error().unwrap();
        assert_eq!(error.kind, ErrorKind::ScreenTooSmall);
        assert_eq!(error.code, 1001);
        assert_eq!(app.providers().summary_fetches(), 0);

        app.update(Message::NavigateDown).await;
        app.update(Message::OpenMenu).await;
        app.update(Message::Resize {
            width: 200,
            height: 50,
        })
        .await;
        assert!(app.error().is_some());
        assert!(!app.should_quit());

        app.update(Message::Quit).await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn error_screen_is_drawn() {
        let mut app = started(DummyProviders::new(), 100, 30).await;
        let terminal = draw(&mut app, 100, 30);
        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("1001"));
        assert!(content.contains(ERROR_FOOTER));
    }

    #[tokio::test]
    async fn narrow_screen_is_list_only() {
        let mut app = started(DummyProviders::new(), 130, 40).await;

        assert_eq!(app.navigation().active_window, WindowKind::ArticleList);
        assert!(app.body().is_none());
        assert_eq!(app.articles().len(), 28);

        app.update(Message::NavigateDown).await;
        assert_eq!(app.navigation().current_article_index, 1);
        assert_eq!(app.navigation().depth_counter, -1);
        assert_eq!(app.navigation().active_window, WindowKind::ArticleList);

        app.update(Message::OpenSelected).await;
        assert_eq!(app.navigation().active_window, WindowKind::ArticleList);
        assert_eq!(app.providers().body_fetches(), 0);
    }

    #[tokio::test]
    async fn wide_screen_opens_first_article() {
        let app = started(DummyProviders::new(), 200, 50).await;

        assert_eq!(app.navigation().active_window, WindowKind::ArticleReader);
        assert_eq!(app.navigation().scroll_offset, 0);
        assert_eq!(app.body().unwrap().article_id, FIRST_ID);
        assert_eq!(app.providers().body_fetches(), 1);
    }

    #[tokio::test]
    async fn reader_scroll_is_bounded() {
        let mut app = started(DummyProviders::new(), 200, 50).await;
        // 82 lines in 47 visible rows.
        for _ in 0..100 {
            app.update(Message::NavigateDown).await;
        }
        assert_eq!(app.navigation().scroll_offset, 35);

        for _ in 0..100 {
            app.update(Message::NavigateUp).await;
        }
        assert_eq!(app.navigation().scroll_offset, 0);
    }

    #[tokio::test]
    async fn wrapped_article_tail_is_reachable() {
        let lines: Vec<String> = (1..=60)
            .map(|n| format!("L{n:02}{}", "x".repeat(197)))
            .collect();
        let providers = DummyProviders::new().with_body(FIRST_ID, lines);
        let mut app = started(providers, 200, 50).await;

        // Two rows per line, so 23 lines fill the 47 visible rows.
        for _ in 0..500 {
            app.update(Message::NavigateDown).await;
        }
        assert_eq!(app.navigation().scroll_offset, 37);

        let terminal = draw(&mut app, 200, 50);
        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("L38x"));
        assert!(content.contains("L60x"));
    }

    #[tokio::test]
    async fn list_moves_reopen_reader() {
        let mut app = started(DummyProviders::new(), 200, 50).await;
        app.update(Message::FocusList).await;
        assert_eq!(app.navigation().active_window, WindowKind::ArticleList);

        app.update(Message::NavigateUp).await;
        assert_eq!(app.navigation().current_article_index, 0);
        assert_eq!(app.navigation().depth_counter, 0);
        assert_eq!(app.navigation().active_window, WindowKind::ArticleList);
        assert_eq!(app.providers().body_fetches(), 1);

        app.update(Message::NavigateDown).await;
        assert_eq!(app.navigation().current_article_index, 1);
        assert_eq!(app.navigation().depth_counter, -1);
        assert_eq!(app.navigation().active_window, WindowKind::ArticleReader);
        assert_eq!(app.body().unwrap().article_id, FIRST_ID + 1);
    }

    #[tokio::test]
    async fn ctrl_n_and_ctrl_p_page_articles() {
        let mut app = started(DummyProviders::new(), 200, 50).await;

        app.update(Message::PreviousArticle).await;
        assert_eq!(app.navigation().current_article_index, 0);

        app.update(Message::NextArticle).await;
        assert_eq!(app.navigation().current_article_index, 1);
        assert_eq!(app.navigation().depth_counter, 1);
        assert_eq!(app.body().unwrap().article_id, FIRST_ID + 1);

        app.update(Message::PreviousArticle).await;
        assert_eq!(app.navigation().current_article_index, 0);
        assert_eq!(app.navigation().depth_counter, 0);
        assert_eq!(app.body().unwrap().article_id, FIRST_ID);
    }

    #[tokio::test]
    async fn headlines_are_fetched_once_until_refresh() {
        let mut app = started(DummyProviders::new(), 200, 50).await;
        app.update(Message::FocusList).await;
        for _ in 0..5 {
            app.update(Message::NavigateDown).await;
            app.update(Message::FocusList).await;
        }
        app.update(Message::Resize {
            width: 210,
            height: 60,
        })
        .await;
        assert_eq!(app.providers().summary_fetches(), 1);

        app.update(Message::Refresh).await;
        assert_eq!(app.providers().summary_fetches(), 2);
    }

    #[tokio::test]
    async fn no_headlines_keeps_focus_on_list() {
        let mut app = started(DummyProviders::new().with_article_count(0), 200, 50).await;

        assert!(app.error().is_none());
        assert!(app.articles().is_empty());
        assert_eq!(app.navigation().active_window, WindowKind::ArticleList);

        app.update(Message::NavigateDown).await;
        app.update(Message::NextArticle).await;
        app.update(Message::OpenSelected).await;
        assert_eq!(app.navigation().current_article_index, 0);
        assert_eq!(app.providers().body_fetches(), 0);

        let terminal = draw(&mut app, 200, 50);
        assert_eq!(row_text(terminal.backend().buffer(), 2), "");
    }

    #[tokio::test]
    async fn failing_body_shows_placeholder() {
        let mut app = started(DummyProviders::new().with_failing_bodies(), 200, 50).await;

        let body = app.body().unwrap();
        assert_eq!(body.lines, vec![BODY_UNAVAILABLE.to_string()]);
        assert_eq!(app.navigation().active_window, WindowKind::ArticleReader);

        let terminal = draw(&mut app, 200, 50);
        assert!(buffer_to_string(terminal.backend().buffer()).contains(BODY_UNAVAILABLE));
    }

    #[tokio::test]
    async fn task_pane_depends_on_backend() {
        let mut with_tasks = started(DummyProviders::new(), 130, 40).await;
        let terminal = draw(&mut with_tasks, 130, 40);
        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains(TASKS_HEADER));
        assert!(content.contains("Water plants"));

        let mut without = started(DummyProviders::new().without_task_backend(), 130, 40).await;
        let terminal = draw(&mut without, 130, 40);
        assert!(!buffer_to_string(terminal.backend().buffer()).contains(TASKS_HEADER));
    }

    #[tokio::test]
    async fn dashboard_draws_every_pane() {
        let providers = DummyProviders::new().with_weather("Paris: +12C");
        let mut app = started(providers, 200, 50).await;
        let terminal = draw(&mut app, 200, 50);
        let buf = terminal.backend().buffer();

        let top = row_text(buf, 0);
        assert!(top.starts_with("[F1] Menu"));
        assert!(top.ends_with("Paris: +12C"));
        assert!(top.contains("Updates: 3"));
        let cpu = SystemSummary::new("Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz", 4, 1992);
        assert!(top.contains(&cpu.summary_line()));

        assert!(row_text(buf, 2).contains(&format!("{FIRST_ID} Show HN")));
        assert!(row_text(buf, 2).contains(&format!("Story {FIRST_ID}")));
        assert_eq!(app.navigation().cursor_position, (2, 100));
    }

    #[tokio::test]
    async fn menu_swallows_keys_and_q_closes_it() {
        let mut app = started(DummyProviders::new(), 130, 40).await;

        app.update(Message::OpenMenu).await;
        assert!(app.navigation().is_menu_open());

        let terminal = draw(&mut app, 130, 40);
        assert!(row_text(terminal.backend().buffer(), 1).contains(MENU_TITLE));

        app.update(Message::NavigateDown).await;
        app.update(Message::Refresh).await;
        assert_eq!(app.navigation().current_article_index, 0);
        assert_eq!(app.providers().summary_fetches(), 1);

        app.update(Message::Quit).await;
        assert!(!app.should_quit());
        assert_eq!(app.navigation().active_window, WindowKind::ArticleList);
    }

    #[tokio::test]
    async fn closing_menu_repaints_the_dashboard() {
        let mut app = started(DummyProviders::new(), 130, 40).await;
        let mut terminal = Terminal::new(TestBackend::new(130, 40)).unwrap();

        app.update(Message::OpenMenu).await;
        app.render(&mut terminal).unwrap();
        assert!(buffer_to_string(terminal.backend().buffer()).contains(MENU_TITLE));

        app.update(Message::Quit).await;
        app.render(&mut terminal).unwrap();
        let content = buffer_to_string(terminal.backend().buffer());
        assert!(!content.contains(MENU_TITLE));
        assert!(content.contains(TASKS_HEADER));
    }

    #[tokio::test]
    async fn closing_menu_after_widening_opens_reader() {
        let mut app = started(DummyProviders::new(), 130, 40).await;
        app.update(Message::OpenMenu).await;
        app.update(Message::Resize {
            width: 200,
            height: 50,
        })
        .await;
        assert!(app.body().is_none());

        app.update(Message::Quit).await;
        assert!(!app.navigation().is_menu_open());
        assert_eq!(app.navigation().active_window, WindowKind::ArticleReader);
        assert_eq!(app.body().unwrap().article_id, FIRST_ID);
    }

    #[tokio::test]
    async fn quitting_leaves_a_blank_terminal() {
        let cases = [
            (130, 40, WindowKind::ArticleList),
            (200, 50, WindowKind::ArticleReader),
            (100, 30, WindowKind::TopBar),
        ];
        for (width, height, window) in cases {
            let mut app = started(DummyProviders::new(), width, height).await;
            assert_eq!(app.navigation().active_window, window);
            assert_eq!(app.error().is_some(), width < 120);

            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            app.render(&mut terminal).unwrap();
            assert!(!buffer_to_string(terminal.backend().buffer()).trim().is_empty());

            app.update(Message::Quit).await;
            assert!(app.should_quit());
            app.finish(&mut terminal).unwrap();
            assert!(
                buffer_to_string(terminal.backend().buffer()).trim().is_empty(),
                "{width}x{height} left text behind"
            );
        }
    }

    #[tokio::test]
    async fn interrupt_quits_from_menu() {
        let mut app = started(DummyProviders::new(), 130, 40).await;
        app.update(Message::OpenMenu).await;
        app.update(Message::Interrupt).await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn q_quits_from_reader() {
        let mut app = started(DummyProviders::new(), 200, 50).await;
        app.update(Message::Quit).await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn resize_crosses_reader_threshold() {
        let mut app = started(DummyProviders::new(), 130, 40).await;
        assert!(app.body().is_none());

        app.update(Message::Resize {
            width: 200,
            height: 50,
        })
        .await;
        assert_eq!(app.navigation().active_window, WindowKind::ArticleReader);
        assert!(app.body().is_some());

        app.update(Message::Resize {
            width: 130,
            height: 40,
        })
        .await;
        assert_eq!(app.navigation().active_window, WindowKind::ArticleList);

        app.update(Message::Resize {
            width: 100,
            height: 40,
        })
        .await;
        assert!(app.error().is_some());
    }

    /// Canned providers with slow bodies or headlines that come back
    /// reversed after the first fetch.
    struct TestProviders {
        inner: DummyProviders,
        slow_bodies: bool,
        reverse_on_refetch: bool,
    }

    impl TestProviders {
        fn new() -> Self {
            Self {
                inner: DummyProviders::new(),
                slow_bodies: false,
                reverse_on_refetch: false,
            }
        }
    }

    impl DataProviders for TestProviders {
        async fn fetch_weather(&self, location: &str) -> String {
            self.inner.fetch_weather(location).await
        }

        async fn fetch_top_story_ids(&self) -> FetchResult<Vec<u64>> {
            self.inner.fetch_top_story_ids().await
        }

        async fn fetch_article_summaries(&self, count: usize) -> FetchResult<Vec<ArticleRef>> {
            let mut articles = self.inner.fetch_article_summaries(count).await?;
            if self.reverse_on_refetch && self.inner.summary_fetches() > 1 {
                articles.reverse();
            }
            Ok(articles)
        }

        async fn fetch_article_body(&self, story_id: u64) -> FetchResult<Vec<String>> {
            if self.slow_bodies {
                tokio::time::sleep(Duration::from_secs(30)).await;
            }
            self.inner.fetch_article_body(story_id).await
        }

        async fn fetch_system_summary(&self) -> FetchResult<SystemSummary> {
            self.inner.fetch_system_summary().await
        }

        async fn fetch_update_count(&self) -> FetchResult<u32> {
            self.inner.fetch_update_count().await
        }

        async fn has_task_backend(&self) -> bool {
            self.inner.has_task_backend().await
        }

        async fn fetch_pending_tasks(&self) -> FetchResult<Vec<PendingTask>> {
            self.inner.fetch_pending_tasks().await
        }
    }

    #[tokio::test]
    async fn slow_body_times_out_to_placeholder() {
        let config = Config {
            fetch_timeout_secs: 1,
            ..Config::default()
        };
        let providers = TestProviders {
            slow_bodies: true,
            ..TestProviders::new()
        };
        let mut app = App::new(providers, config);
        app.start(200, 50).await;

        let body = app.body().unwrap();
        assert_eq!(body.lines, vec![BODY_UNAVAILABLE.to_string()]);
    }

    #[tokio::test]
    async fn refresh_reloads_reader_behind_focused_list() {
        let providers = TestProviders {
            reverse_on_refetch: true,
            ..TestProviders::new()
        };
        let mut app = App::new(providers, Config::default());
        app.start(200, 50).await;
        app.update(Message::FocusList).await;
        assert_eq!(app.body().unwrap().article_id, FIRST_ID);

        app.update(Message::Refresh).await;
        let selected = app.articles()[0].id;
        assert_ne!(selected, FIRST_ID);
        assert_eq!(app.body().unwrap().article_id, selected);
        assert_eq!(app.navigation().active_window, WindowKind::ArticleList);

        let terminal = draw(&mut app, 200, 50);
        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains(&format!("Story {selected}")));
    }

    #[tokio::test]
    async fn with_deadline_reports_timeout() {
        let result: FetchResult<()> = with_deadline(
            Duration::from_millis(10),
            "weather",
            std::future::pending(),
        )
        .await;
        assert_eq!(
            result,
            Err(FetchError::Timeout {
                operation: "weather".to_string(),
                secs: 0,
            })
        );
    }
}
