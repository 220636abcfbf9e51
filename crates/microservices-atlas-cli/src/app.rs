use crate::render::{
    LineKind, PageLine, focusable_entries, page_lines, tab_strips, wrapped_height,
};
use crossterm::event::KeyCode;
use microservices_atlas_engine::{
    Page, PageLibrary, PageState, StateError, TabSelection, Transition,
};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Pages,
    Entries,
}

pub struct App {
    library: PageLibrary,
    pub page_list_state: ListState,
    state: PageState,
    tabs: Vec<TabSelection>,
    entry_cursor: usize,
    focus: Focus,
    scroll: u16,
    notice: Option<String>,
}

impl App {
    pub fn new(library: PageLibrary, start_page: Option<&str>) -> Self {
        let start = start_page
            .and_then(|slug| library.position(slug))
            .unwrap_or(0);

        let mut app = Self {
            library,
            page_list_state: ListState::default(),
            state: PageState::default(),
            tabs: Vec::new(),
            entry_cursor: 0,
            focus: Focus::Pages,
            scroll: 0,
            notice: None,
        };

        if !app.library.is_empty() {
            app.select_page(start);
        }
        app
    }

    pub fn library(&self) -> &PageLibrary {
        &self.library
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// First page row shown in the page panel
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Last toggle failure, shown in place of the key help
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.page_list_state
            .selected()
            .and_then(|index| self.library.pages().get(index))
    }

    fn select_page(&mut self, index: usize) {
        self.page_list_state.select(Some(index));
        // Every page opens as a fresh mount with all groups collapsed
        let page = self.library.pages().get(index);
        self.state = page.map(PageState::for_page).unwrap_or_default();
        self.tabs = page
            .map(|page| {
                tab_strips(page)
                    .into_iter()
                    .map(TabSelection::for_tabs)
                    .collect()
            })
            .unwrap_or_default();
        self.entry_cursor = 0;
        self.scroll = 0;
        self.notice = None;
    }

    pub fn next_page(&mut self) {
        if self.library.is_empty() {
            return;
        }
        let i = match self.page_list_state.selected() {
            Some(i) => (i + 1) % self.library.len(),
            None => 0,
        };
        self.select_page(i);
    }

    pub fn previous_page(&mut self) {
        if self.library.is_empty() {
            return;
        }
        let i = match self.page_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.library.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.select_page(i);
    }

    fn entry_count(&self) -> usize {
        self.current_page()
            .map_or(0, |page| focusable_entries(page).len())
    }

    /// Move between the page list and the current page's entries.
    /// Pages without disclosure entries keep focus on the list.
    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Pages if self.entry_count() > 0 => Focus::Entries,
            _ => Focus::Pages,
        };
    }

    pub fn next_entry(&mut self) {
        let count = self.entry_count();
        if count > 0 {
            self.entry_cursor = (self.entry_cursor + 1) % count;
        }
    }

    pub fn previous_entry(&mut self) {
        let count = self.entry_count();
        if count > 0 {
            self.entry_cursor = (self.entry_cursor + count - 1) % count;
        }
    }

    pub fn toggle_focused_entry(&mut self) -> Result<Option<Transition>, StateError> {
        let Some(page) = self
            .page_list_state
            .selected()
            .and_then(|index| self.library.pages().get(index))
        else {
            return Ok(None);
        };
        let Some((slot, id)) = focusable_entries(page).into_iter().nth(self.entry_cursor) else {
            return Ok(None);
        };
        self.state.toggle(page, slot, id)
    }

    /// Step every tab strip on the page forwards or backwards
    pub fn cycle_tabs(&mut self, forward: bool) {
        for selection in &mut self.tabs {
            if forward {
                selection.next();
            } else {
                selection.previous();
            }
        }
    }

    pub fn lines(&self) -> Vec<PageLine> {
        let focused = (self.focus == Focus::Entries).then_some(self.entry_cursor);
        self.current_page()
            .map(|page| page_lines(page, &self.state, &self.tabs, focused))
            .unwrap_or_default()
    }

    /// Adjust the scroll offset so the focused entry sits inside a
    /// `width` by `height` viewport.
    pub fn follow_focus(&mut self, width: u16, height: u16) {
        let lines = self.lines();
        let Some(index) = lines
            .iter()
            .position(|line| matches!(line.kind, LineKind::Entry { focused: true, .. }))
        else {
            return;
        };

        let top = wrapped_height(&lines[..index], width);
        let bottom = wrapped_height(&lines[..=index], width);
        if top < self.scroll {
            self.scroll = top;
        } else if bottom > self.scroll.saturating_add(height) {
            self.scroll = bottom.saturating_sub(height);
        }
    }

    /// Apply one key press. Returns `false` once the user asks to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match (code, self.focus) {
            (KeyCode::Char('q'), _) => return false,
            (KeyCode::Tab, _) => self.switch_focus(),
            (KeyCode::Down | KeyCode::Char('j'), Focus::Pages) => self.next_page(),
            (KeyCode::Up | KeyCode::Char('k'), Focus::Pages) => self.previous_page(),
            (KeyCode::Down | KeyCode::Char('j'), Focus::Entries) => self.next_entry(),
            (KeyCode::Up | KeyCode::Char('k'), Focus::Entries) => self.previous_entry(),
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Entries) => {
                self.notice = match self.toggle_focused_entry() {
                    Ok(_) => None,
                    Err(err) => Some(err.to_string()),
                };
            }
            (KeyCode::Char(']'), _) => self.cycle_tabs(true),
            (KeyCode::Char('['), _) => self.cycle_tabs(false),
            _ => {}
        }
        true
    }
}
