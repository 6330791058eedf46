//! Terminal form for the word filter, built on Ratatui.
//!
//! Layout: five one-letter position boxes, the included/excluded constraint
//! fields and the remove-word field on top; the candidate and suggestion
//! panes below. Typing a letter in a position box advances focus to the
//! next box, matching how one fills in a paper grid.

use crate::filter::WORD_LENGTH;
use crate::session::{FilterOutcome, FilterRequest, SessionInterface, UserAction};
use crate::wordbank::Language;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::{Duration, Instant};

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const NOTICE_DURATION: Duration = Duration::from_secs(3);
const MAX_WORDS_DISPLAY: usize = 30;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const FOCUS_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const FIELD_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Box(usize),
    Included,
    Excluded,
    Remove,
}

impl Field {
    fn next(self) -> Field {
        match self {
            Field::Box(i) if i + 1 < WORD_LENGTH => Field::Box(i + 1),
            Field::Box(_) => Field::Included,
            Field::Included => Field::Excluded,
            Field::Excluded => Field::Remove,
            Field::Remove => Field::Box(0),
        }
    }

    fn previous(self) -> Field {
        match self {
            Field::Box(0) => Field::Remove,
            Field::Box(i) => Field::Box(i - 1),
            Field::Included => Field::Box(WORD_LENGTH - 1),
            Field::Excluded => Field::Included,
            Field::Remove => Field::Excluded,
        }
    }
}

/// Message shown for a few seconds, then dropped (the removal feedback).
struct Notice {
    text: String,
    success: bool,
    expires_at: Instant,
}

/// Groups what the renderer needs so it can run as an associated function
/// inside the terminal draw closure.
struct RenderContext<'a> {
    language: Language,
    word_count: usize,
    boxes: &'a [String; WORD_LENGTH],
    included: &'a str,
    excluded: &'a str,
    remove_word: &'a str,
    focus: Field,
    candidates: &'a [String],
    count: usize,
    suggestions: &'a [String],
    notice: Option<&'a Notice>,
    status: &'a str,
    error_message: &'a str,
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    language: Language,
    word_count: usize,
    boxes: [String; WORD_LENGTH],
    included: String,
    excluded: String,
    remove_word: String,
    focus: Field,
    candidates: Vec<String>,
    count: usize,
    suggestions: Vec<String>,
    notice: Option<Notice>,
    status: String,
    error_message: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            language: Language::English,
            word_count: 0,
            boxes: Default::default(),
            included: String::new(),
            excluded: String::new(),
            remove_word: String::new(),
            focus: Field::Box(0),
            candidates: Vec::new(),
            count: 0,
            suggestions: Vec::new(),
            notice: None,
            status: "Ready".to_string(),
            error_message: String::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn reset_form(&mut self) {
        self.boxes = Default::default();
        self.included.clear();
        self.excluded.clear();
        self.remove_word.clear();
        self.focus = Field::Box(0);
        self.candidates.clear();
        self.count = 0;
        self.suggestions.clear();
        self.error_message.clear();
    }

    fn drop_expired_notice(&mut self) {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.expires_at <= Instant::now())
        {
            debug_log!("removal notice expired");
            self.notice = None;
        }
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            language: self.language,
            word_count: self.word_count,
            boxes: &self.boxes,
            included: &self.included,
            excluded: &self.excluded,
            remove_word: &self.remove_word,
            focus: self.focus,
            candidates: &self.candidates,
            count: self.count,
            suggestions: &self.suggestions,
            notice: self.notice.as_ref(),
            status: &self.status,
            error_message: &self.error_message,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(8), // Form
                Constraint::Min(8),    // Result panes
                Constraint::Length(3), // Status / notice
                Constraint::Length(3), // Key help
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx);
        Self::render_form(f, chunks[1], ctx);
        Self::render_results(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx);
        Self::render_help(f, chunks[4], ctx);
    }

    fn render_title(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let title = Paragraph::new(format!(
            "WORDLE HELPER - {} ({} words)",
            ctx.language, ctx.word_count
        ))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_form(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Constraints").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = Vec::new();

        let mut spans = vec![Span::raw("Known letters:  ")];
        for (i, text) in ctx.boxes.iter().enumerate() {
            let letter = text.chars().next().unwrap_or(' ');
            let style = if ctx.focus == Field::Box(i) {
                FOCUS_STYLE
            } else {
                FIELD_STYLE
            };
            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));

        lines.push(Self::field_line(
            "Included letters (format: a:1,2 b:3): ",
            ctx.included,
            ctx.focus == Field::Included,
        ));
        lines.push(Self::field_line(
            "Excluded letters (not comma separated): ",
            ctx.excluded,
            ctx.focus == Field::Excluded,
        ));
        lines.push(Self::field_line(
            "Remove word: ",
            ctx.remove_word,
            ctx.focus == Field::Remove,
        ));

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.error_message, ERROR_STYLE)));
        }

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
        let style = if focused { FOCUS_STYLE } else { FIELD_STYLE };
        Line::from(vec![
            Span::raw(label),
            Span::styled(format!("[{value}]"), style),
        ])
    }

    fn render_results(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Self::render_word_pane(
            f,
            panes[0],
            &format!("Words found: {}", ctx.count),
            ctx.candidates,
        );
        Self::render_word_pane(
            f,
            panes[1],
            &format!("Suggested words: {}", ctx.suggestions.len()),
            ctx.suggestions,
        );
    }

    fn render_word_pane(f: &mut Frame, area: Rect, title: &str, words: &[String]) {
        let mut lines: Vec<Line> = words
            .iter()
            .take(MAX_WORDS_DISPLAY)
            .map(|word| Line::from(format!("  {word}")))
            .collect();
        if words.len() > MAX_WORDS_DISPLAY {
            lines.push(Line::from(format!(
                "  ...and {} more",
                words.len() - MAX_WORDS_DISPLAY
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(title.to_string())
                    .borders(Borders::ALL),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let (text, style) = match ctx.notice {
            Some(notice) if notice.success => (notice.text.as_str(), SUCCESS_STYLE),
            Some(notice) => (notice.text.as_str(), ERROR_STYLE),
            None => (ctx.status, HEADER_STYLE),
        };
        let paragraph = Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_help(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let text = if ctx.focus == Field::Remove {
            "ENTER: Remove word | TAB: Next field | Ctrl+L: Language | Ctrl+N: Clear | ESC: Quit"
        } else {
            "ENTER: Filter words | TAB: Next field | Ctrl+L: Language | Ctrl+N: Clear | ESC: Quit"
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Wait briefly for a key press. Non-key events and the garbage
    /// characters terminals emit around focus changes are swallowed.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}'
                        || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD
                            && c != '\t'
                            && c != '\n'
                            && c != '\r')
                {
                    debug_log!("ignoring control character from escape sequence: {:?}", c);
                    return Ok(None);
                }
                Ok(Some(key))
            }
            other => {
                debug_log!("ignoring non-key event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        debug_log!("key: code={:?} modifiers={:?}", key.code, key.modifiers);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'C') => Some(UserAction::Exit),
                KeyCode::Char('l' | 'L') => {
                    info_log!("switching language from {}", self.language);
                    Some(UserAction::SwitchLanguage(self.language.next()))
                }
                KeyCode::Char('n' | 'N') => Some(UserAction::Clear),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.erase();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert(c);
                None
            }
            _ => None,
        }
    }

    fn submit(&mut self) -> Option<UserAction> {
        if self.focus == Field::Remove {
            let word = self.remove_word.trim();
            if word.is_empty() {
                self.error_message = "Type the word to remove first.".to_string();
                return None;
            }
            info_log!("submitting removal of {:?}", word);
            return Some(UserAction::Remove(word.to_string()));
        }

        info_log!("submitting filter request");
        Some(UserAction::Filter(FilterRequest {
            boxes: self.boxes.clone(),
            included: self.included.clone(),
            excluded: self.excluded.clone(),
        }))
    }

    fn insert(&mut self, c: char) {
        self.error_message.clear();
        match self.focus {
            Field::Box(i) => {
                if c.is_alphabetic() {
                    self.boxes[i] = c.to_string();
                    // Filling a box moves on to the next one, like the
                    // cursor in a crossword grid. The last box keeps focus.
                    if i + 1 < WORD_LENGTH {
                        self.focus = Field::Box(i + 1);
                    }
                } else {
                    self.error_message =
                        format!("Only letters go in the position boxes ({c:?} is not one).");
                }
            }
            Field::Included => self.included.push(c),
            Field::Excluded => self.excluded.push(c),
            Field::Remove => self.remove_word.push(c),
        }
    }

    fn erase(&mut self) {
        match self.focus {
            Field::Box(i) => {
                if self.boxes[i].is_empty() {
                    self.focus = self.focus.previous();
                } else {
                    self.boxes[i].clear();
                }
            }
            Field::Included => {
                self.included.pop();
            }
            Field::Excluded => {
                self.excluded.pop();
            }
            Field::Remove => {
                self.remove_word.pop();
            }
        }
    }
}

impl SessionInterface for TuiInterface {
    fn display_word_count(&mut self, language: Language, count: usize) {
        self.language = language;
        self.word_count = count;
        self.reset_form();
        self.status = format!("Loaded {count} {language} words.");
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            self.drop_expired_notice();
            if self.draw().is_err() {
                info_log!("read_action() - draw failed, exiting");
                return Some(UserAction::Exit);
            }

            match self.poll_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.handle_key(key) {
                        info_log!("read_action() - action: {:?}", action);
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - input error: {}, exiting", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_results(&mut self, outcome: &FilterOutcome) {
        self.candidates = outcome.candidates.clone();
        self.count = outcome.count;
        self.suggestions = outcome.suggestions.clone();
        self.status = format!("Words found: {}", outcome.count);
        self.draw_or_log();
    }

    fn display_removal(&mut self, word: &str, removed: bool) {
        let text = if removed {
            self.word_count = self.word_count.saturating_sub(1);
            format!("Word removed: {word}")
        } else {
            format!("Word is not in the list: {word}")
        };
        self.notice = Some(Notice {
            text,
            success: removed,
            expires_at: Instant::now() + NOTICE_DURATION,
        });
        self.draw_or_log();
    }

    fn display_cleared(&mut self) {
        self.reset_form();
        self.status = "Fields cleared.".to_string();
        self.draw_or_log();
    }

    fn display_exit(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
