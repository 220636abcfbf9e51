use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use microservices_atlas_config::{Config, Origin};
use microservices_atlas_engine::io;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

mod app;
mod render;

use app::{App, Focus};
use render::{LineKind, PageLine};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if args.len() > 2 {
        eprintln!("Usage: {} [content-folder-path]", args[0]);
        process::exit(1);
    }

    let resolved = match Config::resolve(args.get(1).map(PathBuf::from)) {
        Ok(Some(resolved)) => resolved,
        Ok(None) => {
            eprintln!("Error: No content path provided and no config file found");
            eprintln!("Usage: {} <content-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} <content-folder-path>", args[0]);
            process::exit(1);
        }
    };
    let content_path = resolved.config.content_path;

    if let Err(e) = io::validate_content_dir(&content_path) {
        let source = match resolved.origin {
            Origin::ConfigFile(path) => format!(" from config file '{}'", path.display()),
            Origin::Argument => String::new(),
        };
        eprintln!(
            "Error: Content path '{}'{source} is invalid: {e}",
            content_path.display()
        );
        process::exit(1);
    }

    // Load before touching the terminal so content errors land on stderr
    let library = io::load_library(&content_path)?;
    let mut app = App::new(library, resolved.config.start_page.as_deref());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    let focus = app.focus();

    // Page list panel
    let page_items: Vec<ListItem> = app
        .library()
        .pages()
        .iter()
        .map(|page| ListItem::new(Line::from(Span::raw(page.title().to_string()))))
        .collect();

    let pages = List::new(page_items)
        .block(panel("Pages", focus == Focus::Pages))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(pages, chunks[0], &mut app.page_list_state);

    // Page panel
    let page_block = panel("Page", focus == Focus::Entries);
    let inner = page_block.inner(chunks[1]);
    app.follow_focus(inner.width, inner.height);

    let lines = app.lines();
    let content_text: Vec<Line> = if lines.is_empty() {
        vec![Line::from("No pages found")]
    } else {
        lines.iter().map(styled_line).collect()
    };

    let content = Paragraph::new(content_text)
        .block(page_block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0));

    f.render_widget(content, chunks[1]);

    let help = match app.notice() {
        Some(notice) => Paragraph::new(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Red),
        ))),
        None => Paragraph::new(Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k ↓/j: Move | "),
            Span::raw("Tab: Pages/Entries | "),
            Span::raw("Enter/Space: Toggle | "),
            Span::raw("[/]: Code tabs"),
        ])),
    };

    f.render_widget(help, rows[1]);
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn styled_line(line: &PageLine) -> Line<'_> {
    let style = match line.kind {
        LineKind::Plain => Style::default(),
        LineKind::Heading => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        LineKind::Muted => Style::default().fg(Color::DarkGray),
        LineKind::CodeLabel => Style::default().fg(Color::Yellow),
        LineKind::Code => Style::default().fg(Color::Green),
        LineKind::Entry { open, focused } => {
            let style = if open {
                Style::default().fg(Color::Blue)
            } else {
                Style::default()
            };
            if focused {
                style.bg(Color::Yellow).fg(Color::Black)
            } else {
                style
            }
        }
    };
    Line::from(Span::styled(line.text.as_str(), style))
}
