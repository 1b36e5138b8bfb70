//! Interactive live search on the terminal.
//!
//! The terminal is only a renderer: key events go into the
//! [`SearchController`], and each frame draws the latest [`SearchView`]
//! snapshot. All debounce, fetch, and staleness logic lives in the core.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Stylize,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use examsearch_core::{ExamLookup, KeyInput, SearchController, SearchPhase, SearchView};

pub async fn run(client: Arc<dyn ExamLookup>) -> io::Result<()> {
    let controller = SearchController::new(client);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = event_loop(&controller, &mut stdout);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn event_loop(controller: &SearchController, stdout: &mut io::Stdout) -> io::Result<()> {
    let mut last: Option<SearchView> = None;

    loop {
        let view = controller.snapshot();
        if last.as_ref() != Some(&view) {
            draw(stdout, &view)?;
            last = Some(view);
        }

        if !event::poll(Duration::from_millis(30))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(());
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                controller.clear();
            }
            KeyCode::Char(c) => {
                let mut text = controller.snapshot().input;
                text.push(c);
                controller.handle_input(&text);
            }
            KeyCode::Backspace => {
                let mut text = controller.snapshot().input;
                text.pop();
                controller.handle_input(&text);
            }
            KeyCode::Up => {
                controller.handle_key(KeyInput::ArrowUp);
            }
            KeyCode::Down => {
                controller.handle_key(KeyInput::ArrowDown);
            }
            KeyCode::Enter => {
                controller.handle_key(KeyInput::Enter);
            }
            KeyCode::Esc => {
                controller.handle_key(KeyInput::Escape);
            }
            _ => {}
        }
    }
}

fn draw(stdout: &mut io::Stdout, view: &SearchView) -> io::Result<()> {
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;

    write!(
        stdout,
        "{}\r\n",
        "Exam search (Ctrl+C to quit, Ctrl+U to clear)".dark_grey()
    )?;
    write!(stdout, "> {}", view.input.as_str().bold())?;
    if view.suggest_loading {
        write!(stdout, "  {}", "...".dark_grey())?;
    }
    write!(stdout, "\r\n\r\n")?;

    if view.suggestions_visible {
        for (i, name) in view.suggestions.iter().enumerate() {
            if view.selected == Some(i) {
                write!(stdout, "{} {}\r\n", ">".bold(), name.as_str().bold())?;
            } else {
                write!(stdout, "  {name}\r\n")?;
            }
        }
        write!(stdout, "\r\n")?;
    }

    match view.phase {
        SearchPhase::Searching => {
            write!(stdout, "{}\r\n", "Searching...".dark_grey())?;
        }
        SearchPhase::SearchFailed => {
            if let Some(err) = &view.error {
                write!(stdout, "{}\r\n", err.as_str().red())?;
            }
        }
        SearchPhase::ResultsShown => {
            if view.results.is_empty() {
                write!(stdout, "No exams found for \"{}\".\r\n", view.input)?;
            } else {
                for exam in &view.results {
                    let date = exam
                        .start_date
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "N/A".to_string());
                    write!(
                        stdout,
                        "{:<25} {:<20} {:<12} {}\r\n",
                        exam.name,
                        exam.title,
                        date,
                        exam.location.as_deref().unwrap_or("N/A"),
                    )?;
                }
            }
        }
        _ => {}
    }

    stdout.flush()
}
