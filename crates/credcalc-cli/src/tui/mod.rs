mod app;
mod ui;

use std::time::Duration;

use credcalc_core::Session;
use crossterm::event::{self, Event, KeyEventKind};

use app::App;

/// Run the calculator until the user quits.
pub fn run(session: Session) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, App::new(session));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> anyhow::Result<()> {
    tracing::info!(plan = %app.session.plan().id, "calculator opened");
    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
