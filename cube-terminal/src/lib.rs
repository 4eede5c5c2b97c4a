/// Terminal front end for the spinning point-cloud cube
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::ResetColor,
    terminal,
};
use cube_core::{EventSource, FrameLoop, InputEvent, RenderConfig, RenderError, Timer};
use std::io::{self, stdout, BufWriter};
use std::time::Duration;

pub mod surface;

pub use surface::TerminalSurface;

/// Polls crossterm's event queue without blocking
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        if event::poll(Duration::ZERO)? {
            Ok(Some(map_event(event::read()?)))
        } else {
            Ok(None)
        }
    }
}

/// Translate a terminal event. `q`, `Esc` and `Ctrl+C` close the renderer.
pub fn map_event(event: Event) -> InputEvent {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Esc => InputEvent::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
            _ => InputEvent::KeyPressed(format!("{:?}", code)),
        },
        _ => InputEvent::Other,
    }
}

/// Blocks the thread for the requested frame delay
pub struct SleepTimer;

impl Timer for SleepTimer {
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Main application struct for terminal rendering
pub struct TerminalApp {
    frame_loop: FrameLoop,
}

impl TerminalApp {
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        Ok(Self {
            frame_loop: FrameLoop::new(config)?,
        })
    }

    pub fn run(&mut self) -> Result<(), RenderError> {
        terminal::enable_raw_mode().map_err(RenderError::PlatformInitialization)?;
        if let Err(e) = execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(RenderError::PlatformInitialization(e));
        }

        let result = self.main_loop();

        // Cleanup
        let restored = terminal::disable_raw_mode().and_then(|_| {
            execute!(
                stdout(),
                ResetColor,
                terminal::LeaveAlternateScreen,
                cursor::Show
            )
        });

        result?;
        restored.map_err(RenderError::Surface)
    }

    fn main_loop(&mut self) -> Result<(), RenderError> {
        let (width, height) = (self.frame_loop.config().width, self.frame_loop.config().height);
        let mut surface = TerminalSurface::new(BufWriter::new(stdout()), width, height)
            .map_err(RenderError::PlatformInitialization)?;

        self.frame_loop
            .run(&mut surface, &mut TerminalEvents, &mut SleepTimer)
    }
}
