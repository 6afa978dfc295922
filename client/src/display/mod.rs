mod sleeper;

use std::{
    io::{self, Stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use liblife::{Observer, Universe};
use sleeper::Sleeper;
use tracing::{error, warn};

const ALIVE_CHAR: char = 'o';

/// Draws each generation on the alternate screen. The terminal is restored on drop.
pub struct TerminalDisplay {
    out: Stdout,
    sleeper: Sleeper,
}

impl TerminalDisplay {
    pub fn new(delay: Duration) -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide)?;

        Ok(Self {
            out,
            sleeper: Sleeper::new(delay),
        })
    }

    fn draw(&mut self, universe: &Universe) -> io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))?;

        for pos in universe.live_cells() {
            // Cells past the terminal's addressable range can't be drawn anyway.
            let (Ok(x), Ok(y)) = (u16::try_from(pos.col), u16::try_from(pos.row)) else {
                continue;
            };

            queue!(self.out, cursor::MoveTo(x, y), Print(ALIVE_CHAR))?;
        }

        self.out.flush()
    }
}

impl Observer for TerminalDisplay {
    fn observe(&mut self, generation: u64, universe: &Universe) {
        if let Err(err) = self.draw(universe) {
            warn!(?err, generation, "failed to draw generation");
        }

        self.sleeper.sleep();
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, cursor::Show, LeaveAlternateScreen) {
            error!(?err, "failed to restore terminal");
        }
    }
}
