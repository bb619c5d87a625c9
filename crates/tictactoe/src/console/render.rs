//! Rendering of session events to the terminal, with bell cues.

use crate::OutputFormat;
use tictactoe_core::{Board, Mark, SessionEvent, Status};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Audible cue derived from an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A mark was placed.
    Move,
    /// A game was won.
    Win,
}

impl Cue {
    fn bell(self) -> &'static str {
        match self {
            Cue::Move => "\x07",
            Cue::Win => "\x07\x07",
        }
    }
}

/// Turns session events into terminal output.
#[derive(Debug)]
pub struct Renderer {
    format: OutputFormat,
    sound: bool,
    placed: usize,
}

impl Renderer {
    /// Creates a renderer; `sound` enables bell cues in text output.
    pub fn new(format: OutputFormat, sound: bool) -> Self {
        Self {
            format,
            sound,
            placed: 0,
        }
    }

    /// Cue for an event, if it warrants one.
    ///
    /// Board snapshots that add a mark cue a move; a fresh board does not.
    pub fn cue(&mut self, event: &SessionEvent) -> Option<Cue> {
        match event {
            SessionEvent::BoardChanged { board } => {
                let placed = board.count(Mark::X) + board.count(Mark::O);
                let grew = placed > self.placed;
                self.placed = placed;
                grew.then_some(Cue::Move)
            }
            SessionEvent::StatusChanged { status: Status::Won(_) } => Some(Cue::Win),
            SessionEvent::StatusChanged { .. } => None,
        }
    }

    /// Output for one event.
    pub fn render(&mut self, event: &SessionEvent) -> Result<String, serde_json::Error> {
        let cue = self.cue(event);
        match self.format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(event)?)),
            OutputFormat::Text => {
                let mut out = String::new();
                if self.sound
                    && let Some(cue) = cue
                {
                    out.push_str(cue.bell());
                }
                match event {
                    SessionEvent::BoardChanged { board } => out.push_str(&grid(board)),
                    SessionEvent::StatusChanged { status } => {
                        out.push_str(&status.to_string());
                        out.push('\n');
                    }
                }
                Ok(out)
            }
        }
    }

    /// Writes every event from `events` to `out` until the channel closes.
    #[instrument(skip_all, fields(format = %self.format, sound = self.sound))]
    pub async fn run<W>(
        mut self,
        mut events: mpsc::UnboundedReceiver<SessionEvent>,
        mut out: W,
    ) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while let Some(event) = events.recv().await {
            let text = self.render(&event)?;
            out.write_all(text.as_bytes()).await?;
            out.flush().await?;
        }
        debug!("Event stream closed");
        Ok(())
    }
}

fn grid(board: &Board) -> String {
    format!("\n{}\n\n", board.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Position;

    fn board(s: &str) -> SessionEvent {
        SessionEvent::BoardChanged {
            board: s.parse().unwrap(),
        }
    }

    #[test]
    fn test_cues() {
        let mut renderer = Renderer::new(OutputFormat::Text, true);
        assert_eq!(renderer.cue(&board(".........")), None);
        assert_eq!(renderer.cue(&board("X........")), Some(Cue::Move));
        assert_eq!(
            renderer.cue(&SessionEvent::StatusChanged { status: Status::Won(Mark::X) }),
            Some(Cue::Win)
        );
        assert_eq!(
            renderer.cue(&SessionEvent::StatusChanged { status: Status::Draw }),
            None
        );
        // Reset back to an empty board is silent.
        assert_eq!(renderer.cue(&board(".........")), None);
    }

    #[test]
    fn test_text_render_with_and_without_sound() {
        let mut loud = Renderer::new(OutputFormat::Text, true);
        assert_eq!(
            loud.render(&board("X........")).unwrap(),
            "\x07\nX|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8\n\n"
        );

        let mut muted = Renderer::new(OutputFormat::Text, false);
        assert_eq!(
            muted.render(&board("X........")).unwrap(),
            "\nX|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8\n\n"
        );
        assert_eq!(
            muted
                .render(&SessionEvent::StatusChanged { status: Status::Turn(Mark::O) })
                .unwrap(),
            "Current turn: O\n"
        );
    }

    #[test]
    fn test_json_render_has_no_bells() {
        let mut renderer = Renderer::new(OutputFormat::Json, true);
        let mut b = tictactoe_core::Board::new();
        b.place(Position::Center, Mark::X).unwrap();
        let line = renderer
            .render(&SessionEvent::BoardChanged { board: b })
            .unwrap();
        assert!(!line.contains('\x07'));
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["event"], "board_changed");
        assert_eq!(value["board"][4], "X");
        assert!(value["board"][0].is_null());
        assert_eq!(value["board"].as_array().map(Vec::len), Some(9));
    }

    #[tokio::test]
    async fn test_run_writes_until_channel_closes() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(SessionEvent::StatusChanged { status: Status::Draw }).unwrap();
        drop(tx);

        let mut out = Vec::new();
        Renderer::new(OutputFormat::Text, false)
            .run(rx, &mut out)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Draw\n");
    }
}
