//! GameView: builds the screen content from a snapshot.
//!
//! Pure string assembly so the layout can be unit tested without a terminal.

use crate::core::snapshot::GameSnapshot;
use crate::types::Difficulty;

/// Styling class of a view line; the renderer maps these to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Message,
    Score,
    Reels,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub kind: LineKind,
    pub text: String,
}

impl ViewLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the snapshot and the live code-field content into lines.
    pub fn render(&self, snap: &GameSnapshot, code: &str) -> Vec<ViewLine> {
        let mut lines = Vec::with_capacity(10);

        lines.push(ViewLine::new(LineKind::Title, "Spin Wars"));

        // The original hides the message banner entirely when empty.
        if !snap.message.is_empty() {
            lines.push(ViewLine::new(LineKind::Message, snap.message.clone()));
        }

        lines.push(ViewLine::new(
            LineKind::Score,
            format!("Points = {}", snap.points),
        ));
        lines.push(ViewLine::new(
            LineKind::Score,
            format!("Streak Record = {}", snap.streak_record),
        ));

        let reels = snap
            .reels
            .iter()
            .map(|s| format!("[ {:^10} ]", s.as_str()))
            .collect::<Vec<_>>()
            .join(" ");
        let spin_marker = if snap.spinning { "  *" } else { "" };
        lines.push(ViewLine::new(
            LineKind::Reels,
            format!("{}{}", reels, spin_marker),
        ));

        let difficulty = match snap.difficulty {
            Difficulty::Normal => "Normal",
            Difficulty::Master => "Master",
        };
        let master_hint = if snap.master_unlocked {
            "  (1 normal / 2 master)"
        } else {
            "  (1 normal)"
        };
        lines.push(ViewLine::new(
            LineKind::Info,
            format!("Difficulty: {}{}", difficulty, master_hint),
        ));

        lines.push(ViewLine::new(LineKind::Info, format!("Code: {}", code)));
        lines.push(ViewLine::new(
            LineKind::Info,
            "space spin   0 clear   esc quit",
        ));

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::GameState;
    use crate::types::Symbol;

    fn snap() -> GameSnapshot {
        GameState::new().snapshot()
    }

    fn texts(lines: &[ViewLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn empty_message_line_is_hidden() {
        let view = GameView;
        let lines = view.render(&snap(), "");
        assert!(lines.iter().all(|l| l.kind != LineKind::Message));
    }

    #[test]
    fn message_line_shows_when_present() {
        let view = GameView;
        let mut s = snap();
        s.message = "Just one more win".to_string();
        let lines = view.render(&s, "");
        assert!(lines
            .iter()
            .any(|l| l.kind == LineKind::Message && l.text == "Just one more win"));
    }

    #[test]
    fn scores_and_reels_are_rendered() {
        let view = GameView;
        let mut s = snap();
        s.points = 7;
        s.streak_record = 3;
        s.reels = [Symbol::Apple; 3];

        let lines = view.render(&s, "");
        let texts = texts(&lines);
        assert!(texts.contains(&"Points = 7"));
        assert!(texts.contains(&"Streak Record = 3"));
        assert!(texts
            .iter()
            .any(|t| t.matches("apple").count() == 3 && !t.contains("banana")));
    }

    #[test]
    fn master_hint_appears_once_unlocked() {
        let view = GameView;
        let mut s = snap();

        let locked = view.render(&s, "");
        assert!(!texts(&locked).iter().any(|t| t.contains("2 master")));

        s.master_unlocked = true;
        let unlocked = view.render(&s, "");
        assert!(texts(&unlocked).iter().any(|t| t.contains("2 master")));
    }

    #[test]
    fn code_field_echoes_the_buffer() {
        let view = GameView;
        let lines = view.render(&snap(), "Cod");
        assert!(texts(&lines).contains(&"Code: Cod"));
    }

    #[test]
    fn spin_marker_tracks_spinning_flag() {
        let view = GameView;
        let mut s = snap();
        s.spinning = true;
        let lines = view.render(&s, "");
        let reels_line = lines.iter().find(|l| l.kind == LineKind::Reels).unwrap();
        assert!(reels_line.text.ends_with('*'));
    }
}
