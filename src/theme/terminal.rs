use serde::Serialize;

/// One color field of a Windows Terminal color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Background,
    Black,
    Blue,
    BrightBlack,
    BrightBlue,
    BrightCyan,
    BrightGreen,
    BrightPurple,
    BrightRed,
    BrightWhite,
    BrightYellow,
    CursorColor,
    Cyan,
    Foreground,
    Green,
    Purple,
    Red,
    SelectionBackground,
    White,
    Yellow,
}

impl Slot {
    pub const COUNT: usize = 20;

    /// Every slot, in the order the scheme is written out.
    pub const ALL: [Slot; Self::COUNT] = [
        Slot::Background,
        Slot::Black,
        Slot::Blue,
        Slot::BrightBlack,
        Slot::BrightBlue,
        Slot::BrightCyan,
        Slot::BrightGreen,
        Slot::BrightPurple,
        Slot::BrightRed,
        Slot::BrightWhite,
        Slot::BrightYellow,
        Slot::CursorColor,
        Slot::Cyan,
        Slot::Foreground,
        Slot::Green,
        Slot::Purple,
        Slot::Red,
        Slot::SelectionBackground,
        Slot::White,
        Slot::Yellow,
    ];

    /// Field name in the scheme JSON, also used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Background => "background",
            Slot::Black => "black",
            Slot::Blue => "blue",
            Slot::BrightBlack => "brightBlack",
            Slot::BrightBlue => "brightBlue",
            Slot::BrightCyan => "brightCyan",
            Slot::BrightGreen => "brightGreen",
            Slot::BrightPurple => "brightPurple",
            Slot::BrightRed => "brightRed",
            Slot::BrightWhite => "brightWhite",
            Slot::BrightYellow => "brightYellow",
            Slot::CursorColor => "cursorColor",
            Slot::Cyan => "cyan",
            Slot::Foreground => "foreground",
            Slot::Green => "green",
            Slot::Purple => "purple",
            Slot::Red => "red",
            Slot::SelectionBackground => "selectionBackground",
            Slot::White => "white",
            Slot::Yellow => "yellow",
        }
    }
}

/// A Windows Terminal color scheme.
///
/// Field order is the serialization order and must stay in step with [`Slot::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalTheme {
    pub name: String,
    pub background: String,
    pub black: String,
    pub blue: String,
    pub bright_black: String,
    pub bright_blue: String,
    pub bright_cyan: String,
    pub bright_green: String,
    pub bright_purple: String,
    pub bright_red: String,
    pub bright_white: String,
    pub bright_yellow: String,
    pub cursor_color: String,
    pub cyan: String,
    pub foreground: String,
    pub green: String,
    pub purple: String,
    pub red: String,
    pub selection_background: String,
    pub white: String,
    pub yellow: String,
}

impl TerminalTheme {
    pub fn slot_mut(&mut self, slot: Slot) -> &mut String {
        match slot {
            Slot::Background => &mut self.background,
            Slot::Black => &mut self.black,
            Slot::Blue => &mut self.blue,
            Slot::BrightBlack => &mut self.bright_black,
            Slot::BrightBlue => &mut self.bright_blue,
            Slot::BrightCyan => &mut self.bright_cyan,
            Slot::BrightGreen => &mut self.bright_green,
            Slot::BrightPurple => &mut self.bright_purple,
            Slot::BrightRed => &mut self.bright_red,
            Slot::BrightWhite => &mut self.bright_white,
            Slot::BrightYellow => &mut self.bright_yellow,
            Slot::CursorColor => &mut self.cursor_color,
            Slot::Cyan => &mut self.cyan,
            Slot::Foreground => &mut self.foreground,
            Slot::Green => &mut self.green,
            Slot::Purple => &mut self.purple,
            Slot::Red => &mut self.red,
            Slot::SelectionBackground => &mut self.selection_background,
            Slot::White => &mut self.white,
            Slot::Yellow => &mut self.yellow,
        }
    }
}
