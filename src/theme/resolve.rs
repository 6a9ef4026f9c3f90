use std::fmt;

use tracing::info;

use super::terminal::{Slot, TerminalTheme};
use super::vscode::{ColorKey, VsCodeColors, VsCodeTheme};

/// How one scheme slot is filled: the first non-empty color in `chain`,
/// or `default` when the theme has none of them.
struct Rule {
    slot: Slot,
    chain: &'static [ColorKey],
    default: &'static str,
}

/// Indexed by `Slot as usize`.
static RULES: [Rule; Slot::COUNT] = [
    Rule {
        slot: Slot::Background,
        chain: &[ColorKey::TerminalBackground, ColorKey::EditorBackground],
        default: "#ff0000",
    },
    Rule {
        slot: Slot::Black,
        chain: &[ColorKey::TerminalAnsiBlack],
        default: "#000000",
    },
    Rule {
        slot: Slot::Blue,
        chain: &[ColorKey::TerminalAnsiBlue],
        default: "#6182b8",
    },
    Rule {
        slot: Slot::BrightBlack,
        chain: &[ColorKey::TerminalAnsiBrightBlack],
        default: "#90a4ae",
    },
    Rule {
        slot: Slot::BrightBlue,
        chain: &[ColorKey::TerminalAnsiBrightBlue],
        default: "#6182b8",
    },
    Rule {
        slot: Slot::BrightCyan,
        chain: &[ColorKey::TerminalAnsiBrightCyan],
        default: "#39adb5",
    },
    Rule {
        slot: Slot::BrightGreen,
        chain: &[ColorKey::TerminalAnsiBrightGreen],
        default: "#91b859",
    },
    Rule {
        slot: Slot::BrightPurple,
        chain: &[ColorKey::TerminalAnsiBrightMagenta],
        default: "#7c4dff",
    },
    Rule {
        slot: Slot::BrightRed,
        chain: &[ColorKey::TerminalAnsiBrightRed],
        default: "#e53935",
    },
    Rule {
        slot: Slot::BrightWhite,
        chain: &[ColorKey::TerminalAnsiBrightWhite],
        default: "#ffffff",
    },
    Rule {
        slot: Slot::BrightYellow,
        chain: &[ColorKey::TerminalAnsiBrightYellow],
        default: "#ffb62c",
    },
    Rule {
        slot: Slot::CursorColor,
        chain: &[ColorKey::TerminalCursorForeground, ColorKey::EditorCursorForeground],
        default: "#ff0000",
    },
    Rule {
        slot: Slot::Cyan,
        chain: &[ColorKey::TerminalAnsiCyan],
        default: "#39adb5",
    },
    Rule {
        slot: Slot::Foreground,
        chain: &[ColorKey::TerminalForeground, ColorKey::EditorForeground],
        default: "#ff0000",
    },
    Rule {
        slot: Slot::Green,
        chain: &[ColorKey::TerminalAnsiGreen],
        default: "#91b859",
    },
    Rule {
        slot: Slot::Purple,
        chain: &[ColorKey::TerminalAnsiMagenta],
        default: "#7c4dff",
    },
    Rule {
        slot: Slot::Red,
        chain: &[ColorKey::TerminalAnsiRed],
        default: "#e53935",
    },
    Rule {
        slot: Slot::SelectionBackground,
        chain: &[
            ColorKey::TerminalSelectionBackground,
            ColorKey::EditorSelectionBackground,
        ],
        default: "#ff0000",
    },
    Rule {
        slot: Slot::White,
        chain: &[ColorKey::TerminalAnsiWhite],
        default: "#ffffff",
    },
    Rule {
        slot: Slot::Yellow,
        chain: &[ColorKey::TerminalAnsiYellow],
        default: "#ffb62c",
    },
];

/// Record of a slot that fell back to its default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultUsed {
    pub slot: Slot,
    pub value: &'static str,
}

impl fmt::Display for DefaultUsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no color for {:?} using default {:?}",
            self.slot.name(),
            self.value
        )
    }
}

fn choose<'a>(colors: &'a VsCodeColors, chain: &[ColorKey]) -> Option<&'a str> {
    chain
        .iter()
        .map(|&key| colors.get(key))
        .find(|value| !value.is_empty())
}

/// Builds the terminal scheme and reports every slot that had to use its default.
pub fn resolve_with_report(source: &VsCodeTheme) -> (TerminalTheme, Vec<DefaultUsed>) {
    let mut theme = TerminalTheme {
        name: source.name.clone(),
        ..TerminalTheme::default()
    };
    let mut defaults = Vec::new();

    for slot in Slot::ALL {
        let rule = &RULES[slot as usize];
        debug_assert_eq!(rule.slot, slot);
        let value = match choose(&source.colors, rule.chain) {
            Some(found) => found,
            None => {
                defaults.push(DefaultUsed {
                    slot,
                    value: rule.default,
                });
                rule.default
            }
        };
        *theme.slot_mut(slot) = value.to_string();
    }

    (theme, defaults)
}

/// Builds the terminal scheme, logging one line per defaulted slot.
pub fn resolve(source: &VsCodeTheme) -> TerminalTheme {
    let (theme, defaults) = resolve_with_report(source);
    for used in &defaults {
        info!("{}", used);
    }
    theme
}
