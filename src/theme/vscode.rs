use std::fmt;

use serde::de::{DeserializeSeed, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

// ═══════════════════════════════════════════════════════════════════════════════
// Visual Studio Code color identifiers
// ═══════════════════════════════════════════════════════════════════════════════

/// A VS Code workbench color identifier understood by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    EditorForeground,
    EditorBackground,
    EditorCursorForeground,
    EditorSelectionBackground,
    TerminalBackground,
    TerminalBorder,
    TerminalForeground,
    TerminalAnsiBlack,
    TerminalAnsiBlue,
    TerminalAnsiBrightBlack,
    TerminalAnsiBrightBlue,
    TerminalAnsiBrightCyan,
    TerminalAnsiBrightGreen,
    TerminalAnsiBrightMagenta,
    TerminalAnsiBrightRed,
    TerminalAnsiBrightWhite,
    TerminalAnsiBrightYellow,
    TerminalAnsiCyan,
    TerminalAnsiGreen,
    TerminalAnsiMagenta,
    TerminalAnsiRed,
    TerminalAnsiWhite,
    TerminalAnsiYellow,
    TerminalSelectionBackground,
    TerminalCursorBackground,
    TerminalCursorForeground,
    TerminalDropBackground,
    TerminalTabActiveBorder,
    TerminalCommandDecorationDefaultBackground,
    TerminalCommandDecorationSuccessBackground,
    TerminalCommandDecorationErrorBackground,
}

impl ColorKey {
    pub const COUNT: usize = 31;

    pub const ALL: [ColorKey; Self::COUNT] = [
        ColorKey::EditorForeground,
        ColorKey::EditorBackground,
        ColorKey::EditorCursorForeground,
        ColorKey::EditorSelectionBackground,
        ColorKey::TerminalBackground,
        ColorKey::TerminalBorder,
        ColorKey::TerminalForeground,
        ColorKey::TerminalAnsiBlack,
        ColorKey::TerminalAnsiBlue,
        ColorKey::TerminalAnsiBrightBlack,
        ColorKey::TerminalAnsiBrightBlue,
        ColorKey::TerminalAnsiBrightCyan,
        ColorKey::TerminalAnsiBrightGreen,
        ColorKey::TerminalAnsiBrightMagenta,
        ColorKey::TerminalAnsiBrightRed,
        ColorKey::TerminalAnsiBrightWhite,
        ColorKey::TerminalAnsiBrightYellow,
        ColorKey::TerminalAnsiCyan,
        ColorKey::TerminalAnsiGreen,
        ColorKey::TerminalAnsiMagenta,
        ColorKey::TerminalAnsiRed,
        ColorKey::TerminalAnsiWhite,
        ColorKey::TerminalAnsiYellow,
        ColorKey::TerminalSelectionBackground,
        ColorKey::TerminalCursorBackground,
        ColorKey::TerminalCursorForeground,
        ColorKey::TerminalDropBackground,
        ColorKey::TerminalTabActiveBorder,
        ColorKey::TerminalCommandDecorationDefaultBackground,
        ColorKey::TerminalCommandDecorationSuccessBackground,
        ColorKey::TerminalCommandDecorationErrorBackground,
    ];

    /// Identifier as it appears under `colors` in a theme file.
    pub fn json_key(self) -> &'static str {
        match self {
            ColorKey::EditorForeground => "editor.foreground",
            ColorKey::EditorBackground => "editor.background",
            ColorKey::EditorCursorForeground => "editorCursor.foreground",
            ColorKey::EditorSelectionBackground => "editor.selectionBackground",
            ColorKey::TerminalBackground => "terminal.background",
            ColorKey::TerminalBorder => "terminal.border",
            ColorKey::TerminalForeground => "terminal.foreground",
            ColorKey::TerminalAnsiBlack => "terminal.ansiBlack",
            ColorKey::TerminalAnsiBlue => "terminal.ansiBlue",
            ColorKey::TerminalAnsiBrightBlack => "terminal.ansiBrightBlack",
            ColorKey::TerminalAnsiBrightBlue => "terminal.ansiBrightBlue",
            ColorKey::TerminalAnsiBrightCyan => "terminal.ansiBrightCyan",
            ColorKey::TerminalAnsiBrightGreen => "terminal.ansiBrightGreen",
            ColorKey::TerminalAnsiBrightMagenta => "terminal.ansiBrightMagenta",
            ColorKey::TerminalAnsiBrightRed => "terminal.ansiBrightRed",
            ColorKey::TerminalAnsiBrightWhite => "terminal.ansiBrightWhite",
            ColorKey::TerminalAnsiBrightYellow => "terminal.ansiBrightYellow",
            ColorKey::TerminalAnsiCyan => "terminal.ansiCyan",
            ColorKey::TerminalAnsiGreen => "terminal.ansiGreen",
            ColorKey::TerminalAnsiMagenta => "terminal.ansiMagenta",
            ColorKey::TerminalAnsiRed => "terminal.ansiRed",
            ColorKey::TerminalAnsiWhite => "terminal.ansiWhite",
            ColorKey::TerminalAnsiYellow => "terminal.ansiYellow",
            ColorKey::TerminalSelectionBackground => "terminal.selectionBackground",
            ColorKey::TerminalCursorBackground => "terminalCursor.background",
            ColorKey::TerminalCursorForeground => "terminalCursor.foreground",
            ColorKey::TerminalDropBackground => "terminal.dropBackground",
            ColorKey::TerminalTabActiveBorder => "terminal.tab.activeBorder",
            ColorKey::TerminalCommandDecorationDefaultBackground => {
                "terminalCommandDecoration.defaultBackground"
            }
            ColorKey::TerminalCommandDecorationSuccessBackground => {
                "terminalCommandDecoration.successBackground"
            }
            ColorKey::TerminalCommandDecorationErrorBackground => {
                "terminalCommandDecoration.errorBackground"
            }
        }
    }

    /// Looks up an identifier from a theme file.
    /// An exact match wins; otherwise an ASCII case-insensitive match is accepted.
    pub fn from_json_key(key: &str) -> Option<ColorKey> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.json_key() == key)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|k| k.json_key().eq_ignore_ascii_case(key))
            })
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Theme file structures
// ═══════════════════════════════════════════════════════════════════════════════

/// A VS Code color theme. Only `name` and `colors` are read; `tokenColors`,
/// `semanticTokenColors` and anything else in the file is skipped.
///
/// Top-level keys match like color keys do: exactly, then ignoring ASCII case.
/// A repeated `name` replaces the earlier one, a repeated `colors` section is
/// merged into the earlier one, and `null` anywhere leaves the value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VsCodeTheme {
    pub name: String,
    pub colors: VsCodeColors,
}

/// The `colors` section of a theme, one slot per [`ColorKey`].
/// Keys missing from the file read back as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VsCodeColors {
    values: [String; ColorKey::COUNT],
}

impl VsCodeColors {
    pub fn get(&self, key: ColorKey) -> &str {
        &self.values[key as usize]
    }

    pub fn set(&mut self, key: ColorKey, value: impl Into<String>) {
        self.values[key as usize] = value.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThemeField {
    Name,
    Colors,
}

impl ThemeField {
    const ALL: [ThemeField; 2] = [ThemeField::Name, ThemeField::Colors];

    fn json_key(self) -> &'static str {
        match self {
            ThemeField::Name => "name",
            ThemeField::Colors => "colors",
        }
    }

    fn from_json_key(key: &str) -> Option<ThemeField> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.json_key() == key)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|f| f.json_key().eq_ignore_ascii_case(key))
            })
    }
}

impl<'de> Deserialize<'de> for VsCodeTheme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ThemeVisitor;

        impl<'de> Visitor<'de> for ThemeVisitor {
            type Value = VsCodeTheme;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a VS Code color theme object")
            }

            // a bare `null` file is an empty theme
            fn visit_unit<E>(self) -> Result<VsCodeTheme, E>
            where
                E: serde::de::Error,
            {
                Ok(VsCodeTheme::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<VsCodeTheme, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut theme = VsCodeTheme::default();
                while let Some(key) = map.next_key::<String>()? {
                    match ThemeField::from_json_key(&key) {
                        Some(ThemeField::Name) => {
                            if let Some(name) = map.next_value::<Option<String>>()? {
                                theme.name = name;
                            }
                        }
                        Some(ThemeField::Colors) => {
                            map.next_value_seed(MergeColors(&mut theme.colors))?;
                        }
                        None => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(theme)
            }
        }

        deserializer.deserialize_any(ThemeVisitor)
    }
}

impl<'de> Deserialize<'de> for VsCodeColors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut colors = VsCodeColors::default();
        MergeColors(&mut colors).deserialize(deserializer)?;
        Ok(colors)
    }
}

/// Reads a `colors` section on top of colors already collected.
struct MergeColors<'a>(&'a mut VsCodeColors);

impl<'de> DeserializeSeed<'de> for MergeColors<'_> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for MergeColors<'_> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of color identifiers to color strings")
    }

    // `"colors": null` changes nothing
    fn visit_unit<E>(self) -> Result<(), E>
    where
        E: serde::de::Error,
    {
        Ok(())
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        while let Some(key) = map.next_key::<String>()? {
            match ColorKey::from_json_key(&key) {
                // A later duplicate overwrites, a null keeps what is already there
                Some(color_key) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        self.0.set(color_key, value);
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(())
    }
}
