use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::error::TercoError;
use crate::theme::{resolve, TerminalTheme, VsCodeTheme};

/// Reads a VS Code theme file and returns the Windows Terminal scheme as JSON.
pub fn convert_file(path: &Path) -> Result<Vec<u8>, TercoError> {
    let content = fs::read(path).map_err(|source| TercoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let theme = vscode_to_terminal(&content)?;
    to_json(&theme)
}

/// Invalid UTF-8 in the input is replaced with U+FFFD rather than rejected.
pub fn vscode_to_terminal(content: &[u8]) -> Result<TerminalTheme, TercoError> {
    let content = String::from_utf8_lossy(content);
    let vscode: VsCodeTheme = serde_json::from_str(&content).map_err(TercoError::Parse)?;
    Ok(resolve(&vscode))
}

/// Pretty-prints a scheme with two-space indentation and HTML-safe strings.
pub fn to_json(theme: &TerminalTheme) -> Result<Vec<u8>, TercoError> {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, HtmlSafeFormatter::new());
    theme.serialize(&mut ser).map_err(TercoError::Serialize)?;
    Ok(out)
}

/// [`PrettyFormatter`] that also writes `<`, `>`, `&`, U+2028 and U+2029 as
/// `\u` escapes.
struct HtmlSafeFormatter {
    inner: PrettyFormatter<'static>,
}

impl HtmlSafeFormatter {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

fn html_escape(ch: char) -> Option<&'static str> {
    match ch {
        '<' => Some("\\u003c"),
        '>' => Some("\\u003e"),
        '&' => Some("\\u0026"),
        '\u{2028}' => Some("\\u2028"),
        '\u{2029}' => Some("\\u2029"),
        _ => None,
    }
}

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            let Some(escaped) = html_escape(ch) else {
                continue;
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ALL_DEFAULTS: &str = r##"{
  "name": "",
  "background": "#ff0000",
  "black": "#000000",
  "blue": "#6182b8",
  "brightBlack": "#90a4ae",
  "brightBlue": "#6182b8",
  "brightCyan": "#39adb5",
  "brightGreen": "#91b859",
  "brightPurple": "#7c4dff",
  "brightRed": "#e53935",
  "brightWhite": "#ffffff",
  "brightYellow": "#ffb62c",
  "cursorColor": "#ff0000",
  "cyan": "#39adb5",
  "foreground": "#ff0000",
  "green": "#91b859",
  "purple": "#7c4dff",
  "red": "#e53935",
  "selectionBackground": "#ff0000",
  "white": "#ffffff",
  "yellow": "#ffb62c"
}"##;

    fn convert_str(json: &str) -> String {
        let theme = vscode_to_terminal(json.as_bytes()).unwrap();
        String::from_utf8(to_json(&theme).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_theme_output_is_exact() {
        assert_eq!(convert_str("{}"), ALL_DEFAULTS);
        assert_eq!(convert_str(r#"{"colors": {}}"#), ALL_DEFAULTS);
    }

    #[test]
    fn test_end_to_end_example() {
        let json = r##"{"name":"T","colors":{"terminal.background":"#111111","terminal.ansiBlack":"#222222"}}"##;
        let theme = vscode_to_terminal(json.as_bytes()).unwrap();
        assert_eq!(theme.name, "T");
        assert_eq!(theme.background, "#111111");
        assert_eq!(theme.black, "#222222");
        assert_eq!(theme.blue, "#6182b8");
        assert_eq!(theme.foreground, "#ff0000");

        let out = String::from_utf8(to_json(&theme).unwrap()).unwrap();
        assert!(out.contains(r#""name": "T""#));
        assert!(out.contains(r##""background": "#111111""##));
        assert!(out.contains(r##""black": "#222222""##));
        assert!(out.contains(r##""blue": "#6182b8""##));
    }

    #[test]
    fn test_html_characters_are_escaped() {
        let out = convert_str(r#"{"name": "Tom & Jerry <dark>\u2028"}"#);
        assert!(out.contains(r#""name": "Tom \u0026 Jerry \u003cdark\u003e\u2028""#));
    }

    #[test]
    fn test_other_characters_pass_through() {
        let out = convert_str(r#"{"name": "Ros\u00e9 \"Pine\"\t"}"#);
        assert!(out.contains("\"name\": \"Rosé \\\"Pine\\\"\\t\""));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let theme = vscode_to_terminal(b"{\"name\": \"Caf\xe9 Noir\"}").unwrap();
        assert_eq!(theme.name, "Caf\u{FFFD} Noir");

        let out = String::from_utf8(to_json(&theme).unwrap()).unwrap();
        assert!(out.contains("\"name\": \"Caf\u{FFFD} Noir\""));
    }

    #[test]
    fn test_output_parses_back() {
        let out = convert_str(r#"{"name": "a<b"}"#);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "a<b");
    }

    #[test]
    fn test_malformed_input_is_parse_error() {
        let err = vscode_to_terminal(b"{\"name\": ").unwrap_err();
        assert!(matches!(err, TercoError::Parse(_)));

        // comments are not accepted
        let err = vscode_to_terminal(b"// theme\n{}").unwrap_err();
        assert!(matches!(err, TercoError::Parse(_)));
    }

    #[test]
    fn test_convert_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br##"{"name": "Lighter", "colors": {"editor.foreground": "#90a4ae"}}"##)
            .unwrap();
        let out = String::from_utf8(convert_file(file.path()).unwrap()).unwrap();
        assert!(out.starts_with("{\n  \"name\": \"Lighter\",\n  \"background\": \"#ff0000\","));
        assert!(out.contains(r##""foreground": "#90a4ae""##));
        assert!(out.ends_with("\n}"));
    }

    #[test]
    fn test_convert_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = convert_file(&path).unwrap_err();
        match err {
            TercoError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
