pub mod resolve;
pub mod terminal;
pub mod vscode;

pub use resolve::resolve;
pub use terminal::TerminalTheme;
pub use vscode::VsCodeTheme;
