// Drives a real Editor against an in-memory terminal

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quill::app::Editor;
use quill::config::Config;
use quill::model::filesystem::StdFileSystem;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Editor plus a `TestBackend` terminal, working inside a scratch directory
pub struct EditorTestHarness {
    editor: Editor,
    terminal: Terminal<TestBackend>,
    project_dir: PathBuf,
    _temp_dir: TempDir,
}

impl EditorTestHarness {
    /// Create a harness with the default config
    pub fn new(width: u16, height: u16) -> anyhow::Result<Self> {
        Self::with_config(width, height, Config::default())
    }

    pub fn with_config(width: u16, height: u16, config: Config) -> anyhow::Result<Self> {
        super::tracing::init_tracing_from_env();
        let temp_dir = tempfile::tempdir()?;
        let project_dir = temp_dir.path().join("project");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir_all(&project_dir)?;
        std::fs::create_dir_all(&home_dir)?;

        let editor = Editor::new(config, Arc::new(StdFileSystem), project_dir.clone())
            .with_home_dir(Some(home_dir));
        let terminal = Terminal::new(TestBackend::new(width, height))?;

        let mut harness = Self {
            editor,
            terminal,
            project_dir,
            _temp_dir: temp_dir,
        };
        harness.render()?;
        Ok(harness)
    }

    /// Directory pickers start in
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Write a file into the project directory
    pub fn create_file(&self, name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.project_dir.join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Send one key and redraw
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<()> {
        self.editor.handle_key(KeyEvent::new(code, modifiers));
        self.render()
    }

    /// Type text one key at a time (`\n` becomes Enter)
    pub fn type_text(&mut self, text: &str) -> anyhow::Result<()> {
        for c in text.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            self.editor.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        }
        self.render()
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let editor = &mut self.editor;
        self.terminal.draw(|frame| editor.render(frame))?;
        Ok(())
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// The whole screen as text, one line per row
    pub fn screen_to_string(&self) -> String {
        let buffer = self.buffer();
        let mut rows = Vec::with_capacity(buffer.area.height as usize);
        for y in 0..buffer.area.height {
            rows.push(self.row_text_in(buffer, y));
        }
        rows.join("\n")
    }

    /// Text of a single screen row
    pub fn screen_row_text(&self, y: u16) -> String {
        self.row_text_in(self.buffer(), y)
    }

    fn row_text_in(&self, buffer: &Buffer, y: u16) -> String {
        let mut row = String::new();
        for x in 0..buffer.area.width {
            row.push_str(buffer[(x, y)].symbol());
        }
        row
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain {:?}\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain {:?}\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn should_quit(&self) -> bool {
        self.editor.should_quit()
    }

    /// Content of the active tab
    pub fn get_buffer_content(&self) -> Option<String> {
        let tabs = self.editor.tabs();
        tabs.active_tab().and_then(|id| tabs.content(id))
    }

    /// Label of the active tab
    pub fn active_label(&self) -> Option<String> {
        let tabs = self.editor.tabs();
        tabs.active_tab().and_then(|id| tabs.label(id))
    }
}
