use crate::model::QrCodeRecord;

/// The mutually-exclusive panels. Exactly one is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Generate,
    List,
    Data,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Generate, Tab::List, Tab::Data];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Generate => "Generate QR Code",
            Tab::List => "My QR Codes",
            Tab::Data => "Server Data",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Generate => 0,
            Tab::List => 1,
            Tab::Data => 2,
        }
    }

    pub fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// Editable text with a char-indexed cursor. May hold newlines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        let mut field = Self::default();
        field.set(value.into());
        field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn set(&mut self, value: String) {
        self.value = value;
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_at(self.cursor);
        self.value.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let at = self.byte_at(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Zero-based (line, column) of the cursor, in chars.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.value.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

/// What the Generate tab shows after a successful upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedQr {
    pub id: String,
    pub filename: String,
    /// Already resolved against the base URL.
    pub image_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadPanel {
    pub file: TextField,
    pub message: Option<Message>,
    pub generated: Option<GeneratedQr>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Empty,
    Loaded(Vec<QrCodeRecord>),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListPanel {
    pub status: ListStatus,
    pub selected: usize,
    /// Inline result of the last update, shown above the list.
    pub notice: Option<Message>,
}

impl ListPanel {
    pub fn records(&self) -> &[QrCodeRecord] {
        match &self.status {
            ListStatus::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn selected_record(&self) -> Option<&QrCodeRecord> {
        self.records().get(self.selected)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let n = self.records().len();
        if n == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1).min(n - 1);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DataPanel {
    #[default]
    Idle,
    Loading,
    /// Pretty-printed JSON, exactly as the server sent it.
    Loaded(String),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditModal {
    pub id: String,
    pub field: TextField,
    pub message: Option<Message>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
}

/// Everything the renderer needs. Nothing is read back from the screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub base_url: String,
    pub active_tab: Tab,
    pub upload: UploadPanel,
    pub list: ListPanel,
    pub data: DataPanel,
    pub edit: Option<EditModal>,
    pub confirm: Option<PendingDelete>,
    /// Blocking acknowledgment; must be dismissed before other input.
    pub alert: Option<String>,
}

impl ViewState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
