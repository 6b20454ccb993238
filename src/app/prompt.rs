/// Which field the add-song prompt is collecting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptStage {
    Name,
    /// The name has been entered; waiting for the file path.
    Path { name: String },
}

/// Modal two-step input for adding a song. Lives inside `App` while open so
/// the event loop keeps drawing frames between keystrokes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddSongPrompt {
    pub stage: PromptStage,
    pub buffer: String,
}

impl Default for AddSongPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl AddSongPrompt {
    pub fn new() -> Self {
        Self {
            stage: PromptStage::Name,
            buffer: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self.stage {
            PromptStage::Name => "Enter song name:",
            PromptStage::Path { .. } => "Enter song file path:",
        }
    }

    pub fn push(&mut self, c: char) {
        if !c.is_control() {
            self.buffer.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.buffer.pop();
    }

    /// Confirm the current field.
    ///
    /// Returns the `(name, path)` pair once both fields are filled in. Blank
    /// input is ignored and leaves the prompt where it was.
    pub fn submit(&mut self) -> Option<(String, String)> {
        let value = self.buffer.trim().to_string();
        if value.is_empty() {
            return None;
        }
        self.buffer.clear();

        match std::mem::replace(&mut self.stage, PromptStage::Name) {
            PromptStage::Name => {
                self.stage = PromptStage::Path { name: value };
                None
            }
            PromptStage::Path { name } => Some((name, value)),
        }
    }
}
