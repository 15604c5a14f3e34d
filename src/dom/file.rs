use std::sync::{Arc, Mutex};

/// The file currently held by a file input.
#[derive(Clone)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: &str, bytes: Vec<u8>) -> Self {
        SelectedFile {
            name: name.to_string(),
            bytes,
        }
    }
}

/// Handle to a file input. Holds at most one selection; selecting again
/// replaces the previous file.
#[derive(Clone, Default)]
pub struct FileInput {
    inner: Arc<Mutex<Option<SelectedFile>>>,
}

impl FileInput {
    pub fn new() -> Self {
        FileInput::default()
    }

    pub fn select(&self, file: SelectedFile) {
        *self.inner.lock().unwrap() = Some(file);
    }

    pub fn clear(&self) {
        *self.inner.lock().unwrap() = None;
    }

    pub fn file(&self) -> Option<SelectedFile> {
        self.inner.lock().unwrap().clone()
    }
}
