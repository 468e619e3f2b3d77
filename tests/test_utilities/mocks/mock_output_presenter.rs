use artifact_graph::prelude::*;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

type Documents = Arc<Mutex<BTreeMap<String, Vec<u8>>>>;

/// Mock OutputPresenter keeping every document in memory
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    documents: Documents,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_names(&self) -> Vec<String> {
        self.documents.lock().unwrap().keys().cloned().collect()
    }

    pub fn content(&self, file_name: &str) -> Option<String> {
        self.documents
            .lock()
            .unwrap()
            .get(file_name)
            .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
    }
}

struct DocumentWriter {
    documents: Documents,
    file_name: String,
}

impl Write for DocumentWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.documents
            .lock()
            .unwrap()
            .entry(self.file_name.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn open(&self, file_name: &str) -> Result<Box<dyn Write>> {
        self.documents
            .lock()
            .unwrap()
            .insert(file_name.to_string(), Vec::new());
        Ok(Box::new(DocumentWriter {
            documents: Arc::clone(&self.documents),
            file_name: file_name.to_string(),
        }))
    }

    fn location(&self, file_name: &str) -> String {
        format!("mock://{}", file_name)
    }
}
