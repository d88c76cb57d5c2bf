#![allow(dead_code)]

use async_trait::async_trait;
use bson::{doc, Document};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use wekan_type::{BoardStore, UpdateCount};

/// In-memory board collection that records how many writes it received.
#[derive(Default)]
pub struct MemoryBoards {
    docs: Mutex<Vec<Document>>,
    writes: AtomicUsize,
}

impl MemoryBoards {
    pub fn with(docs: Vec<Document>) -> Self {
        Self {
            docs: Mutex::new(docs),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn snapshot(&self) -> Vec<Document> {
        self.docs.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

fn has_title(doc: &Document, title: &str) -> bool {
    doc.get_str("title").map(|t| t == title).unwrap_or(false)
}

#[async_trait]
impl BoardStore for MemoryBoards {
    async fn find_board(&self, title: &str) -> wekan_type::Result<Option<Document>> {
        let docs = self.docs.lock().unwrap();
        Ok(docs.iter().find(|d| has_title(d, title)).cloned())
    }

    async fn count_boards(&self, title: &str) -> wekan_type::Result<u64> {
        let docs = self.docs.lock().unwrap();
        Ok(docs.iter().filter(|d| has_title(d, title)).count() as u64)
    }

    async fn set_board_type(&self, title: &str, new_type: &str) -> wekan_type::Result<UpdateCount> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|d| has_title(d, title)) {
            Some(doc) => {
                let modified = doc.get_str("type").map(|t| t != new_type).unwrap_or(true);
                doc.insert("type", new_type);
                Ok(UpdateCount {
                    matched: 1,
                    modified: modified as u64,
                })
            }
            None => Ok(UpdateCount::default()),
        }
    }
}

pub fn sprint_board() -> Document {
    doc! {
        "_id": "b1",
        "title": "Sprint Board",
        "type": "template-container",
        "archived": false,
        "members": [ { "userId": "u1", "isAdmin": true } ],
    }
}

/// Loses its boards between the read and the write, so updates match nothing.
pub struct VanishingBoards(pub MemoryBoards);

#[async_trait]
impl BoardStore for VanishingBoards {
    async fn find_board(&self, title: &str) -> wekan_type::Result<Option<Document>> {
        self.0.find_board(title).await
    }

    async fn count_boards(&self, title: &str) -> wekan_type::Result<u64> {
        self.0.count_boards(title).await
    }

    async fn set_board_type(&self, _title: &str, _new_type: &str) -> wekan_type::Result<UpdateCount> {
        self.0.writes.fetch_add(1, Ordering::SeqCst);
        self.0.docs.lock().unwrap().clear();
        Ok(UpdateCount::default())
    }
}
