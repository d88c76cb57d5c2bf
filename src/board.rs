// src/board.rs
use crate::error::{BoardError, Result};
use async_trait::async_trait;
use bson::{Bson, Document};
use std::fmt;
use tracing::{debug, info, warn};

/// Storage operations the type accessor needs from a board collection.
///
/// Lookups match on `title` and return the first document in the store's
/// natural order. Titles are not unique, so callers that care about ambiguity
/// should consult [`BoardStore::count_boards`].
#[async_trait]
pub trait BoardStore: Send + Sync {
    async fn find_board(&self, title: &str) -> Result<Option<Document>>;

    async fn count_boards(&self, title: &str) -> Result<u64>;

    /// Sets `type` on the first board matching `title`, leaving every other
    /// field untouched.
    async fn set_board_type(&self, title: &str, new_type: &str) -> Result<UpdateCount>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateCount {
    pub matched: u64,
    pub modified: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub title: String,
    pub r#type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Board),
    NotFound,
    FieldMissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    Unchanged {
        title: String,
        r#type: String,
    },
    Updated {
        title: String,
        from: String,
        to: String,
        count: UpdateCount,
    },
    NotFound,
    FieldMissing,
}

impl fmt::Display for SetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetOutcome::Unchanged { title, r#type } => {
                write!(f, "No change needed, type of {} already {}", title, r#type)
            }
            SetOutcome::Updated { to, .. } => write!(f, "... updated to {}", to),
            SetOutcome::NotFound => write!(f, "No board found, nothing updated"),
            SetOutcome::FieldMissing => write!(f, "Board has no type field, nothing updated"),
        }
    }
}

fn board_from(title: &str, doc: Option<Document>) -> Result<Lookup> {
    let Some(doc) = doc else {
        return Ok(Lookup::NotFound);
    };

    match doc.get("type") {
        None => Ok(Lookup::FieldMissing),
        Some(Bson::String(kind)) => Ok(Lookup::Found(Board {
            title: title.to_string(),
            r#type: kind.clone(),
        })),
        Some(other) => Err(BoardError::TypeNotString {
            title: title.to_string(),
            found: other.element_type(),
        }),
    }
}

/// Returns the type of the first board titled `title`.
pub async fn get_type<S: BoardStore + ?Sized>(store: &S, title: &str) -> Result<Lookup> {
    debug!(title, "looking up board");
    let doc = store.find_board(title).await?;
    board_from(title, doc)
}

pub async fn count_matches<S: BoardStore + ?Sized>(store: &S, title: &str) -> Result<u64> {
    store.count_boards(title).await
}

/// Changes the type of the board titled `title` to `new_type`.
///
/// The board is fetched again before writing and at most one update is
/// issued. The read and the write are not atomic: a change made by another
/// client in between is overwritten without notice.
pub async fn set_type<S: BoardStore + ?Sized>(
    store: &S,
    title: &str,
    new_type: &str,
) -> Result<SetOutcome> {
    let current = match get_type(store, title).await? {
        Lookup::Found(board) => board,
        Lookup::NotFound => return Ok(SetOutcome::NotFound),
        Lookup::FieldMissing => return Ok(SetOutcome::FieldMissing),
    };

    if current.r#type == new_type {
        debug!(title, kind = new_type, "type already set, skipping write");
        return Ok(SetOutcome::Unchanged {
            title: current.title,
            r#type: current.r#type,
        });
    }

    let count = store.set_board_type(title, new_type).await?;
    if count.matched == 0 {
        warn!(title, "board disappeared before the update, nothing was written");
    } else {
        info!(title, from = %current.r#type, to = new_type, "board type updated");
    }

    Ok(SetOutcome::Updated {
        title: current.title,
        from: current.r#type,
        to: new_type.to_string(),
        count,
    })
}
