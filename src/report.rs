// src/report.rs
use crate::board::{count_matches, get_type, set_type, BoardStore, Lookup, SetOutcome};
use crate::error::{BoardError, Result};
use std::io::Write;

/// Prints the type of the board titled `title` to `out` and, when `new_type`
/// is given, applies it and prints the outcome. Operator warnings go to `err`.
///
/// A missing board or a board without a type field is an error.
pub async fn run<S, O, E>(
    boards: &S,
    title: &str,
    new_type: Option<&str>,
    out: &mut O,
    err: &mut E,
) -> Result<()>
where
    S: BoardStore + ?Sized,
    O: Write,
    E: Write,
{
    let board = match get_type(boards, title).await? {
        Lookup::Found(board) => board,
        Lookup::NotFound => return Err(BoardError::NotFound { title: title.to_string() }),
        Lookup::FieldMissing => {
            return Err(BoardError::FieldMissing { title: title.to_string() })
        }
    };

    let matches = count_matches(boards, title).await?;
    if matches > 1 {
        writeln!(
            err,
            "⚠️  {} boards share the title '{}', using the first one",
            matches, title
        )?;
    }

    writeln!(out, "Type of board {}: {}", board.title, board.r#type)?;

    if let Some(new_type) = new_type {
        let outcome = set_type(boards, title, new_type).await?;
        if let SetOutcome::Updated { count, .. } = &outcome {
            if count.matched == 0 {
                writeln!(err, "⚠️  Board '{}' was not matched by the update", title)?;
            }
        }
        writeln!(out, "{}", outcome)?;
    }

    Ok(())
}
