use crate::errors::AppError;
use crate::models::{AppData, Note, NoteInput, NoteStats};
use tracing::info;
use uuid::Uuid;

/// Splits the comma separated tag field, dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// New notes go to the front so the list reads most recent first.
pub fn create_note(data: &mut AppData, input: NoteInput, stamp: &str) -> Result<Note, AppError> {
    let (title, content, tags) = validate(input)?;
    let note = Note {
        id: Uuid::new_v4().to_string(),
        title,
        content,
        tags,
        created_at: stamp.to_string(),
        updated_at: stamp.to_string(),
    };
    data.notes.insert(0, note.clone());
    info!(id = %note.id, "note created");
    Ok(note)
}

pub fn update_note(
    data: &mut AppData,
    id: &str,
    input: NoteInput,
    stamp: &str,
) -> Result<Note, AppError> {
    let (title, content, tags) = validate(input)?;
    let note = data
        .notes
        .iter_mut()
        .find(|note| note.id == id)
        .ok_or_else(|| AppError::not_found("note", id))?;
    note.title = title;
    note.content = content;
    note.tags = tags;
    note.updated_at = stamp.to_string();
    info!(id, "note updated");
    Ok(note.clone())
}

pub fn delete_note(data: &mut AppData, id: &str) -> Result<(), AppError> {
    let before = data.notes.len();
    data.notes.retain(|note| note.id != id);
    if data.notes.len() == before {
        return Err(AppError::not_found("note", id));
    }
    info!(id, "note deleted");
    Ok(())
}

/// Distinct tags in the order they first appear.
pub fn all_tags(notes: &[Note]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in notes.iter().flat_map(|note| note.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Case-insensitive search over title and content, combined with an exact tag match.
pub fn filter_notes(notes: &[Note], query: Option<&str>, tag: Option<&str>) -> Vec<Note> {
    let query = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());
    let tag = tag.filter(|t| !t.is_empty());

    notes
        .iter()
        .filter(|note| {
            let matches_search = query.as_deref().is_none_or(|q| {
                note.title.to_lowercase().contains(q) || note.content.to_lowercase().contains(q)
            });
            let matches_tag = tag.is_none_or(|t| note.tags.iter().any(|own| own == t));
            matches_search && matches_tag
        })
        .cloned()
        .collect()
}

pub fn note_stats(notes: &[Note]) -> NoteStats {
    NoteStats {
        total: notes.len(),
        tags: all_tags(notes).len(),
    }
}

fn validate(input: NoteInput) -> Result<(String, String, Vec<String>), AppError> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::bad_request("note title must not be empty"));
    }
    Ok((title, input.content.trim().to_string(), parse_tags(&input.tags)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAMP: &str = "2026-03-10T09:00:00.000Z";

    fn input(title: &str, content: &str, tags: &str) -> NoteInput {
        NoteInput {
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.to_string(),
        }
    }

    fn seeded() -> AppData {
        let mut data = AppData::default();
        create_note(&mut data, input("Ownership", "Borrowing rules", "rust, lang"), STAMP).unwrap();
        create_note(&mut data, input("Groceries", "eggs, RUST remover", "home"), STAMP).unwrap();
        create_note(&mut data, input("Lifetimes", "elision", "rust"), STAMP).unwrap();
        data
    }

    #[test]
    fn parse_tags_drops_blanks() {
        assert_eq!(parse_tags(" a, b,,c , "), vec!["a", "b", "c"]);
        assert!(parse_tags("   ").is_empty());
    }

    #[test]
    fn newest_note_comes_first() {
        let data = seeded();
        let titles: Vec<&str> = data.notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Lifetimes", "Groceries", "Ownership"]);
    }

    #[test]
    fn tags_are_listed_once_in_first_seen_order() {
        let data = seeded();
        assert_eq!(all_tags(&data.notes), vec!["rust", "home", "lang"]);
        assert_eq!(note_stats(&data.notes), NoteStats { total: 3, tags: 3 });
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_content() {
        let data = seeded();
        let hits = filter_notes(&data.notes, Some("rust"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Groceries");

        let hits = filter_notes(&data.notes, Some("OWNER"), None);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn search_and_tag_combine() {
        let data = seeded();
        assert_eq!(filter_notes(&data.notes, None, Some("rust")).len(), 2);
        assert_eq!(filter_notes(&data.notes, Some("elision"), Some("rust")).len(), 1);
        assert!(filter_notes(&data.notes, Some("elision"), Some("home")).is_empty());
        assert_eq!(filter_notes(&data.notes, Some("  "), Some("")).len(), 3);
    }

    #[test]
    fn update_and_delete() {
        let mut data = seeded();
        let id = data.notes[0].id.clone();
        let note = update_note(&mut data, &id, input("Lifetimes 2", "", "rust,advanced"), "later").unwrap();
        assert_eq!(note.tags, vec!["rust", "advanced"]);
        assert_eq!(note.created_at, STAMP);

        delete_note(&mut data, &id).unwrap();
        assert_eq!(data.notes.len(), 2);
        assert!(delete_note(&mut data, &id).is_err());
        assert!(create_note(&mut data, input(" ", "x", ""), STAMP).is_err());
    }
}
