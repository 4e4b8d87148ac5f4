//! Search box editing (pure state transitions).
//!
//! The cursor counts characters, not bytes, so multi-byte input edits cleanly.

/// State of the search text box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchInput {
    /// Keys go to table actions.
    #[default]
    Inactive,
    /// Keys edit the query.
    Typing {
        /// Current query text.
        query: String,
        /// Cursor position in characters.
        cursor: usize,
    },
}

impl SearchInput {
    /// Start editing `current`, with the cursor at its end.
    pub fn activate(current: &str) -> Self {
        SearchInput::Typing {
            query: current.to_string(),
            cursor: current.chars().count(),
        }
    }

    /// True while the search bar has focus.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchInput::Typing { .. })
    }

    /// Query being edited, if any.
    pub fn query(&self) -> Option<&str> {
        match self {
            SearchInput::Typing { query, .. } => Some(query),
            SearchInput::Inactive => None,
        }
    }
}

fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map_or(query.len(), |(offset, _)| offset)
}

/// Insert `ch` at the cursor and advance it. No-op when inactive.
pub fn handle_char_input(state: SearchInput, ch: char) -> SearchInput {
    match state {
        SearchInput::Typing { mut query, cursor } => {
            query.insert(byte_offset(&query, cursor), ch);
            SearchInput::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the character before the cursor.
pub fn handle_backspace(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            SearchInput::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move the cursor one character left.
pub fn handle_cursor_left(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing { query, cursor } => SearchInput::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move right, stopping at the end of the query.
pub fn handle_cursor_right(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing { query, cursor } => {
            let len = query.chars().count();
            SearchInput::Typing {
                query,
                cursor: (cursor + 1).min(len),
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typing(query: &str, cursor: usize) -> SearchInput {
        SearchInput::Typing {
            query: query.to_string(),
            cursor,
        }
    }

    #[test]
    fn activate_places_cursor_at_end() {
        assert_eq!(SearchInput::activate("usa"), typing("usa", 3));
    }

    #[test]
    fn char_input_inserts_at_cursor() {
        let state = handle_char_input(typing("ua", 1), 's');
        assert_eq!(state, typing("usa", 2));
    }

    #[test]
    fn char_input_handles_multibyte_text() {
        let state = handle_char_input(typing("Ré", 2), 'u');
        let state = handle_char_input(state, 'n');
        assert_eq!(state, typing("Réun", 4));

        let state = handle_backspace(handle_cursor_left(handle_cursor_left(state)));
        assert_eq!(state, typing("Run", 1));
    }

    #[test]
    fn backspace_at_start_is_noop() {
        assert_eq!(handle_backspace(typing("abc", 0)), typing("abc", 0));
    }

    #[test]
    fn cursor_right_stops_at_end() {
        assert_eq!(handle_cursor_right(typing("ab", 2)), typing("ab", 2));
    }

    #[test]
    fn edits_are_noops_when_inactive() {
        assert_eq!(
            handle_char_input(SearchInput::Inactive, 'x'),
            SearchInput::Inactive
        );
        assert_eq!(handle_backspace(SearchInput::Inactive), SearchInput::Inactive);
    }
}
