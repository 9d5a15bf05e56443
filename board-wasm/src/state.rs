//! UI state for the board page and the post form, kept free of Yew types so
//! the transitions can be tested natively.

use crate::models::{Post, PostFormData};

pub const LOAD_FAILED: &str = "Failed to load posts";
pub const DELETE_FAILED: &str = "Failed to delete post";
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const SUBMIT_FAILED: &str = "Failed to submit post";

/// Page state. The two modals are driven by `editing` and `delete_confirm`;
/// at most one of them is open at a time in practice.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub posts: Vec<Post>,
    pub loading: bool,
    pub error: Option<String>,
    pub editing: Option<Post>,
    pub delete_confirm: Option<String>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            loading: true,
            error: None,
            editing: None,
            delete_confirm: None,
        }
    }
}

impl BoardState {
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn posts_loaded(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.error = None;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.error = Some(LOAD_FAILED.to_string());
        self.loading = false;
    }

    /// Opens the edit modal for a post in the current list. Unknown ids are ignored.
    pub fn start_edit(&mut self, id: &str) -> bool {
        match self.posts.iter().find(|p| p.id == id) {
            Some(post) => {
                self.editing = Some(post.clone());
                true
            }
            None => false,
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_ref().map(|p| p.id.as_str())
    }

    pub fn close_edit(&mut self) {
        self.editing = None;
    }

    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.delete_confirm = Some(id.into());
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirm = None;
    }

    pub fn delete_finished(&mut self) {
        self.delete_confirm = None;
    }

    // The confirmation stays open so the user can retry or cancel.
    pub fn delete_failed(&mut self) {
        self.error = Some(DELETE_FAILED.to_string());
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.posts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Content,
    Author,
}

impl FormField {
    fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::Author => "author",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFormState {
    pub data: PostFormData,
    pub error: Option<String>,
    pub submitting: bool,
    pub is_edit: bool,
}

impl PostFormState {
    pub fn new(initial: Option<PostFormData>, is_edit: bool) -> Self {
        Self {
            data: initial.unwrap_or_default(),
            error: None,
            submitting: false,
            is_edit,
        }
    }

    /// DOM id for a field. The create form and the edit modal are mounted
    /// together, so edit-mode ids carry a prefix.
    pub fn field_id(&self, field: FormField) -> String {
        if self.is_edit {
            format!("edit-{}", field.name())
        } else {
            field.name().to_string()
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.data.title = value,
            FormField::Content => self.data.content = value,
            // The author is fixed once a post exists.
            FormField::Author if self.is_edit => {}
            FormField::Author => self.data.author = value,
        }
    }

    /// Returns the data to submit, or `None` when a submission is already in
    /// flight or a field is empty (the latter sets the inline error).
    pub fn begin_submit(&mut self) -> Option<PostFormData> {
        if self.submitting {
            return None;
        }

        self.error = None;

        let data = &self.data;
        if data.title.is_empty() || data.content.is_empty() || data.author.is_empty() {
            self.error = Some(FILL_ALL_FIELDS.to_string());
            return None;
        }

        self.submitting = true;
        Some(self.data.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), String>) {
        self.submitting = false;

        match result {
            Ok(()) if !self.is_edit => self.data = PostFormData::default(),
            Ok(()) => {}
            Err(_) => self.error = Some(SUBMIT_FAILED.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(id: &str, title: &str) -> Post {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        Post {
            id: id.to_string(),
            title: title.to_string(),
            content: "content".to_string(),
            author: "Alice".to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    fn filled() -> PostFormData {
        PostFormData {
            title: "Hello".to_string(),
            content: "World".to_string(),
            author: "Alice".to_string(),
        }
    }

    #[test]
    fn board_starts_loading_with_no_modals() {
        let state = BoardState::default();
        assert!(state.loading);
        assert!(state.editing.is_none());
        assert!(state.delete_confirm.is_none());
        assert!(!state.is_empty());
    }

    #[test]
    fn loaded_posts_replace_list_and_clear_error() {
        let mut state = BoardState::default();
        state.load_failed();
        assert_eq!(state.error.as_deref(), Some(LOAD_FAILED));
        assert!(!state.loading);

        state.begin_loading();
        state.posts_loaded(vec![post("1", "a")]);

        assert_eq!(state.posts.len(), 1);
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn empty_only_after_loading_finishes() {
        let mut state = BoardState::default();
        assert!(!state.is_empty());
        state.posts_loaded(Vec::new());
        assert!(state.is_empty());
    }

    #[test]
    fn edit_flow_opens_and_closes() {
        let mut state = BoardState::default();
        state.posts_loaded(vec![post("1", "a"), post("2", "b")]);

        assert!(!state.start_edit("missing"));
        assert!(state.editing.is_none());

        assert!(state.start_edit("2"));
        assert_eq!(state.editing_id(), Some("2"));

        state.close_edit();
        assert!(state.editing.is_none());
    }

    #[test]
    fn delete_flow_confirm_cancel_and_finish() {
        let mut state = BoardState::default();
        state.posts_loaded(vec![post("1", "a")]);

        state.request_delete("1");
        assert_eq!(state.delete_confirm.as_deref(), Some("1"));
        state.cancel_delete();
        assert!(state.delete_confirm.is_none());

        state.request_delete("1");
        state.delete_finished();
        assert!(state.delete_confirm.is_none());
    }

    #[test]
    fn failed_delete_keeps_confirmation_open() {
        let mut state = BoardState::default();
        state.request_delete("1");

        state.delete_failed();

        assert_eq!(state.error.as_deref(), Some(DELETE_FAILED));
        assert_eq!(state.delete_confirm.as_deref(), Some("1"));
    }

    #[test]
    fn empty_field_blocks_submit() {
        let mut form = PostFormState::new(None, false);
        form.set_field(FormField::Title, "Hello".to_string());
        form.set_field(FormField::Content, "World".to_string());

        assert!(form.begin_submit().is_none());
        assert_eq!(form.error.as_deref(), Some(FILL_ALL_FIELDS));
        assert!(!form.submitting);
    }

    #[test]
    fn in_flight_submission_is_not_repeated() {
        let mut form = PostFormState::new(Some(filled()), false);

        assert_eq!(form.begin_submit(), Some(filled()));
        assert!(form.submitting);
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn successful_create_clears_form() {
        let mut form = PostFormState::new(Some(filled()), false);
        form.begin_submit();

        form.finish_submit(Ok(()));

        assert_eq!(form.data, PostFormData::default());
        assert!(!form.submitting);
        assert!(form.error.is_none());
    }

    #[test]
    fn successful_edit_keeps_values() {
        let mut form = PostFormState::new(Some(filled()), true);
        form.begin_submit();

        form.finish_submit(Ok(()));

        assert_eq!(form.data, filled());
    }

    #[test]
    fn failed_submit_keeps_values_for_retry() {
        let mut form = PostFormState::new(Some(filled()), false);
        form.begin_submit();

        form.finish_submit(Err("Network error".to_string()));

        assert_eq!(form.data, filled());
        assert_eq!(form.error.as_deref(), Some(SUBMIT_FAILED));
        assert!(!form.submitting);
        assert_eq!(form.begin_submit(), Some(filled()));
    }

    #[test]
    fn author_is_read_only_when_editing() {
        let mut form = PostFormState::new(Some(filled()), true);
        form.set_field(FormField::Author, "Mallory".to_string());
        form.set_field(FormField::Title, "Edited".to_string());

        assert_eq!(form.data.author, "Alice");
        assert_eq!(form.data.title, "Edited");
    }

    #[test]
    fn create_and_edit_forms_use_distinct_field_ids() {
        let create = PostFormState::new(None, false);
        let edit = PostFormState::new(Some(filled()), true);

        for field in [FormField::Title, FormField::Content, FormField::Author] {
            assert_ne!(create.field_id(field), edit.field_id(field));
        }
        assert_eq!(create.field_id(FormField::Title), "title");
        assert_eq!(edit.field_id(FormField::Author), "edit-author");
    }

    #[test]
    fn created_label_is_minute_precision() {
        assert_eq!(post("1", "a").created_label(), "2025-03-01 10:00 UTC");
    }
}
