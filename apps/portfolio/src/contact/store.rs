use crate::models::submission::Submission;

/// Append-only, insertion-ordered list of accepted submissions for one session.
/// Unbounded: a session lives only as long as the process.
#[derive(Debug, Default)]
pub struct SubmissionStore {
    submissions: Vec<Submission>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, submission: Submission) {
        self.submissions.push(submission);
    }

    pub fn list_all(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = SubmissionStore::new();
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = SubmissionStore::new();
        store.append(Submission::new("first@a.com", "1111111", ""));
        store.append(Submission::new("second@a.com", "2222222", "hi"));
        store.append(Submission::new("third@a.com", "3333333", ""));

        let emails: Vec<_> = store.list_all().iter().map(|s| s.email()).collect();
        assert_eq!(emails, vec!["first@a.com", "second@a.com", "third@a.com"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_list_all_is_stable_without_append() {
        let mut store = SubmissionStore::new();
        store.append(Submission::new("a@b.com", "1234567", "note"));
        let first = store.list_all().to_vec();
        let second = store.list_all().to_vec();
        assert_eq!(first, second);
    }
}
