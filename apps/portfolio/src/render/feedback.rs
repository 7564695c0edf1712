use serde::Serialize;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const DEFAULT_RATING: u8 = 5;

const SCALE: [(&str, &str); 5] = [
    ("😢", "Sad"),
    ("😕", "Not great"),
    ("😐", "Okay"),
    ("🙂", "Better"),
    ("😄", "Happy"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackLabel {
    pub rating: u8,
    pub emoji: &'static str,
    pub label: &'static str,
}

impl FeedbackLabel {
    /// "You selected N — Label" as shown under the slider.
    pub fn caption(&self) -> String {
        format!("You selected {} — {}", self.rating, self.label)
    }
}

/// Returns `None` outside 1..=5.
pub fn feedback_label(rating: u8) -> Option<FeedbackLabel> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return None;
    }
    let (emoji, label) = SCALE[(rating - MIN_RATING) as usize];
    Some(FeedbackLabel {
        rating,
        emoji,
        label,
    })
}

pub fn scale() -> impl Iterator<Item = FeedbackLabel> {
    (MIN_RATING..=MAX_RATING).filter_map(feedback_label)
}
