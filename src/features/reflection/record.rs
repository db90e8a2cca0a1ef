//! Reflection records.

use chrono::NaiveDate;

/// The fixed post-session questions, asked in order.
pub const QUESTIONS: [&str; 4] = [
    "What did you learn today?",
    "How would you rate your performance today? (on scale of 1 to 5)",
    "Why do you think it was like that?",
    "What would you do next time?",
];

/// One session's reflection: an ordered list of question/answer pairs
/// for a subject on a date. Write-once; never mutated after storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionRecord {
    pub subject: String,
    pub date: NaiveDate,
    entries: Vec<(String, String)>,
}

impl ReflectionRecord {
    #[must_use]
    pub fn new(subject: &str, date: NaiveDate) -> Self {
        Self {
            subject: subject.to_string(),
            date,
            entries: Vec::new(),
        }
    }

    /// Append one question/answer pair, preserving order.
    pub fn push(&mut self, question: &str, answer: &str) {
        self.entries
            .push((question.to_string(), answer.to_string()));
    }

    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Render the block appended to the reflection file.
    #[must_use]
    pub fn render(&self) -> String {
        let mut block = format!("\n--- Reflection for {} ---\n", self.date);
        for (question, answer) in &self.entries {
            block.push_str(&format!("{question} {answer}\n"));
        }
        block
    }

    /// File name for this record's date.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("reflection-{}.txt", self.date)
    }
}
