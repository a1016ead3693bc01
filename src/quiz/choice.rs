use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
}
impl Question {
    pub fn new(text: String, answers: Vec<Answer>) -> Self {
        Self { text, answers }
    }

    pub fn correct_answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|a| a.is_correct)
    }

    /// Multiple choice: exactly the correct option must be picked.
    pub fn check_single(&self, selected: Option<&str>) -> bool {
        match selected {
            Some(text) => self.correct_answers().any(|a| a.text == text),
            None => false,
        }
    }

    /// Multiple select: the picked options must be the correct set, in any order.
    pub fn check_multiple(&self, selected: &[&str]) -> bool {
        let selected: BTreeSet<&str> = selected.iter().copied().collect();
        let expected: BTreeSet<&str> = self.correct_answers().map(|a| a.text.as_str()).collect();
        selected == expected
    }

    /// Which options to highlight when the answer is shown.
    pub fn highlights(&self) -> Vec<(&str, bool)> {
        self.answers
            .iter()
            .map(|a| (a.text.as_str(), a.is_correct))
            .collect()
    }

    pub fn reveal(&self) -> Highlights {
        Highlights {
            question: self.text.clone(),
            options: self
                .highlights()
                .into_iter()
                .map(|(text, is_correct)| (text.to_string(), is_correct))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}
impl Answer {
    pub fn new(text: String, is_correct: bool) -> Self {
        Self { text, is_correct }
    }
}

/// A revealed choice question: every option and whether it gets the correct highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlights {
    pub question: String,
    pub options: Vec<(String, bool)>,
}

impl Highlights {
    pub fn correct_options(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|(_, is_correct)| *is_correct)
            .map(|(text, _)| text.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrueFalse {
    pub text: String,
    pub correct: bool,
}
impl TrueFalse {
    pub fn new(text: String, correct: bool) -> Self {
        Self { text, correct }
    }

    pub fn check(&self, chosen: bool) -> bool {
        chosen == self.correct
    }

    /// Label of the button flashed when the answer is shown.
    pub fn answer_label(&self) -> &'static str {
        if self.correct {
            "True"
        } else {
            "False"
        }
    }
}
