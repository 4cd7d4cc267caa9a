use serde::{Deserialize, Serialize};

pub const ACTION_FIELD: &str = "action";
pub const EXISTING_FIELD: &str = "field_split_existing";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedField {
    pub name: String,
    pub value: String,
}

/// Named fields sent with a form submission, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub fields: Vec<SubmittedField>,
}

impl FormSubmission {
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(SubmittedField {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect()
    }

    pub fn lines(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| format!("{}={}", f.name, f.value))
            .collect()
    }
}
