use serde::Serialize;

/// Handling state of a faulty-goods case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FaultyStatus {
    New,
    InProgress,
    Done,
}

impl FaultyStatus {
    /// Convert enum → sheet string
    pub fn to_sheet_str(&self) -> &'static str {
        match self {
            FaultyStatus::New => "New",
            FaultyStatus::InProgress => "InProgress",
            FaultyStatus::Done => "Done",
        }
    }

    /// Convert sheet string → enum
    pub fn from_sheet_str(s: &str) -> Option<Self> {
        match s {
            "New" => Some(FaultyStatus::New),
            "InProgress" => Some(FaultyStatus::InProgress),
            "Done" => Some(FaultyStatus::Done),
            _ => None,
        }
    }

    /// Stored values outside the known set are treated as new cases.
    pub fn coerce(s: &str) -> Self {
        Self::from_sheet_str(s).unwrap_or(FaultyStatus::New)
    }

    /// Helper: parse user input, case-insensitive, accepting the display
    /// labels and the Norwegian names used on the shop floor.
    pub fn from_input(input: &str) -> Option<Self> {
        let norm: String = input
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();

        match norm.as_str() {
            "new" | "ny" => Some(FaultyStatus::New),
            "inprogress" | "underbehandling" => Some(FaultyStatus::InProgress),
            "done" | "behandlet" => Some(FaultyStatus::Done),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FaultyStatus::New => "New",
            FaultyStatus::InProgress => "In progress",
            FaultyStatus::Done => "Done",
        }
    }
}
