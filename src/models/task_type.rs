use serde::{Deserialize, Serialize};

/// Status of a task. Stored and serialized as `TODO`, `IN_PROGRESS`, `DONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    Todo,
    InProgress,
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskType::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        let parsed: TaskType = serde_json::from_str("\"DONE\"").unwrap();
        assert_eq!(parsed, TaskType::Done);
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(serde_json::from_str::<TaskType>("\"BLOCKED\"").is_err());
        assert!(serde_json::from_str::<TaskType>("\"in_progress\"").is_err());
    }
}
