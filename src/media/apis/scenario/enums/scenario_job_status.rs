use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioJobStatus {
    Pending,
    Running,
    Success,
    Failure,
    Canceled,
}

impl ScenarioJobStatus {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "running" => Some(Self::Running),
            "success" => Some(Self::Success),
            "failure" => Some(Self::Failure),
            "canceled" => Some(Self::Canceled),
            _ => None,
        }
    }

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Canceled => "canceled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failure | Self::Canceled)
    }
}

impl fmt::Display for ScenarioJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_status() {
        for value in ["pending", "running", "success", "failure", "canceled"] {
            let status = ScenarioJobStatus::from_value(value).unwrap();
            assert_eq!(status.value(), value);
        }
    }

    #[test]
    fn rejects_unknown_statuses() {
        assert_eq!(ScenarioJobStatus::from_value("warming-up"), None);
        assert_eq!(ScenarioJobStatus::from_value(""), None);
        assert_eq!(ScenarioJobStatus::from_value("Success"), None);
    }

    #[test]
    fn only_end_states_are_terminal() {
        assert!(!ScenarioJobStatus::Pending.is_terminal());
        assert!(!ScenarioJobStatus::Running.is_terminal());
        assert!(ScenarioJobStatus::Success.is_terminal());
        assert!(ScenarioJobStatus::Failure.is_terminal());
        assert!(ScenarioJobStatus::Canceled.is_terminal());
    }
}
