use serde::{Deserialize, Serialize};

/// The four punch events of a work day. The serialized form is the label the
/// spreadsheet stores and the page displays; there is no separate code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchType {
    #[serde(rename = "Entrada")]
    Entry,
    #[serde(rename = "Saída Almoço")]
    LunchOut,
    #[serde(rename = "Entrada Almoço")]
    LunchIn,
    #[serde(rename = "Saída")]
    Exit,
}

impl PunchType {
    pub const ALL: [PunchType; 4] = [
        PunchType::Entry,
        PunchType::LunchOut,
        PunchType::LunchIn,
        PunchType::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PunchType::Entry => "Entrada",
            PunchType::LunchOut => "Saída Almoço",
            PunchType::LunchIn => "Entrada Almoço",
            PunchType::Exit => "Saída",
        }
    }
}

/// One recorded event: punch type plus `HH:mm` time of day. Times are
/// zero-padded 24h strings, so lexicographic order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePunch {
    #[serde(rename = "type")]
    pub punch_type: PunchType,
    pub time: String,
}

/// Pre-aggregated monthly total for one employee, computed by the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedHours {
    pub employee: String,
    #[serde(rename = "monthYear")]
    pub month_year: String,
    #[serde(rename = "totalHours")]
    pub total_hours: String,
}

/// Uniform response wrapper of the sheet endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PunchRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub punch_type: PunchType,
}

#[derive(Debug, Serialize)]
pub struct PunchOutcome {
    pub recorded: TimePunch,
    pub punches: Vec<TimePunch>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub employees: Vec<String>,
    pub months: Vec<String>,
    pub worked_hours: Vec<WorkedHours>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punch_type_serializes_to_sheet_labels() {
        for punch in PunchType::ALL {
            let wire = serde_json::to_string(&punch).unwrap();
            assert_eq!(wire, format!("\"{}\"", punch.label()));
        }
    }

    #[test]
    fn worked_hours_reads_camel_case_fields() {
        let row: WorkedHours = serde_json::from_str(
            r#"{"employee":"Ana","monthYear":"2024-01","totalHours":"160:30"}"#,
        )
        .unwrap();
        assert_eq!(row.employee, "Ana");
        assert_eq!(row.month_year, "2024-01");
        assert_eq!(row.total_hours, "160:30");
    }

    #[test]
    fn envelope_tolerates_missing_fields() {
        let envelope: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert!(envelope.error.is_none());
    }
}
