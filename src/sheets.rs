use crate::models::{Envelope, PunchType, TimePunch, WorkedHours};
use chrono::{DateTime, Local, NaiveDate};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Everything that can go wrong talking to the sheet endpoint. Handlers only
/// ever see this one channel, whether the failure was the network, the HTTP
/// status, the body, or the envelope itself.
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("network response was not ok: {0}")]
    Status(reqwest::StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Protocol(String),
}

#[derive(Debug, Serialize)]
struct RecordPayload {
    name: String,
    #[serde(rename = "type")]
    punch_type: PunchType,
    date: String,
    time: String,
}

#[derive(Debug, Serialize)]
struct RecordRequest {
    action: &'static str,
    payload: RecordPayload,
}

/// Typed client over the sheet web app. One endpoint, `action`-tagged reads
/// via GET and writes via POST.
#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
}

impl SheetsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn list_employees(&self) -> Result<Vec<String>, SheetsError> {
        self.read(&[("action", "getEmployees")], "Failed to fetch employees")
            .await
    }

    /// Punches for one employee on one day. The sheet reports an empty day as
    /// an envelope failure; that message is softened to an empty list here.
    pub async fn list_punches_for_day(
        &self,
        name: &str,
        date: NaiveDate,
    ) -> Result<Vec<TimePunch>, SheetsError> {
        let date = format_date(date);
        let result = self
            .read(
                &[
                    ("action", "getPunchesForDay"),
                    ("name", name),
                    ("date", &date),
                ],
                "Failed to fetch punches",
            )
            .await;

        match result {
            Err(SheetsError::Protocol(message)) if is_empty_day_message(&message) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Records a punch stamped with the given local moment and returns the
    /// `{type, time}` pair echoed by the sheet.
    pub async fn record_punch(
        &self,
        name: &str,
        punch_type: PunchType,
        moment: DateTime<Local>,
    ) -> Result<TimePunch, SheetsError> {
        let request = build_record_request(name, punch_type, moment);
        let body = serde_json::to_string(&request)?;

        debug!(name, punch = punch_type.label(), "recording punch");
        let response = self
            .http
            .post(&self.base_url)
            // The Apps Script deployment only accepts text bodies on POST;
            // anything else breaks across its redirect.
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SheetsError::Status(response.status()));
        }

        decode_envelope(&response.text().await?, "Failed to record time")
    }

    pub async fn list_worked_hours(&self) -> Result<Vec<WorkedHours>, SheetsError> {
        self.read(
            &[("action", "getWorkedHours")],
            "Failed to fetch worked hours",
        )
        .await
    }

    async fn read<T: DeserializeOwned>(
        &self,
        query: &[(&str, &str)],
        fallback: &str,
    ) -> Result<T, SheetsError> {
        let response = self.http.get(&self.base_url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(SheetsError::Status(response.status()));
        }

        decode_envelope(&response.text().await?, fallback)
    }
}

/// Unwraps the `{success, data, error}` envelope. A successful envelope with
/// no `data`, and a failed envelope with no `error`, both fall back to the
/// operation's fixed phrase.
fn decode_envelope<T: DeserializeOwned>(body: &str, fallback: &str) -> Result<T, SheetsError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    if envelope.success {
        return envelope
            .data
            .ok_or_else(|| SheetsError::Protocol(fallback.to_string()));
    }

    Err(SheetsError::Protocol(
        envelope.error.unwrap_or_else(|| fallback.to_string()),
    ))
}

fn is_empty_day_message(message: &str) -> bool {
    message.contains("No records found")
}

fn build_record_request(
    name: &str,
    punch_type: PunchType,
    moment: DateTime<Local>,
) -> RecordRequest {
    RecordRequest {
        action: "recordTime",
        payload: RecordPayload {
            name: name.to_string(),
            punch_type,
            date: format_date(moment.date_naive()),
            time: format_time(&moment),
        },
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn format_time(moment: &DateTime<Local>) -> String {
    moment.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decode_returns_data_unchanged_on_success() {
        let names: Vec<String> =
            decode_envelope(r#"{"success":true,"data":["Ana","Bruno"]}"#, "fallback").unwrap();
        assert_eq!(names, vec!["Ana".to_string(), "Bruno".to_string()]);
    }

    #[test]
    fn decode_carries_error_text_verbatim() {
        let result: Result<Vec<String>, _> = decode_envelope(
            r#"{"success":false,"error":"Sheet 'Colaboradores' not found."}"#,
            "fallback",
        );
        match result {
            Err(SheetsError::Protocol(message)) => {
                assert_eq!(message, "Sheet 'Colaboradores' not found.");
            }
            other => panic!("expected protocol error, got {other:?}"),
        }
    }

    #[test]
    fn decode_falls_back_when_error_text_is_absent() {
        let result: Result<Vec<String>, _> =
            decode_envelope(r#"{"success":false}"#, "Failed to fetch employees");
        match result {
            Err(SheetsError::Protocol(message)) => {
                assert_eq!(message, "Failed to fetch employees");
            }
            other => panic!("expected protocol error, got {other:?}"),
        }
    }

    #[test]
    fn decode_treats_success_without_data_as_failure() {
        let result: Result<Vec<String>, _> = decode_envelope(r#"{"success":true}"#, "fallback");
        assert!(matches!(result, Err(SheetsError::Protocol(message)) if message == "fallback"));
    }

    #[test]
    fn empty_day_message_is_recognized() {
        assert!(is_empty_day_message("No records found for Ana on 01/02/2024"));
        assert!(!is_empty_day_message("Sheet 'Registro de Ponto' not found."));
    }

    #[test]
    fn record_request_stamps_wire_date_and_time() {
        let moment = Local.with_ymd_and_hms(2024, 2, 3, 8, 5, 0).unwrap();
        let request = build_record_request("Ana", PunchType::Entry, moment);
        let wire = serde_json::to_value(&request).unwrap();

        assert_eq!(wire["action"], "recordTime");
        assert_eq!(wire["payload"]["name"], "Ana");
        assert_eq!(wire["payload"]["type"], "Entrada");
        assert_eq!(wire["payload"]["date"], "03/02/2024");
        assert_eq!(wire["payload"]["time"], "08:05");
    }
}
