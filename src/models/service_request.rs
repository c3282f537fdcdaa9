//! Response bodies for the create and lookup endpoints

use serde::{Deserialize, Serialize};

use crate::models::codes::ServiceRequestStatus;

/// Response from `CreateServiceRequest`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceRequestCreationResult {
    /// Tracking number, e.g. "311-10865100"
    #[serde(rename = "SRNumber")]
    pub sr_number: String,
    /// Human-readable confirmation text
    #[serde(rename = "SLALanguage")]
    pub sla_language: String,
}

/// Response from `GetServiceRequest`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRequestRecord {
    #[serde(rename = "SRNumber")]
    pub sr_number: String,
    pub agency: String,
    pub problem: String,
    pub problem_details: String,
    pub additional_details: String,
    pub status: ServiceRequestStatus,
    pub date_time_submitted: String,
    pub address: Address,
}

/// Location block of a [`ServiceRequestRecord`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub borough: String,
    pub full_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_result_field_names() {
        let body = r#"{"SRNumber":"311-10865100","SLALanguage":"HPD will review."}"#;
        let result: ServiceRequestCreationResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.sr_number, "311-10865100");
        assert_eq!(result.sla_language, "HPD will review.");
    }

    #[test]
    fn test_record_parses() {
        let body = r#"{
            "SRNumber": "311-10865100",
            "Agency": "HPD",
            "Problem": "Heat/Hot Water",
            "ProblemDetails": "Apartment Only",
            "AdditionalDetails": "No Heat",
            "Status": 614110001,
            "DateTimeSubmitted": "2018-10-02T15:31:33",
            "Address": {"Borough": "MANHATTAN", "FullAddress": "1681 MADISON AVE"}
        }"#;
        let record: ServiceRequestRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.status, ServiceRequestStatus::InProgress);
        assert_eq!(record.address.borough, "MANHATTAN");
    }

    #[test]
    fn test_record_rejects_unknown_status() {
        let body = r#"{
            "SRNumber": "311-1", "Agency": "HPD", "Problem": "p",
            "ProblemDetails": "d", "AdditionalDetails": "a", "Status": 7,
            "DateTimeSubmitted": "x",
            "Address": {"Borough": "b", "FullAddress": "f"}
        }"#;
        assert!(serde_json::from_str::<ServiceRequestRecord>(body).is_err());
    }
}
