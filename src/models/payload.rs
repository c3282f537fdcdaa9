//! Request body for `CreateServiceRequest`

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::codes::{ServiceRequestSource, TimeOfDay};
use crate::models::common::Nullable;

/// Agency tag; this payload family is always routed to HPD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Agency {
    #[default]
    #[serde(rename = "HPD")]
    Hpd,
}

/// Whether the complainant wants to stay anonymous
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnonymousRequired {
    Yes,
    No,
}

impl From<bool> for AnonymousRequired {
    fn from(anonymous: bool) -> Self {
        if anonymous {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Complainant contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub notification_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borough: Option<String>,
    /// Omitted, explicit `null`, or a value; the gateway treats these differently
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub zip_code: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Contact {
    pub fn new(first_name: &str, last_name: &str, notification_email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            notification_email: notification_email.to_string(),
            primary_phone: None,
            street1: None,
            street2: None,
            borough: None,
            zip_code: Nullable::Absent,
            city: None,
            state: None,
        }
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.primary_phone = Some(phone.to_string());
        self
    }

    /// Set the mailing address lines
    pub fn with_address(
        mut self,
        street1: &str,
        street2: Option<&str>,
        city: &str,
        state: &str,
    ) -> Self {
        self.street1 = Some(street1.to_string());
        self.street2 = street2.map(str::to_string);
        self.city = Some(city.to_string());
        self.state = Some(state.to_string());
        self
    }

    pub fn with_borough(mut self, borough: &str) -> Self {
        self.borough = Some(borough.to_string());
        self
    }

    pub fn with_zip_code(mut self, zip_code: Nullable<String>) -> Self {
        self.zip_code = zip_code;
        self
    }
}

/// A secondary complaint filed alongside the primary problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnProblem {
    pub problem: String,
    pub problem_details: String,
    pub additional_details: String,
}

impl AddOnProblem {
    pub fn new(problem: &str, problem_details: &str, additional_details: &str) -> Self {
        Self {
            problem: problem.to_string(),
            problem_details: problem_details.to_string(),
            additional_details: additional_details.to_string(),
        }
    }
}

/// Body of a `CreateServiceRequest` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestPayload {
    pub description: String,
    pub location_type: String,
    pub problem: String,
    pub problem_details: String,
    #[serde(rename = "srsource", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ServiceRequestSource>,
    pub additional_details: String,
    pub agency: Agency,
    pub anonymous_required: AnonymousRequired,
    /// Free-form; the gateway accepts both `10/02/2018 15:31:33` and `2018-05-18`
    pub date_time_observed: String,
    pub full_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_contact_info: Option<bool>,
    pub location_details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_borough: Option<String>,
    #[serde(
        rename = "whattimeofdaydoestheproblemoccur",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment_number: Option<String>,
    pub contact: Contact,
    #[serde(
        rename = "addonproblems",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub addon_problems: Option<Vec<AddOnProblem>>,
}

/// Fields required by every payload, grouped so construction stays readable
#[derive(Debug, Clone)]
pub struct ProblemReport {
    pub problem: String,
    pub problem_details: String,
    pub additional_details: String,
    pub description: String,
    pub location_type: String,
    pub location_details: String,
    pub full_address: String,
}

impl ServiceRequestPayload {
    /// Build a payload with every optional field absent
    pub fn new(
        report: ProblemReport,
        anonymous: AnonymousRequired,
        date_time_observed: impl Into<String>,
        contact: Contact,
    ) -> Self {
        Self {
            description: report.description,
            location_type: report.location_type,
            problem: report.problem,
            problem_details: report.problem_details,
            source: None,
            additional_details: report.additional_details,
            agency: Agency::Hpd,
            anonymous_required: anonymous,
            date_time_observed: date_time_observed.into(),
            full_address: report.full_address,
            include_contact_info: None,
            location_details: report.location_details,
            site_borough: None,
            time_of_day: None,
            apartment_number: None,
            contact,
            addon_problems: None,
        }
    }

    /// Format a timestamp the way the gateway documents `dateTimeObserved`
    pub fn observed_at(at: NaiveDateTime) -> String {
        at.format("%m/%d/%Y %H:%M:%S").to_string()
    }

    pub fn with_source(mut self, source: ServiceRequestSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }

    pub fn with_include_contact_info(mut self, include: bool) -> Self {
        self.include_contact_info = Some(include);
        self
    }

    pub fn with_site_borough(mut self, borough: &str) -> Self {
        self.site_borough = Some(borough.to_string());
        self
    }

    pub fn with_apartment_number(mut self, apartment: &str) -> Self {
        self.apartment_number = Some(apartment.to_string());
        self
    }

    pub fn with_addon_problem(mut self, addon: AddOnProblem) -> Self {
        self.addon_problems.get_or_insert_with(Vec::new).push(addon);
        self
    }

    /// Problems the gateway is known to reject that the schema alone allows
    pub fn warnings(&self) -> Vec<PayloadWarning> {
        let mut warnings = Vec::new();
        if self.time_of_day.is_none() {
            warnings.push(PayloadWarning::MissingTimeOfDay);
        }
        warnings
    }
}

/// Non-fatal findings from [`ServiceRequestPayload::warnings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadWarning {
    /// The published schema marks the field optional but the gateway
    /// answers `BadRequest` without it.
    MissingTimeOfDay,
}

impl fmt::Display for PayloadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadWarning::MissingTimeOfDay => f.write_str(
                "whattimeofdaydoestheproblemoccur is absent; the gateway may reject this request",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn report() -> ProblemReport {
        ProblemReport {
            problem: "Heat/Hot Water".into(),
            problem_details: "Apartment Only".into(),
            additional_details: "No Heat".into(),
            description: "N/A".into(),
            location_type: "Apartment".into(),
            location_details: "Bedroom".into(),
            full_address: "1681 Madison Ave, Manhattan".into(),
        }
    }

    #[test]
    fn test_minimal_payload_omits_optionals() {
        let payload = ServiceRequestPayload::new(
            report(),
            AnonymousRequired::No,
            "2018-05-18",
            Contact::new("Alfred", "Eng", "aeng@example.com"),
        );
        let json = serde_json::to_value(&payload).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["agency"], "HPD");
        assert_eq!(obj["anonymousRequired"], "No");
        assert_eq!(obj["dateTimeObserved"], "2018-05-18");
        for key in [
            "srsource",
            "includeContactInfo",
            "siteBorough",
            "whattimeofdaydoestheproblemoccur",
            "apartmentNumber",
            "addonproblems",
        ] {
            assert!(!obj.contains_key(key), "{key} should be omitted");
        }
        assert!(!obj["contact"].as_object().unwrap().contains_key("zipCode"));
    }

    #[test]
    fn test_optional_fields_use_wire_names() {
        let payload = ServiceRequestPayload::new(
            report(),
            AnonymousRequired::from(true),
            "now",
            Contact::new("A", "B", "c@example.com").with_zip_code(Nullable::Null),
        )
        .with_source(ServiceRequestSource::Android)
        .with_time_of_day(TimeOfDay::AllTheTime)
        .with_addon_problem(AddOnProblem::new("General", "Cooking Gas", "Shut-Off"));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["anonymousRequired"], "Yes");
        assert_eq!(json["srsource"], 614_110_000);
        assert_eq!(json["whattimeofdaydoestheproblemoccur"], 614_110_005);
        assert_eq!(json["addonproblems"][0]["problemDetails"], "Cooking Gas");
        assert!(json["contact"]["zipCode"].is_null());
        assert!(json["contact"].as_object().unwrap().contains_key("zipCode"));
    }

    #[test]
    fn test_foreign_agency_is_rejected() {
        let mut json = serde_json::to_value(ServiceRequestPayload::new(
            report(),
            AnonymousRequired::No,
            "now",
            Contact::new("A", "B", "c@example.com"),
        ))
        .unwrap();
        json["agency"] = "DOT".into();
        assert!(serde_json::from_value::<ServiceRequestPayload>(json).is_err());
    }

    #[test]
    fn test_observed_at_format() {
        let at = NaiveDate::from_ymd_opt(2018, 10, 2)
            .unwrap()
            .and_hms_opt(15, 31, 33)
            .unwrap();
        assert_eq!(ServiceRequestPayload::observed_at(at), "10/02/2018 15:31:33");
    }

    #[test]
    fn test_missing_time_of_day_is_flagged() {
        let payload = ServiceRequestPayload::new(
            report(),
            AnonymousRequired::No,
            "now",
            Contact::new("A", "B", "c@example.com"),
        );
        assert_eq!(payload.warnings(), vec![PayloadWarning::MissingTimeOfDay]);
        assert!(payload.time_of_day.is_none());

        let payload = payload.with_time_of_day(TimeOfDay::Evening);
        assert!(payload.warnings().is_empty());
    }
}
