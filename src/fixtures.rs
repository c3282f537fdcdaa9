//! The two sample payloads from the gateway documentation

use crate::models::ServiceRequestPayload;

/// Heat/hot-water complaint from the API portal's CreateServiceRequest page
pub const HEAT_HOT_WATER_JSON: &str = include_str!("../fixtures/heat_hot_water.json");

/// Cooking-gas complaint from the CreateServiceRequest PDF.
///
/// Matches the published schema but omits the time-of-day bucket, which the
/// live gateway rejects with `BadRequest`.
pub const COOKING_GAS_JSON: &str = include_str!("../fixtures/cooking_gas.json");

/// A bundled sample payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Sample {
    HeatHotWater,
    CookingGas,
}

impl Sample {
    pub fn json(self) -> &'static str {
        match self {
            Sample::HeatHotWater => HEAT_HOT_WATER_JSON,
            Sample::CookingGas => COOKING_GAS_JSON,
        }
    }

    pub fn payload(self) -> serde_json::Result<ServiceRequestPayload> {
        serde_json::from_str(self.json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AnonymousRequired, Nullable, PayloadWarning, ServiceRequestSource, TimeOfDay,
    };

    #[test]
    fn test_heat_hot_water_parses() {
        let payload = Sample::HeatHotWater.payload().unwrap();
        assert_eq!(payload.source, Some(ServiceRequestSource::Android));
        assert_eq!(payload.time_of_day, Some(TimeOfDay::Morning));
        assert_eq!(payload.apartment_number.as_deref(), Some("1A"));
        assert!(payload.contact.zip_code.is_absent());
        assert!(payload.warnings().is_empty());
    }

    #[test]
    fn test_cooking_gas_parses() {
        let payload = Sample::CookingGas.payload().unwrap();
        assert_eq!(payload.anonymous_required, AnonymousRequired::Yes);
        assert_eq!(payload.contact.zip_code, Nullable::Null);
        assert_eq!(payload.addon_problems.as_ref().map(Vec::len), Some(1));
        assert_eq!(payload.warnings(), vec![PayloadWarning::MissingTimeOfDay]);
    }

    #[test]
    fn test_samples_keep_their_wire_shape() {
        for sample in [Sample::HeatHotWater, Sample::CookingGas] {
            let original: serde_json::Value = serde_json::from_str(sample.json()).unwrap();
            let reserialized = serde_json::to_value(sample.payload().unwrap()).unwrap();
            assert_eq!(original, reserialized, "{sample:?}");
        }
    }
}
