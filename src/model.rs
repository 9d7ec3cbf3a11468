// Data model shared by the orchestrator, the response sources and the renderer

use serde::{Deserialize, Serialize};

// Payload posted to the planning endpoint. Both fields stay free-form text
// until validation; the backend parses the day count itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanRequest {
    pub days: String,
    pub destination: String,
}

impl PlanRequest {
    pub fn new(days: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            days: days.into(),
            destination: destination.into(),
        }
    }

    // Blank means empty or whitespace-only; either field blank rejects the
    // submission before any source is consulted.
    pub fn is_blank(&self) -> bool {
        self.days.trim().is_empty() || self.destination.trim().is_empty()
    }
}

// One day of the structured itinerary. All four time blocks are required:
// a body missing one fails deserialization and never reaches the renderer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    pub morning: ActivityBlock,
    pub lunch: MealBlock,
    pub afternoon: ActivityBlock,
    pub evening: ActivityBlock,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActivityBlock {
    pub activity: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MealBlock {
    pub description: String,
    #[serde(default)]
    pub food_suggestions: Vec<String>,
}

// Wire shape of a successful response body. `rawText` is camelCase on the
// wire; everything nested under `plan` is snake_case.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlanResponseBody {
    #[serde(rename = "rawText", skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlanDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Vec<DayPlan>>,
}

// Uniform shape every source yields, so the orchestrator normalizes the live
// path and the fixture path identically. `ok` mirrors the transport-level
// success status; the body stays untyped until normalization parses it.
#[derive(Debug, Clone)]
pub struct SourceResponse {
    pub ok: bool,
    pub body: serde_json::Value,
}

impl SourceResponse {
    pub fn ok(body: serde_json::Value) -> Self {
        Self { ok: true, body }
    }
}

// Normalized outcome of one submission attempt. Created fresh per submission
// and fully replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanResult {
    pub success: bool,
    pub raw_text: String,
    pub itinerary: Option<Vec<DayPlan>>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_blank_detection() {
        assert!(PlanRequest::new("", "Thailand").is_blank());
        assert!(PlanRequest::new("3", "").is_blank());
        assert!(PlanRequest::new("  ", " \t").is_blank());
        assert!(!PlanRequest::new("3", "Thailand").is_blank());
    }

    #[test]
    fn request_serializes_days_and_destination() {
        let body = serde_json::to_value(PlanRequest::new("3", "Thailand")).unwrap();
        assert_eq!(body["days"], "3");
        assert_eq!(body["destination"], "Thailand");
    }

    #[test]
    fn response_body_parses_camel_case_raw_text() {
        let body: PlanResponseBody =
            serde_json::from_str(r#"{"rawText": "here is your plan"}"#).unwrap();
        assert_eq!(body.raw_text.as_deref(), Some("here is your plan"));
        assert!(body.plan.is_none());
    }

    #[test]
    fn day_plan_food_suggestions_default_to_empty() {
        let json = r#"{
            "day": 1,
            "title": "Arrival",
            "morning": {"activity": "Fly in", "description": "Land at BKK"},
            "lunch": {"description": "Street food near the hotel"},
            "afternoon": {"activity": "Check in", "description": "Rest"},
            "evening": {"activity": "Night market", "description": "Browse stalls"}
        }"#;
        let day: DayPlan = serde_json::from_str(json).unwrap();
        assert!(day.lunch.food_suggestions.is_empty());
    }

    #[test]
    fn day_plan_missing_time_block_is_rejected() {
        // No `evening` block: hard failure, never a partial day downstream.
        let json = r#"{
            "day": 1,
            "title": "Arrival",
            "morning": {"activity": "Fly in", "description": "Land at BKK"},
            "lunch": {"description": "Street food", "food_suggestions": []},
            "afternoon": {"activity": "Check in", "description": "Rest"}
        }"#;
        assert!(serde_json::from_str::<DayPlan>(json).is_err());
    }
}
