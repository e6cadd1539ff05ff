use crate::types::report::OrchestratorResult;

pub fn to_json(result: &OrchestratorResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_result;

    #[test]
    fn json_result_round_trips_final_score() {
        let result = sample_result();
        let rendered = to_json(&result).expect("json should serialize");
        assert!(rendered.contains("\"final_score\": 0.0"));
        let parsed: OrchestratorResult =
            serde_json::from_str(&rendered).expect("json should parse back");
        assert_eq!(parsed, result);
    }
}
