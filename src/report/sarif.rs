use crate::types::report::OrchestratorResult;
use serde_json::json;

pub fn to_sarif(result: &OrchestratorResult) -> Result<String, serde_json::Error> {
    let flags = &result.anti_cheat.flags;
    let results: Vec<_> = result
        .report
        .warnings
        .iter()
        .map(|warning| {
            let is_flag = flags.contains(warning);
            json!({
                "ruleId": if is_flag { "anti-cheat" } else { "evidence" },
                "level": if is_flag && result.anti_cheat.suspicious { "error" } else { "warning" },
                "message": { "text": warning },
                "locations": [{
                    "physicalLocation": {
                        "artifactLocation": { "uri": result.evidence.repo.html_url }
                    }
                }],
            })
        })
        .collect();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "repo-judge",
                    "version": env!("CARGO_PKG_VERSION")
                }
            },
            "properties": {
                "finalScore": result.final_score,
                "suspicious": result.anti_cheat.suspicious
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}
