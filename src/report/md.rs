use crate::types::report::OrchestratorResult;

fn push_list(output: &mut String, items: &[String]) {
    if items.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for item in items {
        output.push_str(&format!("- {item}\n"));
    }
    output.push('\n');
}

pub fn to_markdown(result: &OrchestratorResult) -> String {
    let report = &result.report;
    let breakdown = &result.scoring.breakdown;
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", report.title));
    output.push_str(&format!("{}\n\n", report.summary));
    output.push_str(&format!("Final score: {:.2}\n\n", result.final_score));

    output.push_str("## Score Breakdown\n\n");
    output.push_str(&format!(
        "- complexity: {:.2}\n- innovation: {:.2}\n- impact: {:.2}\n- code quality: {:.2}\n- raw before penalty: {:.2}\n- penalty: {}\n\n",
        breakdown.complexity_weighted,
        breakdown.innovation_weighted,
        breakdown.impact_weighted,
        breakdown.quality_weighted,
        breakdown.raw_before_penalty,
        breakdown.penalty
    ));

    output.push_str("## Highlights\n\n");
    push_list(&mut output, &report.highlights);

    output.push_str("## Warnings\n\n");
    push_list(&mut output, &report.warnings);

    output.push_str("## Judges\n\n");
    output.push_str(&format!(
        "- code (complexity {}, quality {}, architecture {}): {}\n",
        result.code_score.complexity,
        result.code_score.code_quality,
        result.code_score.architecture,
        result.code_score.reasoning
    ));
    output.push_str(&format!(
        "- product (innovation {}, impact {}, usability {}): {}\n",
        result.product_score.innovation,
        result.product_score.impact,
        result.product_score.usability,
        result.product_score.reasoning
    ));

    output
}
