use crate::types::evidence::Evidence;
use crate::types::scoring::AntiCheatResult;

pub const SUSPICIOUS_THRESHOLD: u32 = 40;

struct Rule {
    penalty: u32,
    flag: &'static str,
    triggered: fn(&Evidence) -> bool,
}

const RULES: [Rule; 5] = [
    Rule {
        penalty: 40,
        flag: "Very low commit history",
        triggered: |evidence| evidence.activity.commits < 3,
    },
    Rule {
        penalty: 60,
        flag: "Repository has too few files",
        triggered: |evidence| evidence.structure.file_count < 5,
    },
    Rule {
        penalty: 10,
        flag: "Single contributor only",
        triggered: |evidence| evidence.activity.contributors <= 1,
    },
    Rule {
        penalty: 10,
        flag: "No tests detected",
        triggered: |evidence| !evidence.structure.has_tests,
    },
    Rule {
        penalty: 20,
        flag: "Insufficient source code samples",
        triggered: |evidence| evidence.code_samples.len() < 2,
    },
];

/// Sums the penalties of every triggered rule. The total is not clamped.
pub fn detect(evidence: &Evidence) -> AntiCheatResult {
    let mut penalty = 0;
    let mut flags = Vec::new();
    for rule in RULES.iter().filter(|rule| (rule.triggered)(evidence)) {
        penalty += rule.penalty;
        flags.push(rule.flag.to_string());
    }

    if penalty > 0 {
        tracing::info!(penalty, flags = flags.len(), "anti-cheat rules triggered");
    }
    AntiCheatResult {
        suspicious: penalty >= SUSPICIOUS_THRESHOLD,
        penalty,
        flags,
    }
}
