//! SARIF 2.1.0 output formatter.
//!
//! Every [`CheckKind`] is published as a rule; every failed check becomes an
//! `error` result located at the validated file.

use crate::report::{CheckKind, ValidationReport};
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};

pub fn format(report: &ValidationReport) -> String {
    let rules: Vec<ReportingDescriptor> = CheckKind::ALL
        .iter()
        .map(|kind| {
            let mut rule = ReportingDescriptor::builder().id(kind.id().to_string()).build();
            rule.short_description = Some(
                MultiformatMessageString::builder()
                    .text(kind.description().to_string())
                    .build(),
            );
            rule
        })
        .collect();

    let uri = report.file.to_string_lossy().replace('\\', "/");

    let results: Vec<SarifResult> = report
        .failures()
        .map(|check| {
            let mut result = SarifResult::builder()
                .message(Message::builder().text(check.message.clone()).build())
                .build();

            result.rule_id = Some(check.check.id().to_string());
            result.level = Some(ResultLevel::Error);
            result.rule_index = CheckKind::ALL
                .iter()
                .position(|k| *k == check.check)
                .map(|i| i as i64);

            let mut location = Location::builder().build();
            let mut physical = PhysicalLocation::builder().build();
            physical.artifact_location = Some(ArtifactLocation::builder().uri(uri.clone()).build());
            location.physical_location = Some(physical);
            result.locations = Some(vec![location]);

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("validate-frontmatter")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
