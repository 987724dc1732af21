//! Corrective-action drafting — a fixed template seeded with the aircraft,
//! category, and complaint. Bracketed tokens mark the slots the technician
//! fills in by hand. Pure: identical input yields byte-identical output.

use crate::models::{AircraftModel, IssueCategory};

/// Pluggable suggestion seam. The reference [`TemplateEngine`] is static
/// text; a generative model can sit behind the same contract.
pub trait SuggestionEngine: Send + Sync {
    fn suggest(
        &self,
        aircraft_model: &AircraftModel,
        category: &IssueCategory,
        description: &str,
    ) -> String;
}

/// Reference engine: the canned narrative skeleton every log starts from.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEngine;

impl SuggestionEngine for TemplateEngine {
    fn suggest(
        &self,
        aircraft_model: &AircraftModel,
        category: &IssueCategory,
        description: &str,
    ) -> String {
        format!(
            "AIRCRAFT: {}\n\
             ISSUE CATEGORY: {}\n\
             COMPLAINT: {}\n\
             \n\
             TROUBLESHOOTING:\n\
             1. Performed visual inspection of affected area\n\
             2. Consulted technical documentation (AMM 28-61-00)\n\
             3. Conducted operational test to reproduce issue\n\
             4. Identified [potential issue] in the [component/system]\n\
             \n\
             CORRECTIVE ACTION:\n\
             1. [Removed/replaced/repaired] the affected [component]\n\
             2. Performed operational test to verify fix\n\
             3. Documented all work in aircraft maintenance system\n\
             4. Return to service after successful verification\n\
             \n\
             PARTS USED:\n\
             - [Part number] (if applicable)\n\
             \n\
             ADDITIONAL NOTES:\n\
             System functioning correctly after maintenance action. \
             No anomalies observed during post-repair testing.",
            aircraft_model.as_str(),
            category.as_str(),
            description,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_all_three_inputs() {
        let text = TemplateEngine.suggest(
            &AircraftModel::Boeing737,
            &IssueCategory::Hydraulics,
            "slow gear retraction",
        );
        assert!(text.starts_with("AIRCRAFT: Boeing 737\n"));
        assert!(text.contains("ISSUE CATEGORY: Hydraulics\n"));
        assert!(text.contains("COMPLAINT: slow gear retraction\n"));
    }

    #[test]
    fn carries_every_section() {
        let text = TemplateEngine.suggest(
            &AircraftModel::EmbraerE190,
            &IssueCategory::Environmental,
            "cabin temperature erratic",
        );
        for section in [
            "TROUBLESHOOTING:",
            "CORRECTIVE ACTION:",
            "PARTS USED:",
            "ADDITIONAL NOTES:",
        ] {
            assert!(text.contains(section), "missing section {section}");
        }
        // Placeholder tokens stay bracketed for the technician to replace.
        assert!(text.contains("[potential issue]"));
        assert!(text.contains("[Part number]"));
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let a = TemplateEngine.suggest(
            &AircraftModel::Boeing737,
            &IssueCategory::Hydraulics,
            "slow gear retraction",
        );
        let b = TemplateEngine.suggest(
            &AircraftModel::Boeing737,
            &IssueCategory::Hydraulics,
            "slow gear retraction",
        );
        assert_eq!(a, b);
    }
}
