//! Offline assistant — deterministic keyword routing over canned guidance.
//!
//! No model call, no network: the reply is a pure function of the message
//! text and tags. Topic bodies are condensed from real troubleshooting
//! exchanges; anything unrecognized gets a plain acknowledgment.

use async_trait::async_trait;

use super::{AssistantClient, AssistantReply, TransportError};
use crate::models::MessageTags;

const APU_GUIDANCE: &str = "This sounds like it could be related to the APU fuel system or \
ignition. If the APU cuts off during the start sequence, check the ECAM or EICAS for fault \
messages. Common causes include:\n\n\
1. Fuel supply issues (check APU fuel pump and filter)\n\
2. Ignition problems (check igniter plugs)\n\
3. Bleed air leaks affecting startup\n\n\
The APU troubleshooting chapter of the Aircraft Maintenance Manual (ATA 49) covers the \
inspection sequence for each of these.";

const GEAR_GUIDANCE: &str = "Intermittent landing gear indication problems are most often in \
the position sensing circuit rather than the gear itself. Start with:\n\n\
1. Worn or dirty sensor contacts in the downlock mechanism\n\
2. Wiring harness chafing in the wheel well\n\
3. Corroded connections at the landing gear control interface unit\n\
4. A faulty indicator light or display component\n\n\
Inspect the downlock sensor and its electrical connections for corrosion, looseness, or \
harness damage before replacing components.";

const HYDRAULICS_GUIDANCE: &str = "Slow actuation usually points to pressure loss in the \
affected circuit. Check:\n\n\
1. Reservoir fluid level and evidence of external leaks at line junctions\n\
2. Pump output pressure against the placarded value\n\
3. Filter differential-pressure indicators\n\n\
A single slow actuator with normal system pressure suggests a local restriction or a worn \
seal at that actuator. Document fluid quantities added in the log entry.";

const ELECTRICAL_GUIDANCE: &str = "For cabin electrical or lighting faults, isolate by zone \
before replacing hardware:\n\n\
1. Confirm the affected zones against the power distribution schematic\n\
2. Check the zone's power supply unit output\n\
3. Inspect connectors at the zone boundary for corrosion or backed-out pins\n\n\
A fault spanning adjacent zones is usually the shared PSU rather than the lighting elements.";

const AVIONICS_GUIDANCE: &str = "Intermittent avionics faults during pre-flight are commonly \
connector or wiring issues rather than LRU failures. Recommended sequence:\n\n\
1. Pull and reseat the unit, inspecting connector pins\n\
2. Run the system's built-in test and record fault codes\n\
3. Check wiring continuity through the harness, flexing at clamp points\n\n\
Replace the harness section before the LRU if the fault follows harness movement.";

const ENVIRONMENTAL_GUIDANCE: &str = "Erratic cabin temperature control is typically sensor \
drift or a control-loop fault:\n\n\
1. Compare duct temperature sensor readings against a calibrated reference\n\
2. Recalibrate or replace sensors outside tolerance\n\
3. Verify the temperature control software is at the current revision\n\n\
Recalibration plus a software update resolves most erratic-control reports.";

/// Deterministic local responder.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAssistant;

impl LocalAssistant {
    /// Produce the reply body for a message. Pure; no I/O.
    pub fn respond(&self, message: &str, tags: &MessageTags) -> String {
        let lower = message.to_lowercase();

        let body = if lower.contains("apu") {
            Some(APU_GUIDANCE)
        } else if lower.contains("landing gear") || lower.contains("gear") {
            Some(GEAR_GUIDANCE)
        } else if lower.contains("hydraulic") {
            Some(HYDRAULICS_GUIDANCE)
        } else if lower.contains("lighting") || lower.contains("electrical") {
            Some(ELECTRICAL_GUIDANCE)
        } else if lower.contains("tcas") || lower.contains("avionics") {
            Some(AVIONICS_GUIDANCE)
        } else if lower.contains("temperature") || lower.contains("cabin") {
            Some(ENVIRONMENTAL_GUIDANCE)
        } else {
            None
        };

        let Some(body) = body else {
            return format!("I received your message about: {message}");
        };

        let mut reply = String::new();
        if let Some(model) = &tags.aircraft_model {
            reply.push_str(&format!("[Aircraft: {}] ", model.as_str()));
        }
        if let Some(category) = &tags.issue_category {
            reply.push_str(&format!("[Issue Category: {}] ", category.as_str()));
        }
        if !reply.is_empty() {
            reply.push('\n');
        }
        reply.push_str(body);

        if let Some(model) = &tags.aircraft_model {
            reply.push_str(&format!(
                "\n\nFor type-specific procedures, consult the {} Maintenance Manual.",
                model.as_str()
            ));
        }
        reply
    }
}

#[async_trait]
impl AssistantClient for LocalAssistant {
    async fn send(
        &self,
        message: &str,
        tags: &MessageTags,
    ) -> Result<AssistantReply, TransportError> {
        Ok(AssistantReply {
            text: self.respond(message, tags),
            processing_time: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AircraftModel, IssueCategory};

    #[test]
    fn routes_on_keywords() {
        let tags = MessageTags::default();
        assert!(LocalAssistant
            .respond("APU cuts off at 50% N", &tags)
            .contains("fuel system"));
        assert!(LocalAssistant
            .respond("nose gear indicator flickers", &tags)
            .contains("position sensing"));
        assert!(LocalAssistant
            .respond("hydraulic pressure dropping", &tags)
            .contains("Reservoir fluid level"));
        assert!(LocalAssistant
            .respond("TCAS intermittent failures", &tags)
            .contains("reseat"));
    }

    #[test]
    fn unknown_topic_echoes_the_message() {
        let reply = LocalAssistant.respond("where is the crew coffee machine", &MessageTags::default());
        assert_eq!(
            reply,
            "I received your message about: where is the crew coffee machine"
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let tags = MessageTags::default();
        let upper = LocalAssistant.respond("APU FAULT", &tags);
        let lower = LocalAssistant.respond("apu fault", &tags);
        assert!(upper.contains("fuel system"));
        assert!(lower.contains("fuel system"));
    }

    #[test]
    fn tags_add_context_lines() {
        let tags = MessageTags {
            aircraft_model: Some(AircraftModel::AirbusA320),
            issue_category: Some(IssueCategory::Mechanical),
        };
        let reply = LocalAssistant.respond("APU start fails", &tags);
        assert!(reply.starts_with("[Aircraft: Airbus A320] [Issue Category: Mechanical]"));
        assert!(reply.ends_with("consult the Airbus A320 Maintenance Manual."));
    }

    #[test]
    fn responder_is_deterministic() {
        let tags = MessageTags {
            aircraft_model: Some(AircraftModel::Boeing737),
            issue_category: None,
        };
        let a = LocalAssistant.respond("gear indicator flicker", &tags);
        let b = LocalAssistant.respond("gear indicator flicker", &tags);
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn client_wrapper_never_fails() {
        let reply = LocalAssistant
            .send("hydraulic leak at J47", &MessageTags::default())
            .await
            .unwrap();
        assert!(reply.text.contains("pressure loss"));
        assert!(reply.processing_time.is_none());
    }
}
