//! Steal advisor boundary
//!
//! After a defeat the dying NPC may attempt a last-ditch steal. Whether
//! it tries is decided by an external advisory service; this module owns
//! only the typed boundary and the fallback. Any failure is recovered
//! locally with a fixed no-steal decision, never surfaced to the player.

pub mod http;

pub use http::HttpAdvisor;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Fallback reasoning used whenever the advisory service fails
pub const FALLBACK_REASONING: &str =
    "The moment passes; the creature slinks away without reaching for your pack.";

/// Disposition parameters sent to the advisory service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StealRequest {
    /// 0 to 100
    pub npc_greed: f32,
    /// -100 to 100, negative when the player is the stronger party
    pub npc_power_relative: f32,
    pub npc_relationship_to_player: f32,
    pub other_players_nearby: u32,
}

/// The advisory service's recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StealDecision {
    pub attempt_steal: bool,
    pub reasoning: String,
}

impl StealDecision {
    /// The fixed decision substituted on any advisor failure
    pub fn fallback() -> Self {
        Self { attempt_steal: false, reasoning: FALLBACK_REASONING.to_string() }
    }
}

/// An advisory service. The decision logic lives on the other side of
/// this trait; the simulation core only consumes the answer.
pub trait StealAdvisor {
    fn advise(&self, request: &StealRequest) -> Result<StealDecision, AdvisorError>;
}

/// Consult the advisor, substituting the fallback on any failure
pub fn consult(advisor: &dyn StealAdvisor, request: &StealRequest) -> StealDecision {
    match advisor.advise(request) {
        Ok(decision) => decision,
        Err(e) => {
            log::warn!("steal advisor unavailable: {e}");
            StealDecision::fallback()
        }
    }
}

/// Advisor used when no service is configured: creatures never steal
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAdvisor;

impl StealAdvisor for NullAdvisor {
    fn advise(&self, _request: &StealRequest) -> Result<StealDecision, AdvisorError> {
        Ok(StealDecision {
            attempt_steal: false,
            reasoning: "No fight left in it.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingAdvisor;
    impl StealAdvisor for FailingAdvisor {
        fn advise(&self, _request: &StealRequest) -> Result<StealDecision, AdvisorError> {
            Err(AdvisorError::Transport("connection refused".to_string()))
        }
    }

    struct GreedyAdvisor;
    impl StealAdvisor for GreedyAdvisor {
        fn advise(&self, request: &StealRequest) -> Result<StealDecision, AdvisorError> {
            Ok(StealDecision {
                attempt_steal: request.npc_greed > 50.0,
                reasoning: "Greed wins.".to_string(),
            })
        }
    }

    fn request(greed: f32) -> StealRequest {
        StealRequest {
            npc_greed: greed,
            npc_power_relative: 0.0,
            npc_relationship_to_player: 0.0,
            other_players_nearby: 0,
        }
    }

    #[test]
    fn test_failure_yields_exact_fallback() {
        let decision = consult(&FailingAdvisor, &request(90.0));
        assert!(!decision.attempt_steal);
        assert_eq!(decision.reasoning, FALLBACK_REASONING);
    }

    #[test]
    fn test_success_passes_decision_through() {
        let decision = consult(&GreedyAdvisor, &request(90.0));
        assert!(decision.attempt_steal);
        assert_eq!(decision.reasoning, "Greed wins.");
    }

    #[test]
    fn test_null_advisor_never_steals() {
        let decision = consult(&NullAdvisor, &request(100.0));
        assert!(!decision.attempt_steal);
    }

    #[test]
    fn test_wire_format() {
        // The service contract is snake_case JSON on both sides.
        let body = serde_json::to_value(request(75.0)).unwrap();
        assert_eq!(body["npc_greed"], 75.0);
        assert_eq!(body["npc_power_relative"], 0.0);
        assert_eq!(body["npc_relationship_to_player"], 0.0);
        assert_eq!(body["other_players_nearby"], 0);

        let decision: StealDecision =
            serde_json::from_str(r#"{"attempt_steal":true,"reasoning":"Easy mark."}"#).unwrap();
        assert!(decision.attempt_steal);
        assert_eq!(decision.reasoning, "Easy mark.");
    }
}
