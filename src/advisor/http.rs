//! HTTP advisory client
//!
//! Posts the disposition parameters as JSON and expects a decision back.
//! A bounded timeout keeps a dead service from stalling the turn; every
//! failure maps into `AdvisorError` for the caller's fallback handling.

use std::time::Duration;

use crate::error::AdvisorError;

use super::{StealAdvisor, StealDecision, StealRequest};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// JSON-over-HTTP implementation of the advisory boundary
pub struct HttpAdvisor {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpAdvisor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            agent: ureq::AgentBuilder::new()
                .timeout(REQUEST_TIMEOUT)
                .build(),
        }
    }
}

impl StealAdvisor for HttpAdvisor {
    fn advise(&self, request: &StealRequest) -> Result<StealDecision, AdvisorError> {
        let response = self
            .agent
            .post(&self.endpoint)
            .set("User-Agent", "wildlands-advisor")
            .send_json(request)
            .map_err(|e| AdvisorError::Transport(e.to_string()))?;
        response
            .into_json::<StealDecision>()
            .map_err(|e| AdvisorError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::{consult, FALLBACK_REASONING};

    #[test]
    fn test_unreachable_endpoint_falls_back() {
        // Reserved TEST-NET address: the request fails fast and the
        // caller must see the fixed fallback.
        let advisor = HttpAdvisor::new("http://192.0.2.1:9/advise");
        let decision = consult(
            &advisor,
            &StealRequest {
                npc_greed: 75.0,
                npc_power_relative: -20.0,
                npc_relationship_to_player: 0.0,
                other_players_nearby: 0,
            },
        );
        assert!(!decision.attempt_steal);
        assert_eq!(decision.reasoning, FALLBACK_REASONING);
    }
}
