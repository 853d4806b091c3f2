use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Analytics events emitted around a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimulationEvent {
    SimulationStart {
        cards_count: usize,
        total_minimums: Decimal,
        affordable_amount: Decimal,
    },
    SimulationComplete {
        total_cards: usize,
        total_months: u32,
        savings: Decimal,
        recommended_product: String,
    },
    CtaClick {
        product: String,
    },
}

impl SimulationEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SimulationStart { .. } => "simulation_start",
            Self::SimulationComplete { .. } => "simulation_complete",
            Self::CtaClick { .. } => "cta_click",
        }
    }
}

/// Outbound hook injected by the host (analytics, logs, queues).
pub trait SimulationObserver: Send + Sync {
    fn notify(&self, event: &SimulationEvent) -> Result<(), ObserverError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    #[error("event transport unavailable: {0}")]
    Transport(String),
}

/// Observer that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SimulationObserver for NoopObserver {
    fn notify(&self, _event: &SimulationEvent) -> Result<(), ObserverError> {
        Ok(())
    }
}
