//! Event Types
//!
//! History entries recorded by a protein as its state changes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Residue;

/// What happened to the protein
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A site was marked. `novel` is false when it was already marked;
    /// the entry is recorded either way.
    Phosphorylated { site: Residue, novel: bool },
    Truncated { site: Residue },
    /// Detached from the microtubule
    Unbound,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Phosphorylated { site, .. } => write!(f, "Phosphorylated at {}", site),
            EventKind::Truncated { site } => write!(f, "Truncated at {}", site),
            EventKind::Unbound => write!(f, "Unbound from microtubule"),
        }
    }
}

/// One entry in a protein's history, stamped with the protein's step count
/// at the time it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinEvent {
    pub step: u64,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl ProteinEvent {
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }

    pub fn is_truncation(&self) -> bool {
        matches!(self.kind, EventKind::Truncated { .. })
    }

    pub fn is_unbinding(&self) -> bool {
        matches!(self.kind, EventKind::Unbound)
    }
}

impl fmt::Display for ProteinEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let phospho = ProteinEvent::new(
            0,
            EventKind::Phosphorylated {
                site: Residue::serine(231),
                novel: true,
            },
        );
        assert_eq!(phospho.to_string(), "Phosphorylated at S231");

        let truncated = ProteinEvent::new(4, EventKind::Truncated { site: Residue::default() });
        assert_eq!(truncated.to_string(), "Truncated at D421");

        let unbound = ProteinEvent::new(4, EventKind::Unbound);
        assert_eq!(unbound.to_string(), "Unbound from microtubule");
    }

    #[test]
    fn test_repeat_phosphorylation_reads_the_same() {
        let first = EventKind::Phosphorylated {
            site: Residue::serine(300),
            novel: true,
        };
        let repeat = EventKind::Phosphorylated {
            site: Residue::serine(300),
            novel: false,
        };
        assert_eq!(first.to_string(), repeat.to_string());
        assert_ne!(first, repeat);
    }

    #[test]
    fn test_event_serialization() {
        let event = ProteinEvent::new(3, EventKind::Truncated { site: Residue::default() });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["step"], 3);
        assert_eq!(json["type"], "truncated");
        assert_eq!(json["site"], "D421");

        let unbound = serde_json::to_string(&ProteinEvent::new(7, EventKind::Unbound)).unwrap();
        assert_eq!(unbound, r#"{"step":7,"type":"unbound"}"#);
    }

    #[test]
    fn test_event_deserialization() {
        let event: ProteinEvent =
            serde_json::from_str(r#"{"step":2,"type":"phosphorylated","site":"S250","novel":false}"#)
                .unwrap();
        assert_eq!(event.step, 2);
        assert_eq!(
            event.kind,
            EventKind::Phosphorylated {
                site: Residue::serine(250),
                novel: false
            }
        );
        assert!(!event.is_truncation());
        assert!(!event.is_unbinding());
    }
}
