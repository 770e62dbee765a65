//! Replays recorded interactions from a cassette.

use super::format::{Cassette, Interaction};

/// Serves a cassette's interactions in strict recording order, verifying
/// that each request targets the port and method recorded next.
#[derive(Debug)]
pub struct CassetteReplayer {
    interactions: Vec<Interaction>,
    cursor: usize,
}

impl CassetteReplayer {
    /// Create a new replayer over a loaded cassette.
    #[must_use]
    pub fn new(cassette: Cassette) -> Self {
        Self { interactions: cassette.interactions, cursor: 0 }
    }

    /// Return the next recorded interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics when the cassette is exhausted or the next recorded
    /// interaction belongs to a different port/method; both mean the run no
    /// longer matches the recording.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> &Interaction {
        assert!(
            self.cursor < self.interactions.len(),
            "Cassette exhausted: all {count} interactions have been consumed \
             (next requested: {port}::{method})",
            count = self.interactions.len(),
        );
        let interaction = &self.interactions[self.cursor];
        assert!(
            interaction.port == port && interaction.method == method,
            "Cassette mismatch at seq {seq}: recorded {rport}::{rmethod}, requested {port}::{method}",
            seq = interaction.seq,
            rport = interaction.port,
            rmethod = interaction.method,
        );
        self.cursor += 1;
        interaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette { name: "test".into(), recorded_at: Utc::now(), commit: "abc".into(), interactions }
    }

    fn invoke_interaction(seq: u64, prompt: &str) -> Interaction {
        Interaction {
            seq,
            port: "image_model".into(),
            method: "invoke".into(),
            input: json!({"prompt": prompt}),
            output: json!({"Ok": {"candidates": []}}),
        }
    }

    #[test]
    fn replay_in_order() {
        let cassette =
            make_cassette(vec![invoke_interaction(0, "first"), invoke_interaction(1, "second")]);
        let mut replayer = CassetteReplayer::new(cassette);

        assert_eq!(replayer.next_interaction("image_model", "invoke").seq, 0);
        assert_eq!(replayer.next_interaction("image_model", "invoke").seq, 1);
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_replayer_panics() {
        let cassette = make_cassette(vec![invoke_interaction(0, "only")]);
        let mut replayer = CassetteReplayer::new(cassette);
        let _ = replayer.next_interaction("image_model", "invoke");
        let _ = replayer.next_interaction("image_model", "invoke"); // panics
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn empty_cassette_panics() {
        let cassette = make_cassette(vec![]);
        let mut replayer = CassetteReplayer::new(cassette);
        let _ = replayer.next_interaction("image_model", "invoke");
    }

    #[test]
    #[should_panic(expected = "Cassette mismatch")]
    fn wrong_port_panics() {
        let cassette = make_cassette(vec![invoke_interaction(0, "only")]);
        let mut replayer = CassetteReplayer::new(cassette);
        let _ = replayer.next_interaction("other_port", "invoke");
    }
}
