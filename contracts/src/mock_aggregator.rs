//! Mock Price Feed
//!
//! Aggregator-shaped price feed for local networks and tests. Anyone can
//! push a new answer; each update opens a new round.

use odra::prelude::*;

use crate::types::{RoundData, MOCK_VERSION};

#[odra::module]
pub struct MockV3Aggregator {
    /// Decimal places of every answer
    feed_decimals: Var<u8>,
    /// Most recent answer
    latest_answer: Var<i64>,
    /// Timestamp of the most recent answer
    latest_timestamp: Var<u64>,
    /// Most recent round id
    latest_round: Var<u64>,
    /// Round id -> answer
    answers: Mapping<u64, i64>,
    /// Round id -> updated-at timestamp
    timestamps: Mapping<u64, u64>,
    /// Round id -> started-at timestamp
    started_ats: Mapping<u64, u64>,
}

#[odra::module]
impl MockV3Aggregator {
    pub fn init(&mut self, decimals: u8, initial_answer: i64) {
        self.feed_decimals.set(decimals);
        self.update_answer(initial_answer);
    }

    /// Push a new answer, opening the next round at the current block time
    pub fn update_answer(&mut self, answer: i64) {
        let now = self.env().get_block_time();
        let round_id = self.latest_round.get_or_default() + 1;

        self.latest_answer.set(answer);
        self.latest_timestamp.set(now);
        self.latest_round.set(round_id);
        self.answers.set(&round_id, answer);
        self.timestamps.set(&round_id, now);
        self.started_ats.set(&round_id, now);
    }

    /// Overwrite the latest round with explicit data
    pub fn update_round_data(&mut self, round_id: u64, answer: i64, timestamp: u64, started_at: u64) {
        self.latest_round.set(round_id);
        self.latest_answer.set(answer);
        self.latest_timestamp.set(timestamp);
        self.answers.set(&round_id, answer);
        self.timestamps.set(&round_id, timestamp);
        self.started_ats.set(&round_id, started_at);
    }

    pub fn get_round_data(&self, round_id: u64) -> RoundData {
        RoundData {
            round_id,
            answer: self.answers.get_or_default(&round_id),
            started_at: self.started_ats.get_or_default(&round_id),
            updated_at: self.timestamps.get_or_default(&round_id),
            answered_in_round: round_id,
        }
    }

    pub fn latest_round_data(&self) -> RoundData {
        let round_id = self.latest_round.get_or_default();
        RoundData {
            round_id,
            answer: self.latest_answer.get_or_default(),
            started_at: self.started_ats.get_or_default(&round_id),
            updated_at: self.latest_timestamp.get_or_default(),
            answered_in_round: round_id,
        }
    }

    pub fn decimals(&self) -> u8 {
        self.feed_decimals.get_or_default()
    }

    pub fn description(&self) -> String {
        String::from("Mock CSPR / USD")
    }

    pub fn version(&self) -> u64 {
        MOCK_VERSION
    }
}
