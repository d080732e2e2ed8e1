//! Transcript replay.
//!
//! Drives the use cases from a JSON-lines transcript of timestamped commands,
//! against in-memory adapters and a manual clock, writing one JSON result line
//! per command. Owners are named by free-form labels within a transcript.
//!
//! ```text
//! {"at":"2025-03-01T09:00:00Z","owner":"mika","command":"hatch"}
//! {"at":"2025-03-01T09:05:00Z","owner":"mika","command":"action","kind":"feed"}
//! {"at":"2025-03-01T10:00:00Z","command":"promotion","key":"DOUBLE_XP","until":"2025-03-02T00:00:00Z"}
//! {"at":"2025-03-01T12:00:00Z","owner":"mika","command":"mini_game","game":"dash","score":12}
//! ```

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use blipkin_domain::{ActionKind, DomainError, MiniGame, OwnerId, PromotionKey, SimulationConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::{App, InMemoryAdapters};
use crate::infrastructure::clock::ManualClock;
use crate::infrastructure::memory::PromotionWindow;
use crate::use_cases::creature::CreatureError;

#[derive(Debug, Deserialize)]
pub struct TranscriptLine {
    pub at: DateTime<Utc>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(flatten)]
    pub command: Command,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Hatch,
    View,
    /// Kind is parsed leniently so unknown kinds are reported, not skipped
    Action { kind: String },
    GrantEnergy { amount: u32 },
    MiniGame { game: MiniGame, score: u64 },
    Personality,
    Promotion { key: String, until: DateTime<Utc> },
}

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("Malformed line: {0}")]
    Malformed(String),
    #[error("Command needs an owner")]
    MissingOwner,
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Creature(#[from] CreatureError),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplayRecord {
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<String>,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Counts reported after a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub commands: usize,
    pub failures: usize,
}

pub struct Replayer {
    app: App,
    adapters: InMemoryAdapters,
    clock: Arc<ManualClock>,
    owners: HashMap<String, OwnerId>,
}

impl Replayer {
    pub fn new(config: SimulationConfig) -> Self {
        let adapters = InMemoryAdapters::new();
        let clock = Arc::new(ManualClock::new(DateTime::<Utc>::UNIX_EPOCH));
        let app = App::new(adapters.repositories(clock.clone()), config);
        Self {
            app,
            adapters,
            clock,
            owners: HashMap::new(),
        }
    }

    /// Replay every line of `input`, writing results to `output`.
    pub async fn replay(
        &mut self,
        input: impl BufRead,
        mut output: impl Write,
    ) -> anyhow::Result<ReplaySummary> {
        let mut summary = ReplaySummary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line.context("failed to read transcript")?;
            if line.trim().is_empty() {
                continue;
            }
            let number = index + 1;
            summary.commands += 1;

            let (owner, result) = match serde_json::from_str::<TranscriptLine>(&line) {
                Ok(parsed) => {
                    let owner = parsed.owner.clone();
                    (owner, self.run(parsed).await)
                }
                Err(e) => (None, Err(ReplayError::Malformed(e.to_string()))),
            };

            let record = match result {
                Ok(value) => ReplayRecord {
                    line: number,
                    owner,
                    ok: true,
                    result: Some(value),
                    error: None,
                },
                Err(e) => {
                    summary.failures += 1;
                    tracing::warn!(line = number, error = %e, "Transcript command failed");
                    ReplayRecord {
                        line: number,
                        owner,
                        ok: false,
                        result: None,
                        error: Some(e.to_string()),
                    }
                }
            };

            serde_json::to_writer(&mut output, &record).context("failed to encode result")?;
            writeln!(output).context("failed to write result")?;
        }

        output.flush().context("failed to flush output")?;
        Ok(summary)
    }

    async fn run(&mut self, line: TranscriptLine) -> Result<serde_json::Value, ReplayError> {
        self.clock.set(line.at);
        let creature = &self.app.use_cases.creature;

        if let Command::Promotion { key, until } = &line.command {
            let key: PromotionKey = key.parse()?;
            self.adapters
                .promotions
                .schedule(PromotionWindow {
                    key,
                    starts_at: line.at,
                    ends_at: *until,
                })
                .await;
            return Ok(serde_json::json!({ "scheduled": key, "until": until }));
        }

        let label = line.owner.as_deref().ok_or(ReplayError::MissingOwner)?;
        let owner_id = *self
            .owners
            .entry(label.to_string())
            .or_insert_with(OwnerId::new);

        let value = match line.command {
            Command::Hatch => to_value(creature.hatch.execute(owner_id).await?),
            Command::View => to_value(creature.view.execute(owner_id).await?),
            Command::Action { kind } => {
                let kind: ActionKind = kind.parse()?;
                to_value(creature.perform_action.execute(owner_id, kind).await?)
            }
            Command::GrantEnergy { amount } => {
                to_value(creature.grant_energy.execute(owner_id, amount).await?)
            }
            Command::MiniGame { game, score } => {
                to_value(creature.minigame.execute(owner_id, game, score).await?)
            }
            Command::Personality => to_value(creature.personality.execute(owner_id).await?),
            Command::Promotion { .. } => serde_json::Value::Null,
        };
        Ok(value)
    }
}

fn to_value(value: impl Serialize) -> serde_json::Value {
    serde_json::to_value(value)
        .unwrap_or_else(|e| serde_json::json!({ "encodeError": e.to_string() }))
}
