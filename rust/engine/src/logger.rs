use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::round::Outcome;

/// Complete record of one simulated round, serialized to JSONL for run
/// histories and later aggregation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Base RNG seed of the run (enables deterministic replay)
    pub seed: Option<u64>,
    /// Player hit threshold in force for this round
    pub threshold: u8,
    /// Player's final hand
    pub player: Vec<Card>,
    /// Dealer's final hand (two cards when the player busted)
    pub dealer: Vec<Card>,
    /// Player's final total
    pub player_total: u8,
    /// Dealer's final total
    pub dealer_total: u8,
    /// Round outcome from the player's side
    pub outcome: Option<Outcome>,
    /// Settlement in wager units (+1 / -1 / 0 for a unit stake)
    pub net_units: Option<i64>,
    /// Timestamp when the round was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSONL writer for [`RoundRecord`]s.
///
/// A logger without a writer (see [`RoundLogger::with_seq_for_test`]) is a
/// disabled sink: `write` succeeds and drops the record, which keeps id
/// generation testable without touching the filesystem.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
