//! Mock tool launcher
//!
//! Stands in for the external tools when they are not installed. Instead of
//! running anything it writes the files each tool would produce, with small
//! but well-formed statistics content, and records every command it saw.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use contracts::{names, PipelineError, StageId, ToolCommand};
use tracing::debug;

use crate::{ExitReport, ToolLauncher};

const BASE_STATS: &str = "# id length frequency\n\
0 352 3\n1 361 1\n2 349 5\n3 358 2\n4 355 1\n";
const MUTATED_STATS: &str = "# id length frequency\n\
0 352 2\n1 361 1\n2 349 4\n3 358 1\n";
const MUTATION_POSITIONS_STATS: &str = "# position length\n\
12 352\n97 361\n180 349\n301 358\n44 355\n";
const FINAL_STATS: &str = "# id frequency\n0 4\n1 2\n2 6\n3 1\n";

/// What the mock does for a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Exit 0 and write every output
    Complete,
    /// Exit with this code and write nothing
    Exit(i32),
    /// Exit 0 but skip the output with this file name
    Omit(&'static str),
    /// Die from this signal and write nothing
    Killed(i32),
}

/// Launcher that fakes the external tools
#[derive(Debug, Clone)]
pub struct MockLauncher {
    behaviors: HashMap<StageId, MockBehavior>,
    calls: Arc<Mutex<Vec<(StageId, ToolCommand)>>>,
}

impl Default for MockLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLauncher {
    /// Every stage completes
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Override the behavior of one stage
    pub fn with(mut self, stage: StageId, behavior: MockBehavior) -> Self {
        self.behaviors.insert(stage, behavior);
        self
    }

    /// Commands launched so far, shared between clones
    pub fn calls(&self) -> Vec<(StageId, ToolCommand)> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Stages launched so far, in order
    pub fn launched_stages(&self) -> Vec<StageId> {
        self.calls().into_iter().map(|(stage, _)| stage).collect()
    }

    fn behavior(&self, stage: StageId) -> MockBehavior {
        self.behaviors
            .get(&stage)
            .copied()
            .unwrap_or(MockBehavior::Complete)
    }
}

impl ToolLauncher for MockLauncher {
    async fn launch(
        &self,
        stage: StageId,
        command: &ToolCommand,
    ) -> Result<ExitReport, PipelineError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((stage, command.clone()));

        let omit = match self.behavior(stage) {
            MockBehavior::Exit(code) => return Ok(ExitReport::failure(code)),
            MockBehavior::Killed(signal) => return Ok(ExitReport::killed(signal)),
            MockBehavior::Omit(name) => Some(name),
            MockBehavior::Complete => None,
        };

        for (path, content) in outputs(stage, command) {
            let skipped = omit.is_some_and(|name| path.file_name().is_some_and(|f| f == name));
            if skipped {
                debug!(path = %path.display(), "mock skips output");
                continue;
            }
            fs::write(&path, content)?;
        }
        Ok(ExitReport::success())
    }
}

/// Files a stage's tool would write, derived from its command line
fn outputs(stage: StageId, command: &ToolCommand) -> Vec<(PathBuf, &'static str)> {
    match stage {
        StageId::RepertoireSimulation => {
            // <HC|LC> <out_dir> ...
            let Some(dir) = command.args.get(1).map(PathBuf::from) else {
                return Vec::new();
            };
            vec![
                (dir.join(names::REPERTOIRE_FASTA), ">seq_0\nACGTACGT\n>seq_1\nTTGACCA\n"),
                (dir.join(names::BASE_STATS), BASE_STATS),
                (dir.join(names::MUTATED_STATS), MUTATED_STATS),
                (dir.join(names::MUTATION_POSITIONS_STATS), MUTATION_POSITIONS_STATS),
                (dir.join(names::FINAL_STATS), FINAL_STATS),
            ]
        }
        StageId::ReadSimulation => match prefix_arg(command, names::PAIRED_READS_PREFIX) {
            Some(prefix) => vec![
                (with_suffix(&prefix, "1.fq"), "@r1\nACGT\n+\nIIII\n"),
                (with_suffix(&prefix, "2.fq"), "@r1\nTGCA\n+\nIIII\n"),
            ],
            None => Vec::new(),
        },
        StageId::ReadMerging => match prefix_arg(command, names::MERGED_READS_PREFIX) {
            Some(prefix) => vec![(with_suffix(&prefix, ".fastq"), "@r1\nACGTGCA\n+\nIIIIIII\n")],
            None => Vec::new(),
        },
        StageId::IdealRepertoire => match prefix_arg(command, names::IDEAL_REPERTOIRE_PREFIX) {
            Some(prefix) => vec![
                (with_suffix(&prefix, ".clusters.fa"), ">cluster___0___size___1\nACGTGCA\n"),
                (with_suffix(&prefix, ".rcm"), "r1\t0\n"),
            ],
            None => Vec::new(),
        },
    }
}

fn prefix_arg(command: &ToolCommand, prefix: &str) -> Option<PathBuf> {
    command
        .args
        .iter()
        .map(PathBuf::from)
        .find(|p| p.file_name().is_some_and(|f| f == prefix))
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
