//! # Integration Tests
//!
//! End-to-end scenarios across the workspace crates.
//!
//! Covers:
//! - configuration resolution feeding the orchestrator
//! - full runs against the mock launcher (no external tools needed)
//! - failure scenarios: rejected configuration, failing tool, missing artifact,
//!   panicking renderer
//! - the run loop: nothing touched before checks pass, run log content,
//!   interrupts
//! - Unix-only runs with shell-script tools through the process launcher

#[cfg(test)]
mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};

    use clap::Parser;
    use config_loader::{ConfigLoader, GermlineDefaults, ToolchainConfig};
    use contracts::ToolPaths;
    use ig_simulator_cli::Cli;

    /// Toolchain whose germline databases and binaries all exist under `dir`
    pub fn fake_toolchain(dir: &Path) -> ToolchainConfig {
        let germline = dir.join("germline");
        let bin = dir.join("bin");
        fs::create_dir_all(&germline).unwrap();
        fs::create_dir_all(&bin).unwrap();

        for name in ["IGHV.fa", "IGHD.fa", "IGHJ.fa"] {
            fs::write(germline.join(name), ">gene\nACGTACGT\n").unwrap();
        }
        let tools = ToolPaths {
            repertoire_simulator: bin.join("simulate_repertoire"),
            art_illumina: bin.join("art_illumina"),
            art_454: bin.join("art_454"),
            paired_read_merger: bin.join("paired_read_merger"),
            ideal_repertoire_constructor: bin.join("create_ideal_repertoire"),
        };
        for path in tools.required(contracts::Technology::Illumina) {
            fs::write(path.1, "").unwrap();
        }
        fs::write(&tools.art_454, "").unwrap();

        ToolchainConfig {
            tools,
            germline: GermlineDefaults {
                v_genes: germline.join("IGHV.fa"),
                d_genes: germline.join("IGHD.fa"),
                j_genes: germline.join("IGHJ.fa"),
            },
        }
    }

    /// `toolchain` saved as `<dir>/tools.toml`
    pub fn toolchain_file(dir: &Path, toolchain: &ToolchainConfig) -> PathBuf {
        let path = dir.join("tools.toml");
        fs::write(&path, ConfigLoader::to_toml(toolchain).unwrap()).unwrap();
        path
    }

    /// Quiet command line writing to `out` with the toolchain file `tools`
    pub fn command_line(tools: &Path, out: &Path, extra: &[&str]) -> Cli {
        let mut args = vec![
            "ig-simulator".to_string(),
            "-q".to_string(),
            "--tools".to_string(),
            tools.display().to_string(),
            "-o".to_string(),
            out.display().to_string(),
        ];
        args.extend(extra.iter().map(|a| a.to_string()));
        Cli::try_parse_from(args).unwrap()
    }

    /// Output directory left over from an earlier run
    pub fn stale_output(out: &Path) {
        fs::create_dir_all(out).unwrap();
        fs::write(out.join("ig_simulator.log"), "previous run\n").unwrap();
        fs::write(out.join("repertoire.fasta"), ">old\n").unwrap();
    }

    pub fn assert_untouched(out: &Path) {
        assert_eq!(
            fs::read_to_string(out.join("ig_simulator.log")).unwrap(),
            "previous run\n"
        );
        assert_eq!(fs::read_to_string(out.join("repertoire.fasta")).unwrap(), ">old\n");
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::fs;
    use std::sync::{Arc, Mutex};

    use config_loader::{prepare_output_dir, resolve, RunOptions};
    use contracts::{ChainType, PipelineError, PipelineState, StageId, Technology};
    use drawing::{HistogramRenderer, HistogramSpec};
    use ig_simulator_cli::app::supervise;
    use ig_simulator_cli::{CliError, Pipeline};
    use stages::{MockBehavior, MockLauncher};

    use super::fixtures::fake_toolchain;

    /// `--test` preset: HC, 10 / 50 / 1000, all four stages
    #[tokio::test]
    async fn test_preset_runs_all_stages() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = fake_toolchain(dir.path());
        let options = RunOptions {
            test: true,
            output_dir: Some(dir.path().join("ig_simulator_test")),
            ..Default::default()
        };

        let settings = resolve(options, &toolchain).unwrap();
        assert_eq!(settings.chain_type, ChainType::Heavy);
        assert_eq!(
            (settings.num_bases, settings.num_mutated, settings.repertoire_size),
            (10, 50, 1000)
        );
        assert_eq!(settings.num_reads(), 2000);
        assert!(settings.gene_databases.d_genes.is_some());

        toolchain.check_binaries(settings.technology).unwrap();
        prepare_output_dir(&settings.output_dir).unwrap();

        let mut pipeline = Pipeline::new(settings, toolchain.tools, MockLauncher::new());
        let report = pipeline.run().await.unwrap();

        assert_eq!(pipeline.state(), PipelineState::Done);
        assert_eq!(pipeline.launcher().launched_stages(), StageId::ALL.to_vec());
        for (description, path) in report.output.main_files() {
            assert!(path.is_file(), "{description} missing at {}", path.display());
        }
        assert_eq!(report.output.histograms.len(), 4);
        assert!(report.output.histograms.iter().all(|p| p.is_file()));
    }

    /// base >= mutated is rejected before anything runs or is deleted
    #[tokio::test]
    async fn test_ordering_violation_rejected_before_launch() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = fake_toolchain(dir.path());
        let out = dir.path().join("out");
        let options = RunOptions {
            output_dir: Some(out.clone()),
            chain_type: Some("HC".into()),
            num_bases: Some(100),
            num_mutated: Some(50),
            repertoire_size: Some(1000),
            ..Default::default()
        };

        let err = resolve(options, &toolchain).unwrap_err();

        assert!(matches!(err, PipelineError::ConfigValidation { .. }));
        assert_eq!(CliError::from(err).exit_code(), 1);
        assert!(!out.exists());
    }

    /// Tool exits 0 but repertoire.fasta is absent: the read simulator never runs
    #[tokio::test]
    async fn test_missing_repertoire_fasta() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = fake_toolchain(dir.path());
        let options = RunOptions {
            test: true,
            output_dir: Some(dir.path().join("out")),
            ..Default::default()
        };
        let settings = resolve(options, &toolchain).unwrap();
        prepare_output_dir(&settings.output_dir).unwrap();

        let launcher = MockLauncher::new().with(
            StageId::RepertoireSimulation,
            MockBehavior::Omit("repertoire.fasta"),
        );
        let mut pipeline = Pipeline::new(settings, toolchain.tools, launcher);
        let err = pipeline.run().await.unwrap_err();

        match &err {
            PipelineError::MissingArtifact { stage, path, .. } => {
                assert_eq!(*stage, StageId::RepertoireSimulation);
                assert!(path.ends_with("repertoire.fasta"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            pipeline.launcher().launched_stages(),
            vec![StageId::RepertoireSimulation]
        );
        assert_eq!(CliError::from(err).exit_code(), 1);
    }

    /// A non-zero exit halts the run; later adapters are never invoked
    #[tokio::test]
    async fn test_non_zero_exit_halts() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = fake_toolchain(dir.path());
        let options = RunOptions {
            test: true,
            skip_drawing: true,
            output_dir: Some(dir.path().join("out")),
            ..Default::default()
        };
        let settings = resolve(options, &toolchain).unwrap();
        prepare_output_dir(&settings.output_dir).unwrap();
        let out = settings.output_dir.clone();

        let launcher = MockLauncher::new().with(StageId::ReadSimulation, MockBehavior::Exit(1));
        let mut pipeline = Pipeline::new(settings, toolchain.tools, launcher);
        let err = pipeline.run().await.unwrap_err();

        assert!(matches!(err, PipelineError::StageFailed { .. }));
        assert_eq!(pipeline.state(), PipelineState::Failed(StageId::ReadSimulation));
        assert_eq!(
            pipeline.launcher().launched_stages(),
            vec![StageId::RepertoireSimulation, StageId::ReadSimulation]
        );
        assert!(out.join("repertoire.fasta").is_file());
        assert!(!out.join("merged_reads.fastq").exists());
    }

    /// `--tech 454` and `--tech Illumina` pick different binaries and templates
    #[tokio::test]
    async fn test_technology_selects_read_simulator() {
        for (tech, binary, first_arg) in [
            ("454", "art_454", None),
            ("illumina", "art_illumina", Some("-i")),
        ] {
            let dir = tempfile::tempdir().unwrap();
            let toolchain = fake_toolchain(dir.path());
            let options = RunOptions {
                test: true,
                skip_drawing: true,
                technology: Some(tech.into()),
                output_dir: Some(dir.path().join("out")),
                ..Default::default()
            };
            let settings = resolve(options, &toolchain).unwrap();
            prepare_output_dir(&settings.output_dir).unwrap();

            let mut pipeline = Pipeline::new(settings, toolchain.tools, MockLauncher::new());
            pipeline.run().await.unwrap();

            let calls = pipeline.launcher().calls();
            let (_, command) = calls
                .iter()
                .find(|(stage, _)| *stage == StageId::ReadSimulation)
                .unwrap();
            assert!(command.program().ends_with(binary), "{tech}: {command}");
            let args = command.arg_strings();
            match first_arg {
                Some(flag) => assert_eq!(args[0], flag),
                None => {
                    assert!(args[0].ends_with("repertoire.fasta"));
                    assert_eq!(&args[2..], ["1", "350", "50"]);
                }
            }
        }
        assert_eq!("454".parse::<Technology>().unwrap(), Technology::Roche454);
    }

    /// Light chain runs pass no D database to the simulator
    #[tokio::test]
    async fn test_light_chain_omits_d_genes() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = fake_toolchain(dir.path());
        let options = RunOptions {
            chain_type: Some("LC".into()),
            num_bases: Some(2),
            num_mutated: Some(5),
            repertoire_size: Some(20),
            skip_drawing: true,
            output_dir: Some(dir.path().join("out")),
            ..Default::default()
        };
        let settings = resolve(options, &toolchain).unwrap();
        prepare_output_dir(&settings.output_dir).unwrap();

        let mut pipeline = Pipeline::new(settings, toolchain.tools, MockLauncher::new());
        pipeline.run().await.unwrap();

        let calls = pipeline.launcher().calls();
        let args = calls[0].1.arg_strings();
        assert_eq!(args[0], "LC");
        assert_eq!(args.len(), 7);
        assert!(!args.iter().any(|a| a.ends_with("IGHD.fa")));
    }

    /// Writes a placeholder file per histogram and remembers what it was asked
    #[derive(Clone, Default)]
    struct RecordingRenderer {
        drawn: Arc<Mutex<Vec<(String, usize)>>>,
    }

    impl HistogramRenderer for RecordingRenderer {
        fn render(&self, values: &[f64], spec: &HistogramSpec) -> Result<(), PipelineError> {
            fs::write(&spec.output, b"png")?;
            self.drawn
                .lock()
                .unwrap()
                .push((spec.x_label.clone(), values.len()));
            Ok(())
        }
    }

    struct ExplodingRenderer;

    impl HistogramRenderer for ExplodingRenderer {
        fn render(&self, _values: &[f64], _spec: &HistogramSpec) -> Result<(), PipelineError> {
            panic!("renderer exploded")
        }
    }

    /// Histograms are drawn from the simulator's statistics files
    #[tokio::test]
    async fn test_histograms_from_repertoire_stats() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = fake_toolchain(dir.path());
        let options = RunOptions {
            test: true,
            output_dir: Some(dir.path().join("out")),
            ..Default::default()
        };
        let settings = resolve(options, &toolchain).unwrap();
        prepare_output_dir(&settings.output_dir).unwrap();

        let renderer = RecordingRenderer::default();
        let mut pipeline = Pipeline::new(settings, toolchain.tools, MockLauncher::new())
            .with_renderer(renderer.clone());
        let report = pipeline.run().await.unwrap();

        let drawn = renderer.drawn.lock().unwrap().clone();
        let labels: Vec<_> = drawn.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Sequence length",
                "Sequence frequency",
                "Sequence frequency",
                "Relative mutation position"
            ]
        );
        assert!(drawn.iter().all(|(_, n)| *n > 0));
        assert_eq!(report.output.histograms.len(), 4);
    }

    /// A panic inside the pipeline task becomes an internal error
    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = fake_toolchain(dir.path());
        let options = RunOptions {
            test: true,
            output_dir: Some(dir.path().join("out")),
            ..Default::default()
        };
        let settings = resolve(options, &toolchain).unwrap();
        prepare_output_dir(&settings.output_dir).unwrap();

        let mut pipeline = Pipeline::new(settings, toolchain.tools, MockLauncher::new())
            .with_renderer(ExplodingRenderer);
        let err = supervise(async move { pipeline.run().await }, std::future::pending())
            .await
            .unwrap_err();

        match &err {
            CliError::Internal { message } => assert_eq!(message, "renderer exploded"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.exit_code(), 1);
    }

    /// The output directory is emptied before stage 1
    #[test]
    fn test_output_dir_wiped() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir_all(out.join("nested")).unwrap();
        fs::write(out.join("stale.fasta"), ">old\n").unwrap();
        fs::write(out.join("nested/old.log"), "old run\n").unwrap();

        prepare_output_dir(&out).unwrap();

        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }
}

#[cfg(test)]
mod app_tests {
    use std::fs;

    use contracts::PipelineError;
    use ig_simulator_cli::app::execute;
    use ig_simulator_cli::CliError;
    use observability::RunLog;

    use super::fixtures::{
        assert_untouched, command_line, fake_toolchain, stale_output, toolchain_file,
    };

    /// A missing tool is reported before the old output is wiped
    #[tokio::test]
    async fn test_missing_binary_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = fake_toolchain(dir.path());
        fs::remove_file(&toolchain.tools.paired_read_merger).unwrap();
        let tools = toolchain_file(dir.path(), &toolchain);
        let out = dir.path().join("out");
        stale_output(&out);

        let run_log = RunLog::detached();
        let cli = command_line(&tools, &out, &["--test"]);
        let err = execute(&cli, &run_log, std::future::pending())
            .await
            .unwrap_err();

        assert!(
            matches!(err, CliError::Pipeline(PipelineError::MissingBinary { .. })),
            "got: {err}"
        );
        assert_eq!(err.exit_code(), 1);
        assert!(!run_log.is_open());
        assert_untouched(&out);
    }

    /// A rejected configuration leaves the old output alone
    #[tokio::test]
    async fn test_bad_config_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let tools = toolchain_file(dir.path(), &fake_toolchain(dir.path()));
        let out = dir.path().join("out");
        stale_output(&out);

        let run_log = RunLog::detached();
        let cli = command_line(
            &tools,
            &out,
            &[
                "--chain-type",
                "HC",
                "--num-bases",
                "100",
                "--num-mutated",
                "50",
                "--repertoire-size",
                "1000",
            ],
        );
        let err = execute(&cli, &run_log, std::future::pending())
            .await
            .unwrap_err();

        assert!(
            matches!(err, CliError::Pipeline(PipelineError::ConfigValidation { .. })),
            "got: {err}"
        );
        assert!(!run_log.is_open());
        assert_untouched(&out);
    }

    /// An unreadable toolchain file is fatal before anything is written
    #[tokio::test]
    async fn test_bad_toolchain_file_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let tools = dir.path().join("tools.toml");
        fs::write(&tools, "[tools\nrepertoire_simulator = 1\n").unwrap();
        let out = dir.path().join("out");
        stale_output(&out);

        let err = execute(
            &command_line(&tools, &out, &["--test"]),
            &RunLog::detached(),
            std::future::pending(),
        )
        .await
        .unwrap_err();

        assert!(
            matches!(err, CliError::Pipeline(PipelineError::ConfigParse { .. })),
            "got: {err}"
        );
        assert_untouched(&out);
    }
}

#[cfg(all(test, unix))]
mod process_tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use std::time::{Duration, Instant};

    use config_loader::{prepare_output_dir, resolve, RunOptions, ToolchainConfig};
    use contracts::{PipelineError, StageId};
    use ig_simulator_cli::app::execute;
    use ig_simulator_cli::{CliError, Pipeline};
    use observability::RunLog;
    use stages::ProcessLauncher;
    use tokio::sync::{Mutex, MutexGuard};
    use tracing_subscriber::layer::SubscriberExt;

    use super::fixtures::{command_line, fake_toolchain, stale_output, toolchain_file};

    /// Held while scripts are written or run, so no script is written
    /// while another test forks
    static TOOLS: Mutex<()> = Mutex::const_new(());

    async fn lock_tools() -> MutexGuard<'static, ()> {
        TOOLS.lock().await
    }

    const SIMULATOR: &str = r#"#!/bin/sh
out="$2"
echo "simulating $1 repertoire"
printf '>seq_0\nACGTACGT\n' > "$out/repertoire.fasta"
printf '# id length frequency\n0 350 2\n1 361 4\n' > "$out/base_repertoire.stats"
printf '0 350 1\n' > "$out/mutated_repertoire.stats"
printf '10 350\n90 361\n' > "$out/mutation_positions.stats"
printf '0 3\n1 1\n' > "$out/final_repertoire.stats"
"#;

    const ART_ILLUMINA: &str = r#"#!/bin/sh
while [ $# -gt 0 ]; do
  if [ "$1" = "-o" ]; then prefix="$2"; fi
  shift
done
echo "ART warning" 1>&2
printf '@r\nACGT\n+\nIIII\n' > "${prefix}1.fq"
printf '@r\nTGCA\n+\nIIII\n' > "${prefix}2.fq"
"#;

    const MERGER: &str = r#"#!/bin/sh
printf '@r\nACGTGCA\n+\nIIIIIII\n' > "$3.fastq"
"#;

    const FAILING_MERGER: &str = "#!/bin/sh\necho 'merging failed' 1>&2\nexit 4\n";

    const SLOW_SIMULATOR: &str = "#!/bin/sh\necho 'simulating slowly'\nexec sleep 30\n";

    const IDEAL: &str = r#"#!/bin/sh
printf '>cluster___0___size___1\nACGTGCA\n' > "$2.clusters.fa"
printf 'r\t0\n' > "$2.rcm"
"#;

    fn install(path: &Path, script: &str) {
        fs::write(path, script).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn install_tools(toolchain: &ToolchainConfig, merger: &str) {
        let tools = &toolchain.tools;
        install(&tools.repertoire_simulator, SIMULATOR);
        install(&tools.art_illumina, ART_ILLUMINA);
        install(&tools.paired_read_merger, merger);
        install(&tools.ideal_repertoire_constructor, IDEAL);
    }

    #[tokio::test]
    async fn test_shell_script_tools() {
        let _tools = lock_tools().await;

        // successful run, tool output teed into the run log
        let dir = tempfile::tempdir().unwrap();
        let toolchain = fake_toolchain(dir.path());
        install_tools(&toolchain, MERGER);

        let options = RunOptions {
            test: true,
            output_dir: Some(dir.path().join("out")),
            ..Default::default()
        };
        let settings = resolve(options, &toolchain).unwrap();
        prepare_output_dir(&settings.output_dir).unwrap();
        let run_log = RunLog::detached();
        run_log.open(&settings.log_path()).unwrap();
        let log_path = settings.log_path();

        let launcher = ProcessLauncher::new(run_log.clone(), false);
        let mut pipeline = Pipeline::new(settings, toolchain.tools.clone(), launcher);
        let report = pipeline.run().await.unwrap();

        for (_, path) in report.output.main_files() {
            assert!(path.is_file(), "{} missing", path.display());
        }
        let log = fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("simulating HC repertoire"), "log: {log}");
        assert!(log.contains("ART warning"), "log: {log}");

        // failing merger stops the run before the ideal repertoire
        let dir = tempfile::tempdir().unwrap();
        let toolchain = fake_toolchain(dir.path());
        install_tools(&toolchain, FAILING_MERGER);

        let options = RunOptions {
            test: true,
            skip_drawing: true,
            output_dir: Some(dir.path().join("out")),
            ..Default::default()
        };
        let settings = resolve(options, &toolchain).unwrap();
        prepare_output_dir(&settings.output_dir).unwrap();
        let out = settings.output_dir.clone();

        let launcher = ProcessLauncher::new(RunLog::detached(), false);
        let mut pipeline = Pipeline::new(settings, toolchain.tools.clone(), launcher);
        let err = pipeline.run().await.unwrap_err();

        match err {
            PipelineError::StageFailed {
                stage,
                code,
                status,
                ..
            } => {
                assert_eq!(stage, StageId::ReadMerging);
                assert_eq!(code, Some(4));
                assert!(status.contains('4'), "status: {status}");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!out.join("ideal_repertoire.clusters.fa").exists());
    }

    /// The run log replaces the old one and holds banners and tool output
    #[tokio::test]
    async fn test_run_log_content() {
        let _tools = lock_tools().await;
        let dir = tempfile::tempdir().unwrap();
        let toolchain = fake_toolchain(dir.path());
        install_tools(&toolchain, MERGER);
        let tools = toolchain_file(dir.path(), &toolchain);
        let out = dir.path().join("out");
        stale_output(&out);

        let run_log = RunLog::detached();
        let subscriber =
            tracing_subscriber::registry().with(observability::file_layer(run_log.clone()));
        let _default = tracing::subscriber::set_default(subscriber);

        let cli = command_line(&tools, &out, &["--test", "--skip-drawing"]);
        execute(&cli, &run_log, std::future::pending()).await.unwrap();

        let log_path = out.join("ig_simulator.log");
        assert_eq!(run_log.path(), Some(log_path.clone()));
        let log = fs::read_to_string(&log_path).unwrap();
        assert!(!log.contains("previous run"), "log: {log}");
        assert!(log.contains("Command line:"), "log: {log}");
        assert!(log.contains("IgSimulator starts"), "log: {log}");
        assert!(log.contains("==== Reference repertoire simulation"), "log: {log}");
        assert!(log.contains("==== Ideal repertoire construction"), "log: {log}");
        assert!(log.contains("simulating HC repertoire"), "log: {log}");
        assert!(log.contains("ART warning"), "log: {log}");
        assert!(log.contains("IgSimulator ends"), "log: {log}");
        assert_eq!(
            fs::read_to_string(out.join("repertoire.fasta")).unwrap(),
            ">seq_0\nACGTACGT\n"
        );
    }

    /// An interrupt kills the running tool and exits cleanly
    #[tokio::test]
    async fn test_interrupt_stops_running_tool() {
        let _tools = lock_tools().await;
        let dir = tempfile::tempdir().unwrap();
        let toolchain = fake_toolchain(dir.path());
        install_tools(&toolchain, MERGER);
        install(&toolchain.tools.repertoire_simulator, SLOW_SIMULATOR);
        let tools = toolchain_file(dir.path(), &toolchain);
        let out = dir.path().join("out");

        let run_log = RunLog::detached();
        let cli = command_line(&tools, &out, &["--test", "--skip-drawing"]);
        let started = Instant::now();
        let err = execute(&cli, &run_log, tokio::time::sleep(Duration::from_millis(500)))
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Interrupted), "got: {err}");
        assert_eq!(err.exit_code(), 0);
        assert!(started.elapsed() < Duration::from_secs(20));
        assert!(run_log.is_open());
        assert!(!out.join("repertoire.fasta").exists());
    }
}
