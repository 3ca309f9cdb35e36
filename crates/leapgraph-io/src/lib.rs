use arrow::array::{Array, BooleanArray, Float64Array, StringArray, UInt32Array, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use leapgraph_core::Telemetry;
use leapgraph_sampler::{RunSpec, TickTrace};
use parquet::arrow::ArrowWriter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::sync::Arc;
use uuid::Uuid;

pub mod cli;
pub use cli::*;

/// Run manifest for complete reproducibility
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: String,
    pub timestamp: String,
    pub seed: u64,
    pub node_count: usize,
    pub signal: String, // "constant" | "sine" | "pulse"
    pub params: serde_json::Value,
    pub n_entities: usize,
    pub n_ticks: usize,
    pub dt: f64,
    pub save_stride: usize,
    pub total_time: f64,
    pub commit_hash: Option<String>,
    pub rust_version: String,
}

/// Parquet writer for trace data
pub struct TraceWriter {
    writer: ArrowWriter<File>,
    schema: Arc<Schema>,
}

/// Single row in the trace table
#[derive(Clone, Debug)]
pub struct TraceRow {
    pub run_id: String,
    pub entity: u64,
    pub step: u32,
    pub time: f64,
    pub drive: f64,
    pub record: Telemetry,
}

impl RunManifest {
    pub fn new(
        seed: u64,
        node_count: usize,
        signal: &str,
        params: serde_json::Value,
        spec: &RunSpec,
    ) -> Self {
        let run_id = Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().to_rfc3339();

        Self {
            run_id,
            timestamp,
            seed,
            node_count,
            signal: signal.to_string(),
            params,
            n_entities: 0, // Will be set when writing
            n_ticks: spec.n_ticks,
            dt: spec.dt,
            save_stride: spec.save_stride,
            total_time: spec.total_time(),
            commit_hash: get_git_commit(),
            rust_version: get_rust_version(),
        }
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let manifest = serde_json::from_str(&json)?;
        Ok(manifest)
    }
}

impl TraceWriter {
    pub fn new(file_path: &str) -> anyhow::Result<Self> {
        let file = File::create(file_path)?;

        // One row per saved tick: identifiers, the drive sample, then the
        // full telemetry record
        let fields = vec![
            Field::new("run_id", DataType::Utf8, false),
            Field::new("entity", DataType::UInt64, false),
            Field::new("step", DataType::UInt32, false),
            Field::new("time", DataType::Float64, false),
            Field::new("drive", DataType::Float64, false),
            Field::new("heat", DataType::Float64, false),
            Field::new("threshold", DataType::Float64, false),
            Field::new("jump_rate", DataType::Float64, false),
            Field::new("temperature", DataType::Float64, false),
            Field::new("policy_entropy", DataType::Float64, false),
            Field::new("flow_norm", DataType::Float64, false),
            Field::new("align_efficiency", DataType::Float64, false),
            Field::new("kappa_mean", DataType::Float64, false),
            Field::new("current", DataType::UInt32, false),
            Field::new("did_jump", DataType::Boolean, false),
            Field::new("rewired_to", DataType::UInt32, false),
        ];

        let schema = Arc::new(Schema::new(fields));
        let writer = ArrowWriter::try_new(file, schema.clone(), None)?;

        Ok(Self { writer, schema })
    }

    pub fn write_traces(
        &mut self,
        traces: &[TickTrace],
        manifest: &RunManifest,
    ) -> anyhow::Result<()> {
        let mut rows = Vec::new();

        // Flatten all traces into rows
        for (entity, trace) in traces.iter().enumerate() {
            for (step_idx, ((time, drive), record)) in trace
                .times
                .iter()
                .zip(trace.drives.iter())
                .zip(trace.records.iter())
                .enumerate()
            {
                rows.push(TraceRow {
                    run_id: manifest.run_id.clone(),
                    entity: entity as u64,
                    step: step_idx as u32,
                    time: *time,
                    drive: *drive,
                    record: *record,
                });
            }
        }

        if rows.is_empty() {
            return Ok(());
        }

        let run_ids: Vec<String> = rows.iter().map(|r| r.run_id.clone()).collect();
        let entities: Vec<u64> = rows.iter().map(|r| r.entity).collect();
        let steps: Vec<u32> = rows.iter().map(|r| r.step).collect();
        let times: Vec<f64> = rows.iter().map(|r| r.time).collect();
        let drives: Vec<f64> = rows.iter().map(|r| r.drive).collect();
        let heats: Vec<f64> = rows.iter().map(|r| r.record.heat).collect();
        let thresholds: Vec<f64> = rows.iter().map(|r| r.record.threshold).collect();
        let jump_rates: Vec<f64> = rows.iter().map(|r| r.record.jump_rate).collect();
        let temperatures: Vec<f64> = rows.iter().map(|r| r.record.temperature).collect();
        let entropies: Vec<f64> = rows.iter().map(|r| r.record.policy_entropy).collect();
        let flow_norms: Vec<f64> = rows.iter().map(|r| r.record.flow_norm).collect();
        let align_effs: Vec<f64> = rows.iter().map(|r| r.record.align_efficiency).collect();
        let kappa_means: Vec<f64> = rows.iter().map(|r| r.record.kappa_mean).collect();
        let currents: Vec<u32> = rows.iter().map(|r| r.record.current as u32).collect();
        let did_jumps: Vec<bool> = rows.iter().map(|r| r.record.did_jump).collect();
        let rewired: Vec<u32> = rows.iter().map(|r| r.record.rewired_to as u32).collect();

        let arrays: Vec<Arc<dyn Array>> = vec![
            Arc::new(StringArray::from(run_ids)),
            Arc::new(UInt64Array::from(entities)),
            Arc::new(UInt32Array::from(steps)),
            Arc::new(Float64Array::from(times)),
            Arc::new(Float64Array::from(drives)),
            Arc::new(Float64Array::from(heats)),
            Arc::new(Float64Array::from(thresholds)),
            Arc::new(Float64Array::from(jump_rates)),
            Arc::new(Float64Array::from(temperatures)),
            Arc::new(Float64Array::from(entropies)),
            Arc::new(Float64Array::from(flow_norms)),
            Arc::new(Float64Array::from(align_effs)),
            Arc::new(Float64Array::from(kappa_means)),
            Arc::new(UInt32Array::from(currents)),
            Arc::new(BooleanArray::from(did_jumps)),
            Arc::new(UInt32Array::from(rewired)),
        ];

        let batch = RecordBatch::try_new(self.schema.clone(), arrays)?;

        self.writer.write(&batch)?;
        Ok(())
    }

    pub fn close(self) -> anyhow::Result<()> {
        self.writer.close()?;
        Ok(())
    }
}

/// Write an ensemble's traces to Parquet along with the run manifest
pub fn write_run_with_manifest(
    traces: &[TickTrace],
    manifest: &RunManifest,
    parquet_path: &str,
    manifest_path: &str,
) -> anyhow::Result<()> {
    let mut writer = TraceWriter::new(parquet_path)?;
    writer.write_traces(traces, manifest)?;
    writer.close()?;

    let mut manifest_with_counts = manifest.clone();
    manifest_with_counts.n_entities = traces.len();
    manifest_with_counts.save_to_file(manifest_path)?;

    println!("Wrote {} traces to {}", traces.len(), parquet_path);
    println!("Wrote manifest to {}", manifest_path);

    Ok(())
}

/// Get git commit hash for reproducibility
fn get_git_commit() -> Option<String> {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
}

fn get_rust_version() -> String {
    std::process::Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
