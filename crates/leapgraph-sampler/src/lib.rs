use leapgraph_core::{step, DriveSignal, EngineError, GraphState, NoiseSource, Params, Telemetry, Time};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Tick schedule for a run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSpec {
    pub n_ticks: usize,
    pub dt: f64,
    pub save_stride: usize, // Save every nth tick
}

/// Telemetry trace of a single entity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickTrace {
    pub times: Vec<Time>,
    pub drives: Vec<f64>,
    pub records: Vec<Telemetry>,
}

/// Statistical summary over an ensemble of traces
#[derive(Clone, Debug)]
pub struct EnsembleSummary {
    pub n_entities: usize,
    pub total_jumps: usize,
    pub mean_jumps_per_entity: f64,
    pub mean_final_heat: f64,
    pub mean_align_efficiency: f64,
}

/// Runs many independent entities against one drive signal in parallel.
///
/// Every entity gets its own generator stream derived from the global seed,
/// so a run is reproducible as a whole while entities stay decorrelated.
pub struct EnsembleRunner {
    pub params: Params,
    pub node_count: usize,
}

impl EnsembleRunner {
    pub fn new(params: Params, node_count: usize) -> Self {
        Self { params, node_count }
    }

    /// Run the whole ensemble in parallel
    pub fn run(
        &self,
        signal: &dyn DriveSignal,
        spec: &RunSpec,
        n_entities: usize,
        global_seed: u64,
    ) -> Result<Vec<TickTrace>, EngineError> {
        (0..n_entities)
            .into_par_iter()
            .map(|entity_id| {
                let mut rng = NoiseSource::from_entity_id(global_seed, entity_id as u64);
                self.run_single(signal, spec, &mut rng)
            })
            .collect()
    }

    /// Run a single entity (called by run)
    fn run_single(
        &self,
        signal: &dyn DriveSignal,
        spec: &RunSpec,
        rng: &mut NoiseSource,
    ) -> Result<TickTrace, EngineError> {
        let mut state = GraphState::new(self.node_count, self.params.t0)?;
        let mut trace = TickTrace::with_capacity(spec.saved_ticks());
        let mut last: Option<(Time, f64, Telemetry)> = None;

        for tick in 0..spec.n_ticks {
            let t = tick as f64 * spec.dt;
            let drive = signal.value(t);
            let record = step(&mut state, &self.params, rng, drive, spec.dt);

            if tick % spec.save_stride == 0 {
                trace.push(t, drive, record);
            }
            last = Some((t, drive, record));
        }

        // Save the final tick if the stride skipped it
        if let Some((t, drive, record)) = last {
            if trace.times.last() != Some(&t) {
                trace.push(t, drive, record);
            }
        }

        Ok(trace)
    }
}

impl RunSpec {
    pub fn new(n_ticks: usize, dt: f64, save_stride: usize) -> Self {
        Self {
            n_ticks,
            dt,
            save_stride: save_stride.max(1),
        }
    }

    pub fn total_time(&self) -> Time {
        self.n_ticks as f64 * self.dt
    }

    pub fn saved_ticks(&self) -> usize {
        (self.n_ticks + self.save_stride - 1) / self.save_stride
    }
}

impl TickTrace {
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            drives: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            drives: Vec::with_capacity(capacity),
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, t: Time, drive: f64, record: Telemetry) {
        self.times.push(t);
        self.drives.push(drive);
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn final_record(&self) -> Option<&Telemetry> {
        self.records.last()
    }

    pub fn jump_count(&self) -> usize {
        self.records.iter().filter(|r| r.did_jump).count()
    }
}

impl Default for TickTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl EnsembleSummary {
    pub fn from_traces(traces: &[TickTrace]) -> Self {
        if traces.is_empty() {
            return Self::empty();
        }

        let total_jumps: usize = traces.iter().map(|t| t.jump_count()).sum();

        let final_heats: Vec<f64> = traces
            .iter()
            .filter_map(|t| t.final_record())
            .map(|r| r.heat)
            .collect();
        let mean_final_heat = if final_heats.is_empty() {
            0.0
        } else {
            final_heats.iter().sum::<f64>() / final_heats.len() as f64
        };

        let mut align_sum = 0.0;
        let mut align_count = 0usize;
        for trace in traces {
            for record in &trace.records {
                align_sum += record.align_efficiency;
                align_count += 1;
            }
        }
        let mean_align_efficiency = if align_count == 0 {
            0.0
        } else {
            align_sum / align_count as f64
        };

        Self {
            n_entities: traces.len(),
            total_jumps,
            mean_jumps_per_entity: total_jumps as f64 / traces.len() as f64,
            mean_final_heat,
            mean_align_efficiency,
        }
    }

    fn empty() -> Self {
        Self {
            n_entities: 0,
            total_jumps: 0,
            mean_jumps_per_entity: 0.0,
            mean_final_heat: 0.0,
            mean_align_efficiency: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use leapgraph_signals::ConstantDrive;

    fn jumpy_params() -> Params {
        Params {
            h0: 2.0,
            theta0: 0.0,
            eps_noise: 0.05,
            ..Params::default()
        }
    }

    #[test]
    fn test_run_spec() {
        let spec = RunSpec::new(1000, 0.01, 10);
        assert_eq!(spec.total_time(), 10.0);
        assert_eq!(spec.saved_ticks(), 100);
    }

    #[test]
    fn test_stride_keeps_the_final_tick() {
        let runner = EnsembleRunner::new(Params::default(), 4);
        let spec = RunSpec::new(10, 0.5, 4);
        let traces = runner.run(&ConstantDrive::new(1.0), &spec, 1, 42).unwrap();

        // Saved at ticks 0, 4, 8, plus the final tick 9
        let trace = &traces[0];
        assert_eq!(trace.len(), 4);
        assert_eq!(trace.times, vec![0.0, 2.0, 4.0, 4.5]);
    }

    #[test]
    fn test_same_seed_reproduces_the_ensemble() {
        let runner = EnsembleRunner::new(jumpy_params(), 8);
        let spec = RunSpec::new(200, 0.1, 1);
        let signal = ConstantDrive::new(0.8);

        let a = runner.run(&signal, &spec, 3, 1234).unwrap();
        let b = runner.run(&signal, &spec, 3, 1234).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_entities_decorrelate() {
        let runner = EnsembleRunner::new(jumpy_params(), 8);
        let spec = RunSpec::new(200, 0.1, 1);
        let traces = runner
            .run(&ConstantDrive::new(0.8), &spec, 2, 1234)
            .unwrap();
        assert_ne!(traces[0], traces[1]);
    }

    #[test]
    fn test_summary_counts_jumps() {
        let runner = EnsembleRunner::new(jumpy_params(), 8);
        let spec = RunSpec::new(300, 0.1, 1);
        let traces = runner
            .run(&ConstantDrive::new(0.8), &spec, 4, 99)
            .unwrap();

        let summary = EnsembleSummary::from_traces(&traces);
        assert_eq!(summary.n_entities, 4);
        assert!(summary.total_jumps > 0);
        assert_relative_eq!(
            summary.mean_jumps_per_entity,
            summary.total_jumps as f64 / 4.0
        );
        assert!(summary.mean_final_heat >= 0.0);
    }

    #[test]
    fn test_empty_ensemble_summary() {
        let summary = EnsembleSummary::from_traces(&[]);
        assert_eq!(summary.n_entities, 0);
        assert_eq!(summary.total_jumps, 0);
        assert_eq!(summary.mean_final_heat, 0.0);
    }

    #[test]
    fn test_zero_nodes_is_an_error() {
        let runner = EnsembleRunner::new(Params::default(), 0);
        let spec = RunSpec::new(10, 0.1, 1);
        let result = runner.run(&ConstantDrive::new(1.0), &spec, 1, 1);
        assert!(result.is_err());
    }
}
