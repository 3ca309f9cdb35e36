//! C ABI over [`LeapEngine`] and [`ModulatedEngine`].
//!
//! Every function tolerates null handles: getters return a sentinel, mutators
//! do nothing, and [`leapgraph_step`] zeroes the out-parameter so callers
//! never read stale telemetry. Handles are created and destroyed exactly once
//! each; all other functions borrow.

use std::ffi::CStr;
use std::os::raw::c_char;

use leapgraph_core::{LeapEngine, Params, Telemetry};
use leapgraph_neuro::{ModulatedEngine, NeuroLevels};

/// Flat telemetry record as seen from C. Field order is part of the ABI.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct RawTelemetry {
    pub heat: f64,
    pub threshold: f64,
    pub jump_rate: f64,
    pub temperature: f64,
    pub policy_entropy: f64,
    pub flow_norm: f64,
    pub align_efficiency: f64,
    pub kappa_mean: f64,
    pub current: i32,
    pub did_jump: i32,
    pub rewired_to: i32,
}

impl RawTelemetry {
    fn zeroed() -> Self {
        Self::default()
    }
}

impl From<Telemetry> for RawTelemetry {
    fn from(t: Telemetry) -> Self {
        Self {
            heat: t.heat,
            threshold: t.threshold,
            jump_rate: t.jump_rate,
            temperature: t.temperature,
            policy_entropy: t.policy_entropy,
            flow_norm: t.flow_norm,
            align_efficiency: t.align_efficiency,
            kappa_mean: t.kappa_mean,
            current: t.current as i32,
            did_jump: t.did_jump as i32,
            rewired_to: t.rewired_to as i32,
        }
    }
}

/// Creates an engine with `n` nodes. Returns null when `n <= 0`. A null
/// `params` pointer selects the default bundle; seed 0 is replaced by a
/// fixed fallback.
///
/// # Safety
/// `params`, when non-null, must point to a valid `Params`.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_create(
    n: i32,
    params: *const Params,
    seed: u64,
) -> *mut LeapEngine {
    if n <= 0 {
        return std::ptr::null_mut();
    }
    let p = if params.is_null() {
        Params::default()
    } else {
        *params
    };
    match LeapEngine::new(n as usize, p, seed) {
        Ok(engine) => Box::into_raw(Box::new(engine)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// # Safety
/// `handle` must be null or a pointer returned by [`leapgraph_create`] that
/// has not been destroyed yet.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_destroy(handle: *mut LeapEngine) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Advances the engine one tick under `drive` and writes the telemetry to
/// `out`. A null handle zeroes `out` and changes nothing.
///
/// # Safety
/// `handle` must be null or a live engine pointer; `out` must be null or
/// writable.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_step(
    handle: *mut LeapEngine,
    drive: f64,
    dt: f64,
    out: *mut RawTelemetry,
) {
    if handle.is_null() {
        if !out.is_null() {
            *out = RawTelemetry::zeroed();
        }
        return;
    }
    let telemetry = (*handle).step(drive, dt);
    if !out.is_null() {
        *out = telemetry.into();
    }
}

/// # Safety
/// `handle` must be null or a live engine pointer; `out` must be null or
/// writable.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_get_params(handle: *const LeapEngine, out: *mut Params) {
    if handle.is_null() || out.is_null() {
        return;
    }
    *out = (*handle).params();
}

/// # Safety
/// `handle` must be null or a live engine pointer; `params` must be null or
/// point to a valid `Params`.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_set_params(handle: *mut LeapEngine, params: *const Params) {
    if handle.is_null() || params.is_null() {
        return;
    }
    (*handle).set_params(*params);
}

/// Returns the node count, 0 for a null handle.
///
/// # Safety
/// `handle` must be null or a live engine pointer.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_node_count(handle: *const LeapEngine) -> i32 {
    if handle.is_null() {
        0
    } else {
        (*handle).node_count() as i32
    }
}

/// Copies one row of the inertia matrix into `out_buf`, writing at most
/// `len` values. Returns the number of values copied, 0 on any invalid
/// argument.
///
/// # Safety
/// `out_buf`, when non-null, must be writable for `len` doubles.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_inertia_row(
    handle: *const LeapEngine,
    row: i32,
    out_buf: *mut f64,
    len: i32,
) -> i32 {
    if handle.is_null() || out_buf.is_null() || row < 0 || len <= 0 {
        return 0;
    }
    match (*handle).inertia_row(row as usize) {
        Some(values) => {
            let m = values.len().min(len as usize);
            let out = std::slice::from_raw_parts_mut(out_buf, m);
            out.copy_from_slice(&values[..m]);
            m as i32
        }
        None => 0,
    }
}

/// Creates a physiologically modulated engine with default channel levels.
/// Returns null when `n <= 0`.
///
/// # Safety
/// Always safe to call; the returned pointer must go through
/// [`leapgraph_neuro_destroy`].
#[no_mangle]
pub unsafe extern "C" fn leapgraph_neuro_create(n: i32, seed: u64) -> *mut ModulatedEngine {
    if n <= 0 {
        return std::ptr::null_mut();
    }
    match ModulatedEngine::new(n as usize, seed) {
        Ok(system) => Box::into_raw(Box::new(system)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// # Safety
/// `handle` must be null or a pointer returned by [`leapgraph_neuro_create`]
/// that has not been destroyed yet.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_neuro_destroy(handle: *mut ModulatedEngine) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Relaxes the channels, folds them into the coefficients, and runs one
/// engine tick. Same null contract as [`leapgraph_step`].
///
/// # Safety
/// `handle` must be null or a live system pointer; `out` must be null or
/// writable.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_neuro_tick(
    handle: *mut ModulatedEngine,
    drive: f64,
    dt: f64,
    out: *mut RawTelemetry,
) {
    if handle.is_null() {
        if !out.is_null() {
            *out = RawTelemetry::zeroed();
        }
        return;
    }
    let telemetry = (*handle).tick(drive, dt);
    if !out.is_null() {
        *out = telemetry.into();
    }
}

/// Applies a named event to the channel model. Null pointers and invalid
/// UTF-8 are ignored, as are unknown event ids.
///
/// # Safety
/// `event_id`, when non-null, must be a valid nul-terminated string.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_neuro_apply_event(
    handle: *mut ModulatedEngine,
    event_id: *const c_char,
) {
    if handle.is_null() || event_id.is_null() {
        return;
    }
    if let Ok(id) = CStr::from_ptr(event_id).to_str() {
        (*handle).apply_event(id);
    }
}

/// # Safety
/// `handle` must be null or a live system pointer; `out` must be null or
/// writable.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_neuro_levels(
    handle: *const ModulatedEngine,
    out: *mut NeuroLevels,
) {
    if handle.is_null() || out.is_null() {
        return;
    }
    *out = (*handle).neuro.levels;
}

/// # Safety
/// `handle` must be null or a live system pointer; `out` must be null or
/// writable.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_neuro_get_baseline(
    handle: *const ModulatedEngine,
    out: *mut NeuroLevels,
) {
    if handle.is_null() || out.is_null() {
        return;
    }
    *out = (*handle).neuro.baseline;
}

/// # Safety
/// `handle` must be null or a live system pointer; `baseline` must be null
/// or point to valid levels.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_neuro_set_baseline(
    handle: *mut ModulatedEngine,
    baseline: *const NeuroLevels,
) {
    if handle.is_null() || baseline.is_null() {
        return;
    }
    (*handle).neuro.baseline = *baseline;
}

/// Reads back the coefficient bundle as of the last tick's modulation.
///
/// # Safety
/// `handle` must be null or a live system pointer; `out` must be null or
/// writable.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_neuro_params(
    handle: *const ModulatedEngine,
    out: *mut Params,
) {
    if handle.is_null() || out.is_null() {
        return;
    }
    *out = (*handle).params();
}

/// Returns the current node index, -1 for a null handle.
///
/// # Safety
/// `handle` must be null or a live system pointer.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_neuro_current_node(handle: *const ModulatedEngine) -> i32 {
    if handle.is_null() {
        -1
    } else {
        (*handle).current_node() as i32
    }
}

/// Returns the heat accumulator, 0.0 for a null handle.
///
/// # Safety
/// `handle` must be null or a live system pointer.
#[no_mangle]
pub unsafe extern "C" fn leapgraph_neuro_heat(handle: *const ModulatedEngine) -> f64 {
    if handle.is_null() {
        0.0
    } else {
        (*handle).heat()
    }
}
