use crate::levels::NeuroLevels;

/// Per-channel deltas for a named discrete event, or `None` for an
/// unrecognized id.
pub fn delta_for(id: &str) -> Option<NeuroLevels> {
    match id {
        "praise" => Some(NeuroLevels {
            da: 0.10,
            s5: 0.05,
            ne: 0.0,
            ad: 0.0,
            end: 0.0,
            oxt: 0.10,
            cort: -0.02,
        }),
        "insult_god" => Some(NeuroLevels {
            da: -0.05,
            s5: -0.10,
            ne: 0.12,
            ad: 0.12,
            end: 0.0,
            oxt: -0.08,
            cort: 0.15,
        }),
        "ritual_success" => Some(NeuroLevels {
            da: 0.08,
            s5: 0.05,
            ne: 0.0,
            ad: 0.0,
            end: 0.0,
            oxt: 0.10,
            cort: -0.02,
        }),
        "taboo_violation" => Some(NeuroLevels {
            da: -0.05,
            s5: -0.05,
            ne: 0.10,
            ad: 0.10,
            end: 0.0,
            oxt: -0.05,
            cort: 0.12,
        }),
        "comfort" => Some(NeuroLevels {
            da: 0.02,
            s5: 0.05,
            ne: -0.05,
            ad: 0.0,
            end: 0.05,
            oxt: 0.08,
            cort: -0.05,
        }),
        _ => None,
    }
}
