use serde::{Deserialize, Serialize};

const PRESCRIPTION: &[(&str, &str)] = &[
    ("每90分钟", "颈椎复位序列"),
    ("饭后30分钟", "迷走神经激活操"),
    ("焦虑触发时", "盒式呼吸4-4-4-4"),
];

/// A short exercise and the situation that cues it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroWorkout {
    pub cue: String,
    pub routine: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MovementTracker;

impl MovementTracker {
    pub fn prescribe_micro_workouts(&self) -> Vec<MicroWorkout> {
        PRESCRIPTION
            .iter()
            .map(|(cue, routine)| MicroWorkout {
                cue: cue.to_string(),
                routine: routine.to_string(),
            })
            .collect()
    }
}
