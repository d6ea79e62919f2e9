use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    #[default]
    Forward,
    Backward,
    Cycle,
    Rock,
}

/// Animation loop playback settings shared by every pane of a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopProperties {
    pub looping: bool,
    pub mode: LoopMode,
    /// Milliseconds per frame stepping forward.
    pub fwd_frame_time: u32,
    /// Milliseconds per frame stepping backward.
    pub rev_frame_time: u32,
    /// Extra dwell on the first frame, in milliseconds.
    pub first_frame_dwell: u32,
    /// Extra dwell on the last frame, in milliseconds.
    pub last_frame_dwell: u32,
}

impl Default for LoopProperties {
    fn default() -> Self {
        Self {
            looping: false,
            mode: LoopMode::Forward,
            fwd_frame_time: 250,
            rev_frame_time: 250,
            first_frame_dwell: 700,
            last_frame_dwell: 1500,
        }
    }
}
