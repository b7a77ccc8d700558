// src/animation/animation_state.rs
//
// Per-node progress of a fold/unfold cycle.

/// Progress of one node. `scale` sweeps between the settled values
/// 0.0 and 1.0; `dir` is 0.0 while idle and ±1.0 while cycling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub scale: f32,
    pub prev_scale: f32,
    pub dir: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0.0
    }

    /// Advances `scale` by `step` in the current direction. Returns the
    /// settled scale on the frame the cycle completes.
    pub fn update(&mut self, step: f32) -> Option<f32> {
        if self.is_idle() {
            return None;
        }
        self.scale += step * self.dir;
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            return Some(self.prev_scale);
        }
        None
    }

    /// Begins a cycle towards the opposite settled value. Returns false
    /// (and changes nothing) when a cycle is already running.
    pub fn start_cycle(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.dir = 1.0 - 2.0 * self.prev_scale;
        true
    }
}
