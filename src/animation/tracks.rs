use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
    /// glTF cubic spline: three values per keyframe
    /// (in-tangent, value, out-tangent).
    CubicSpline,
}

/// How many intervals a cursor scans forward before falling back to a
/// binary search.
const MAX_SCAN_OFFSET: usize = 3;

/// Remembers the last keyframe interval a track was sampled in, so steady
/// playback finds the next interval in O(1).
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self {
            times,
            values,
            interpolation,
        }
    }

    /// Timestamp of the last keyframe, or zero for an empty track.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Stateless sample. Returns `None` for a track without keyframes.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        if self.times.is_empty() {
            return None;
        }
        let next = self.times.partition_point(|&t| t <= time);
        Some(self.sample_at_frame(next.saturating_sub(1), time))
    }

    /// Sample using (and updating) a cursor. Monotonic playback only looks
    /// at a handful of neighbouring intervals; jumps such as a loop wrap or
    /// a clip restart fall back to a binary search.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> Option<T> {
        let len = self.times.len();
        match len {
            0 => return None,
            1 => return Some(self.value_at(0)),
            _ => {}
        }

        let start = cursor.last_index.min(len - 1);
        let local = if time >= self.times[start] {
            (start..(start + MAX_SCAN_OFFSET).min(len - 1) + 1)
                .find(|&idx| idx == len - 1 || time < self.times[idx + 1])
        } else {
            None
        };

        let index = local.unwrap_or_else(|| {
            self.times
                .partition_point(|&t| t <= time)
                .saturating_sub(1)
        });
        cursor.last_index = index;

        Some(self.sample_at_frame(index, time))
    }

    fn value_at(&self, index: usize) -> T {
        match self.interpolation {
            InterpolationMode::CubicSpline => self.values[index * 3 + 1],
            InterpolationMode::Linear | InterpolationMode::Step => self.values[index],
        }
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> T {
        let last = self.times.len() - 1;
        if index >= last {
            return self.value_at(last);
        }

        let next = index + 1;
        let t0 = self.times[index];
        let dt = self.times[next] - t0;
        let t = if dt > 1e-6 { ((time - t0) / dt).clamp(0.0, 1.0) } else { 0.0 };

        match self.interpolation {
            InterpolationMode::Step => self.value_at(index),
            InterpolationMode::Linear => T::interpolate_linear(self.value_at(index), self.value_at(next), t),
            InterpolationMode::CubicSpline => {
                let base0 = index * 3;
                let base1 = next * 3;
                T::interpolate_cubic(
                    self.values[base0 + 1],
                    self.values[base0 + 2],
                    self.values[base1],
                    self.values[base1 + 1],
                    t,
                    dt,
                )
            }
        }
    }
}
