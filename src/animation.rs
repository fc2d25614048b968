//! Time-bounded visual effects attached to board cells.

/// What triggered an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Flash on a freshly revealed cell.
    Reveal,
    /// Pulse on a cell whose flag was placed or removed.
    FlagToggle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRecord {
    pub kind: AnimationKind,
    pub row: usize,
    pub col: usize,
    pub elapsed: f64,
    pub duration: f64,
}

impl AnimationRecord {
    pub fn new(kind: AnimationKind, row: usize, col: usize, duration: f64) -> Self {
        Self {
            kind,
            row,
            col,
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance the record; returns false once it has expired.
    pub fn update(&mut self, delta: f64) -> bool {
        self.elapsed += delta;
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.elapsed < self.duration
    }

    /// Interpolation progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}

/// Read-only view of a live record handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    pub row: usize,
    pub col: usize,
    pub progress: f64,
}

/// Collection of live animation records, advanced once per frame.
#[derive(Debug, Clone, Default)]
pub struct AnimationTimeline {
    records: Vec<AnimationRecord>,
}

impl AnimationTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: AnimationKind, row: usize, col: usize, duration: f64) {
        self.records
            .push(AnimationRecord::new(kind, row, col, duration));
    }

    /// Advance every record by `dt` and drop the expired ones.
    pub fn tick(&mut self, dt: f64) {
        self.records.retain_mut(|record| record.update(dt));
    }

    pub fn snapshot(&self) -> impl Iterator<Item = AnimationFrame> + '_ {
        self.records.iter().map(|record| AnimationFrame {
            kind: record.kind,
            row: record.row,
            col: record.col,
            progress: record.progress(),
        })
    }

    /// Most recent live animation on a cell, if any.
    pub fn frame_at(&self, row: usize, col: usize) -> Option<AnimationFrame> {
        self.snapshot()
            .filter(|frame| frame.row == row && frame.col == col)
            .last()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = AnimationRecord::new(AnimationKind::Reveal, 2, 3, 0.5);
        assert!(record.is_active());
        assert_eq!(record.elapsed, 0.0);
        assert_eq!(record.progress(), 0.0);
    }

    #[test]
    fn test_record_update() {
        let mut record = AnimationRecord::new(AnimationKind::FlagToggle, 1, 1, 0.5);
        assert!(record.update(0.25)); // Still active
        assert_eq!(record.progress(), 0.5);
        assert!(!record.update(0.25)); // elapsed == duration expires
        assert_eq!(record.progress(), 1.0);
    }

    #[test]
    fn test_progress_clamped() {
        let mut record = AnimationRecord::new(AnimationKind::Reveal, 1, 1, 0.2);
        record.update(1.0);
        assert_eq!(record.progress(), 1.0);

        let zero = AnimationRecord::new(AnimationKind::Reveal, 1, 1, 0.0);
        assert_eq!(zero.progress(), 1.0);
        assert!(!zero.is_active());
    }

    #[test]
    fn test_timeline_expires_records() {
        let mut timeline = AnimationTimeline::new();
        timeline.push(AnimationKind::Reveal, 1, 1, 0.1);
        timeline.push(AnimationKind::FlagToggle, 2, 2, 0.3);

        timeline.tick(0.1);
        assert_eq!(timeline.len(), 1);
        let frames: Vec<AnimationFrame> = timeline.snapshot().collect();
        assert_eq!(frames[0].kind, AnimationKind::FlagToggle);
        assert!((frames[0].progress - 1.0 / 3.0).abs() < 1e-9);

        timeline.tick(0.2);
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_frame_at() {
        let mut timeline = AnimationTimeline::new();
        timeline.push(AnimationKind::Reveal, 4, 5, 1.0);

        assert_eq!(timeline.frame_at(4, 5).map(|f| f.kind), Some(AnimationKind::Reveal));
        assert!(timeline.frame_at(5, 4).is_none());
    }

    #[test]
    fn test_clear() {
        let mut timeline = AnimationTimeline::new();
        timeline.push(AnimationKind::Reveal, 1, 1, 1.0);
        timeline.push(AnimationKind::Reveal, 1, 2, 1.0);
        timeline.clear();
        assert!(timeline.is_empty());
        assert_eq!(timeline.snapshot().count(), 0);
    }
}
