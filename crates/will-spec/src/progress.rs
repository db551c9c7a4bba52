use serde::Serialize;

/// Position within the visible sequence, as shown by frontends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
    pub percent: u8,
}

impl Progress {
    pub fn new(cursor: usize, visible_len: usize) -> Self {
        let total = visible_len.max(1);
        let position = (cursor + 1).min(total);
        Self {
            position,
            total,
            percent: rounded_percent(position, total),
        }
    }

    pub fn complete(visible_len: usize) -> Self {
        let total = visible_len.max(1);
        Self {
            position: total,
            total,
            percent: 100,
        }
    }
}

// Rounds half up, as `Math.round` does for positive values.
fn rounded_percent(position: usize, total: usize) -> u8 {
    let scaled = (position * 200 + total) / (total * 2);
    u8::try_from(scaled.min(100)).unwrap_or(100)
}
