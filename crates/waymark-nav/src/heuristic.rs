use crate::Cell;

/// Distance estimate used to guide grid A*.
///
/// Every variant is admissible for the movement model it is meant for:
/// `Manhattan` pairs with cardinal-only search, `Octile` is the tight
/// estimate for 8-directional movement with unit cardinal steps and √2
/// diagonal steps. `Euclidean` and `Diagonal` (Chebyshev) under-estimate in
/// both models and trade optimal guidance for fewer assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Manhattan,
    Euclidean,
    Diagonal,
    Octile,
}

impl Heuristic {
    /// Estimated cost from `a` to `b`. Non-negative, zero iff `a == b`.
    #[inline]
    pub fn estimate(self, a: Cell, b: Cell) -> f32 {
        let dx = (a.x - b.x).abs() as f32;
        let dy = (a.y - b.y).abs() as f32;
        match self {
            Heuristic::Manhattan => dx + dy,
            Heuristic::Euclidean => (dx * dx + dy * dy).sqrt(),
            Heuristic::Diagonal => dx.max(dy),
            Heuristic::Octile => {
                let (min, max) = if dx < dy { (dx, dy) } else { (dy, dx) };
                max + (core::f32::consts::SQRT_2 - 1.0) * min
            }
        }
    }
}
