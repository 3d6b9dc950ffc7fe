/// Monotonic ID generator owned by a single engine.
///
/// Businesses, employees, upgrades and opportunities all draw from the same
/// sequence, so no two records inside one engine share an ID.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn starting_from(start: u64) -> Self {
        Self { next: start.max(1) }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Ensure every future ID is strictly greater than `seen`.
    ///
    /// Used when previously persisted records are restored into an engine.
    pub fn skip_past(&mut self, seen: u64) {
        if seen >= self.next {
            self.next = seen + 1;
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids() {
        let mut id_gen = IdGenerator::new();
        assert_eq!(id_gen.next_id(), 1);
        assert_eq!(id_gen.next_id(), 2);
        assert_eq!(id_gen.next_id(), 3);
    }

    #[test]
    fn starting_from_zero_still_yields_positive_ids() {
        let mut id_gen = IdGenerator::starting_from(0);
        assert_eq!(id_gen.next_id(), 1);
    }

    #[test]
    fn skip_past_moves_forward_only() {
        let mut id_gen = IdGenerator::starting_from(10);
        id_gen.skip_past(3);
        assert_eq!(id_gen.next_id(), 10);
        id_gen.skip_past(40);
        assert_eq!(id_gen.next_id(), 41);
    }
}
