use crc32fast::Hasher;

/// Derive a short, stable seed from a session label using CRC32
pub fn seed_for(label: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(label.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for projects, pages and nodes.
///
/// Ids have the form `<seed>-<n>`. The counter only moves forward, so an id
/// handed out once is never produced again by the same generator.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u64,
}

impl IdGenerator {
    pub fn new(label: &str) -> Self {
        Self::from_seed(seed_for(label))
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_carry_session_seed() {
        let mut ids = IdGenerator::new("editor");

        assert_eq!(ids.seed(), seed_for("editor"));
        assert_eq!(ids.new_id(), format!("{}-1", ids.seed()));
        assert_eq!(ids.new_id(), format!("{}-2", ids.seed()));
    }

    #[test]
    fn test_sessions_do_not_collide() {
        let mut left = IdGenerator::new("session-a");
        let mut right = IdGenerator::new("session-b");

        let left_ids: HashSet<String> = (0..100).map(|_| left.new_id()).collect();
        let right_ids: HashSet<String> = (0..100).map(|_| right.new_id()).collect();

        assert_eq!(left_ids.len(), 100);
        assert!(left_ids.is_disjoint(&right_ids));
    }

    #[test]
    fn test_seed_is_short_hex() {
        let seed = seed_for("client-1");

        assert!(!seed.is_empty() && seed.len() <= 8);
        assert!(seed.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(seed, seed_for("client-1"));
    }
}
