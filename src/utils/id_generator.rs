use rand::Rng;

/// Alphabet used for every random token in the catalog
pub const TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Group lengths of a UUID-like token (8-4-4-4-12)
pub const GROUPED_TOKEN_LAYOUT: [usize; 5] = [8, 4, 4, 4, 12];

/// Generates a random token of `length` characters drawn uniformly from [`TOKEN_CHARSET`]
pub fn generate_random_id<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}

/// Generates a token that looks like a UUID but uses the full lowercase alphanumeric alphabet
pub fn generate_grouped_id<R: Rng>(rng: &mut R) -> String {
    GROUPED_TOKEN_LAYOUT
        .iter()
        .map(|&len| generate_random_id(rng, len))
        .collect::<Vec<_>>()
        .join("-")
}

/// Checks whether `candidate` could have come from [`generate_random_id`] with `length`
#[cfg(test)]
pub fn is_random_id(candidate: &str, length: usize) -> bool {
    candidate.len() == length && candidate.bytes().all(|b| TOKEN_CHARSET.contains(&b))
}

/// Checks whether `candidate` could have come from [`generate_grouped_id`]
#[cfg(test)]
pub fn is_grouped_id(candidate: &str) -> bool {
    let groups: Vec<&str> = candidate.split('-').collect();
    groups.len() == GROUPED_TOKEN_LAYOUT.len()
        && groups
            .iter()
            .zip(GROUPED_TOKEN_LAYOUT)
            .all(|(group, len)| is_random_id(group, len))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_generate_random_id_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in [0, 1, 16, 32, 128] {
            let id = generate_random_id(&mut rng, length);
            assert!(is_random_id(&id, length), "bad token: {}", id);
        }
    }

    #[test]
    fn test_generate_random_id_is_seeded() {
        let a = generate_random_id(&mut StdRng::seed_from_u64(42), 24);
        let b = generate_random_id(&mut StdRng::seed_from_u64(42), 24);
        let c = generate_random_id(&mut StdRng::seed_from_u64(43), 24);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generate_grouped_id_layout() {
        let mut rng = StdRng::seed_from_u64(3);
        let id = generate_grouped_id(&mut rng);
        assert_eq!(id.len(), 36);
        assert!(is_grouped_id(&id), "bad grouped token: {}", id);
    }

    #[test]
    fn test_token_checkers_reject_foreign_shapes() {
        assert!(!is_random_id("ABCDEF", 6));
        assert!(!is_random_id("abc", 4));
        assert!(!is_grouped_id("abcdefgh-abcd-abcd-abcd"));
        assert!(!is_grouped_id("abcdefgh-abcd-abcd-abcd-abcdefghijk_"));
    }
}
