use rand::Rng;

use super::{dtos::generation_request_dto::SeedInput, errors::GenerationApiError};

/// Largest seed that survives a round trip through a JSON number in a browser.
pub const MAX_RANDOM_SEED: u64 = (1 << 53) - 1;

/// Parses the text of a seed field. Blank text means "no seed".
pub fn parse_seed_input(value: &str) -> Result<Option<u64>, GenerationApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<u64>() {
        Ok(seed) => Ok(Some(seed)),
        Err(_) => Err(GenerationApiError::InvalidSeed),
    }
}

pub fn random_seed() -> u64 {
    rand::thread_rng().gen_range(0..=MAX_RANDOM_SEED)
}

/// An explicit seed wins over the form seed; with neither, a random one is drawn.
pub fn resolve_seed(
    input: Option<&SeedInput>,
    form_seed: Option<&str>,
) -> Result<u64, GenerationApiError> {
    let explicit = match input {
        Some(SeedInput::Number(seed)) => Some(*seed),
        Some(SeedInput::Text(text)) => parse_seed_input(text)?,
        None => None,
    };

    if let Some(seed) = explicit {
        return Ok(seed);
    }

    match form_seed {
        Some(text) => Ok(parse_seed_input(text)?.unwrap_or_else(random_seed)),
        None => Ok(random_seed()),
    }
}
