//! # Detail View Assembly

use crate::models::{DetailRecord, DetailViewModel, EvolutionChain};

/// Compose a detail record with its evolution sequence
pub fn assemble(detail: DetailRecord, evolutions: EvolutionChain) -> DetailViewModel {
    DetailViewModel { detail, evolutions }
}
