//! Random board generation
//!
//! Boards are rolled from the 16 classic Boggle dice.

use super::grid::{Grid, GridError, SUPPORTED_SIZES};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Faces of the 16 classic Boggle dice
pub const CLASSIC_DICE: [&str; 16] = [
    "AAEEGN", "ELTTY", "AOOTTW", "ABBJOO", "EHRTVW", "CIMOTU", "DISTTY", "EIOSST", "DELRVY",
    "ACHOPS", "HIMNQU", "EEINSU", "EEGHNW", "AFFKPS", "HLNNRZ", "DEILRX",
];

/// Roll a random `size × size` board
///
/// The dice are shuffled and each contributes one random face. Boards larger than
/// 4×4 need more than 16 dice, so the set is reshuffled and reused once exhausted.
///
/// # Errors
/// Returns `GridError::InvalidLength` if `size` is not 4, 5 or 6.
///
/// # Examples
/// ```
/// use boggle_solver::core::dice::roll_board;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let grid = roll_board(5, &mut rng).unwrap();
/// assert_eq!(grid.size(), 5);
/// ```
pub fn roll_board<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Grid, GridError> {
    if !SUPPORTED_SIZES.contains(&size) {
        return Err(GridError::InvalidLength(size.saturating_mul(size)));
    }
    let cells = size * size;

    let mut letters = String::with_capacity(cells);
    while letters.len() < cells {
        let mut dice = CLASSIC_DICE;
        dice.shuffle(rng);

        for die in dice.iter().take(cells - letters.len()) {
            if let Some(&face) = die.as_bytes().choose(rng) {
                letters.push(char::from(face));
            }
        }
    }

    Grid::new(&letters)
}
