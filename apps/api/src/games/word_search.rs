//! Word Search — randomized grid generator for the word-search mini-game.
//!
//! # Algorithm
//! Words are placed one at a time, in input order. Each word gets up to
//! `MAX_PLACEMENT_ATTEMPTS` random (direction, row, col) draws; the first draw
//! that fits inside the grid and agrees with every letter already written wins.
//! A word that never fits is dropped. Remaining empty cells are filled with
//! uniformly random letters A–Z, then filler cells that happen to spell an
//! extra forward copy of a placed word are redrawn.
//!
//! There is no backtracking: an earlier placement is never moved to make room
//! for a later word, so callers must tolerate `placements.len() < words.len()`.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Random draws per word before it is dropped.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 50;

/// Redraw passes over filler cells before stray copies are left in place.
const MAX_REFILL_PASSES: usize = 100;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Reading direction of a placed word. Words always read forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Direction {
    pub const ALL: [Direction; 3] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
    ];

    /// `(row, col)` offset between consecutive letters.
    pub fn step(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
        }
    }
}

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// Where a word was successfully written into the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    /// Cells occupied by the word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (dr, dc) = self.direction.step();
        (0..self.word.chars().count()).map(move |i| Cell {
            row: self.row + i * dr,
            col: self.col + i * dc,
        })
    }

    /// First and last cell of the word. `None` for an empty word.
    pub fn endpoints(&self) -> Option<(Cell, Cell)> {
        let len = self.word.chars().count();
        if len == 0 {
            return None;
        }
        let (dr, dc) = self.direction.step();
        let first = Cell {
            row: self.row,
            col: self.col,
        };
        let last = Cell {
            row: self.row + (len - 1) * dr,
            col: self.col + (len - 1) * dc,
        };
        Some((first, last))
    }
}

/// A player's drag from one cell to another, in either reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: Cell,
    pub end: Cell,
}

/// A generated puzzle: a fully-filled square grid plus the words hidden in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSearch {
    pub size: usize,
    pub grid: Vec<Vec<char>>,
    pub placements: Vec<Placement>,
}

impl WordSearch {
    /// The grid as one string per row.
    pub fn rows(&self) -> Vec<String> {
        self.grid.iter().map(|row| row.iter().collect()).collect()
    }
}

impl fmt::Display for WordSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Generates a `size`×`size` puzzle from `words`.
///
/// Words are expected uppercase and deduplicated. Empty words are skipped and
/// words longer than `size` can never fit, so they are dropped. Never fails.
pub fn generate<R: Rng>(words: &[String], size: usize, rng: &mut R) -> WordSearch {
    let mut cells: Vec<Vec<Option<char>>> = vec![vec![None; size]; size];
    let mut placements = Vec::with_capacity(words.len());

    if size > 0 {
        for word in words {
            let letters: Vec<char> = word.chars().collect();
            if letters.is_empty() {
                continue;
            }

            match find_spot(&cells, &letters, rng) {
                Some((row, col, direction)) => {
                    let placement = Placement {
                        word: word.clone(),
                        row,
                        col,
                        direction,
                    };
                    for (cell, &letter) in placement.cells().zip(&letters) {
                        cells[cell.row][cell.col] = Some(letter);
                    }
                    placements.push(placement);
                }
                None => debug!(
                    word = %word,
                    size,
                    attempts = MAX_PLACEMENT_ATTEMPTS,
                    "Word search: dropped word that could not be placed"
                ),
            }
        }
    }

    let placed: Vec<Vec<bool>> = cells
        .iter()
        .map(|row| row.iter().map(Option::is_some).collect())
        .collect();

    let mut grid = Vec::with_capacity(size);
    for row in cells {
        let mut filled = Vec::with_capacity(size);
        for cell in row {
            filled.push(match cell {
                Some(letter) => letter,
                None => random_letter(rng),
            });
        }
        grid.push(filled);
    }

    redraw_stray_copies(&mut grid, &placed, &placements, rng);

    debug!(
        size,
        requested = words.len(),
        placed = placements.len(),
        "Word search generated"
    );

    WordSearch {
        size,
        grid,
        placements,
    }
}

/// Same as [`generate`], reproducible for a given seed.
#[allow(dead_code)]
pub fn generate_seeded(words: &[String], size: usize, seed: u64) -> WordSearch {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(words, size, &mut rng)
}

/// Returns the placement whose endpoints match the selection in either order.
pub fn find_selection<'a>(
    placements: &'a [Placement],
    selection: &Selection,
) -> Option<&'a Placement> {
    placements.iter().find(|p| match p.endpoints() {
        Some((first, last)) => {
            (first == selection.start && last == selection.end)
                || (first == selection.end && last == selection.start)
        }
        None => false,
    })
}

fn find_spot<R: Rng>(
    cells: &[Vec<Option<char>>],
    letters: &[char],
    rng: &mut R,
) -> Option<(usize, usize, Direction)> {
    let size = cells.len();

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);

        if fits(cells, letters, row, col, direction) {
            return Some((row, col, direction));
        }
    }

    None
}

fn fits(
    cells: &[Vec<Option<char>>],
    letters: &[char],
    row: usize,
    col: usize,
    direction: Direction,
) -> bool {
    let size = cells.len();
    let len = letters.len();
    let (dr, dc) = direction.step();

    if (dr == 1 && row + len > size) || (dc == 1 && col + len > size) {
        return false;
    }

    letters.iter().enumerate().all(|(i, &letter)| {
        match cells[row + i * dr][col + i * dc] {
            None => true,
            Some(existing) => existing == letter,
        }
    })
}

/// Redraws filler cells until no placed word appears a second time reading
/// forward. Copies made only of placed letters (one word inside another) are
/// left alone.
fn redraw_stray_copies<R: Rng>(
    grid: &mut [Vec<char>],
    placed: &[Vec<bool>],
    placements: &[Placement],
    rng: &mut R,
) {
    for _ in 0..MAX_REFILL_PASSES {
        let filler = stray_copy_filler(grid, placed, placements);
        if filler.is_empty() {
            return;
        }
        for cell in filler {
            grid[cell.row][cell.col] = random_letter(rng);
        }
    }
    debug!(
        passes = MAX_REFILL_PASSES,
        "Word search: stray word copies remain after refill"
    );
}

/// One filler cell from every stray forward copy of a placed word.
fn stray_copy_filler(
    grid: &[Vec<char>],
    placed: &[Vec<bool>],
    placements: &[Placement],
) -> Vec<Cell> {
    let size = grid.len();
    let mut filler = Vec::new();

    for placement in placements {
        let letters: Vec<char> = placement.word.chars().collect();
        let len = letters.len();
        for direction in Direction::ALL {
            let (dr, dc) = direction.step();
            for row in 0..size {
                for col in 0..size {
                    if (dr == 1 && row + len > size) || (dc == 1 && col + len > size) {
                        continue;
                    }
                    let is_placement = placements.iter().any(|p| {
                        p.word == placement.word
                            && p.row == row
                            && p.col == col
                            && p.direction == direction
                    });
                    if is_placement {
                        continue;
                    }
                    let spells_word = letters
                        .iter()
                        .enumerate()
                        .all(|(i, &letter)| grid[row + i * dr][col + i * dc] == letter);
                    if !spells_word {
                        continue;
                    }
                    if let Some(cell) = (0..len)
                        .map(|i| Cell {
                            row: row + i * dr,
                            col: col + i * dc,
                        })
                        .find(|cell| !placed[cell.row][cell.col])
                    {
                        filler.push(cell);
                    }
                }
            }
        }
    }

    filler
}

fn random_letter<R: Rng>(rng: &mut R) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())] as char
}
