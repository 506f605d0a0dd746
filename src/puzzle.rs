//! Sliding tile puzzle over a memory photo.
//!
//! The board is a row-major permutation of `0..size²`. Value `v` is the slice
//! of the photo that belongs at cell `v`; the highest value is the blank. A
//! board is solved when every cell holds its own index, which leaves the
//! blank in the bottom-right corner.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::{ArcadeError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PuzzleStatus {
    Playing,
    Solved,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlidingPuzzle {
    size: usize,
    tiles: Vec<usize>,
    blank: usize,
    moves: u32,
    status: PuzzleStatus,
    image: String,
}

impl SlidingPuzzle {
    /// Start a fresh puzzle: pick a photo uniformly from `images` (or
    /// `fallback` when there is none) and deal a solvable, unsolved board.
    /// Sizes below 2 are raised to 2.
    pub fn new<R: Rng + ?Sized>(size: usize, images: &[&str], fallback: &str, rng: &mut R) -> Self {
        let size = size.max(2);
        let image = images.choose(rng).copied().unwrap_or(fallback).to_string();
        let tiles = deal(size, rng);
        let blank = blank_position(&tiles);
        Self {
            size,
            tiles,
            blank,
            moves: 0,
            status: PuzzleStatus::Playing,
            image,
        }
    }

    /// Build a puzzle from an explicit arrangement (scripted boards, saved games).
    pub fn from_tiles(size: usize, tiles: Vec<usize>, image: impl Into<String>) -> Result<Self> {
        if size < 2 {
            return Err(ArcadeError::InvalidBoard(format!("size {size} is below 2")));
        }
        let cells = size * size;
        if tiles.len() != cells {
            return Err(ArcadeError::InvalidBoard(format!(
                "expected {cells} tiles, got {}",
                tiles.len()
            )));
        }
        let mut seen = vec![false; cells];
        for &t in &tiles {
            if t >= cells || std::mem::replace(&mut seen[t], true) {
                return Err(ArcadeError::InvalidBoard(format!(
                    "{tiles:?} is not a permutation of 0..{cells}"
                )));
            }
        }
        let blank = blank_position(&tiles);
        let status = if is_goal(&tiles) {
            PuzzleStatus::Solved
        } else {
            PuzzleStatus::Playing
        };
        Ok(Self {
            size,
            tiles,
            blank,
            moves: 0,
            status,
            image: image.into(),
        })
    }

    /// Slide the tile at `index` into the blank. Returns whether the board
    /// changed: clicks on the blank, on non-adjacent or out-of-range cells, or
    /// after the puzzle is solved are ignored.
    pub fn attempt_move(&mut self, index: usize) -> bool {
        if self.status == PuzzleStatus::Solved || index >= self.tiles.len() {
            return false;
        }
        if !is_adjacent(index, self.blank, self.size) {
            return false;
        }
        self.tiles.swap(index, self.blank);
        self.blank = index;
        self.moves += 1;
        if is_goal(&self.tiles) {
            self.status = PuzzleStatus::Solved;
        }
        true
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[usize] {
        &self.tiles
    }

    pub fn blank_index(&self) -> usize {
        self.blank
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> PuzzleStatus {
        self.status
    }

    pub fn is_solved(&self) -> bool {
        self.status == PuzzleStatus::Solved
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Cells the player may click right now.
    pub fn movable_cells(&self) -> Vec<usize> {
        if self.is_solved() {
            return Vec::new();
        }
        (0..self.tiles.len())
            .filter(|&i| is_adjacent(i, self.blank, self.size))
            .collect()
    }
}

fn deal<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<usize> {
    let mut tiles: Vec<usize> = (0..size * size).collect();
    loop {
        tiles.shuffle(rng);
        if is_solvable(&tiles, size) && !is_goal(&tiles) {
            return tiles;
        }
    }
}

fn blank_position(tiles: &[usize]) -> usize {
    let blank = tiles.len() - 1;
    tiles.iter().position(|&t| t == blank).unwrap_or(blank)
}

/// Win predicate: every cell holds its own index.
pub fn is_goal(tiles: &[usize]) -> bool {
    tiles.iter().enumerate().all(|(i, &t)| i == t)
}

/// Out-of-order pairs among the non-blank tiles.
pub fn inversion_count(tiles: &[usize]) -> usize {
    let blank = tiles.len().saturating_sub(1);
    let mut count = 0;
    for (i, &a) in tiles.iter().enumerate() {
        if a == blank {
            continue;
        }
        count += tiles[i + 1..].iter().filter(|&&b| b != blank && b < a).count();
    }
    count
}

/// Whether `tiles` can reach the goal with the blank in the last cell.
///
/// Odd widths: the inversion count must be even. Even widths: the inversion
/// count plus the blank's row distance from the bottom row must be even.
pub fn is_solvable(tiles: &[usize], size: usize) -> bool {
    let inversions = inversion_count(tiles);
    if size % 2 == 1 {
        return inversions % 2 == 0;
    }
    let blank_row = blank_position(tiles) / size;
    let rows_from_bottom = size - 1 - blank_row;
    (inversions + rows_from_bottom) % 2 == 0
}

/// 4-directional neighbors (Manhattan distance exactly 1).
pub fn is_adjacent(a: usize, b: usize, size: usize) -> bool {
    let (ar, ac) = (a / size, a % size);
    let (br, bc) = (b / size, b % size);
    ar.abs_diff(br) + ac.abs_diff(bc) == 1
}
