// SPDX-License-Identifier: MPL-2.0
//! Decorative code matrix rendered in the ticket's corner.
//!
//! The matrix is a deterministic BLAKE3-derived pattern dressed up with the
//! three finder squares of a real QR code. It is intentionally not scannable;
//! verification is a non-goal of the application.

pub const MODULES: usize = 21;
const FINDER: usize = 7;

/// A square grid of dark/light modules derived from a payload string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMatrix {
    cells: Vec<bool>,
}

impl CodeMatrix {
    /// Builds the matrix for a payload. Equal payloads produce equal
    /// matrices.
    pub fn from_payload(payload: &str) -> Self {
        let mut reader = blake3::Hasher::new().update(payload.as_bytes()).finalize_xof();
        let mut bytes = vec![0u8; MODULES * MODULES / 8 + 1];
        reader.fill(&mut bytes);

        let mut cells = vec![false; MODULES * MODULES];
        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = (bytes[index / 8] >> (index % 8)) & 1 == 1;
        }

        let mut matrix = Self { cells };
        matrix.stamp_finder(0, 0);
        matrix.stamp_finder(MODULES - FINDER, 0);
        matrix.stamp_finder(0, MODULES - FINDER);
        matrix
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * MODULES + x]
    }

    fn set(&mut self, x: usize, y: usize, value: bool) {
        self.cells[y * MODULES + x] = value;
    }

    /// Concentric 7x7 square: dark ring, light ring, dark 3x3 center.
    fn stamp_finder(&mut self, origin_x: usize, origin_y: usize) {
        for dy in 0..FINDER {
            for dx in 0..FINDER {
                let on_outer_ring = dx == 0 || dy == 0 || dx == FINDER - 1 || dy == FINDER - 1;
                let in_center = (2..=4).contains(&dx) && (2..=4).contains(&dy);
                self.set(origin_x + dx, origin_y + dy, on_outer_ring || in_center);
            }
        }
    }
}
