//! Cached Java chunk data.

use crate::block_translator::BlockState;

/// Sections per Java chunk column: Y range [0, 255].
pub const SECTION_COUNT: usize = 16;

/// Palette-compressed 16x16x16 section.
pub struct ChunkSection {
    /// Palette indices in Java YZX order: `(y*16 + z)*16 + x`.
    indices: Box<[u16; 4096]>,
    palette: Vec<BlockState>,
}

impl ChunkSection {
    /// A section filled with a single state.
    pub fn new_single(state: BlockState) -> Self {
        Self {
            indices: Box::new([0; 4096]),
            palette: vec![state],
        }
    }

    /// `x`, `y`, `z` must each be in `[0, 15]`.
    pub fn set(&mut self, x: usize, y: usize, z: usize, state: BlockState) {
        debug_assert!(x < 16 && y < 16 && z < 16);
        let palette_index = match self.palette.iter().position(|&s| s == state) {
            Some(idx) => idx,
            None => {
                self.palette.push(state);
                self.palette.len() - 1
            }
        };
        self.indices[(y * 16 + z) * 16 + x] = palette_index as u16;
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockState {
        let palette_index = self.indices[(y * 16 + z) * 16 + x] as usize;
        self.palette[palette_index]
    }

    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }
}

/// A cached chunk column. Missing sections read as air.
pub struct ChunkColumn {
    sections: [Option<ChunkSection>; SECTION_COUNT],
}

impl Default for ChunkColumn {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkColumn {
    pub fn new() -> Self {
        Self {
            sections: std::array::from_fn(|_| None),
        }
    }

    pub fn set_section(&mut self, index: usize, section: ChunkSection) {
        if let Some(slot) = self.sections.get_mut(index) {
            *slot = Some(section);
        }
    }

    /// Block at chunk-local `x`/`z` and absolute `y`. Out-of-range `y` is air.
    pub fn get(&self, x: usize, y: i32, z: usize) -> BlockState {
        if !(0..(SECTION_COUNT as i32 * 16)).contains(&y) {
            return BlockState::AIR;
        }
        let y = y as usize;
        match &self.sections[y >> 4] {
            Some(section) => section.get(x, y & 15, z),
            None => BlockState::AIR,
        }
    }

    /// Returns `false` if `y` is outside the column.
    pub fn set(&mut self, x: usize, y: i32, z: usize, state: BlockState) -> bool {
        if !(0..(SECTION_COUNT as i32 * 16)).contains(&y) {
            return false;
        }
        let y = y as usize;
        let section = self.sections[y >> 4]
            .get_or_insert_with(|| ChunkSection::new_single(BlockState::AIR));
        section.set(x, y & 15, z, state);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_state_section() {
        let section = ChunkSection::new_single(BlockState::new(42));
        assert_eq!(section.palette_len(), 1);
        assert_eq!(section.get(0, 0, 0), BlockState::new(42));
        assert_eq!(section.get(15, 15, 15), BlockState::new(42));
    }

    #[test]
    fn palette_reuses_existing_states() {
        let mut section = ChunkSection::new_single(BlockState::new(1));
        section.set(0, 0, 0, BlockState::new(2));
        section.set(0, 1, 0, BlockState::new(3));
        section.set(0, 2, 0, BlockState::new(2));
        assert_eq!(section.palette_len(), 3);
        assert_eq!(section.get(0, 2, 0), BlockState::new(2));
    }

    #[test]
    fn column_missing_section_is_air() {
        let column = ChunkColumn::new();
        assert_eq!(column.get(3, 100, 3), BlockState::AIR);
    }

    #[test]
    fn column_set_get() {
        let mut column = ChunkColumn::new();
        assert!(column.set(1, 64, 2, BlockState::new(10)));
        assert_eq!(column.get(1, 64, 2), BlockState::new(10));
        assert_eq!(column.get(1, 65, 2), BlockState::AIR);
    }

    #[test]
    fn column_reads_installed_section() {
        let mut column = ChunkColumn::new();
        column.set_section(4, ChunkSection::new_single(BlockState::new(7)));
        assert_eq!(column.get(0, 64, 0), BlockState::new(7));
        assert_eq!(column.get(15, 79, 15), BlockState::new(7));
        assert_eq!(column.get(0, 80, 0), BlockState::AIR);
    }

    #[test]
    fn column_rejects_out_of_range_y() {
        let mut column = ChunkColumn::new();
        assert!(!column.set(0, 256, 0, BlockState::new(1)));
        assert!(!column.set(0, -1, 0, BlockState::new(1)));
        assert_eq!(column.get(0, -1, 0), BlockState::AIR);
    }
}
