pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_HOUSES: usize = 27;

pub(crate) const COL_OFFSET: u8 = 9;
pub(crate) const BLOCK_OFFSET: u8 = 18;
