/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Count type used for peg counts and total-hole counts.
pub type CellCount = u16;

/// Board position as `(row, col)`, 0-indexed.
pub type Pos = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Pos {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// The four cardinal jump displacements `(dr, dc)`; diagonals are not jumps.
const JUMP_DISPLACEMENTS: [(isize, isize); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Applies `delta` to `pos`, returning a value only when it remains in bounds.
fn apply_delta(pos: Pos, delta: (isize, isize), bounds: Coord) -> Option<Pos> {
    let (r, c) = pos;
    let (dr, dc) = delta;

    let next_r = r.checked_add_signed(dr.try_into().ok()?)?;
    if next_r >= bounds {
        return None;
    }

    let next_c = c.checked_add_signed(dc.try_into().ok()?)?;
    if next_c >= bounds {
        return None;
    }

    Some((next_r, next_c))
}

/// Iterates the in-bounds cardinal jumps from a position as `(over, to)`
/// pairs, where `over` is the hole being jumped.
#[derive(Debug)]
pub struct JumpIter {
    from: Pos,
    bounds: Coord,
    index: u8,
}

impl JumpIter {
    pub(crate) fn new(from: Pos, bounds: Coord) -> Self {
        Self {
            from,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for JumpIter {
    type Item = (Pos, Pos);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= JUMP_DISPLACEMENTS.len() {
                return None;
            }

            let (dr, dc) = JUMP_DISPLACEMENTS[self.index as usize];
            self.index += 1;

            // The landing hole bounds-checks the midpoint too: `over` sits
            // between `from` and `to`.
            if let Some(to) = apply_delta(self.from, (dr, dc), self.bounds) {
                let over = apply_delta(self.from, (dr / 2, dc / 2), self.bounds)
                    .expect("midpoint of an in-bounds jump is in bounds");
                return Some((over, to));
            }
        }
    }
}
