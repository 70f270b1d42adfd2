#![cfg_attr(not(test), allow(dead_code))]

// Shared with build.rs, which turns the piece art into the catalog table.
// Keep this file free of `crate::` paths.

use no_std_strings::str32;

/// Cell position relative to a piece's pivot.
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
pub struct Offset {
    pub x: i8,
    pub y: i8,
}

impl Offset {
    pub const PIVOT: Offset = Offset::new(0, 0);

    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Quarter turn clockwise about the pivot (rows grow downwards).
    pub const fn rotated(self) -> Self {
        Offset::new(-self.y, self.x)
    }
}

/// A tetromino as its pivot plus three more cells.
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
pub struct Shape {
    pub offsets: [Offset; 3],
}

impl Shape {
    /// Parses piece art: `@` is the pivot, `#` the other three cells.
    ///
    /// Panics on anything else, which turns bad art into a build failure.
    pub fn from_str(art: &str) -> Self {
        let mut pivot = None;
        let mut cells = [Offset::PIVOT; 3];
        let mut found = 0;
        for (y, line) in art.lines().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let here = Offset::new(x as i8, y as i8);
                match ch {
                    '@' => {
                        assert!(pivot.is_none(), "piece art has two pivots:\n{}", art);
                        pivot = Some(here);
                    }
                    '#' => {
                        assert!(found < 3, "piece art has more than four cells:\n{}", art);
                        cells[found] = here;
                        found += 1;
                    }
                    ' ' => {}
                    other => panic!("unexpected {:?} in piece art:\n{}", other, art),
                }
            }
        }
        let pivot = pivot.unwrap_or_else(|| panic!("piece art has no pivot:\n{}", art));
        assert!(found == 3, "piece art needs three cells besides the pivot:\n{}", art);

        Self {
            offsets: cells.map(|c| Offset::new(c.x - pivot.x, c.y - pivot.y)),
        }
    }

    pub fn rotate(&self) -> Self {
        Self {
            offsets: self.offsets.map(Offset::rotated),
        }
    }

    /// Pivot first, then the three offsets.
    pub fn cells(&self) -> [Offset; 4] {
        let [a, b, c] = self.offsets;
        [Offset::PIVOT, a, b, c]
    }

    /// (min x, min y, max x, max y) over all four cells.
    pub fn bounds(&self) -> (i8, i8, i8, i8) {
        self.cells().iter().fold((0, 0, 0, 0), |(x0, y0, x1, y1), c| {
            (x0.min(c.x), y0.min(c.y), x1.max(c.x), y1.max(c.y))
        })
    }

    /// Same outline regardless of where the pivot sits.
    pub fn same_outline(&self, other: &Shape) -> bool {
        let (ax, ay, _, _) = self.bounds();
        let (bx, by, _, _) = other.bounds();
        let theirs = other.cells();
        self.cells().iter().all(|a| {
            theirs
                .iter()
                .any(|b| a.x - ax == b.x - bx && a.y - ay == b.y - by)
        })
    }

    /// Number of distinct orientations a run of quarter turns goes through.
    pub fn orientations(&self) -> u8 {
        let mut turned = self.rotate();
        let mut count = 1;
        while !turned.same_outline(self) {
            turned = turned.rotate();
            count += 1;
        }
        count
    }

    fn has(&self, at: Offset) -> bool {
        self.offsets.contains(&at)
    }

    pub fn str(&self) -> str32 {
        let mut repr = str32::new();
        let (x0, y0, x1, y1) = self.bounds();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let at = Offset::new(x, y);
                let ch = if at == Offset::PIVOT {
                    "@"
                } else if self.has(at) {
                    "#"
                } else {
                    " "
                };
                repr.push(ch);
            }
            repr.push("\n");
        }
        repr
    }
}
