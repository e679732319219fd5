use anyhow::{Context, Result};
use invasion_common::Bitmap;

use crate::entity::InvaderKind;

const DEFENDER: &[&str] = &[
    "......###......",
    ".....#####.....",
    ".....#####.....",
    "......###......",
    "..###########..",
    ".#############.",
    "###############",
    "###.#######.###",
    "###############",
    ".#############.",
    "..##.......##..",
    "..##.......##..",
    ".####.....####.",
];

const TROOPER: &[&str] = &[
    "..#####..",
    ".#######.",
    ".#.###.#.",
    ".#######.",
    "..#####..",
    "...###...",
    "#########",
    "#.#####.#",
    "#.#####.#",
    "#.#####.#",
    "#.#####.#",
    "..#####..",
    "..##.##..",
    "..##.##..",
    "..##.##..",
    "..##.##..",
    ".###.###.",
];

const GUNNER: &[&str] = &[
    "...###...",
    "..#####..",
    "..#.#.#..",
    "..#####..",
    "#########",
    "..#####..",
    ".#######.",
    ".#.#.#.#.",
    ".#######.",
    "##.#.#.##",
    ".#.#.#.#.",
    "#########",
    "#.#.#.#.#",
    "#########",
    "#.#.#.#.#",
    "#########",
    "#########",
];

const WRAITH: &[&str] = &[
    "...###...",
    "..#####..",
    "..#.#.#..",
    "..#####..",
    "#..###..#",
    "##.###.##",
    "#########",
    "#########",
    ".#######.",
    "..#####..",
    "..#####..",
    "..#####..",
    "..#####..",
    "..#####..",
    ".#######.",
    ".#######.",
    "#########",
];

const BARRIER: &[&str] = &[
    "....#################....",
    "..#####################..",
    "#########################",
    "#########################",
    "###.###.###.###.###.###.#",
    "#########################",
];

/// Every sprite mask the game draws, parsed once at startup.
#[derive(Clone, Debug)]
pub struct SpriteSheet {
    pub defender: Bitmap,
    pub barrier: Bitmap,
    trooper: Bitmap,
    gunner: Bitmap,
    wraith: Bitmap,
}

impl SpriteSheet {
    pub fn load() -> Result<Self> {
        Ok(Self {
            defender: parse("defender", DEFENDER)?,
            barrier: parse("barrier", BARRIER)?,
            trooper: parse("trooper", TROOPER)?,
            gunner: parse("gunner", GUNNER)?,
            wraith: parse("wraith", WRAITH)?,
        })
    }

    pub fn invader(&self, kind: InvaderKind) -> &Bitmap {
        match kind {
            InvaderKind::Trooper => &self.trooper,
            InvaderKind::Gunner => &self.gunner,
            InvaderKind::Wraith => &self.wraith,
        }
    }
}

fn parse(name: &str, rows: &[&str]) -> Result<Bitmap> {
    Bitmap::parse(rows).with_context(|| format!("invalid {name} sprite"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sprites_load() {
        let sheet = SpriteSheet::load().unwrap();
        assert_eq!((sheet.defender.width(), sheet.defender.height()), (15, 13));
        assert_eq!((sheet.barrier.width(), sheet.barrier.height()), (25, 6));
        for kind in InvaderKind::ALL {
            let bitmap = sheet.invader(kind);
            assert_eq!((bitmap.width(), bitmap.height()), (9, 17), "{kind:?}");
        }
    }

    #[test]
    fn parse_errors_name_the_sprite() {
        let err = parse("broken", &["##", "#"]).unwrap_err();
        assert!(format!("{err:#}").contains("invalid broken sprite"));
    }
}
