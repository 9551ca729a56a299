//! Supported game versions and ordered game sets.
//!
//! Generated file names carry the numeric engine codes (`Content_G130.src`),
//! so the codes and their order are fixed here and nowhere else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four supported game versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Game {
    Gothic1,
    GothicSequel,
    Gothic2Classic,
    Gothic2Notr,
}

impl Game {
    /// Canonical order used for file generation and derived version lists.
    pub const ALL: [Game; 4] = [
        Game::Gothic1,
        Game::GothicSequel,
        Game::Gothic2Classic,
        Game::Gothic2Notr,
    ];

    /// Engine code used in file suffixes (`_G<code>`).
    pub fn code(self) -> u32 {
        match self {
            Game::Gothic1 => 1,
            Game::GothicSequel => 112,
            Game::Gothic2Classic => 130,
            Game::Gothic2Notr => 2,
        }
    }

    /// Label used in the setup issue form and in generated prose.
    pub fn label(self) -> &'static str {
        match self {
            Game::Gothic1 => "Gothic 1",
            Game::GothicSequel => "Gothic Sequel",
            Game::Gothic2Classic => "Gothic 2 Classic",
            Game::Gothic2Notr => "Gothic 2 NotR",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of selected games, iterated in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSet {
    gothic1: bool,
    sequel: bool,
    gothic2_classic: bool,
    gothic2_notr: bool,
}

impl GameSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        let mut set = Self::default();
        for game in Game::ALL {
            set.insert(game);
        }
        set
    }

    pub fn insert(&mut self, game: Game) {
        match game {
            Game::Gothic1 => self.gothic1 = true,
            Game::GothicSequel => self.sequel = true,
            Game::Gothic2Classic => self.gothic2_classic = true,
            Game::Gothic2Notr => self.gothic2_notr = true,
        }
    }

    pub fn contains(&self, game: Game) -> bool {
        match game {
            Game::Gothic1 => self.gothic1,
            Game::GothicSequel => self.sequel,
            Game::Gothic2Classic => self.gothic2_classic,
            Game::Gothic2Notr => self.gothic2_notr,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when all four games are selected.
    pub fn is_full(&self) -> bool {
        self.len() == Game::ALL.len()
    }

    pub fn len(&self) -> usize {
        Game::ALL.iter().filter(|g| self.contains(**g)).count()
    }

    pub fn union(&self, other: &GameSet) -> GameSet {
        let mut set = *self;
        for game in other.iter() {
            set.insert(game);
        }
        set
    }

    /// Games in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Game> + '_ {
        Game::ALL.into_iter().filter(|g| self.contains(*g))
    }

    /// Engine codes in canonical order.
    pub fn codes(&self) -> Vec<u32> {
        self.iter().map(Game::code).collect()
    }
}

impl FromIterator<Game> for GameSet {
    fn from_iter<I: IntoIterator<Item = Game>>(iter: I) -> Self {
        let mut set = Self::default();
        for game in iter {
            set.insert(game);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_in_canonical_order() {
        assert_eq!(GameSet::all().codes(), vec![1, 112, 130, 2]);
    }

    #[test]
    fn test_insert_order_does_not_matter() {
        let set: GameSet = [Game::Gothic2Notr, Game::Gothic1].into_iter().collect();
        assert_eq!(set.codes(), vec![1, 2]);
    }

    #[test]
    fn test_union() {
        let a: GameSet = [Game::GothicSequel].into_iter().collect();
        let b: GameSet = [Game::Gothic2Classic, Game::GothicSequel]
            .into_iter()
            .collect();
        assert_eq!(a.union(&b).codes(), vec![112, 130]);
    }

    #[test]
    fn test_empty_and_full() {
        assert!(GameSet::empty().is_empty());
        assert!(GameSet::all().is_full());
        assert!(!GameSet::all().is_empty());

        let one: GameSet = [Game::Gothic1].into_iter().collect();
        assert!(!one.is_empty());
        assert!(!one.is_full());
        assert_eq!(one.len(), 1);
    }
}
