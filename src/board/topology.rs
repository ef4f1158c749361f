//! Ladder and snake placement.
//!
//! A topology is two maps from a source square to a destination square.
//! Landing exactly on a source moves the token to the destination, once:
//! destinations are never sources, so a jump can never trigger another.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::error::TopologyError;

/// Which kind of jump (if any) a landing triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpKind {
    Ladder,
    Snake,
    None,
}

impl std::fmt::Display for JumpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JumpKind::Ladder => write!(f, "Ladder"),
            JumpKind::Snake => write!(f, "Snake"),
            JumpKind::None => write!(f, "None"),
        }
    }
}

/// Result of resolving a landing square.
///
/// `to == from` exactly when `kind` is [`JumpKind::None`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landing {
    pub kind: JumpKind,
    pub from: Square,
    pub to: Square,
}

impl Landing {
    /// True if the landing moved the token.
    #[must_use]
    pub fn jumped(&self) -> bool {
        self.kind != JumpKind::None
    }
}

/// Static ladder/snake layout of a board.
///
/// Built through [`TopologyBuilder`], which enforces:
/// - ladders climb, snakes descend
/// - a square starts at most one jump
/// - no jump lands on another jump's source
/// - neither the start nor the goal square starts a jump
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TopologySpec", into = "TopologySpec")]
pub struct BoardTopology {
    ladders: FxHashMap<Square, Square>,
    snakes: FxHashMap<Square, Square>,
}

impl BoardTopology {
    /// The classic board.
    #[must_use]
    pub fn classic() -> Self {
        let ladders = [
            (4, 14),
            (9, 31),
            (21, 42),
            (28, 84),
            (36, 44),
            (51, 67),
            (71, 91),
            (80, 100),
        ];
        let snakes = [
            (16, 6),
            (47, 26),
            (49, 11),
            (56, 53),
            (62, 19),
            (64, 60),
            (87, 24),
            (93, 73),
            (95, 75),
            (98, 78),
        ];

        let sq = |n: u8| Square::new(n).expect("classic board squares are on the board");
        Self {
            ladders: ladders.iter().map(|&(f, t)| (sq(f), sq(t))).collect(),
            snakes: snakes.iter().map(|&(f, t)| (sq(f), sq(t))).collect(),
        }
    }

    /// A board with no ladders or snakes.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            ladders: FxHashMap::default(),
            snakes: FxHashMap::default(),
        }
    }

    /// Start building a custom board.
    #[must_use]
    pub fn builder() -> TopologyBuilder {
        TopologyBuilder::default()
    }

    /// Resolve a landing square. Applied once per completed move.
    #[must_use]
    pub fn resolve_landing(&self, square: Square) -> Landing {
        if let Some(&to) = self.ladders.get(&square) {
            return Landing { kind: JumpKind::Ladder, from: square, to };
        }
        if let Some(&to) = self.snakes.get(&square) {
            return Landing { kind: JumpKind::Snake, from: square, to };
        }
        Landing { kind: JumpKind::None, from: square, to: square }
    }

    /// Ladder destination starting at `square`, if any.
    #[must_use]
    pub fn ladder_at(&self, square: Square) -> Option<Square> {
        self.ladders.get(&square).copied()
    }

    /// Snake destination starting at `square`, if any.
    #[must_use]
    pub fn snake_at(&self, square: Square) -> Option<Square> {
        self.snakes.get(&square).copied()
    }

    /// Ladders as `(from, to)`, sorted by source.
    #[must_use]
    pub fn ladders(&self) -> Vec<(Square, Square)> {
        sorted_pairs(&self.ladders)
    }

    /// Snakes as `(from, to)`, sorted by source.
    #[must_use]
    pub fn snakes(&self) -> Vec<(Square, Square)> {
        sorted_pairs(&self.snakes)
    }
}

impl Default for BoardTopology {
    fn default() -> Self {
        Self::classic()
    }
}

fn sorted_pairs(map: &FxHashMap<Square, Square>) -> Vec<(Square, Square)> {
    let mut pairs: Vec<_> = map.iter().map(|(&f, &t)| (f, t)).collect();
    pairs.sort_unstable();
    pairs
}

/// Builder for validated custom boards.
///
/// ```
/// use snakes_ladders::board::BoardTopology;
///
/// let board = BoardTopology::builder()
///     .ladder(3, 22)
///     .snake(27, 5)
///     .build()
///     .unwrap();
///
/// assert_eq!(board.ladders().len(), 1);
/// assert_eq!(board.snakes().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TopologyBuilder {
    ladders: Vec<(u8, u8)>,
    snakes: Vec<(u8, u8)>,
}

impl TopologyBuilder {
    /// Add a ladder.
    #[must_use]
    pub fn ladder(mut self, from: u8, to: u8) -> Self {
        self.ladders.push((from, to));
        self
    }

    /// Add a snake.
    #[must_use]
    pub fn snake(mut self, from: u8, to: u8) -> Self {
        self.snakes.push((from, to));
        self
    }

    /// Validate and build the topology.
    pub fn build(self) -> Result<BoardTopology, TopologyError> {
        let mut ladders = FxHashMap::default();
        let mut snakes = FxHashMap::default();

        for &(from, to) in &self.ladders {
            let (f, t) = check_jump(from, to)?;
            if t < f {
                return Err(TopologyError::LadderGoesDown { from, to });
            }
            insert_source(&mut ladders, &snakes, f, t)?;
        }
        for &(from, to) in &self.snakes {
            let (f, t) = check_jump(from, to)?;
            if t > f {
                return Err(TopologyError::SnakeGoesUp { from, to });
            }
            insert_source(&mut snakes, &ladders, f, t)?;
        }

        // Destinations checked last so that declaration order doesn't matter.
        for (&f, &t) in ladders.iter().chain(snakes.iter()) {
            if ladders.contains_key(&t) || snakes.contains_key(&t) {
                return Err(TopologyError::ChainedJump { from: f.get(), to: t.get() });
            }
        }

        Ok(BoardTopology { ladders, snakes })
    }
}

fn check_jump(from: u8, to: u8) -> Result<(Square, Square), TopologyError> {
    let f = Square::try_from(from)?;
    let t = Square::try_from(to)?;
    if f == Square::START || f == Square::GOAL {
        return Err(TopologyError::ReservedSource(from));
    }
    if f == t {
        return Err(TopologyError::SelfLoop(from));
    }
    Ok((f, t))
}

fn insert_source(
    map: &mut FxHashMap<Square, Square>,
    other: &FxHashMap<Square, Square>,
    from: Square,
    to: Square,
) -> Result<(), TopologyError> {
    if map.contains_key(&from) || other.contains_key(&from) {
        return Err(TopologyError::DuplicateSource(from.get()));
    }
    map.insert(from, to);
    Ok(())
}

/// A single jump as written in configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpSpec {
    pub from: u8,
    pub to: u8,
}

/// Serialized form of a [`BoardTopology`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySpec {
    #[serde(default)]
    pub ladders: Vec<JumpSpec>,
    #[serde(default)]
    pub snakes: Vec<JumpSpec>,
}

impl TryFrom<TopologySpec> for BoardTopology {
    type Error = TopologyError;

    fn try_from(spec: TopologySpec) -> Result<Self, Self::Error> {
        let builder = spec
            .ladders
            .iter()
            .fold(BoardTopology::builder(), |b, j| b.ladder(j.from, j.to));
        spec.snakes
            .iter()
            .fold(builder, |b, j| b.snake(j.from, j.to))
            .build()
    }
}

impl From<BoardTopology> for TopologySpec {
    fn from(topology: BoardTopology) -> Self {
        let to_spec = |(f, t): (Square, Square)| JumpSpec { from: f.get(), to: t.get() };
        Self {
            ladders: topology.ladders().into_iter().map(to_spec).collect(),
            snakes: topology.snakes().into_iter().map(to_spec).collect(),
        }
    }
}
