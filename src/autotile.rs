//! Rule-based autotiling
//!
//! Picks a sprite for each cell from the terrain of its 8 neighbors. Every
//! cell samples an 8-bit neighbor pattern (1 = neighbor has the same terrain,
//! off-map neighbors count as 0) and looks it up in the rule of its own
//! terrain. Resolution is a pure function of the grid and the coordinates:
//! variant choices come from a positional hash, never from an RNG, so a tile
//! renders identically every time it is resolved.
//!
//! Lookup order:
//! 1. fully surrounded cells with variations pick a variation by hash
//! 2. ambiguous transition patterns pick one of two sprites by hash
//! 3. exact 8-slot patterns, in table order
//! 4. cardinal-only match: first entry whose fixed cardinal slots agree
//! 5. the rule's center sprite

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::TerrainError;
use crate::terrain::{TerrainGrid, TerrainType};
use crate::tilemap::Tilemap;

/// Columns in the reference sprite atlas.
pub const ATLAS_COLUMNS: u32 = 16;
/// Rows in the reference sprite atlas.
pub const ATLAS_ROWS: u32 = 16;

/// A cell of the sprite atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpritePosition {
    pub column: u32,
    pub row: u32,
}

impl SpritePosition {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    pub fn in_atlas(&self) -> bool {
        self.column < ATLAS_COLUMNS && self.row < ATLAS_ROWS
    }
}

impl fmt::Display for SpritePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

// =============================================================================
// NEIGHBOR PATTERNS
// =============================================================================

/// Neighbor slots in pattern order. The first four are the cardinals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Neighbor {
    Top,
    Right,
    Bottom,
    Left,
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl Neighbor {
    pub const ALL: [Neighbor; 8] = [
        Neighbor::Top,
        Neighbor::Right,
        Neighbor::Bottom,
        Neighbor::Left,
        Neighbor::TopRight,
        Neighbor::BottomRight,
        Neighbor::BottomLeft,
        Neighbor::TopLeft,
    ];

    /// Grid offset (dx, dy); y grows downward.
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Neighbor::Top => (0, -1),
            Neighbor::Right => (1, 0),
            Neighbor::Bottom => (0, 1),
            Neighbor::Left => (-1, 0),
            Neighbor::TopRight => (1, -1),
            Neighbor::BottomRight => (1, 1),
            Neighbor::BottomLeft => (-1, 1),
            Neighbor::TopLeft => (-1, -1),
        }
    }

    /// Bit of this slot in a pattern byte; slot 0 is the most significant bit.
    pub const fn bit(self) -> u8 {
        0x80 >> (self as u8)
    }
}

/// Bits of the four cardinal slots.
pub const CARDINAL_MASK: u8 = 0xF0;

/// A rule-side neighbor pattern. Slots outside `fixed` are wildcards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NeighborPattern {
    bits: u8,
    fixed: u8,
}

impl NeighborPattern {
    /// Parse an 8-slot literal over `'0'`, `'1'`, `'X'`. Used in const
    /// context, a malformed literal fails the build.
    pub const fn parse(pattern: &str) -> Self {
        let bytes = pattern.as_bytes();
        if bytes.len() != 8 {
            panic!("neighbor pattern must have exactly 8 slots");
        }

        let mut bits = 0u8;
        let mut fixed = 0u8;
        let mut i = 0;
        while i < 8 {
            let bit = 0x80u8 >> i;
            match bytes[i] {
                b'1' => {
                    bits |= bit;
                    fixed |= bit;
                }
                b'0' => fixed |= bit,
                b'X' => {}
                _ => panic!("neighbor pattern slots must be '0', '1' or 'X'"),
            }
            i += 1;
        }

        Self { bits, fixed }
    }

    /// A pattern with every slot fixed, e.g. a sampled one.
    pub const fn exact(bits: u8) -> Self {
        Self { bits, fixed: 0xFF }
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    pub fn is_exact(&self) -> bool {
        self.fixed == 0xFF
    }

    pub fn matches_exact(&self, sampled: u8) -> bool {
        self.is_exact() && self.bits == sampled
    }

    /// Compare fixed cardinal slots only; diagonals are ignored entirely.
    pub fn matches_cardinals(&self, sampled: u8) -> bool {
        let mask = self.fixed & CARDINAL_MASK;
        sampled & mask == self.bits & mask
    }
}

impl FromStr for NeighborPattern {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.len() == 8 && s.bytes().all(|b| matches!(b, b'0' | b'1' | b'X'));
        if valid {
            Ok(Self::parse(s))
        } else {
            Err(TerrainError::InvalidConfig(format!(
                "'{}' is not an 8-slot neighbor pattern over 0, 1 and X",
                s
            )))
        }
    }
}

impl fmt::Display for NeighborPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in Neighbor::ALL {
            let c = if self.fixed & n.bit() == 0 {
                'X'
            } else if self.bits & n.bit() != 0 {
                '1'
            } else {
                '0'
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Sampled pattern of a cell with every neighbor sharing its terrain.
pub const SURROUNDED: u8 = 0xFF;

/// Sample the neighbor pattern at `(x, y)`. Off-map neighbors never match.
pub fn sample_pattern(grid: &TerrainGrid, x: usize, y: usize) -> Result<u8, TerrainError> {
    grid.check(x, y)?;
    Ok(pattern_at(grid, x, y))
}

/// Unchecked `sample_pattern`; `(x, y)` must be on the map.
fn pattern_at(grid: &TerrainGrid, x: usize, y: usize) -> u8 {
    let terrain = *grid.get(x, y);
    let mut bits = 0u8;

    for n in Neighbor::ALL {
        let (dx, dy) = n.offset();
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if grid.in_bounds_i(nx, ny) && *grid.get(nx as usize, ny as usize) == terrain {
            bits |= n.bit();
        }
    }

    bits
}

/// Deterministic pseudo-random value in `[0, 1)` for a cell.
/// A splitmix64 finalizer over both coordinates.
pub fn positional_hash(x: usize, y: usize) -> f64 {
    let mut h = (x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (y as u64).wrapping_add(0x632B_E59B_D9B4_E019).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    h ^= h >> 30;
    h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    h ^= h >> 27;
    h = h.wrapping_mul(0x94D0_49BB_1331_11EB);
    h ^= h >> 31;

    // Top 53 bits give an exact f64 in [0, 1)
    (h >> 11) as f64 / (1u64 << 53) as f64
}

/// Index into a list of `len` items chosen by the cell's positional hash.
fn pick(x: usize, y: usize, len: usize) -> usize {
    ((positional_hash(x, y) * len as f64) as usize).min(len - 1)
}

// =============================================================================
// RULES
// =============================================================================

/// Sprite selection rule for one terrain.
#[derive(Clone, Debug, PartialEq)]
pub struct TileRule {
    /// Fallback sprite
    pub center: SpritePosition,
    /// Ordered patterns; the first match wins
    pub patterns: Vec<(NeighborPattern, SpritePosition)>,
    /// Alternatives for fully surrounded cells
    pub variations: Vec<SpritePosition>,
    /// Cardinal patterns with two equivalent sprites, alternated by position
    pub transitions: Vec<(NeighborPattern, [SpritePosition; 2])>,
}

impl TileRule {
    pub fn new(center: SpritePosition) -> Self {
        Self {
            center,
            patterns: Vec::new(),
            variations: Vec::new(),
            transitions: Vec::new(),
        }
    }

    pub fn pattern(mut self, pattern: NeighborPattern, sprite: SpritePosition) -> Self {
        self.patterns.push((pattern, sprite));
        self
    }

    pub fn variations(mut self, variations: Vec<SpritePosition>) -> Self {
        self.variations = variations;
        self
    }

    pub fn transition(mut self, pattern: NeighborPattern, sprites: [SpritePosition; 2]) -> Self {
        self.transitions.push((pattern, sprites));
        self
    }

    fn sprites(&self) -> impl Iterator<Item = &SpritePosition> {
        std::iter::once(&self.center)
            .chain(self.patterns.iter().map(|(_, s)| s))
            .chain(self.variations.iter())
            .chain(self.transitions.iter().flat_map(|(_, pair)| pair.iter()))
    }
}

/// One rule per terrain type. Built through a function over every
/// `TerrainType`, so no terrain can be left without a rule.
#[derive(Clone, Debug, PartialEq)]
pub struct TileRules {
    rules: [TileRule; TerrainType::COUNT],
}

impl TileRules {
    pub fn from_fn(mut rule_for: impl FnMut(TerrainType) -> TileRule) -> Self {
        Self {
            rules: TerrainType::ALL.map(|t| rule_for(t)),
        }
    }

    /// Rules for the reference atlas.
    pub fn standard() -> Self {
        Self::from_fn(standard_rule)
    }

    pub fn get(&self, terrain: TerrainType) -> &TileRule {
        &self.rules[terrain.index()]
    }

    /// Check every sprite lies inside the atlas.
    pub fn validate(&self) -> Result<(), TerrainError> {
        for terrain in TerrainType::ALL {
            if let Some(sprite) = self.get(terrain).sprites().find(|s| !s.in_atlas()) {
                return Err(TerrainError::InvalidConfig(format!(
                    "{} rule uses sprite {} outside the {}x{} atlas",
                    terrain, sprite, ATLAS_COLUMNS, ATLAS_ROWS
                )));
            }
        }
        Ok(())
    }
}

/// Pattern layout shared by every terrain block: (pattern, column, row offset).
/// The cardinal fill comes first; the exact inner corners still take
/// priority because exact matches are tried before cardinal ones.
const BLOCK_LAYOUT: [(NeighborPattern, u32, u32); 18] = [
    (NeighborPattern::parse("1111XXXX"), 1, 1),
    // Inner corners: one diagonal missing
    (NeighborPattern::parse("11110111"), 4, 0),
    (NeighborPattern::parse("11111011"), 4, 1),
    (NeighborPattern::parse("11111101"), 3, 1),
    (NeighborPattern::parse("11111110"), 3, 0),
    // Edges
    (NeighborPattern::parse("0111XXXX"), 1, 0),
    (NeighborPattern::parse("1011XXXX"), 2, 1),
    (NeighborPattern::parse("1101XXXX"), 1, 2),
    (NeighborPattern::parse("1110XXXX"), 0, 1),
    // Outer corners
    (NeighborPattern::parse("0110XXXX"), 0, 0),
    (NeighborPattern::parse("0011XXXX"), 2, 0),
    (NeighborPattern::parse("1001XXXX"), 2, 2),
    (NeighborPattern::parse("1100XXXX"), 0, 2),
    // Ends
    (NeighborPattern::parse("1000XXXX"), 7, 0),
    (NeighborPattern::parse("0100XXXX"), 7, 1),
    (NeighborPattern::parse("0010XXXX"), 7, 2),
    (NeighborPattern::parse("0001XXXX"), 7, 3),
    // Isolated
    (NeighborPattern::parse("0000XXXX"), 3, 2),
];

/// One-wide strips, open at both ends; each has two equivalent sprites.
const STRIP_LAYOUT: [(NeighborPattern, [(u32, u32); 2]); 2] = [
    (NeighborPattern::parse("1010XXXX"), [(5, 0), (5, 1)]),
    (NeighborPattern::parse("0101XXXX"), [(6, 0), (6, 1)]),
];

/// Build a rule for a terrain block starting at atlas row `origin_row`.
fn block_rule(origin_row: u32, variations: &[(u32, u32)]) -> TileRule {
    let at = |column: u32, row: u32| SpritePosition::new(column, origin_row + row);

    let mut rule = TileRule::new(at(1, 1));
    for (pattern, column, row) in BLOCK_LAYOUT {
        rule = rule.pattern(pattern, at(column, row));
    }
    for (pattern, [(c0, r0), (c1, r1)]) in STRIP_LAYOUT {
        rule = rule.transition(pattern, [at(c0, r0), at(c1, r1)]);
    }
    rule.variations(variations.iter().map(|&(c, r)| at(c, r)).collect())
}

fn standard_rule(terrain: TerrainType) -> TileRule {
    match terrain {
        TerrainType::Grass => block_rule(0, &[(1, 1), (8, 0), (9, 0), (10, 0)]),
        TerrainType::Dirt => block_rule(4, &[]),
        TerrainType::Water => block_rule(8, &[(1, 1), (8, 0), (9, 0)]),
    }
}

// =============================================================================
// RESOLVER
// =============================================================================

/// Which lookup step produced a sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MatchKind {
    Variation,
    Transition,
    Exact,
    Cardinal,
    Center,
}

/// A resolved tile together with how it was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TileChoice {
    pub terrain: TerrainType,
    pub pattern: u8,
    pub sprite: SpritePosition,
    pub kind: MatchKind,
}

pub struct AutotileResolver {
    rules: TileRules,
}

impl AutotileResolver {
    /// Build a resolver, rejecting rules that point outside the atlas.
    pub fn new(rules: TileRules) -> Result<Self, TerrainError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Shared resolver over [`TileRules::standard`], built on first use.
    pub fn standard() -> &'static AutotileResolver {
        static STANDARD: OnceLock<AutotileResolver> = OnceLock::new();
        // The standard layout is fixed and checked by `test_every_terrain_has_rule`
        STANDARD.get_or_init(|| AutotileResolver {
            rules: TileRules::standard(),
        })
    }

    pub fn rules(&self) -> &TileRules {
        &self.rules
    }

    pub fn resolve(&self, grid: &TerrainGrid, x: usize, y: usize) -> Result<SpritePosition, TerrainError> {
        self.explain(grid, x, y).map(|choice| choice.sprite)
    }

    /// Resolve and report which rule step matched.
    pub fn explain(&self, grid: &TerrainGrid, x: usize, y: usize) -> Result<TileChoice, TerrainError> {
        grid.check(x, y)?;

        let terrain = *grid.get(x, y);
        let rule = self.rules.get(terrain);
        let pattern = pattern_at(grid, x, y);
        let (sprite, kind) = select(rule, pattern, x, y);

        Ok(TileChoice { terrain, pattern, sprite, kind })
    }

    /// Resolve every cell. The result is a snapshot; nothing is cached.
    pub fn resolve_all(&self, grid: &TerrainGrid) -> Tilemap<SpritePosition> {
        grid.map(|x, y, &terrain| {
            let pattern = pattern_at(grid, x, y);
            select(self.rules.get(terrain), pattern, x, y).0
        })
    }
}

fn select(rule: &TileRule, pattern: u8, x: usize, y: usize) -> (SpritePosition, MatchKind) {
    if pattern == SURROUNDED && !rule.variations.is_empty() {
        let i = pick(x, y, rule.variations.len());
        return (rule.variations[i], MatchKind::Variation);
    }

    if let Some((_, pair)) = rule.transitions.iter().find(|(p, _)| p.matches_cardinals(pattern)) {
        return (pair[pick(x, y, 2)], MatchKind::Transition);
    }

    if let Some((_, sprite)) = rule.patterns.iter().find(|(p, _)| p.matches_exact(pattern)) {
        return (*sprite, MatchKind::Exact);
    }

    if let Some((_, sprite)) = rule.patterns.iter().find(|(p, _)| p.matches_cardinals(pattern)) {
        return (*sprite, MatchKind::Cardinal);
    }

    (rule.center, MatchKind::Center)
}

/// Resolve with the standard rules.
pub fn resolve(grid: &TerrainGrid, x: usize, y: usize) -> Result<SpritePosition, TerrainError> {
    AutotileResolver::standard().resolve(grid, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::TerrainType::{Dirt, Grass, Water};

    fn grass_grid(w: usize, h: usize) -> TerrainGrid {
        TerrainGrid::new_with(w, h, Grass).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let p = NeighborPattern::parse("10X1XX01");
        assert!(!p.is_exact());
        assert_eq!(p.to_string(), "10X1XX01");
        assert_eq!(NeighborPattern::exact(0b1010_0000).to_string(), "10100000");
    }

    #[test]
    fn test_from_str_rejects_malformed() {
        assert!("1111XXX".parse::<NeighborPattern>().is_err());
        assert!("1111XXX2".parse::<NeighborPattern>().is_err());
        assert_eq!(
            "0110XXXX".parse::<NeighborPattern>().unwrap(),
            NeighborPattern::parse("0110XXXX")
        );
    }

    #[test]
    fn test_cardinal_match_ignores_diagonals() {
        let p = NeighborPattern::parse("11110000");
        assert!(p.matches_cardinals(0b1111_1111));
        assert!(!p.matches_exact(0b1111_1111));
        assert!(p.matches_exact(0b1111_0000));
    }

    #[test]
    fn test_every_terrain_has_rule() {
        let rules = TileRules::standard();
        for terrain in TerrainType::ALL {
            assert!(!rules.get(terrain).patterns.is_empty());
        }
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_sprite_outside_atlas() {
        let rules = TileRules::from_fn(|_| TileRule::new(SpritePosition::new(16, 0)));
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_sample_pattern_edges_do_not_match() {
        let grid = grass_grid(3, 3);
        assert_eq!(sample_pattern(&grid, 1, 1).unwrap(), SURROUNDED);
        // Top-left corner: only right, bottom, bottom-right are on the map
        let p = sample_pattern(&grid, 0, 0).unwrap();
        assert_eq!(p, Neighbor::Right.bit() | Neighbor::Bottom.bit() | Neighbor::BottomRight.bit());
    }

    #[test]
    fn test_sample_pattern_out_of_bounds() {
        let grid = grass_grid(3, 3);
        assert!(matches!(
            sample_pattern(&grid, 3, 0),
            Err(TerrainError::OutOfBounds { x: 3, y: 0, .. })
        ));
        assert!(sample_pattern(&grid, 0, 7).is_err());
    }

    #[test]
    fn test_new_resolver_validates_rules() {
        assert!(AutotileResolver::new(TileRules::standard()).is_ok());

        let rules = TileRules::from_fn(|_| TileRule::new(SpritePosition::new(0, 16)));
        assert!(matches!(
            AutotileResolver::new(rules),
            Err(TerrainError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let rows = vec![
            vec![Grass, Water, Dirt, Grass],
            vec![Dirt, Grass, Grass, Water],
            vec![Water, Grass, Dirt, Dirt],
        ];
        let grid = TerrainGrid::from_rows(rows).unwrap();
        for (x, y, _) in grid.iter() {
            let first = resolve(&grid, x, y).unwrap();
            for _ in 0..100 {
                assert_eq!(resolve(&grid, x, y).unwrap(), first);
            }
        }
    }

    #[test]
    fn test_exact_match_beats_earlier_cardinal_entry() {
        // Center cell sees all cardinals but no top-right neighbor:
        // "1111XXXX" is listed first, yet the exact inner corner wins
        let mut grid = grass_grid(3, 3);
        grid.set(2, 0, Dirt);
        let choice = AutotileResolver::standard().explain(&grid, 1, 1).unwrap();
        assert_eq!(choice.pattern, 0b1111_0111);
        assert_eq!(choice.kind, MatchKind::Exact);
        assert_eq!(choice.sprite, SpritePosition::new(4, 0));
    }

    #[test]
    fn test_cardinal_fallback_when_no_exact() {
        // Two diagonals missing: no exact entry, cardinal fill applies
        let mut grid = grass_grid(3, 3);
        grid.set(2, 0, Dirt);
        grid.set(0, 2, Dirt);
        let choice = AutotileResolver::standard().explain(&grid, 1, 1).unwrap();
        assert_eq!(choice.kind, MatchKind::Cardinal);
        assert_eq!(choice.sprite, SpritePosition::new(1, 1));
    }

    #[test]
    fn test_edge_cell_uses_cardinal_match() {
        let grid = grass_grid(3, 3);
        let choice = AutotileResolver::standard().explain(&grid, 0, 0).unwrap();
        assert_eq!(choice.kind, MatchKind::Cardinal);
        assert_eq!(choice.sprite, SpritePosition::new(0, 0));

        let choice = AutotileResolver::standard().explain(&grid, 2, 2).unwrap();
        assert_eq!(choice.sprite, SpritePosition::new(2, 2));
    }

    #[test]
    fn test_fully_surrounded_picks_variation() {
        let grid = grass_grid(3, 3);
        let rule = AutotileResolver::standard().rules().get(Grass).clone();
        let first = resolve(&grid, 1, 1).unwrap();
        assert!(rule.variations.contains(&first));
        for _ in 0..20 {
            assert_eq!(resolve(&grid, 1, 1).unwrap(), first);
        }
        assert_eq!(first, rule.variations[pick(1, 1, rule.variations.len())]);
    }

    #[test]
    fn test_surrounded_without_variations_uses_fill() {
        let grid = TerrainGrid::new_with(3, 3, Dirt).unwrap();
        assert_eq!(resolve(&grid, 1, 1).unwrap(), SpritePosition::new(1, 5));
    }

    #[test]
    fn test_strip_alternates_by_position() {
        // A vertical grass strip through dirt
        let mut grid = TerrainGrid::new_with(3, 40, Dirt).unwrap();
        for y in 0..40 {
            grid.set(1, y, Grass);
        }
        let pair = [SpritePosition::new(5, 0), SpritePosition::new(5, 1)];
        let mut seen = Vec::new();
        for y in 1..39 {
            let choice = AutotileResolver::standard().explain(&grid, 1, y).unwrap();
            assert_eq!(choice.kind, MatchKind::Transition);
            assert_eq!(choice.sprite, pair[pick(1, y, 2)]);
            seen.push(choice.sprite);
        }
        assert!(seen.contains(&pair[0]));
        assert!(seen.contains(&pair[1]));
    }

    #[test]
    fn test_terrain_blocks_are_offset() {
        let mut grid = TerrainGrid::new_with(3, 3, Dirt).unwrap();
        grid.set(1, 1, Water);
        // Isolated water cell
        assert_eq!(resolve(&grid, 1, 1).unwrap(), SpritePosition::new(3, 10));
    }

    #[test]
    fn test_out_of_bounds_reported() {
        let grid = grass_grid(3, 3);
        assert!(matches!(
            resolve(&grid, 3, 1),
            Err(TerrainError::OutOfBounds { x: 3, y: 1, .. })
        ));
    }

    #[test]
    fn test_resolve_all_matches_single_cells() {
        let rows = vec![
            vec![Grass, Grass, Water, Water],
            vec![Grass, Dirt, Water, Grass],
            vec![Dirt, Dirt, Grass, Grass],
        ];
        let grid = TerrainGrid::from_rows(rows).unwrap();
        let sprites = AutotileResolver::standard().resolve_all(&grid);
        for (x, y, sprite) in sprites.iter() {
            assert_eq!(*sprite, resolve(&grid, x, y).unwrap());
        }
    }

    #[test]
    fn test_positional_hash_range_and_spread() {
        let mut buckets = [0usize; 4];
        for y in 0..32 {
            for x in 0..32 {
                let h = positional_hash(x, y);
                assert!((0.0..1.0).contains(&h));
                assert_eq!(h, positional_hash(x, y));
                buckets[(h * 4.0) as usize] += 1;
            }
        }
        // 1024 samples, each quarter should be well populated
        assert!(buckets.iter().all(|&n| n > 150), "{:?}", buckets);
        assert_ne!(positional_hash(3, 7), positional_hash(7, 3));
    }
}
