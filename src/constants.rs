// Grid dimensions
pub const GRID_WIDTH: usize = 8;
pub const GRID_HEIGHT: usize = 8;

// Adventurer energy
pub const INITIAL_ENERGY: i32 = 40;
pub const MAX_ENERGY: i32 = 40;
pub const STEP_ENERGY_COST: i32 = 1;

// Economy
pub const INITIAL_RENT: u32 = 30;
pub const RENT_INCREMENT: u32 = 10;
pub const RENT_FREQUENCY: u32 = 4;
pub const VICTORY_TARGET: u32 = 50;

// Multiplier, tracked as integer tenths to keep decimal steps exact
pub const INITIAL_MULTIPLIER_TENTHS: u32 = 10;
pub const CONTINUE_MULTIPLIER_BONUS_TENTHS: u32 = 1;

// Gold placement
pub const GOLD_VALUE_MIN: u32 = 5;
pub const GOLD_VALUE_MAX: u32 = 10;
pub const MIN_GOLD_DISTANCE: u32 = 3;
pub const GOLD_DISTANCE_JITTER: u32 = 2;
pub const GOLD_PLACEMENT_MAX_ATTEMPTS: u32 = 100;
pub const RELAXED_GOLD_DISTANCE: u32 = 2;

// Wall placement
pub const WALL_COUNT_MIN: u32 = 8;
pub const WALL_COUNT_MAX: u32 = 15;

// Pills
pub const PILL_COUNT: usize = 5;
pub const PILL_HEAL_AMOUNT: i32 = 3;

// Enemies
pub const ENEMY_COUNT: usize = 10;
pub const FIRE_DAMAGE: i32 = 3;
pub const MELEE_DAMAGE: i32 = 2;
pub const BOSS_DAMAGE: i32 = 8;

// Scanning cards
pub const CARD_COUNT_MIN: u32 = 1;
pub const CARD_COUNT_MAX: u32 = 3;
pub const CARD_ABILITY_CHANCE: f64 = 0.6;

// Crystal ball reveal thresholds: predictions needed per area size
pub const REVEAL_THRESHOLD_2X2: u32 = 3;
pub const REVEAL_THRESHOLD_3X3: u32 = 6;
pub const REVEAL_THRESHOLD_4X4: u32 = 9;
