/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct CombatConfig {
    /// Real-time length of one game tick, used to convert damage per attack
    /// into damage per second.
    pub seconds_per_tick: f64,

    /// Attack speed (ticks) of the synthetic unarmed weapon.
    pub unarmed_speed: u32,

    /// Attack speed (ticks) of every spell cast, regardless of the weapon.
    pub spell_cast_speed: u32,
}

impl CombatConfig {
    // ===== compile-time constants =====
    /// Number of equipment slots an actor has.
    pub const SLOT_COUNT: usize = 11;
    /// Number of bonus channels in a bonus vector.
    pub const BONUS_CHANNELS: usize = 14;
    /// Added to effective defence levels before the defend roll.
    pub const DEFENCE_LEVEL_OFFSET: i32 = 9;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SECONDS_PER_TICK: f64 = 0.6;
    pub const DEFAULT_UNARMED_SPEED: u32 = 4;
    pub const DEFAULT_SPELL_CAST_SPEED: u32 = 5;

    pub fn new() -> Self {
        Self {
            seconds_per_tick: Self::DEFAULT_SECONDS_PER_TICK,
            unarmed_speed: Self::DEFAULT_UNARMED_SPEED,
            spell_cast_speed: Self::DEFAULT_SPELL_CAST_SPEED,
        }
    }

    pub fn with_seconds_per_tick(mut self, seconds_per_tick: f64) -> Self {
        self.seconds_per_tick = seconds_per_tick;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
