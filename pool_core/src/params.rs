/// Game tuning parameters for 8-ball pool.
///
/// Every value is tuned per tick at `TICK_RATE`; nothing is scaled by frame time.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table
    pub const TABLE_WIDTH: f32 = 800.0;
    pub const TABLE_HEIGHT: f32 = 400.0;
    pub const RAIL_WIDTH: f32 = 40.0;
    pub const POCKET_RADIUS: f32 = 28.0;

    // Balls
    pub const BALL_COUNT: usize = 16;
    pub const BALLS_PER_GROUP: u8 = 7;
    pub const BALL_RADIUS: f32 = 15.0;

    // Physics
    pub const FRICTION: f32 = 0.985; // velocity multiplier per tick
    pub const MIN_VELOCITY: f32 = 0.06; // per component
    pub const MAX_BALL_SPEED: f32 = 26.0;
    pub const RAIL_RESTITUTION: f32 = 0.86;
    pub const COLLISION_EPSILON: f32 = 0.0001;
    pub const SEPARATION_BUFFER: f32 = 0.001;

    // Shot power
    pub const MAX_POWER_PIXELS: f32 = 160.0;
    pub const MAX_SHOT_SPEED: f32 = 22.0;
    pub const SHOT_EPSILON: f32 = 0.001;
    pub const CUE_GRAB_FACTOR: f32 = 1.6; // multiple of ball radius

    // Stick
    pub const STICK_LENGTH: f32 = 120.0;
    pub const STICK_RECOIL_TIME: f32 = 0.12; // seconds
    pub const STICK_RECOIL_DECAY: f32 = 0.92;

    // Layout, as fractions of the table size
    pub const CUE_SPOT: (f32, f32) = (0.25, 0.5);
    pub const RACK_APEX: (f32, f32) = (0.72, 0.5);
    pub const RACK_ROW_SPACING: f32 = 0.88; // of a ball diameter

    // Loop
    pub const TICK_RATE: u32 = 60;
}
