use glam::Vec2;

/// What a ball is for in 8-ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BallKind {
    Cue,
    Solid,
    Stripe,
    Eight,
}

impl BallKind {
    /// Kind of the ball with this number in a standard set
    pub fn for_number(number: u8) -> Self {
        match number {
            0 => BallKind::Cue,
            8 => BallKind::Eight,
            1..=7 => BallKind::Solid,
            _ => BallKind::Stripe,
        }
    }

    /// Group a player must own to claim this ball, if any
    pub fn group(self) -> Option<Group> {
        match self {
            BallKind::Solid => Some(Group::Solids),
            BallKind::Stripe => Some(Group::Stripes),
            BallKind::Cue | BallKind::Eight => None,
        }
    }
}

/// 8-bit RGB color, for the renderer only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BallColor {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const YELLOW: Self = Self::rgb(253, 249, 0);
    pub const BLUE: Self = Self::rgb(0, 121, 241);
    pub const RED: Self = Self::rgb(230, 41, 55);
    pub const PURPLE: Self = Self::rgb(200, 122, 255);
    pub const ORANGE: Self = Self::rgb(255, 161, 0);
    pub const SKY_BLUE: Self = Self::rgb(102, 191, 255);
    pub const MAROON: Self = Self::rgb(190, 33, 55);

    // Solids 1-7 and stripes 9-15 share this palette
    const GROUP_PALETTE: [Self; 7] = [
        Self::YELLOW,
        Self::BLUE,
        Self::RED,
        Self::PURPLE,
        Self::ORANGE,
        Self::SKY_BLUE,
        Self::MAROON,
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn for_number(number: u8) -> Self {
        match number {
            0 => Self::WHITE,
            8 => Self::BLACK,
            1..=7 => Self::GROUP_PALETTE[(number - 1) as usize],
            _ => Self::GROUP_PALETTE[(number.saturating_sub(9) as usize).min(6)],
        }
    }
}

/// Ball component - one of the sixteen pool balls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: BallColor,
    pub kind: BallKind,
    pub number: u8,
    pub pocketed: bool,
    pub striped: bool,
}

impl Ball {
    pub fn new(number: u8, kind: BallKind, pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            color: BallColor::for_number(number),
            kind,
            number,
            pocketed: false,
            striped: kind == BallKind::Stripe,
        }
    }

    pub fn is_cue(&self) -> bool {
        self.kind == BallKind::Cue
    }
}

/// Object-ball group a player has claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Group {
    #[default]
    None,
    Solids,
    Stripes,
}

impl Group {
    pub fn opposite(self) -> Self {
        match self {
            Group::Solids => Group::Stripes,
            Group::Stripes => Group::Solids,
            Group::None => Group::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Group::None => "Open",
            Group::Solids => "Solids",
            Group::Stripes => "Stripes",
        }
    }
}

/// One of the two players at the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub group: Group,
    pub balls_remaining: u8,
}

impl Player {
    pub fn new(name: impl Into<String>, balls_remaining: u8) -> Self {
        Self {
            name: name.into(),
            group: Group::None,
            balls_remaining,
        }
    }

    /// Count one of this player's balls as pocketed, never going below zero
    pub fn pocket_one(&mut self) {
        self.balls_remaining = self.balls_remaining.saturating_sub(1);
    }

    pub fn has_cleared_group(&self) -> bool {
        self.balls_remaining == 0
    }
}
