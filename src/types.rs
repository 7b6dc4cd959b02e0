//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Container capacities
pub const QUEUE_CAPACITY: usize = 5;
pub const RESERVE_CAPACITY: usize = 3;

/// Depth exchanged by the triple swap action
pub const TRIPLE_SWAP_DEPTH: usize = 3;

/// Piece kinds (the fixed 7-symbol alphabet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    S,
    Z,
    J,
}

/// All kinds in a fixed order, used by the generator's uniform draw
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::L,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
];

impl PieceKind {
    /// Parse piece kind from its one-character label (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            _ => None,
        }
    }

    /// One-character label
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
        }
    }
}

/// An opaque game piece: a kind label plus a process-unique id.
///
/// Pieces are created only by the generator, never mutated, and always
/// copied by value when they move between containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

/// Session actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Play,
    Reserve,
    UseReserved,
    SwapTop,
    SwapTriple,
}

impl SessionAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(SessionAction::Play),
            "reserve" => Some(SessionAction::Reserve),
            "usereserved" | "use" => Some(SessionAction::UseReserved),
            "swaptop" | "swap" => Some(SessionAction::SwapTop),
            "swaptriple" => Some(SessionAction::SwapTriple),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::Play => "play",
            SessionAction::Reserve => "reserve",
            SessionAction::UseReserved => "useReserved",
            SessionAction::SwapTop => "swapTop",
            SessionAction::SwapTriple => "swapTriple",
        }
    }
}
