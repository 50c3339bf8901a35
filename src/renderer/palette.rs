/// Named display colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Cyan,
    Brown,
    Tan,
    White,
}

impl Color {
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Cyan => "cyan",
            Color::Brown => "brown",
            Color::Tan => "tan",
            Color::White => "white",
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Color::Black => [0, 0, 0],
            Color::Blue => [0, 0, 255],
            Color::Red => [255, 0, 0],
            Color::Green => [0, 255, 0],
            Color::Yellow => [255, 255, 0],
            Color::Purple => [160, 32, 240],
            Color::Cyan => [0, 255, 255],
            Color::Brown => [165, 42, 42],
            Color::Tan => [210, 180, 140],
            Color::White => [255, 255, 255],
        }
    }
}

/// Cluster colors, cycled by cluster index
pub const PALETTE: [Color; 9] = [
    Color::Black,
    Color::Blue,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Purple,
    Color::Cyan,
    Color::Brown,
    Color::Tan,
];

/// Palette entry for a cluster index; any index resolves
pub fn color_for(cluster: u64) -> Color {
    PALETTE[(cluster % PALETTE.len() as u64) as usize]
}
