//! Menu entries and number parsing.

pub const MENU: &str = "1. View Products\n2. Buy Product\n3. View Cart\n4. Checkout\n5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProducts,
    BuyProduct,
    ViewCart,
    Checkout,
    Exit,
}

impl MenuChoice {
    /// Maps the number typed at the prompt to a menu entry.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::ViewProducts),
            2 => Some(MenuChoice::BuyProduct),
            3 => Some(MenuChoice::ViewCart),
            4 => Some(MenuChoice::Checkout),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Parses one line of input as a whole number, ignoring surrounding
/// whitespace.
pub fn parse_number(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}
