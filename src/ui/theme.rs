use crossterm::style::Color;

pub struct Theme {
    pub one: Color,       // Orange
    pub zero: Color,      // Grey
    pub separator: Color, // Grey
}

pub const DEFAULT_THEME: Theme = Theme {
    one: Color::Rgb {
        r: 250,
        g: 179,
        b: 135,
    },
    zero: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    },
    separator: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    },
};
