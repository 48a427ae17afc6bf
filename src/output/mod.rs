// Output formatting for the terminal.

pub mod terminal;
