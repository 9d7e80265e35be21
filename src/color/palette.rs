//! Fixed tag color palette and ANSI rendering.

/// xterm-256 foreground colors that read well on both dark and light backgrounds.
pub const PALETTE: [u8; 76] = [
    20, 21, 26, 27, 32, 33, 38, 39, 40, 41, 42, 43, 44, 45, 56, 57, 62, 63, 68, 69, 74, 75, 76,
    77, 78, 79, 80, 81, 92, 93, 98, 99, 112, 113, 128, 129, 134, 135, 148, 149, 160, 161, 162,
    163, 164, 165, 166, 167, 168, 169, 170, 171, 172, 173, 178, 179, 184, 185, 196, 197, 198, 199,
    200, 201, 202, 203, 204, 205, 206, 207, 208, 209, 214, 215, 220, 221,
];

const RESET: &str = "\x1b[0m";

/// Wrap `text` in a 256-color foreground sequence.
pub fn colorize(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

/// True when `text` contains any ANSI escape introducer.
pub fn has_escape(text: &str) -> bool {
    text.contains('\x1b')
}
