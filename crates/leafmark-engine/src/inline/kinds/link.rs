/// Link inline type `[text](url)` with owned syntax constants.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: char = '[';
    pub const TEXT_CLOSE: char = ']';
    pub const URL_OPEN: char = '(';
    pub const URL_CLOSE: char = ')';
}
