pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "*";
}
