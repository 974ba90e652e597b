/// Bold inline type with owned delimiter constant.
///
/// Shares the `*` family with [`super::Italic`], so bold must be split first:
/// otherwise the single `*` would match inside every `**`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}
