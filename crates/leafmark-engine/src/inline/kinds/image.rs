/// Image inline type `![alt](url)`: a [`super::Link`] behind a bang.
pub struct Image;

impl Image {
    pub const BANG: char = '!';
}
