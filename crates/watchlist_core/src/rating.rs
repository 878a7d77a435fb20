/// Reusable star-rating widget model, independent of the search flow.
///
/// `hover` previews a value without committing it; `displayed` is what a
/// renderer should fill in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRating {
    max: u8,
    color: String,
    size: u16,
    messages: Vec<String>,
    rating: u8,
    hover: Option<u8>,
}

impl Default for StarRating {
    fn default() -> Self {
        Self {
            max: 5,
            color: "#fcc419".to_string(),
            size: 48,
            messages: Vec::new(),
            rating: 0,
            hover: None,
        }
    }
}

impl StarRating {
    /// A zero `max` is bumped to one so the widget always has a star to show.
    pub fn new(max: u8, color: impl Into<String>, size: u16) -> Self {
        Self {
            max: max.max(1),
            color: color.into(),
            size,
            ..Self::default()
        }
    }

    /// Per-star labels; only used when there is exactly one per star.
    pub fn with_messages(mut self, messages: Vec<String>) -> Self {
        self.messages = messages;
        self
    }

    /// Starting rating, clamped to `0..=max`.
    pub fn with_default_rating(mut self, rating: u8) -> Self {
        self.rating = rating.min(self.max);
        self
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn hovered(&self) -> Option<u8> {
        self.hover
    }

    pub fn rate(&mut self, stars: u8) {
        self.rating = stars.clamp(1, self.max);
    }

    pub fn hover(&mut self, stars: u8) {
        self.hover = Some(stars.min(self.max));
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    pub fn displayed(&self) -> u8 {
        self.hover.unwrap_or(self.rating)
    }

    /// The message for the displayed star, or the plain number; empty at zero.
    pub fn label(&self) -> String {
        let shown = self.displayed();
        if shown == 0 {
            return String::new();
        }
        if self.messages.len() == usize::from(self.max) {
            return self.messages[usize::from(shown) - 1].clone();
        }
        shown.to_string()
    }
}
