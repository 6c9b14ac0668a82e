/// Per-viewer navigation state
///
/// Each slider and the lightbox own their position; event handlers get
/// the instance they act on instead of touching shared globals.

/// Position within a card's screenshot slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    len: usize,
    current: usize,
}

impl Slider {
    /// A slider over `len` slides, starting at the first
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance one slide; stays put on the last one
    pub fn next(&mut self) {
        if self.current + 1 < self.len {
            self.current += 1;
        }
    }

    /// Go back one slide; stays put on the first one
    pub fn prev(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Jump straight to a slide. Out-of-range indices are ignored.
    pub fn goto(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.len
    }

    /// Prev/next buttons, dots and the counter only make sense with several slides
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// "k / N", one-based
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current + 1, self.len)
    }
}

/// What a finished press-drag-release amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Next,
    Prev,
    /// Moved less than the threshold: treat as a click
    Tap,
}

/// Horizontal swipe tracking for one slider
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeGesture {
    start_x: Option<f32>,
    last_x: f32,
}

impl SwipeGesture {
    /// Pointer went down at `x`
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = x;
    }

    /// Pointer went down where it was last tracked
    pub fn press(&mut self) {
        self.begin(self.last_x);
    }

    /// Latest pointer position
    pub fn track(&mut self, x: f32) {
        self.last_x = x;
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    /// Pointer released. Dragging left (start > end) by more than
    /// `threshold` means next, dragging right means previous.
    /// Returns `None` when no press was in progress.
    pub fn finish(&mut self, threshold: f32) -> Option<Gesture> {
        let start = self.start_x.take()?;
        let diff = start - self.last_x;

        Some(if diff.abs() > threshold {
            if diff > 0.0 {
                Gesture::Next
            } else {
                Gesture::Prev
            }
        } else {
            Gesture::Tap
        })
    }

    /// Pointer left the slider mid-drag
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

/// Full-size image overlay
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lightbox {
    images: Vec<String>,
    current: usize,
}

impl Lightbox {
    /// Open on `src` within `all`. An empty `all` shows `src` alone; a
    /// `src` missing from `all` opens on the first image.
    pub fn open(&mut self, src: &str, all: &[String]) {
        self.images = if all.is_empty() {
            vec![src.to_string()]
        } else {
            all.to_vec()
        };
        self.current = self.images.iter().position(|s| s == src).unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.images.clear();
        self.current = 0;
    }

    pub fn is_open(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn current_src(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn prev(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.images.len() {
            self.current += 1;
        }
    }

    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.images.len()
    }

    pub fn counter(&self) -> String {
        format!("{} / {}", self.current + 1, self.images.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_slider_clamps_at_bounds() {
        let mut slider = Slider::new(3);
        assert_eq!(slider.current(), 0);
        assert!(slider.is_first());

        slider.prev();
        assert_eq!(slider.current(), 0);

        slider.next();
        slider.next();
        slider.next();
        assert_eq!(slider.current(), 2);
        assert!(slider.is_last());
        assert_eq!(slider.counter(), "3 / 3");
    }

    #[test]
    fn test_slider_goto() {
        let mut slider = Slider::new(4);
        slider.goto(2);
        assert_eq!(slider.current(), 2);

        slider.goto(9);
        assert_eq!(slider.current(), 2);
    }

    #[test]
    fn test_single_slide_has_no_controls() {
        let slider = Slider::new(1);
        assert!(!slider.has_controls());
        assert!(slider.is_first() && slider.is_last());
    }

    #[test]
    fn test_swipe_left_is_next() {
        let mut swipe = SwipeGesture::default();
        swipe.begin(300.0);
        swipe.track(200.0);
        assert_eq!(swipe.finish(50.0), Some(Gesture::Next));
        assert!(!swipe.is_active());
    }

    #[test]
    fn test_swipe_right_is_prev() {
        let mut swipe = SwipeGesture::default();
        swipe.begin(100.0);
        swipe.track(151.0);
        assert_eq!(swipe.finish(50.0), Some(Gesture::Prev));
    }

    #[test]
    fn test_short_drag_is_tap() {
        let mut swipe = SwipeGesture::default();
        swipe.begin(100.0);
        swipe.track(150.0);
        assert_eq!(swipe.finish(50.0), Some(Gesture::Tap));
    }

    #[test]
    fn test_press_starts_at_tracked_position() {
        let mut swipe = SwipeGesture::default();
        swipe.track(240.0);
        swipe.press();
        assert!(swipe.is_active());

        swipe.track(120.0);
        assert_eq!(swipe.finish(50.0), Some(Gesture::Next));
    }

    #[test]
    fn test_release_without_press() {
        let mut swipe = SwipeGesture::default();
        assert_eq!(swipe.finish(50.0), None);

        swipe.begin(10.0);
        swipe.cancel();
        assert_eq!(swipe.finish(50.0), None);
    }

    #[test]
    fn test_lightbox_opens_on_clicked_image() {
        let mut lightbox = Lightbox::default();
        lightbox.open("b.png", &images(&["a.png", "b.png", "c.png"]));

        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_src(), Some("b.png"));
        assert_eq!(lightbox.counter(), "2 / 3");

        lightbox.next();
        lightbox.next();
        assert_eq!(lightbox.current_src(), Some("c.png"));

        lightbox.close();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current_src(), None);
    }

    #[test]
    fn test_lightbox_unknown_src_starts_at_first() {
        let mut lightbox = Lightbox::default();
        lightbox.open("zzz.png", &images(&["a.png", "b.png"]));
        assert_eq!(lightbox.current(), 0);

        lightbox.prev();
        assert_eq!(lightbox.current_src(), Some("a.png"));
    }

    #[test]
    fn test_lightbox_single_image() {
        let mut lightbox = Lightbox::default();
        lightbox.open("only.png", &[]);
        assert_eq!(lightbox.counter(), "1 / 1");
        assert!(!lightbox.has_navigation());
    }
}
