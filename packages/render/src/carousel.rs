//! # Optional Capabilities
//!
//! The preview can use a scroll-animation library and a carousel library when
//! the host provides them. Either may be missing or fail; failures are logged
//! at this boundary and never reach the data flow.

use folio_parser::VNode;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("{0} is not available")]
    Unavailable(&'static str),

    #[error("{name} failed: {message}")]
    Failed { name: &'static str, message: String },
}

/// Scroll-triggered animation library
pub trait ScrollAnimator {
    fn init(&mut self) -> Result<(), CapabilityError>;

    /// Re-scan the page after content changed
    fn refresh(&mut self) -> Result<(), CapabilityError>;
}

/// Live carousel bound to the testimonial slides
pub trait CarouselInstance {
    fn update(&mut self, slides: usize) -> Result<(), CapabilityError>;

    fn destroy(self: Box<Self>);
}

pub trait CarouselProvider {
    fn create(
        &self,
        options: &CarouselOptions,
        slides: usize,
    ) -> Result<Box<dyn CarouselInstance>, CapabilityError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub min_width: u32,
    pub slides_per_view: u32,
    pub space_between: u32,
}

/// Settings a new carousel instance is created with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselOptions {
    pub auto_height: bool,
    pub loop_slides: bool,
    pub centered_slides: bool,
    pub pagination: &'static str,
    pub next_button: &'static str,
    pub prev_button: &'static str,
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            auto_height: true,
            loop_slides: true,
            centered_slides: true,
            pagination: ".swiper-pagination",
            next_button: ".swiper-button-next",
            prev_button: ".swiper-button-prev",
            breakpoints: vec![
                Breakpoint {
                    min_width: 320,
                    slides_per_view: 1,
                    space_between: 20,
                },
                Breakpoint {
                    min_width: 992,
                    slides_per_view: 2,
                    space_between: 30,
                },
            ],
        }
    }
}

/// Capability providers handed to a preview frame
#[derive(Default)]
pub struct Capabilities {
    pub animator: Option<Box<dyn ScrollAnimator>>,
    pub carousel: Option<Box<dyn CarouselProvider>>,
}

impl Capabilities {
    /// No animation, no carousel
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_animator(mut self, animator: impl ScrollAnimator + 'static) -> Self {
        self.animator = Some(Box::new(animator));
        self
    }

    pub fn with_carousel(mut self, provider: impl CarouselProvider + 'static) -> Self {
        self.carousel = Some(Box::new(provider));
        self
    }
}

/// Display mode of the testimonial section after a sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMode {
    /// More than one slide: `active` class set
    Active,
    /// Zero or one slide: plain static display
    Static,
}

pub const ACTIVE_CLASS: &str = "active";

/// Owns at most one carousel instance
pub struct Carousel {
    provider: Option<Box<dyn CarouselProvider>>,
    options: CarouselOptions,
    instance: Option<Box<dyn CarouselInstance>>,
}

impl Carousel {
    pub fn new(provider: Option<Box<dyn CarouselProvider>>) -> Self {
        Self {
            provider,
            options: CarouselOptions::default(),
            instance: None,
        }
    }

    pub fn has_instance(&self) -> bool {
        self.instance.is_some()
    }

    /// Tear down the instance bound to the previous page
    pub fn reset(&mut self) {
        if let Some(instance) = self.instance.take() {
            instance.destroy();
        }
    }

    /// Bring the carousel in line with the current slide count
    pub fn sync(&mut self, root: &mut VNode, slides: usize) -> CarouselMode {
        if slides <= 1 {
            root.remove_class(ACTIVE_CLASS);
            if let Some(instance) = self.instance.take() {
                instance.destroy();
            }
            return CarouselMode::Static;
        }

        root.add_class(ACTIVE_CLASS);
        if let Some(instance) = self.instance.as_mut() {
            if let Err(err) = instance.update(slides) {
                tracing::warn!("Carousel update failed: {}", err);
            }
        } else if let Some(provider) = &self.provider {
            match provider.create(&self.options, slides) {
                Ok(instance) => self.instance = Some(instance),
                Err(err) => tracing::warn!("Carousel library failed to initialize: {}", err),
            }
        } else {
            tracing::debug!("No carousel library, {} slides shown as a list", slides);
        }
        CarouselMode::Active
    }
}

/// Lifecycle event recorded by [`HeadlessCarousel`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselEvent {
    Created { slides: usize },
    Updated { slides: usize },
    Destroyed,
}

/// Carousel provider without a display; records what happens to its instances
#[derive(Debug, Clone, Default)]
pub struct HeadlessCarousel {
    events: Rc<RefCell<Vec<CarouselEvent>>>,
}

impl HeadlessCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CarouselEvent> {
        self.events.borrow().clone()
    }

    /// Instances created and not yet destroyed
    pub fn live_instances(&self) -> usize {
        self.events.borrow().iter().fold(0usize, |live, event| match event {
            CarouselEvent::Created { .. } => live + 1,
            CarouselEvent::Destroyed => live.saturating_sub(1),
            CarouselEvent::Updated { .. } => live,
        })
    }
}

struct HeadlessInstance {
    events: Rc<RefCell<Vec<CarouselEvent>>>,
}

impl CarouselInstance for HeadlessInstance {
    fn update(&mut self, slides: usize) -> Result<(), CapabilityError> {
        self.events.borrow_mut().push(CarouselEvent::Updated { slides });
        Ok(())
    }

    fn destroy(self: Box<Self>) {
        self.events.borrow_mut().push(CarouselEvent::Destroyed);
    }
}

impl CarouselProvider for HeadlessCarousel {
    fn create(
        &self,
        _options: &CarouselOptions,
        slides: usize,
    ) -> Result<Box<dyn CarouselInstance>, CapabilityError> {
        self.events.borrow_mut().push(CarouselEvent::Created { slides });
        Ok(Box::new(HeadlessInstance {
            events: Rc::clone(&self.events),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenProvider;

    impl CarouselProvider for BrokenProvider {
        fn create(
            &self,
            _options: &CarouselOptions,
            _slides: usize,
        ) -> Result<Box<dyn CarouselInstance>, CapabilityError> {
            Err(CapabilityError::Unavailable("Swiper"))
        }
    }

    fn root() -> VNode {
        VNode::element("div").with_class("swiper testimonial-swiper")
    }

    #[test]
    fn test_never_two_instances() {
        let headless = HeadlessCarousel::new();
        let mut carousel = Carousel::new(Some(Box::new(headless.clone())));
        let mut node = root();

        assert_eq!(carousel.sync(&mut node, 3), CarouselMode::Active);
        assert_eq!(carousel.sync(&mut node, 4), CarouselMode::Active);
        assert_eq!(headless.live_instances(), 1);
        assert_eq!(
            headless.events(),
            vec![CarouselEvent::Created { slides: 3 }, CarouselEvent::Updated { slides: 4 }]
        );
        assert!(node.has_class(ACTIVE_CLASS));
    }

    #[test]
    fn test_degrades_to_static() {
        let headless = HeadlessCarousel::new();
        let mut carousel = Carousel::new(Some(Box::new(headless.clone())));
        let mut node = root();

        carousel.sync(&mut node, 2);
        assert_eq!(carousel.sync(&mut node, 1), CarouselMode::Static);

        assert!(!node.has_class(ACTIVE_CLASS));
        assert!(!carousel.has_instance());
        assert_eq!(headless.live_instances(), 0);
        assert_eq!(node.attr("class"), Some("swiper testimonial-swiper"));
    }

    #[test]
    fn test_failing_provider_still_activates_markup() {
        let mut carousel = Carousel::new(Some(Box::new(BrokenProvider)));
        let mut node = root();

        assert_eq!(carousel.sync(&mut node, 2), CarouselMode::Active);
        assert!(!carousel.has_instance());
        assert!(node.has_class(ACTIVE_CLASS));
    }

    #[test]
    fn test_missing_provider() {
        let mut carousel = Carousel::new(None);
        let mut node = root();
        assert_eq!(carousel.sync(&mut node, 5), CarouselMode::Active);
        assert!(!carousel.has_instance());
    }

    #[test]
    fn test_reset_destroys_instance() {
        let headless = HeadlessCarousel::new();
        let mut carousel = Carousel::new(Some(Box::new(headless.clone())));
        let mut node = root();

        carousel.sync(&mut node, 2);
        carousel.reset();
        assert!(!carousel.has_instance());
        assert_eq!(headless.live_instances(), 0);

        carousel.sync(&mut node, 2);
        carousel.reset();
        carousel.reset();

        assert_eq!(
            headless.events(),
            vec![
                CarouselEvent::Created { slides: 2 },
                CarouselEvent::Destroyed,
                CarouselEvent::Created { slides: 2 },
                CarouselEvent::Destroyed,
            ]
        );
    }
}
