//! Render side of the live preview: the portfolio data model, the projection
//! message codec, and everything the preview frame does with a message once it
//! arrives.

pub mod bindings;
pub mod carousel;
pub mod channel;
pub mod frame;
pub mod message;
pub mod model;
pub mod reconciler;
pub mod render;
pub mod selector;

pub use carousel::{
    Capabilities, CapabilityError, CarouselEvent, CarouselInstance, CarouselMode, CarouselOptions,
    CarouselProvider, HeadlessCarousel, ScrollAnimator,
};
pub use channel::{connect, FrameEnd, FrameEvent, HostEnd};
pub use frame::{FrameState, PreviewFrame};
pub use message::Message;
pub use model::{PortfolioData, Project, Record, ScalarField, Section, SkillGroup, Testimonial};
pub use reconciler::{Applied, FullUpdateReport, Reconciler, RenderOptions};
pub use selector::{QueryExt, Selector, Simple};
