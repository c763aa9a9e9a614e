//! # Preview Frame
//!
//! The isolated rendering surface. It owns its document and talks to the
//! editor only through a [`FrameEnd`]. Loading is asynchronous: a reload
//! replaces the document at once, but the frame only reports readiness on its
//! next turn, and everything received before that is dropped.

use crate::carousel::Capabilities;
use crate::channel::{FrameEnd, FrameEvent};
use crate::message::Message;
use crate::reconciler::{Applied, Reconciler, RenderOptions};
use crate::render::render_fault_page;
use folio_parser::VirtualDomDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// Nothing loaded yet
    Blank,
    Loading { generation: u64 },
    Ready { generation: u64 },
    /// Showing a fault page instead of the template
    Faulted,
}

pub struct PreviewFrame {
    end: FrameEnd,
    reconciler: Reconciler,
    document: VirtualDomDocument,
    state: FrameState,
    generation: u64,
    scroll_target: Option<String>,
}

impl PreviewFrame {
    pub fn new(end: FrameEnd, options: RenderOptions, capabilities: Capabilities) -> Self {
        Self {
            end,
            reconciler: Reconciler::new(options, capabilities),
            document: VirtualDomDocument::new(),
            state: FrameState::Blank,
            generation: 0,
            scroll_target: None,
        }
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, FrameState::Ready { .. })
    }

    /// The live document, as currently rendered
    pub fn document(&self) -> &VirtualDomDocument {
        &self.document
    }

    /// Id of the section last scrolled to
    pub fn scroll_target(&self) -> Option<&str> {
        self.scroll_target.as_deref()
    }

    pub fn has_carousel_instance(&self) -> bool {
        self.reconciler.has_carousel_instance()
    }

    /// Replace the document with a fresh copy of `base`.
    ///
    /// Prior DOM state is gone. Returns the generation whose load signal the
    /// host has to wait for.
    pub fn reload(&mut self, base: &VirtualDomDocument) -> u64 {
        self.generation += 1;
        let dropped = self.end.discard_pending();
        if dropped > 0 {
            tracing::debug!("Reload dropped {} undelivered messages", dropped);
        }
        self.document = base.clone();
        self.scroll_target = None;
        self.state = FrameState::Loading {
            generation: self.generation,
        };
        self.generation
    }

    /// Show a fault page in place of the preview
    pub fn show_fault(&mut self, headline: &str, detail: &str) {
        tracing::warn!("Preview unavailable: {}: {}", headline, detail);
        self.end.discard_pending();
        self.document = render_fault_page(headline, detail);
        self.scroll_target = None;
        self.state = FrameState::Faulted;
    }

    /// Run one turn of the frame's event loop. Returns whether anything happened.
    pub fn pump(&mut self) -> bool {
        match self.state {
            FrameState::Loading { generation } => {
                let dropped = self.end.discard_pending();
                if dropped > 0 {
                    tracing::debug!("Dropped {} messages received before load", dropped);
                }
                self.reconciler.on_load(&mut self.document);
                self.state = FrameState::Ready { generation };
                self.end.signal(FrameEvent::Loaded { generation });
                true
            }
            FrameState::Ready { .. } => {
                let mut handled = false;
                while let Some(value) = self.end.try_receive() {
                    handled = true;
                    self.receive(value);
                }
                handled
            }
            FrameState::Blank | FrameState::Faulted => self.end.discard_pending() > 0,
        }
    }

    fn receive(&mut self, value: serde_json::Value) {
        let Some(message) = Message::decode(&value) else {
            tracing::debug!("Ignoring malformed message");
            return;
        };
        tracing::debug!("Applying {}", message.kind());

        match self.reconciler.apply(&mut self.document, &message) {
            Applied::Full(report) => tracing::debug!(
                "Rendered {} skills, {} projects, {} testimonials",
                report.skills,
                report.projects,
                report.testimonials
            ),
            Applied::Micro(false) => tracing::debug!("Micro update had no target"),
            Applied::Theme(false) => tracing::debug!("Theme update had no root element"),
            Applied::Scroll(None) => tracing::debug!("No section to scroll to"),
            Applied::Scroll(Some(_)) => {
                if let Message::ScrollToSection(id) = message {
                    self.scroll_target = Some(id);
                }
            }
            Applied::Micro(true) | Applied::Theme(true) => {}
        }
    }
}
