//! # Projector
//!
//! Host side of the preview channel. Messages are held back until the frame
//! reports that the load we are waiting for has completed; each reload starts
//! a fresh queue.

use folio_render::{FrameEvent, HostEnd, Message};
use std::collections::VecDeque;

pub struct Projector {
    host: HostEnd,
    /// Load generation the queue belongs to
    generation: u64,
    ready: bool,
    queue: VecDeque<Message>,
    posted: usize,
}

impl Projector {
    pub fn new(host: HostEnd) -> Self {
        Self {
            host,
            generation: 0,
            ready: false,
            queue: VecDeque::new(),
            posted: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Total messages handed to the channel
    pub fn posted(&self) -> usize {
        self.posted
    }

    /// The frame started loading `generation`; anything queued for the
    /// previous load is dropped.
    pub fn begin_reload(&mut self, generation: u64) {
        if !self.queue.is_empty() {
            tracing::debug!(
                "Dropping {} messages queued for load {}",
                self.queue.len(),
                self.generation
            );
        }
        self.queue.clear();
        self.generation = generation;
        self.ready = false;
    }

    /// Queue a message; it is posted as soon as the current load completes
    pub fn post(&mut self, message: Message) {
        self.queue.push_back(message);
        if self.ready {
            self.flush();
        }
    }

    /// Observe load signals and flush. Returns how many messages went out.
    pub fn poll(&mut self) -> usize {
        while let Some(event) = self.host.try_event() {
            match event {
                FrameEvent::Loaded { generation } if generation == self.generation => {
                    self.ready = true;
                }
                FrameEvent::Loaded { generation } => {
                    tracing::debug!(
                        "Ignoring stale load signal {} (waiting for {})",
                        generation,
                        self.generation
                    );
                }
            }
        }

        if self.ready {
            self.flush()
        } else {
            0
        }
    }

    fn flush(&mut self) -> usize {
        let mut sent = 0;
        while let Some(message) = self.queue.pop_front() {
            tracing::debug!("Posting {}", message.kind());
            if !self.host.post(message.encode()) {
                tracing::debug!("Preview channel closed");
                self.queue.clear();
                break;
            }
            sent += 1;
        }
        self.posted += sent;
        sent
    }
}
