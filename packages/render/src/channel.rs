//! # Preview Channel
//!
//! The only link between the editor and the preview frame. The host posts
//! serialized JSON values; the frame answers with load signals. Each direction
//! is an unbounded FIFO, so delivery order equals send order.

use serde_json::Value;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Signal sent by the frame to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// The frame finished loading the document of `generation`
    Loaded { generation: u64 },
}

/// Editor side
#[derive(Debug)]
pub struct HostEnd {
    outbox: UnboundedSender<Value>,
    events: UnboundedReceiver<FrameEvent>,
}

/// Preview side
#[derive(Debug)]
pub struct FrameEnd {
    inbox: UnboundedReceiver<Value>,
    events: UnboundedSender<FrameEvent>,
}

pub fn connect() -> (HostEnd, FrameEnd) {
    let (outbox, inbox) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    (
        HostEnd {
            outbox,
            events: event_rx,
        },
        FrameEnd {
            inbox,
            events: event_tx,
        },
    )
}

impl HostEnd {
    /// Post a value to the frame. Returns false once the frame is gone.
    pub fn post(&self, value: Value) -> bool {
        self.outbox.send(value).is_ok()
    }

    pub fn try_event(&mut self) -> Option<FrameEvent> {
        self.events.try_recv().ok()
    }
}

impl FrameEnd {
    pub fn try_receive(&mut self) -> Option<Value> {
        match self.inbox.try_recv() {
            Ok(value) => Some(value),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drop everything waiting in the inbox; returns how many values were dropped
    pub fn discard_pending(&mut self) -> usize {
        let mut dropped = 0;
        while self.try_receive().is_some() {
            dropped += 1;
        }
        dropped
    }

    pub fn signal(&self, event: FrameEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!("Host is gone, dropping {:?}", event);
        }
    }
}
