//! Turning messages into Gammu outbox rows.
//!
//! The first part of a message goes to `outbox` and supplies the generated
//! `ID`; every further part goes to `outbox_multipart` keyed on that id and
//! its 1-based `SequencePosition`. All rows of one message are written in a
//! single transaction.

use chrono::{Local, NaiveDateTime};
use crate::errors::{InjectError, Result};
use crate::models::{NewOutbox, NewOutboxMultipart, CODING_NO_COMPRESSION};
use crate::segment::{self, MAX_PARTS};
use crate::store::OutboxStore;
use crate::udh::{ConcatHeader, RandomReference, ReferenceSource};

/// Class 0: shown immediately, not stored by the handset.
pub const CLASS_FLASH: i32 = 0;
/// Class 1: normal, stored message.
pub const CLASS_NORMAL: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub destination: String,
    pub body: String,
    pub priority: i32,
    pub is_flash: bool
}
impl Message {
    pub fn new<D: Into<String>, B: Into<String>>(destination: D, body: B) -> Self {
        Message {
            destination: destination.into(),
            body: body.into(),
            priority: 0,
            is_flash: false
        }
    }
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
    pub fn flash(mut self, is_flash: bool) -> Self {
        self.is_flash = is_flash;
        self
    }
    pub fn class(&self) -> i32 {
        if self.is_flash { CLASS_FLASH } else { CLASS_NORMAL }
    }
}

/// One physical SMS worth of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub position: usize,
    pub text: &'a str,
    pub header: Option<ConcatHeader>,
    /// Outbox id of the first part; known only once that row is written.
    pub linked_primary_id: Option<i32>
}
impl<'a> Segment<'a> {
    pub fn is_primary(&self) -> bool {
        self.position == 1
    }
    pub fn udh(&self) -> String {
        self.header.map(|h| h.to_string()).unwrap_or_default()
    }
}

/// Splits `body` and attaches headers. A reference is drawn from `refs` only
/// when more than one part is needed.
pub fn build_segments<'a, R: ReferenceSource>(body: &'a str, refs: &mut R) -> Result<Vec<Segment<'a>>> {
    let total = segment::part_count(body);
    if total > MAX_PARTS {
        return Err(InjectError::TooManyParts { parts: total, max: MAX_PARTS });
    }
    let parts = segment::segment(body);
    let reference = if total > 1 { Some(refs.next_reference()) } else { None };
    let ret = parts.into_iter()
        .enumerate()
        .map(|(i, text)| Segment {
            position: i + 1,
            text,
            header: reference.map(|r| ConcatHeader::new(r, total as u8, (i + 1) as u8)),
            linked_primary_id: None
        })
        .collect();
    Ok(ret)
}

/// Where a single send got to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Segmenting,
    WritingPrimary,
    WritingContinuation(usize),
    Done,
    Failed
}

pub struct Injector<R = RandomReference> {
    creator_id: String,
    refs: R,
    state: SendState
}
impl Injector<RandomReference> {
    pub fn new<S: Into<String>>(creator_id: S) -> Self {
        Injector::with_references(creator_id, RandomReference)
    }
}
impl<R: ReferenceSource> Injector<R> {
    pub fn with_references<S: Into<String>>(creator_id: S, refs: R) -> Self {
        Injector {
            creator_id: creator_id.into(),
            refs,
            state: SendState::Idle
        }
    }
    /// State reached by the most recent send.
    pub fn state(&self) -> SendState {
        self.state
    }
    /// Queues `body` for `destination`, stamped with the current local time.
    ///
    /// Returns the outbox id of the first part.
    pub fn send<S: OutboxStore>(&mut self, store: &S, destination: &str, body: &str, priority: i32, is_flash: bool) -> Result<i32> {
        let msg = Message::new(destination, body)
            .priority(priority)
            .flash(is_flash);
        self.send_at(store, &msg, Local::now().naive_local())
    }
    /// Like `send`, with an explicit insertion/sending time.
    pub fn send_at<S: OutboxStore>(&mut self, store: &S, msg: &Message, now: NaiveDateTime) -> Result<i32> {
        self.state = SendState::Segmenting;
        let segments = match build_segments(msg.body.trim(), &mut self.refs) {
            Ok(s) => s,
            Err(e) => {
                warn!("[->{}] Refusing message: {}", msg.destination, e);
                self.state = SendState::Failed;
                return Err(e);
            }
        };
        if let Some(h) = segments[0].header {
            debug!("[->{}] Message is concatenated - {} parts, reference {}",
                   msg.destination, segments.len(), h.reference_hex());
        }
        let id = self.inject(store, msg, segments, now)?;
        info!("[O-{}] Queued message for {}", id, msg.destination);
        Ok(id)
    }
    /// Writes `segments` in order within one store transaction.
    ///
    /// Continuation rows are only attempted once the first row has returned
    /// its id; any failure rolls back the whole message.
    pub fn inject<S: OutboxStore>(&mut self, store: &S, msg: &Message, mut segments: Vec<Segment>, now: NaiveDateTime) -> Result<i32> {
        if segments.is_empty() {
            self.state = SendState::Failed;
            return Err(InjectError::NoSegments);
        }
        let class = msg.class();
        let multi_part = segments.len() > 1;
        let creator_id = self.creator_id.as_str();
        let state = &mut self.state;
        let res = store.atomically(|store| {
            let mut primary_id = None;
            for seg in segments.iter_mut() {
                let udh = seg.udh();
                match primary_id {
                    None if seg.is_primary() => {
                        *state = SendState::WritingPrimary;
                        let row = NewOutbox {
                            udh: &udh,
                            text_decoded: seg.text,
                            coding: CODING_NO_COMPRESSION,
                            class,
                            creator_id,
                            multi_part,
                            destination_number: &msg.destination,
                            priority: msg.priority,
                            insert_into_db: now,
                            sending_date_time: now
                        };
                        let id = store.insert_outbox(&row)?
                            .ok_or(InjectError::InsertFailed { table: "outbox", position: seg.position })?;
                        debug!("[O-{}] Wrote part 1 ({} chars)", id, seg.text.chars().count());
                        primary_id = Some(id);
                    },
                    Some(id) => {
                        *state = SendState::WritingContinuation(seg.position);
                        seg.linked_primary_id = Some(id);
                        let row = NewOutboxMultipart {
                            udh: &udh,
                            text_decoded: seg.text,
                            coding: CODING_NO_COMPRESSION,
                            class,
                            sequence_position: seg.position as i32,
                            id
                        };
                        store.insert_multipart(&row)?
                            .ok_or(InjectError::InsertFailed { table: "outbox_multipart", position: seg.position })?;
                        debug!("[O-{}] Wrote part {} ({} chars)", id, seg.position, seg.text.chars().count());
                    },
                    None => return Err(InjectError::MissingPrimary { position: seg.position })
                }
            }
            primary_id.ok_or(InjectError::NoSegments)
        });
        match res {
            Ok(_) => self.state = SendState::Done,
            Err(ref e) => {
                warn!("[->{}] Injection aborted in state {:?}: {}", msg.destination, self.state, e);
                self.state = SendState::Failed;
            }
        }
        res
    }
}
