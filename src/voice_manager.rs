//! Last-note-priority voice management.
//!
//! Turns a stream of possibly overlapping note on/off messages into one
//! deterministic pitch + gate target for the single voice. Held notes live
//! in a fixed-capacity ordered sequence plus a per-note membership set;
//! the set is authoritative, the sequence may carry stale entries below
//! the top which are skipped and trimmed lazily when popping. This makes
//! the stack self-healing against out-of-order releases.

use crate::params::ControlFrame;
use crate::voice::Voice;

const NOTE_CAPACITY: usize = 128;

#[derive(Debug, Clone)]
pub struct VoiceManager {
    voice: Voice,

    current_note: u8,
    current_velocity: u8,
    held_count: u8,
    top: usize,
    held_notes: [u8; NOTE_CAPACITY],
    held_set: [bool; NOTE_CAPACITY],
}

impl Default for VoiceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceManager {
    pub fn new() -> Self {
        Self {
            voice: Voice::new(),
            current_note: 0,
            current_velocity: 0,
            held_count: 0,
            top: 0,
            held_notes: [0; NOTE_CAPACITY],
            held_set: [false; NOTE_CAPACITY],
        }
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.voice.init(sample_rate);
    }

    pub fn process_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        self.voice.process_block(left, right);
    }

    pub fn update_params(&mut self, frame: &ControlFrame) {
        self.voice.update_params(frame);
    }

    /// Note numbers above 127 are rejected here; the stack assumes
    /// in-range indices.
    pub fn note_on(&mut self, channel: u8, note: u8, velocity: u8) {
        if note as usize >= NOTE_CAPACITY {
            return;
        }
        // Note off may arrive as note on with velocity 0.
        if velocity == 0 {
            self.note_off(channel, note, velocity);
        } else {
            self.push_note(note);
            self.current_velocity = velocity;
            self.voice.note_on(channel, note, self.current_velocity);
        }
    }

    pub fn note_off(&mut self, channel: u8, note: u8, velocity: u8) {
        if note as usize >= NOTE_CAPACITY {
            return;
        }
        if self.current_note == note && self.held_set[note as usize] {
            let next_note = self.pop_note();
            if self.held_count == 0 {
                self.current_velocity = 0;
                self.voice.note_off(channel, note, velocity);
            } else {
                // Fall back to the most recent still-held note; the
                // envelope restarts even though the gate never closed.
                self.voice.note_on(channel, next_note, self.current_velocity);
            }
        } else {
            self.delete_note(note);
        }
    }

    fn push_note(&mut self, note: u8) {
        self.current_note = note;
        if self.held_set[note as usize] {
            // Re-assert without growing the stack.
            return;
        }
        if self.top == NOTE_CAPACITY {
            self.compact();
        }
        self.held_notes[self.top] = note;
        self.held_set[note as usize] = true;
        self.held_count += 1;
        self.top += 1;
    }

    /// Drops stale sequence entries whose membership bit has been cleared
    /// by out-of-order releases, keeping the still-held ones in order.
    /// Runs only when the sequence fills up, so pushes stay O(1) amortized.
    fn compact(&mut self) {
        let mut kept = 0;
        for i in 0..self.top {
            let note = self.held_notes[i];
            if self.held_set[note as usize] {
                self.held_notes[kept] = note;
                kept += 1;
            }
        }
        self.top = kept;
    }

    fn pop_note(&mut self) -> u8 {
        self.held_count -= 1;
        self.held_set[self.current_note as usize] = false;
        if self.held_count == 0 {
            self.top = 0;
            return 0;
        }
        // Scan down from the top for the first entry still held, trimming
        // stale entries left behind by out-of-order releases.
        for i in (0..self.top).rev() {
            let note = self.held_notes[i];
            if self.held_set[note as usize] {
                self.current_note = note;
                self.top = i + 1;
                return note;
            }
        }
        // The set and the count disagreed; reset to empty.
        self.held_count = 0;
        self.top = 0;
        0
    }

    fn delete_note(&mut self, note: u8) {
        if self.held_set[note as usize] {
            self.held_set[note as usize] = false;
            if self.held_count > 0 {
                self.held_count -= 1;
            }
        }
    }

    pub fn current_note(&self) -> u8 {
        self.current_note
    }

    pub fn held_count(&self) -> u8 {
        self.held_count
    }

    pub fn is_held(&self, note: u8) -> bool {
        (note as usize) < NOTE_CAPACITY && self.held_set[note as usize]
    }

    pub fn gate(&self) -> bool {
        self.voice.gate()
    }
}
