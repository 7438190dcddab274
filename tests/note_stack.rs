//! Tests for the note-priority stack in the voice manager.

use monosynth_dsp::params::ControlFrame;
use monosynth_dsp::voice_manager::VoiceManager;

const SAMPLE_RATE: f32 = 48000.0;

fn manager() -> VoiceManager {
    let mut vm = VoiceManager::new();
    vm.init(SAMPLE_RATE);
    vm.update_params(&ControlFrame::default());
    vm
}

#[test]
fn last_note_priority() {
    let mut vm = manager();

    vm.note_on(0, 60, 100);
    assert_eq!(vm.current_note(), 60);
    vm.note_on(0, 64, 100);
    assert_eq!(vm.current_note(), 64);
    vm.note_on(0, 67, 100);
    assert_eq!(vm.current_note(), 67);
    assert_eq!(vm.held_count(), 3);
    assert!(vm.gate());

    // Releasing the current note falls back to the previous one.
    vm.note_off(0, 67, 0);
    assert_eq!(vm.current_note(), 64);
    assert_eq!(vm.held_count(), 2);
    assert!(vm.gate());

    vm.note_off(0, 64, 0);
    assert_eq!(vm.current_note(), 60);

    vm.note_off(0, 60, 0);
    assert_eq!(vm.held_count(), 0);
    assert!(!vm.gate());
}

#[test]
fn out_of_order_release() {
    let mut vm = manager();

    vm.note_on(0, 60, 100);
    vm.note_on(0, 64, 100);
    vm.note_on(0, 67, 100);

    // Releasing a non-current note leaves the sounding voice alone.
    vm.note_off(0, 64, 0);
    assert_eq!(vm.current_note(), 67);
    assert_eq!(vm.held_count(), 2);
    assert!(vm.is_held(60));
    assert!(!vm.is_held(64));
    assert!(vm.is_held(67));

    // The pop-time scan skips the stale entry for 64.
    vm.note_off(0, 67, 0);
    assert_eq!(vm.current_note(), 60);
    assert_eq!(vm.held_count(), 1);

    vm.note_off(0, 60, 0);
    assert_eq!(vm.held_count(), 0);
    assert!(!vm.gate());
}

#[test]
fn interleaved_out_of_order_releases() {
    let mut vm = manager();

    vm.note_on(0, 48, 90);
    vm.note_on(0, 52, 90);
    vm.note_on(0, 55, 90);
    vm.note_on(0, 59, 90);

    vm.note_off(0, 52, 0);
    vm.note_off(0, 48, 0);
    assert_eq!(vm.current_note(), 59);
    assert_eq!(vm.held_count(), 2);

    // Two consecutive stale entries below the top must both be skipped.
    vm.note_off(0, 59, 0);
    assert_eq!(vm.current_note(), 55);
    assert_eq!(vm.held_count(), 1);
    assert!(vm.gate());

    vm.note_off(0, 55, 0);
    assert!(!vm.gate());
}

#[test]
fn re_push_does_not_grow_stack() {
    let mut vm = manager();

    vm.note_on(0, 60, 100);
    vm.note_on(0, 64, 100);
    vm.note_on(0, 60, 100);
    assert_eq!(vm.held_count(), 2);
    assert_eq!(vm.current_note(), 60);

    vm.note_off(0, 60, 0);
    assert_eq!(vm.current_note(), 64);
    vm.note_off(0, 64, 0);
    assert_eq!(vm.held_count(), 0);
}

#[test]
fn velocity_zero_note_on_is_note_off() {
    let mut a = manager();
    let mut b = manager();

    a.note_on(0, 60, 100);
    b.note_on(0, 60, 100);

    a.note_off(0, 60, 0);
    b.note_on(0, 60, 0);

    assert_eq!(a.held_count(), b.held_count());
    assert_eq!(a.gate(), b.gate());
    assert!(!b.gate());
}

#[test]
fn releasing_unheld_note_is_noop() {
    let mut vm = manager();

    vm.note_on(0, 60, 100);
    vm.note_off(0, 72, 0);
    assert_eq!(vm.current_note(), 60);
    assert_eq!(vm.held_count(), 1);
    assert!(vm.gate());

    // Repeated release of an already-empty note is also harmless.
    vm.note_off(0, 60, 0);
    vm.note_off(0, 60, 0);
    assert_eq!(vm.held_count(), 0);
}

#[test]
fn repeated_out_of_order_taps_do_not_overflow() {
    let mut vm = manager();

    vm.note_on(0, 60, 100);

    // Tapping a second note, re-asserting the held one and then releasing
    // the tap takes the out-of-order release path every time, leaving a
    // stale sequence slot per cycle. Far more cycles than the sequence
    // capacity must still be harmless.
    for _ in 0..200 {
        vm.note_on(0, 62, 100);
        vm.note_on(0, 60, 100);
        vm.note_off(0, 62, 0);
        assert_eq!(vm.current_note(), 60);
        assert_eq!(vm.held_count(), 1);
        assert!(vm.gate());
    }

    vm.note_off(0, 60, 0);
    assert_eq!(vm.held_count(), 0);
    assert!(!vm.gate());
}

#[test]
fn out_of_range_notes_rejected_at_ingress() {
    let mut vm = manager();

    vm.note_on(0, 200, 100);
    assert_eq!(vm.held_count(), 0);
    assert!(!vm.gate());

    vm.note_on(0, 127, 100);
    vm.note_off(0, 200, 0);
    assert_eq!(vm.held_count(), 1);
    assert!(vm.gate());
}
