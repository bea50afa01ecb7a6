//! Multiplex refresh state machine
//!
//! One digit is lit per tick. Over three ticks every digit has been shown
//! once, and persistence of vision does the rest.

use segmux_hal::PeriodicTimer;

use crate::framebuffer::Position;
use crate::segments::Segments;
use crate::shared::SharedFramebuffer;
use crate::traits::{DigitSelect, SegmentBus};

/// Drives the output lines from the shared framebuffer
///
/// Owns the segment and digit lines for the lifetime of the display. The
/// current position starts at [`Position::Ones`] and is only reset by
/// constructing a new multiplexer.
pub struct Multiplexer<'a, B, D> {
    buffer: &'a SharedFramebuffer,
    bus: B,
    digits: D,
    position: Position,
}

impl<'a, B: SegmentBus, D: DigitSelect> Multiplexer<'a, B, D> {
    /// Take ownership of the output lines and switch everything off
    pub fn new(buffer: &'a SharedFramebuffer, mut bus: B, mut digits: D) -> Self {
        digits.disable_all();
        bus.write(Segments::NONE);
        Self {
            buffer,
            bus,
            digits,
            position: Position::Ones,
        }
    }

    /// Advance to the next digit and light it
    ///
    /// Digits are switched off before the segment lines change so the new
    /// pattern never shows on the previous digit.
    pub fn refresh_tick(&mut self) {
        self.position = self.position.next();
        let segments = self.buffer.load().get(self.position);

        self.digits.disable_all();
        self.bus.write(segments);
        self.digits.enable(self.position);
    }

    /// Run one refresh tick if the timer is due
    ///
    /// The timer is rearmed before the outputs are touched. Returns whether
    /// a tick ran.
    pub fn poll<T: PeriodicTimer>(&mut self, timer: &mut T) -> bool {
        if !timer.is_due() {
            return false;
        }
        timer.rearm();
        self.refresh_tick();
        true
    }

    /// Switch every digit off until the next tick
    pub fn blank(&mut self) {
        self.digits.disable_all();
        self.bus.write(Segments::NONE);
    }

    /// Digit lit by the most recent tick
    pub fn position(&self) -> Position {
        self.position
    }

    /// Switch everything off and give back the output lines
    pub fn release(mut self) -> (B, D) {
        self.blank();
        (self.bus, self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::glyph::Glyph;
    use crate::scheduler::RefreshDeadline;
    use core::cell::{Cell, RefCell};
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        DisableAll,
        Write(Segments),
        Enable(Position),
    }

    type OpLog = Vec<Op, 64>;

    /// Mock segment lines recording every write
    struct MockBus<'l> {
        log: &'l RefCell<OpLog>,
    }

    impl SegmentBus for MockBus<'_> {
        fn write(&mut self, segments: Segments) {
            self.log.borrow_mut().push(Op::Write(segments)).unwrap();
        }
    }

    /// Mock digit lines tracking which digits are on
    struct MockDigits<'l> {
        log: &'l RefCell<OpLog>,
        enabled: [bool; 3],
    }

    impl MockDigits<'_> {
        fn enabled_count(&self) -> usize {
            self.enabled.iter().filter(|on| **on).count()
        }
    }

    impl DigitSelect for MockDigits<'_> {
        fn disable_all(&mut self) {
            self.enabled = [false; 3];
            self.log.borrow_mut().push(Op::DisableAll).unwrap();
        }

        fn enable(&mut self, position: Position) {
            self.enabled[position.index()] = true;
            self.log.borrow_mut().push(Op::Enable(position)).unwrap();
        }
    }

    /// Mock timer driven by a manual clock
    struct MockTimer<'c> {
        now: &'c Cell<u64>,
        deadline: RefreshDeadline,
    }

    impl PeriodicTimer for MockTimer<'_> {
        fn is_due(&self) -> bool {
            self.deadline.is_due(self.now.get())
        }

        fn rearm(&mut self) {
            self.deadline.rearm(self.now.get());
        }
    }

    fn setup<'l>(
        buffer: &'l SharedFramebuffer,
        log: &'l RefCell<OpLog>,
    ) -> Multiplexer<'l, MockBus<'l>, MockDigits<'l>> {
        Multiplexer::new(
            buffer,
            MockBus { log },
            MockDigits {
                log,
                enabled: [true; 3],
            },
        )
    }

    #[test]
    fn test_new_switches_everything_off() {
        let buffer = SharedFramebuffer::new();
        let log = RefCell::new(OpLog::new());
        let mux = setup(&buffer, &log);

        assert_eq!(mux.digits.enabled_count(), 0);
        assert_eq!(mux.position(), Position::Ones);
        assert_eq!(*log.borrow(), [Op::DisableAll, Op::Write(Segments::NONE)]);
    }

    #[test]
    fn test_tick_order() {
        let buffer = SharedFramebuffer::new();
        buffer.store(Framebuffer::from_glyphs([Glyph::One, Glyph::Two, Glyph::Three]));
        let log = RefCell::new(OpLog::new());
        let mut mux = setup(&buffer, &log);
        log.borrow_mut().clear();

        mux.refresh_tick();

        assert_eq!(
            *log.borrow(),
            [
                Op::DisableAll,
                Op::Write(Glyph::Two.segments()),
                Op::Enable(Position::Tens),
            ]
        );
    }

    #[test]
    fn test_cycle_returns_after_three_ticks() {
        let buffer = SharedFramebuffer::new();
        let log = RefCell::new(OpLog::new());
        let mut mux = setup(&buffer, &log);

        let start = mux.position();
        let expected = [Position::Tens, Position::Hundreds, Position::Ones];
        for _ in 0..4 {
            for position in expected {
                mux.refresh_tick();
                assert_eq!(mux.position(), position);
                assert_eq!(mux.digits.enabled_count(), 1);
                assert!(mux.digits.enabled[position.index()]);
            }
            assert_eq!(mux.position(), start);
        }
    }

    #[test]
    fn test_tick_picks_up_new_content() {
        let buffer = SharedFramebuffer::new();
        let log = RefCell::new(OpLog::new());
        let mut mux = setup(&buffer, &log);

        buffer.store(Framebuffer::error());
        log.borrow_mut().clear();
        mux.refresh_tick();
        mux.refresh_tick();

        let writes: Vec<Segments, 4> = log
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Write(segments) => Some(*segments),
                _ => None,
            })
            .collect();
        assert_eq!(writes, [Glyph::R.segments(), Glyph::E.segments()]);
    }

    #[test]
    fn test_poll_follows_timer() {
        let buffer = SharedFramebuffer::new();
        let log = RefCell::new(OpLog::new());
        let mut mux = setup(&buffer, &log);

        let now = Cell::new(0);
        let mut timer = MockTimer {
            now: &now,
            deadline: RefreshDeadline::new(10, 0),
        };

        assert!(!mux.poll(&mut timer));
        assert_eq!(mux.position(), Position::Ones);

        now.set(10);
        assert!(mux.poll(&mut timer));
        assert_eq!(mux.position(), Position::Tens);

        // Same instant, already rearmed
        assert!(!mux.poll(&mut timer));

        // Late poll fires once, not once per missed period
        now.set(45);
        assert!(mux.poll(&mut timer));
        assert!(!mux.poll(&mut timer));
        assert_eq!(mux.position(), Position::Hundreds);
    }

    #[test]
    fn test_blank_and_release() {
        let buffer = SharedFramebuffer::new();
        buffer.store(Framebuffer::error());
        let log = RefCell::new(OpLog::new());
        let mut mux = setup(&buffer, &log);

        mux.refresh_tick();
        mux.blank();
        assert_eq!(mux.digits.enabled_count(), 0);

        mux.refresh_tick();
        let (_bus, digits) = mux.release();
        assert_eq!(digits.enabled_count(), 0);
        assert_eq!(log.borrow().last(), Some(&Op::Write(Segments::NONE)));
    }
}
