//! The driver that ties the transition tables, print coalescer and UTF-8
//! front-end together into the `Parser<C>` host-facing type (spec.md
//! §3/§4/§5).
//!
//! The sequencing in [`Parser::apply_transition`] is the one place this
//! crate intentionally disagrees with both its teacher (`otty-vte`) and
//! the wider `vte`/`anstyle-parse` lineage: those pass the triggering byte
//! into entry/exit actions (`CLEAR`, `HOOK`, `UNHOOK`, `OSC_START`,
//! `OSC_END`). spec.md §4.2 is explicit that entry/exit actions always run
//! with `code_point == 0`, so that is what happens here.

use crate::callback::{Callback, ParserView};
use crate::config::Utf8Mode;
use crate::enums::{Action, State};
use crate::print::PrintBuf;
use crate::tables;
use crate::utf8::{Fed, Utf8Decoder};

/// Capacity of the intermediate-byte buffer (spec.md §6: "≥ 2").
pub const MAX_INTERMEDIATES: usize = 2;
/// Capacity of the parameter buffer (spec.md §6: "≥ 16").
pub const MAX_PARAMS: usize = 16;

/// The parameter/intermediate/print-buffer bookkeeping that backs a
/// [`ParserView`]. Split out from [`Parser`] so `dispatch` can borrow this
/// field and `cb` independently; see the comment on `Parser::dispatch`.
#[derive(Debug, Clone, Copy)]
struct ViewState {
    intermediates: [u8; MAX_INTERMEDIATES],
    num_intermediates: usize,
    params: [u16; MAX_PARAMS],
    num_params: usize,
    ignore_flagged: bool,
    print_buf: PrintBuf,
}

impl ViewState {
    const fn new() -> Self {
        Self {
            intermediates: [0; MAX_INTERMEDIATES],
            num_intermediates: 0,
            params: [0; MAX_PARAMS],
            num_params: 0,
            ignore_flagged: false,
            print_buf: PrintBuf::new(),
        }
    }

    fn view(&self) -> ParserView<'_> {
        ParserView {
            intermediates: &self.intermediates[..self.num_intermediates],
            params: &self.params[..self.num_params],
            ignore_flagged: self.ignore_flagged,
            print_buf: self.print_buf.as_slice(),
        }
    }

    /// `CLEAR`: resets intermediates, params and the overflow flag. Does
    /// not touch `print_buf` (spec.md §4.1's invariant that CLEAR and the
    /// print coalescer are independent).
    fn clear(&mut self) {
        self.num_intermediates = 0;
        self.num_params = 0;
        self.ignore_flagged = false;
    }

    fn collect(&mut self, byte: u8) {
        if self.num_intermediates >= MAX_INTERMEDIATES {
            if !self.ignore_flagged {
                log::warn!(
                    "dropping intermediate byte {byte:#04x}: buffer already holds {MAX_INTERMEDIATES}"
                );
            }
            self.ignore_flagged = true;
            return;
        }
        self.intermediates[self.num_intermediates] = byte;
        self.num_intermediates += 1;
    }

    /// `PARAM`: `;` always appends a fresh zero-valued parameter; a digit
    /// accumulates onto the last parameter, opening one first if none is
    /// open yet. Once `MAX_PARAMS` parameters have been appended, further
    /// `;` are dropped and the final parameter keeps absorbing digits.
    /// This is an overflow, not a capacity error, so `ignore_flagged` is untouched
    /// (spec.md's invariant reserves that flag for `COLLECT` rejections).
    fn param(&mut self, byte: u8) {
        if byte == b';' {
            if self.num_params < MAX_PARAMS {
                self.params[self.num_params] = 0;
                self.num_params += 1;
            }
            return;
        }

        if self.num_params == 0 {
            self.params[0] = 0;
            self.num_params = 1;
        }
        let idx = self.num_params - 1;
        let digit = u16::from(byte - b'0');
        self.params[idx] = self.params[idx].saturating_mul(10).saturating_add(digit);
    }
}

/// Drives the Williams state machine over a byte or code-point stream,
/// dispatching every action to a host-supplied [`Callback`].
///
/// `Parser` performs no I/O and no heap allocation; all working storage
/// is inline. It is not `Clone`: a parser mid-sequence carries state a
/// copy would silently fork.
pub struct Parser<C: Callback> {
    state: State,
    view: ViewState,
    utf8: Utf8Decoder,
    cb: C,
}

impl<C: Callback> Parser<C> {
    /// Build a parser with the default (permissive) UTF-8 front-end.
    pub fn new(cb: C) -> Self {
        Self::with_utf8_mode(cb, Utf8Mode::default())
    }

    /// Build a parser with an explicit UTF-8 strictness mode (spec.md §12).
    pub fn with_utf8_mode(cb: C, mode: Utf8Mode) -> Self {
        Self { state: State::Ground, view: ViewState::new(), utf8: Utf8Decoder::new(mode), cb }
    }

    /// The current state machine state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Re-initialize to `Ground` with all counters cleared, keeping the
    /// same callback and UTF-8 mode. Does not itself dispatch anything.
    pub fn reset(&mut self) {
        self.state = State::Ground;
        self.view.clear();
        self.view.print_buf.clear();
        self.utf8.reset();
    }

    /// Hand the callback back to the caller, consuming the parser.
    /// Useful when the callback accumulates results the caller wants
    /// after the stream ends.
    pub fn into_callback(self) -> C {
        self.cb
    }

    /// Feed a raw byte stream. Bytes are folded into code points by the
    /// UTF-8 front-end (§4.4) before reaching the state machine. Any
    /// `Print` run still buffered is flushed before returning.
    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if let Fed::CodePoint(cp) = self.utf8.advance(byte) {
                self.advance_code_point(cp);
            }
        }
        self.drain_print();
    }

    /// Feed already-decoded code points directly, bypassing the UTF-8
    /// front-end (spec.md §5's alternate entry point).
    pub fn feed_code_points(&mut self, code_points: &[u32]) {
        for &cp in code_points {
            self.advance_code_point(cp);
        }
        self.drain_print();
    }

    fn advance_code_point(&mut self, cp: u32) {
        if self.state == State::Ground && cp >= 0x20 {
            self.push_print(cp);
            return;
        }

        // Leaving (or never entering) a printable run: whatever is
        // buffered must be dispatched before this non-print code point
        // is processed, so PRINT events stay contiguous with the text
        // that produced them.
        self.drain_print();

        if cp > 0xff {
            // spec.md §4.4: non-GROUND behavior for code points ≥ 0x80
            // is undefined; treated here as inert rather than guessed at.
            return;
        }

        let byte = cp as u8;
        let transition = tables::lookup(self.state, byte);
        self.apply_transition(transition, byte);
    }

    fn apply_transition(&mut self, transition: tables::Transition, byte: u8) {
        match transition.state {
            Some(next) if next != self.state => {
                #[cfg(debug_assertions)]
                log::trace!("{:?} -{byte:#04x}-> {:?}", self.state, next);
                if let Some(exit) = tables::exit_for(self.state) {
                    self.perform(exit, 0);
                }
                if let Some(action) = transition.action {
                    self.perform(action, byte);
                }
                if let Some(entry) = tables::entry_for(next) {
                    self.perform(entry, 0);
                }
                self.state = next;
            }
            _ => {
                if let Some(action) = transition.action {
                    self.perform(action, byte);
                }
            }
        }
    }

    fn perform(&mut self, action: Action, byte: u8) {
        match action {
            Action::Collect => self.view.collect(byte),
            Action::Param => self.view.param(byte),
            Action::Clear => self.view.clear(),
            Action::Ignore => {}
            Action::Error => {
                log::warn!("{}", crate::callback::UnknownAction);
                self.dispatch(Action::Error, 0);
            }
            // `Print` never reaches this match: GROUND printables are
            // buffered by `advance_code_point`'s short-circuit before any
            // table lookup, and no table cell outside GROUND yields it.
            host_action => self.dispatch(host_action, u32::from(byte)),
        }
    }

    fn push_print(&mut self, cp: u32) {
        if self.view.print_buf.near_capacity() {
            self.drain_print();
        }
        // Rust's `char` cannot represent surrogate halves or values past
        // U+10FFFF, both of which `Utf8Mode::Permissive` can legally
        // produce; such code points are substituted with the replacement
        // character only at this boundary, not at decode time.
        let ch = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
        self.view.print_buf.push(ch);
    }

    fn drain_print(&mut self) {
        if self.view.print_buf.is_empty() {
            return;
        }
        self.dispatch(Action::Print, 0);
        self.view.print_buf.clear();
        self.view.clear();
    }

    /// Borrows `view` and `cb` as disjoint fields so the callback can be
    /// invoked while holding a live read-only view into the rest of the
    /// parser's state.
    fn dispatch(&mut self, action: Action, code_point: u32) {
        let view = self.view.view();
        self.cb.dispatch(&view, action, code_point);
    }
}
