//! The host-facing side of the parser: a single-method [`Callback`] trait
//! and the read-only [`ParserView`] it receives, per spec.md §6/§9
//! ("represent [the callback] as an object with a single method... It
//! must not be dynamically rebindable mid-stream").
//!
//! This is the one place this crate departs from its teacher's idiom:
//! `otty-vte`'s `Actor` and the wider `vte`/`anstyle-parse` lineage all
//! define one trait method per action (`print`, `execute`, `csi_dispatch`,
//! ...). The spec is explicit that the contract is a single
//! `callback(parser, action, code_point)` entry point with parser state
//! read back out through exposed fields, so `Callback` collapses to one
//! method and `ParserView` stands in for the "exposed fields" spec.md §3
//! describes.

use crate::enums::Action;

/// Read-only view of the state a host may inspect while handling a
/// dispatched action (spec.md §6's callback contract).
#[derive(Debug, Clone, Copy)]
pub struct ParserView<'a> {
    pub(crate) intermediates: &'a [u8],
    pub(crate) params: &'a [u16],
    pub(crate) ignore_flagged: bool,
    pub(crate) print_buf: &'a [char],
}

impl<'a> ParserView<'a> {
    /// Intermediate bytes collected since the last `Clear`.
    pub fn intermediates(&self) -> &'a [u8] {
        self.intermediates
    }

    /// Parameters collected since the last `Clear`.
    pub fn params(&self) -> &'a [u16] {
        self.params
    }

    /// Set once a `Collect` was rejected for capacity since the last
    /// `Clear`; dispatch handlers should treat the sequence as
    /// unrecognized when this is `true`.
    pub fn ignore_flagged(&self) -> bool {
        self.ignore_flagged
    }

    /// Code points accumulated by the print coalescer (§4.3), valid to
    /// read when `action == Action::Print`.
    pub fn print_buf(&self) -> &'a [char] {
        self.print_buf
    }
}

/// The host's event sink. `dispatch` is called synchronously for every
/// action the state machine produces, including the purely internal ones
/// (`Clear`, `Collect`, `Param`, `Ignore`); filtering those out, if
/// unwanted, is the implementer's choice, kept uniform here rather than
/// split into a separate internal/host distinction in the trait itself.
///
/// Implementations MUST NOT feed more bytes into the parser that invoked
/// them from within `dispatch` (spec.md §5).
pub trait Callback {
    fn dispatch(&mut self, view: &ParserView<'_>, action: Action, code_point: u32);
}

/// Backing diagnostic for the `Action::Error` signal described in
/// spec.md §7. `STATE_TABLE` is generated exhaustively over a closed
/// `Action` enum (`src/tables.rs`), so this condition is unreachable in
/// practice; it is kept as a named, loggable type rather than folded
/// away, because spec.md documents it as part of the contract.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("state machine produced an action with no defined handler")]
pub struct UnknownAction;
